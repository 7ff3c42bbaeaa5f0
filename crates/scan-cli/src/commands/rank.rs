use scan_advisor::Advisor;
use scan_core::{Candidate, RankMode, RankResponse, RankedCandidate, TriageError};
use scan_dialogue::Dialogue;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{RankArgs, RankModeArg};
use crate::commands::shared::limit::{apply_limit, count};
use crate::context::AppContext;
use crate::output::output_list;
use crate::progress::Progress;

/// Handle `symptoscan rank`.
pub async fn handle(args: &RankArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Ranking candidates...");
    let response = rank(&ctx.dialogue, &args.query, args.mode, flags.limit).await;
    spinner.finish_clear();
    output_list(&response, &response.candidates, flags.format)
}

/// Rank `query` and flatten the result. Triage failures yield no candidates.
pub async fn rank<A: Advisor>(
    dialogue: &Dialogue<A>,
    query: &str,
    mode: RankModeArg,
    limit: Option<u32>,
) -> RankResponse {
    let ranked: Result<Vec<Candidate>, TriageError> = match mode {
        RankModeArg::Auto => dialogue.rank_candidates(query).await,
        RankModeArg::Name => dialogue.ranker().rank(query, RankMode::DiseaseName),
        RankModeArg::Description => dialogue.ranker().rank(query, RankMode::SymptomDescription),
    };

    let mut candidates: Vec<RankedCandidate> = match ranked {
        Ok(candidates) => candidates.iter().map(RankedCandidate::from).collect(),
        Err(error) => {
            tracing::info!(%error, "no candidates for query");
            Vec::new()
        }
    };
    let total_candidates = count(candidates.len());
    apply_limit(&mut candidates, limit);

    RankResponse {
        query: query.to_string(),
        candidates,
        total_candidates,
    }
}
