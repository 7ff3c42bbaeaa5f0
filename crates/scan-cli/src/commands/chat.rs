use std::io::Write;

use anyhow::Context;
use scan_advisor::Advisor;
use scan_core::Turn;
use scan_dialogue::{Dialogue, Session, SessionError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::cli::root_commands::ChatArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::ui;

const BOT: &str = "SymptoScan";
const PROMPT: &str = "you> ";

/// Handle `symptoscan chat`.
pub async fn handle(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let thread_limit = ctx.config.dialogue.thread_limit;
    let mut stdout = std::io::stdout();

    let session = if let Some(path) = &args.script {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("failed to open chat script {}", path.display()))?;
        let options = ChatOptions {
            format: flags.format,
            prompt: false,
            echo_input: flags.format == OutputFormat::Table,
            thread_limit,
        };
        converse(&ctx.dialogue, BufReader::new(file), &mut stdout, options).await?
    } else {
        let options = ChatOptions {
            format: flags.format,
            prompt: ui::prefs().interactive,
            echo_input: false,
            thread_limit,
        };
        converse(&ctx.dialogue, BufReader::new(tokio::io::stdin()), &mut stdout, options).await?
    };

    if let Some(path) = &args.transcript {
        serde_jsonlines::write_json_lines(path, session.transcript().messages())
            .with_context(|| format!("failed to write transcript to {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            messages = session.transcript().messages().len(),
            "transcript written"
        );
    }
    Ok(())
}

#[derive(Clone, Copy, Debug)]
pub struct ChatOptions {
    pub format: OutputFormat,
    /// Print `you> ` before each read.
    pub prompt: bool,
    /// Repeat each input line, for replayed scripts.
    pub echo_input: bool,
    pub thread_limit: usize,
}

/// Run one session over `input` until EOF, writing every turn to `out`.
pub async fn converse<A, R, W>(
    dialogue: &Dialogue<A>,
    input: R,
    out: &mut W,
    options: ChatOptions,
) -> anyhow::Result<Session>
where
    A: Advisor,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = Session::new(options.thread_limit);
    write_turn(out, &session.greet(), options.format)?;

    let mut lines = input.lines();
    loop {
        if options.prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        let Some(line) = lines.next_line().await.context("failed to read chat input")? else {
            break;
        };
        if options.echo_input && !line.trim().is_empty() {
            writeln!(out, "{PROMPT}{}", line.trim())?;
        }

        match session.submit(dialogue, &line).await {
            Ok(turn) => write_turn(out, &turn, options.format)?,
            Err(SessionError::EmptyInput) => {}
            Err(error) => tracing::warn!(%error, "utterance dropped"),
        }
    }

    tracing::debug!(
        messages = session.transcript().messages().len(),
        phase = %session.phase(),
        "chat ended"
    );
    Ok(session)
}

fn write_turn<W: Write>(out: &mut W, turn: &Turn, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(turn)?)?,
        OutputFormat::Raw => writeln!(out, "{}", serde_json::to_string(turn)?)?,
        OutputFormat::Table => {
            for reply in &turn.replies {
                writeln!(out, "{BOT}: {}\n", reply.content)?;
            }
        }
    }
    Ok(())
}
