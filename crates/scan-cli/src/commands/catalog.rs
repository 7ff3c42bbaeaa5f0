use scan_core::{DiseaseListResponse, SymptomListResponse};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CatalogCommands;
use crate::commands::shared::limit::{apply_limit, count};
use crate::context::AppContext;
use crate::output::output_list;

/// Handle `symptoscan catalog`.
pub fn handle(table: &CatalogCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match table {
        CatalogCommands::Diseases => {
            let total = count(ctx.catalog.diseases().len());
            let mut diseases = ctx.catalog.diseases().to_vec();
            apply_limit(&mut diseases, flags.limit);
            let response = DiseaseListResponse { diseases, total };
            output_list(&response, &response.diseases, flags.format)
        }
        CatalogCommands::Symptoms => {
            let total = count(ctx.catalog.symptoms().len());
            let mut symptoms = ctx.catalog.symptoms().to_vec();
            apply_limit(&mut symptoms, flags.limit);
            let response = SymptomListResponse { symptoms, total };
            output_list(&response, &response.symptoms, flags.format)
        }
    }
}
