use anyhow::bail;
use schemars::{Schema, schema_for};
use scan_core::{
    ChatMessage, DiseaseListResponse, RankResponse, SymptomListResponse, Transcript, Turn,
};

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

const TYPE_NAMES: [&str; 6] = ["turn", "rank", "diseases", "symptoms", "message", "transcript"];

/// Handle `symptoscan schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_named(&args.type_name)?;
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output(&schema, format)
}

fn schema_named(type_name: &str) -> anyhow::Result<Schema> {
    let schema = match type_name.to_ascii_lowercase().as_str() {
        "turn" => schema_for!(Turn),
        "rank" => schema_for!(RankResponse),
        "diseases" => schema_for!(DiseaseListResponse),
        "symptoms" => schema_for!(SymptomListResponse),
        "message" => schema_for!(ChatMessage),
        "transcript" => schema_for!(Transcript),
        other => bail!(
            "unknown schema type '{other}' (expected one of: {})",
            TYPE_NAMES.join(", ")
        ),
    };
    Ok(schema)
}
