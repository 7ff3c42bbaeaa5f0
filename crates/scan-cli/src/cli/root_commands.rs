use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Talk to SymptoScan interactively, or replay a script of utterances.
    Chat(ChatArgs),
    /// Rank catalog diseases against a description, without a conversation.
    Rank(RankArgs),
    /// List catalog rows.
    Catalog {
        #[command(subcommand)]
        table: CatalogCommands,
    },
    /// Print the JSON schema of a response type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Read one utterance per line from this file instead of stdin.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Write the full conversation as JSON lines when the chat ends.
    #[arg(long)]
    pub transcript: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum RankModeArg {
    /// Disease name first, then advisor (if configured), then description.
    Auto,
    /// Disease-name match only.
    Name,
    /// Symptom-description match only.
    Description,
}

#[derive(Clone, Debug, Args)]
pub struct RankArgs {
    /// Free-text symptom description or disease name.
    pub query: String,

    #[arg(long, value_enum, default_value = "auto")]
    pub mode: RankModeArg,
}

#[derive(Clone, Debug, Subcommand)]
pub enum CatalogCommands {
    /// Disease rows.
    Diseases,
    /// Symptom rows.
    Symptoms,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Response type: turn, rank, diseases, symptoms, message, transcript.
    #[arg(value_name = "TYPE")]
    pub type_name: String,
}
