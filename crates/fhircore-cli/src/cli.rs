use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fhircore")]
#[command(about = "FHIRCore CLI: inspect questionnaires and application configurations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, env = "FHIRCORE_LOG", default_value = "warn")]
    pub log_level: String,

    /// Output format
    #[arg(short, long, global = true, env = "FHIRCORE_FORMAT")]
    pub format: Option<OutputFormat>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a Questionnaire: extraction, libraries, item types
    Inspect(InspectArgs),
    /// Find items of a Questionnaire
    Find(FindArgs),
    /// Print the caption derived from a linkId
    Label(LabelArgs),
    /// Load an application configuration file
    Config(ConfigArgs),
}

#[derive(clap::Args)]
pub struct InspectArgs {
    /// Questionnaire JSON file
    pub file: PathBuf,
}

#[derive(clap::Args)]
pub struct FindArgs {
    /// Questionnaire JSON file
    pub file: PathBuf,
    #[command(flatten)]
    pub criteria: FindCriteria,
}

#[derive(clap::Args)]
#[group(required = true, multiple = false)]
pub struct FindCriteria {
    /// Item linkId
    #[arg(long)]
    pub link_id: Option<String>,
    /// Item type, by name (OPENCHOICE) or code (open-choice)
    #[arg(long = "type")]
    pub item_type: Option<String>,
    /// Item definition URL
    #[arg(long)]
    pub definition: Option<String>,
}

#[derive(clap::Args)]
pub struct LabelArgs {
    pub link_id: String,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    /// TOML or JSON configuration file
    pub file: PathBuf,
    /// Application to load (defaults to the only one in the file)
    #[arg(long, env = "FHIRCORE_APP_ID")]
    pub app_id: Option<String>,
}
