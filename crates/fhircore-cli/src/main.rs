mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use output::print_error;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    let format = cli.format.unwrap_or_default();

    match &cli.command {
        Commands::Inspect(args) => commands::inspect::inspect(&args.file, format).await?,
        Commands::Find(args) => commands::find::find(&args.file, &args.criteria, format).await?,
        Commands::Label(args) => commands::label::label(&args.link_id, format)?,
        Commands::Config(args) => {
            commands::config::show(&args.file, args.app_id.as_deref(), format).await?
        }
    }

    Ok(())
}

/// Log to stderr so command output stays parseable.
fn init_tracing(level: &str) {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|_| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
