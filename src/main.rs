use anyhow::Context;
use clap::Parser;
use std::path::Path;

use breach_check::cli::{Cli, OutputFormatter};
use breach_check::core::Config;
use breach_check::runner::{run_batch, BatchSummary};
use breach_check::HibpClient;

#[tokio::main]
async fn main() {
    // Load .env file if it exists
    let _ = dotenv::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    // Setup failures are fatal; per-email errors never are
    if let Err(e) = execute(cli).await {
        OutputFormatter::print_error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}

async fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let client = HibpClient::new(&config);

    if !Path::new(&cli.file).exists() {
        anyhow::bail!("File '{}' not found", cli.file);
    }

    // Whole-file read; a non-UTF-8 file is a fatal setup error
    let contents = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Could not read file '{}'", cli.file))?;

    let api_key = config.api_key.as_deref().unwrap_or_default();
    OutputFormatter::print_header(&cli.file, api_key);

    let results = run_batch(&client, &contents, &OutputFormatter).await;

    OutputFormatter::print_summary(&BatchSummary::from_results(&results));
    OutputFormatter::print_final_results(&results);

    Ok(())
}
