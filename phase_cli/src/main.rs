// Phase Change Diagram CLI Client
//
// Command-line interface for the phase change diagram API.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use phase_cli::commands::{health, query, sweep};
use phase_cli::{output, ApiClient, OutputFormat};

#[derive(Parser)]
#[command(name = "phasectl")]
#[command(version)]
#[command(about = "Query saturated specific volumes from the phase change diagram API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API server URL
    #[arg(long, global = true, default_value = "http://localhost:8080", env = "PHASE_API_URL")]
    server: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Liquid and vapor specific volumes at one pressure
    Query(query::QueryArgs),

    /// Volumes at evenly spaced pressures
    Sweep(sweep::SweepArgs),

    /// Check that the server is up
    Health,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = ApiClient::new(&cli.server)?;

    match cli.command {
        Commands::Query(args) => query::execute(args, &client, cli.output).await,
        Commands::Sweep(args) => sweep::execute(args, &client, cli.output).await,
        Commands::Health => health::execute(&client).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
