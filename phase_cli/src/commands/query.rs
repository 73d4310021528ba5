//! Query command - volumes at one pressure.

use clap::Args;

use crate::client::ApiClient;
use crate::output::{self, print_item, OutputFormat};

/// Arguments for the query command.
#[derive(Args)]
pub struct QueryArgs {
    /// Pressure in MPa
    #[arg(short, long, allow_negative_numbers = true)]
    pub pressure: f64,
}

/// Execute the query command.
pub async fn execute(args: QueryArgs, client: &ApiClient, format: OutputFormat) -> anyhow::Result<()> {
    let volumes = client.phase_change(args.pressure).await?;

    if format == OutputFormat::Table {
        output::info(&format!("Saturated specific volumes at {} MPa", args.pressure));
    }
    print_item(&volumes, format)
}
