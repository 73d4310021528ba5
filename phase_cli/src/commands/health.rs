//! Health command - probe the server.

use crate::client::ApiClient;
use crate::error::CliError;
use crate::output;

/// Execute the health command. Fails unless the server reports `ok`.
pub async fn execute(client: &ApiClient) -> anyhow::Result<()> {
    let health = client.health().await?;

    if health.status != "ok" {
        return Err(CliError::Api {
            status: 200,
            detail: format!("unhealthy status '{}'", health.status),
        }
        .into());
    }

    output::success(&format!("{} is healthy", client.base_url()));
    Ok(())
}
