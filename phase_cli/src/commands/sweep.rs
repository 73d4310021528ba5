//! Sweep command - volumes over a pressure range.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::client::ApiClient;
use crate::error::{CliError, Result};
use crate::output::{self, print_data, OutputFormat};

/// Arguments for the sweep command.
#[derive(Args)]
pub struct SweepArgs {
    /// First pressure in MPa
    #[arg(long, default_value = "0.05", allow_negative_numbers = true)]
    pub from: f64,

    /// Last pressure in MPa
    #[arg(long, default_value = "10.0", allow_negative_numbers = true)]
    pub to: f64,

    /// Number of intervals between the two pressures
    #[arg(long, default_value = "10")]
    pub steps: u32,
}

/// One sampled pressure; volumes are empty when the server rejected it.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct SweepRow {
    #[tabled(rename = "Pressure (MPa)")]
    pub pressure: f64,
    #[tabled(rename = "Liquid (m³/kg)", display_with = "display_volume")]
    pub specific_volume_liquid: Option<f64>,
    #[tabled(rename = "Vapor (m³/kg)", display_with = "display_volume")]
    pub specific_volume_vapor: Option<f64>,
}

fn display_volume(volume: &Option<f64>) -> String {
    volume
        .map(|v| v.to_string())
        .unwrap_or_else(|| "out of range".to_string())
}

/// `steps + 1` evenly spaced pressures from `from` to `to` inclusive.
pub fn sweep_pressures(from: f64, to: f64, steps: u32) -> Result<Vec<f64>> {
    if steps == 0 {
        return Err(CliError::invalid_argument("--steps must be at least 1"));
    }
    if !from.is_finite() || !to.is_finite() {
        return Err(CliError::invalid_argument("pressures must be finite"));
    }

    let span = to - from;
    Ok((0..=steps)
        .map(|i| {
            if i == steps {
                to
            } else {
                from + span * f64::from(i) / f64::from(steps)
            }
        })
        .collect())
}

/// Query every pressure; out-of-range points become empty rows.
pub async fn collect(client: &ApiClient, pressures: &[f64]) -> Result<Vec<SweepRow>> {
    let mut rows = Vec::with_capacity(pressures.len());
    for &pressure in pressures {
        let row = match client.phase_change(pressure).await {
            Ok(volumes) => SweepRow {
                pressure,
                specific_volume_liquid: Some(volumes.specific_volume_liquid),
                specific_volume_vapor: Some(volumes.specific_volume_vapor),
            },
            Err(err) if err.is_not_found() => SweepRow {
                pressure,
                specific_volume_liquid: None,
                specific_volume_vapor: None,
            },
            Err(err) => return Err(err),
        };
        rows.push(row);
    }
    Ok(rows)
}

/// Execute the sweep command.
pub async fn execute(args: SweepArgs, client: &ApiClient, format: OutputFormat) -> anyhow::Result<()> {
    let pressures = sweep_pressures(args.from, args.to, args.steps)?;
    let rows = collect(client, &pressures).await?;

    let rejected = rows
        .iter()
        .filter(|row| row.specific_volume_liquid.is_none())
        .count();

    print_data(&rows, format)?;
    if rejected > 0 {
        output::warn(&format!("{rejected} pressure(s) outside the server's table"));
    }
    Ok(())
}
