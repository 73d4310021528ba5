//! Client library behind the `phasectl` binary.

pub mod client;
pub mod commands;
pub mod error;
pub mod output;

pub use client::{ApiClient, Health, PhaseChange};
pub use error::{CliError, Result};
pub use output::OutputFormat;
