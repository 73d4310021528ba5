//! CLI subcommands.

pub mod health;
pub mod query;
pub mod sweep;
