//! Terminal output helpers.

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Render rows in the requested format.
pub fn render<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Table => Table::new(rows).with(Style::rounded()).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(rows)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(rows)?,
    })
}

pub fn print_data<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(rows, format)?);
    Ok(())
}

/// Print a single record; JSON and YAML render the bare object.
pub fn print_item<T: Serialize + Tabled>(item: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_data(std::slice::from_ref(item), format),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(item)?);
            Ok(())
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml_ng::to_string(item)?);
            Ok(())
        }
    }
}
