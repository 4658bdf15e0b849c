use crate::cli::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Print `value` as pretty JSON, or as a table of `rows` under `header`.
pub fn print_report<T: Serialize>(
    value: &T,
    header: &[&str],
    rows: Vec<Vec<String>>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Table => print_table(header, rows),
    }
    Ok(())
}

pub fn print_table(header: &[&str], rows: Vec<Vec<String>>) {
    if rows.is_empty() {
        println!("No items found.");
        return;
    }
    let mut builder = Builder::default();
    builder.push_record(header.iter().copied());
    for row in rows {
        builder.push_record(row);
    }
    let table = builder.build().with(Style::rounded()).to_string();
    println!("{table}");
}

pub fn print_heading(label: &str, value: &str) {
    println!("{} {}", format!("{label}:").cyan(), value);
}

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Render an optional cell
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
