//! Shared components for CLI commands
//!
//! This module contains logging setup and the report printers used by more
//! than one command.

use crate::app::models::{AnnotatedRecord, Carrier};
use crate::app::services::record_processor::DatasetStats;
use crate::constants::{CARRIER_PORTABILITY_CAVEAT, MAX_REPORTED_INVALID_ROWS};
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use tracing::debug;

/// Set up structured logging for a command
///
/// `RUST_LOG` takes precedence over the level derived from the verbosity
/// flags.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csv_phone_cleaner={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::serialization("Failed to encode JSON output", e))?;
    println!("{}", json);
    Ok(())
}

/// Format a byte count in human-readable form
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

/// Print dataset statistics with carrier counts and the portability caveat
pub fn print_dataset_summary(stats: &DatasetStats) {
    println!("{}", "Dataset summary".bright_green().bold());
    println!("  Total records:      {}", stats.total_records);
    println!(
        "  Valid numbers:      {} ({}%)",
        stats.valid_records.to_string().green().bold(),
        stats.valid_percentage()
    );
    println!(
        "  Invalid numbers:    {}",
        if stats.invalid_records > 0 {
            stats.invalid_records.to_string().red().bold()
        } else {
            stats.invalid_records.to_string().normal()
        }
    );
    println!(
        "  Duplicated numbers: {}",
        if stats.duplicate_count > 0 {
            stats.duplicate_count.to_string().yellow()
        } else {
            stats.duplicate_count.to_string().normal()
        }
    );

    println!();
    println!("{}", "Carrier distribution".bright_green().bold());
    for carrier in Carrier::ALL {
        println!(
            "  {:<12} {}",
            carrier.display_name().bright_cyan(),
            stats.carrier_count(carrier)
        );
    }
    println!("  {:<12} {}", "Unknown".bright_black(), stats.unclassified_records());
    print_carrier_caveat();
}

/// Print the number-portability caveat
pub fn print_carrier_caveat() {
    println!("  {}", CARRIER_PORTABILITY_CAVEAT.bright_black());
}

/// Print the rows with phone issues, numbered by current position
pub fn print_invalid_rows<'a>(rows: impl IntoIterator<Item = (usize, &'a AnnotatedRecord)>) {
    let rows: Vec<(usize, &AnnotatedRecord)> = rows.into_iter().collect();
    if rows.is_empty() {
        return;
    }

    println!();
    println!(
        "{}",
        format!("Records with errors ({})", rows.len()).red().bold()
    );
    for (row, record) in rows.iter().take(MAX_REPORTED_INVALID_ROWS) {
        let shown = if record.original_phone.is_empty() {
            "(empty)".bright_black().to_string()
        } else {
            record.original_phone.clone()
        };
        println!(
            "  Row {}: {} - {}",
            row.to_string().bright_yellow(),
            shown,
            record.error_summary()
        );
    }
    if rows.len() > MAX_REPORTED_INVALID_ROWS {
        println!(
            "  {}",
            format!("... and {} more", rows.len() - MAX_REPORTED_INVALID_ROWS).bright_black()
        );
    }
}
