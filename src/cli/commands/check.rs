//! Check command implementation
//!
//! Validates phone numbers given on the command line without any CSV file.

use crate::Result;
use crate::app::services::phone_validator::{BatchValidation, validate_batch};
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::constants::CARRIER_PORTABILITY_CAVEAT;
use colored::*;
use serde::Serialize;

use super::shared::{print_carrier_caveat, print_json, setup_logging};

#[derive(Serialize)]
struct CheckReport<'a> {
    results: &'a [BatchValidation],
    carrier_caveat: &'static str,
}

/// Run the check command
pub async fn run_check(args: &CheckArgs) -> Result<Vec<BatchValidation>> {
    setup_logging(args.get_log_level(), false)?;

    let results = validate_batch(&args.numbers);

    match args.output_format {
        OutputFormat::Json => print_json(&CheckReport {
            results: &results,
            carrier_caveat: CARRIER_PORTABILITY_CAVEAT,
        })?,
        OutputFormat::Human => print_results(&results),
    }

    Ok(results)
}

fn print_results(results: &[BatchValidation]) {
    for entry in results {
        if entry.result.is_valid() {
            let carrier = entry
                .carrier
                .map(|carrier| carrier.display_name())
                .unwrap_or("Unknown carrier");
            println!(
                "{} {} -> {} ({})",
                "✓".green().bold(),
                entry.original,
                entry.result.formatted().bright_cyan(),
                carrier
            );
        } else {
            println!(
                "{} {} -> {}",
                "✗".red().bold(),
                entry.original,
                entry
                    .result
                    .errors()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
                    .red()
            );
        }
    }

    if results.iter().any(|entry| entry.carrier.is_some()) {
        println!();
        print_carrier_caveat();
    }
}
