//! Command-line argument definitions for the phone cleaner
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::app::models::SortDirection;
use crate::config::{CleanerConfig, ColumnSelection, ExportOptions};
use crate::constants::DEFAULT_OUTPUT_DIR;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the CSV phone cleaner
///
/// Normalizes and validates Kenyan mobile numbers in CSV files, detects
/// carriers and exports cleaned data.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "phone-cleaner",
    version,
    about = "Clean, validate and classify Kenyan phone numbers in CSV files",
    long_about = "Normalizes free-text phone numbers (local format, missing country code, \
                  spreadsheet scientific notation, stray punctuation) into +254XXXXXXXXX, \
                  reports what is wrong with the rest, detects the carrier from the number \
                  prefix and exports the cleaned dataset as CSV."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the phone cleaner
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Clean a CSV file and export the result
    Clean(CleanArgs),
    /// Validate individual phone numbers
    Check(CheckArgs),
}

/// Arguments for the clean command
#[derive(Debug, Clone, Parser)]
pub struct CleanArgs {
    /// CSV file with a header row
    #[arg(value_name = "INPUT", help = "CSV file with a header row")]
    pub input: PathBuf,

    /// Column holding the phone numbers
    ///
    /// When omitted and stdin is a terminal, the available columns are listed
    /// and one can be picked interactively.
    #[arg(
        short = 'p',
        long = "phone-column",
        value_name = "COLUMN",
        help = "Column holding the phone numbers"
    )]
    pub phone_column: Option<String>,

    /// Numeric column used for sorting (airtime, data bundle, ...)
    #[arg(
        short = 'b',
        long = "bundle-column",
        value_name = "COLUMN",
        help = "Numeric column used for sorting"
    )]
    pub bundle_column: Option<String>,

    /// Delete a row after processing (1-based, repeatable)
    ///
    /// Row numbers refer to the processed file order. All deletions are
    /// resolved against that order, so deleting rows 2 and 3 removes the
    /// second and third data rows of the input.
    #[arg(
        long = "delete-row",
        value_name = "ROW",
        help = "Delete a row after processing (1-based, repeatable)"
    )]
    pub delete_rows: Vec<usize>,

    /// Replace the phone value of a row and revalidate it (repeatable)
    #[arg(
        long = "set-phone",
        value_name = "ROW=VALUE",
        help = "Replace the phone value of a row, e.g. 3=0712345678 (repeatable)"
    )]
    pub phone_edits: Vec<PhoneEdit>,

    /// Remove later rows that repeat a valid number
    #[arg(long = "dedupe", help = "Remove later rows that repeat a valid number")]
    pub dedupe: bool,

    /// Sort by the bundle column
    #[arg(
        long = "sort",
        value_name = "DIRECTION",
        help = "Sort by the bundle column (desc or asc)"
    )]
    pub sort: Option<SortDirection>,

    /// Output directory for the cleaned CSV
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Output directory for the cleaned CSV"
    )]
    pub output_dir: PathBuf,

    /// Export only records with a valid phone number
    #[arg(long = "valid-only", help = "Export only records with a valid phone number")]
    pub valid_only: bool,

    /// Add a Telco column with the detected carrier
    #[arg(long = "include-telco", help = "Add a Telco column with the detected carrier")]
    pub include_telco: bool,

    /// Perform a dry run without writing the output file
    #[arg(
        long = "dry-run",
        help = "Show what would be exported without writing the output file"
    )]
    pub dry_run: bool,

    /// Force overwrite of an existing output file
    #[arg(long = "force", help = "Force overwrite of an existing output file")]
    pub force_overwrite: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the final summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Phone numbers to validate
    #[arg(
        value_name = "NUMBER",
        required = true,
        num_args = 1..,
        help = "Phone numbers to validate"
    )]
    pub numbers: Vec<String>,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Output format for the results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the results"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// A `ROW=VALUE` phone replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneEdit {
    /// 1-based row number
    pub row: usize,
    /// New raw phone value, may be empty
    pub value: String,
}

impl FromStr for PhoneEdit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (row, value) = s.split_once('=').ok_or_else(|| {
            Error::configuration(format!("Phone edit '{}' must look like ROW=VALUE", s))
        })?;

        let row: usize = row
            .trim()
            .parse()
            .map_err(|_| Error::configuration(format!("Invalid row number: {}", row)))?;

        if row == 0 {
            return Err(Error::configuration("Row numbers start at 1"));
        }

        Ok(PhoneEdit {
            row,
            value: value.to_string(),
        })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}

impl CleanArgs {
    /// Validate the clean command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }

        if self.delete_rows.contains(&0) {
            return Err(Error::configuration("Row numbers start at 1"));
        }

        if self.output_dir.is_file() {
            return Err(Error::configuration(format!(
                "Output path is not a directory: {}",
                self.output_dir.display()
            )));
        }

        Ok(())
    }

    /// Build the run configuration once the phone column is known
    pub fn to_config(&self, phone_column: impl Into<String>) -> CleanerConfig {
        CleanerConfig {
            columns: ColumnSelection::new(phone_column, self.bundle_column.clone()),
            export: ExportOptions {
                valid_only: self.valid_only,
                include_carrier: self.include_telco,
            },
            deduplicate: self.dedupe,
            sort: self.sort,
            show_progress: self.show_progress(),
        }
    }

    /// Zero-based delete positions, highest first, without repeats
    pub fn delete_positions(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .delete_rows
            .iter()
            .filter(|&&row| row > 0)
            .map(|row| row - 1)
            .collect();
        positions.sort_unstable_by(|a, b| b.cmp(a));
        positions.dedup();
        positions
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            log_level_for(self.verbose)
        }
    }

    /// Check if we should show progress bars (not in quiet or JSON mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

impl CheckArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose)
    }
}

fn log_level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
