//! Command implementations for the phone cleaner CLI
//!
//! Each command is implemented in its own module:
//! - [`clean`] - Load, validate, edit and export a CSV file
//! - [`check`] - Validate phone numbers given as arguments
//! - [`select`] - Interactive column picker
//! - [`shared`] - Logging setup and report printing

pub mod check;
pub mod clean;
pub mod select;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the phone cleaner
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
/// Commands print their own reports.
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Some(Commands::Clean(clean_args)) => clean::run_clean(clean_args).await.map(|_| ()),
        Some(Commands::Check(check_args)) => check::run_check(check_args).await.map(|_| ()),
        None => Ok(()),
    }
}
