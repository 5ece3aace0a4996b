//! Clean command implementation
//!
//! Loads a CSV file, validates the selected phone column, applies the
//! requested edits, deletions, deduplication and sorting, then writes the
//! cleaned export.

use crate::app::models::{EditTarget, SortDirection};
use crate::app::services::csv_loader::{CsvLoader, LoadStats};
use crate::app::services::exporter::{export_file_name, to_csv_string};
use crate::app::services::record_processor::{DatasetPipeline, DatasetStats};
use crate::cli::args::{CleanArgs, OutputFormat};
use crate::config::CleanerConfig;
use crate::constants::CARRIER_PORTABILITY_CAVEAT;
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use super::select::select_phone_column;
use super::shared::{
    format_size, print_dataset_summary, print_invalid_rows, print_json, setup_logging,
};

/// Row with phone issues, as reported in JSON output
#[derive(Debug, Clone, Serialize)]
pub struct InvalidRowReport {
    /// 1-based position in the final collection
    pub row: usize,
    /// Position in the input file (0-based)
    pub index: usize,
    pub original_phone: String,
    pub errors: Vec<String>,
}

/// Outcome of a clean run
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub input: PathBuf,
    /// Written file, `None` on a dry run
    pub output: Option<PathBuf>,
    pub load: LoadStats,
    pub rows_exported: usize,
    pub bytes_written: u64,
    pub rows_deleted: usize,
    /// Rows repeating a valid number before any deduplication
    pub duplicate_rows_found: usize,
    pub duplicates_removed: usize,
    /// Direction a follow-up sort would use
    pub next_sort_direction: Option<SortDirection>,
    pub stats: DatasetStats,
    pub invalid_rows: Vec<InvalidRowReport>,
    pub carrier_caveat: &'static str,
}

/// Run the clean command
pub async fn run_clean(args: &CleanArgs) -> Result<CleanReport> {
    setup_logging(args.get_log_level(), args.quiet)?;
    execute_clean(args).await
}

/// Clean workflow without logging setup
///
/// # Arguments
///
/// * `args` - Parsed clean arguments
///
/// # Returns
///
/// The run report, already printed in the requested format
pub async fn execute_clean(args: &CleanArgs) -> Result<CleanReport> {
    args.validate()?;

    let start_time = Instant::now();

    let loaded = CsvLoader::new().load_file(&args.input).await?;
    let load_stats = loaded.stats.clone();

    let phone_column = resolve_phone_column(args, &loaded.columns)?;
    let config = args.to_config(phone_column);
    config.validate(&loaded.columns)?;

    let mut pipeline = DatasetPipeline::from_load_result(loaded)?.with_progress(config.show_progress);
    pipeline.process(
        &config.columns.phone_column,
        config.columns.bundle_column.as_deref(),
    )?;

    apply_edits(&mut pipeline, args)?;
    let rows_deleted = apply_deletions(&mut pipeline, args)?;
    let (_, _, duplicate_rows_found) = pipeline.duplicate_patterns()?;
    let (duplicates_removed, next_sort_direction) = apply_reshaping(&mut pipeline, &config)?;

    let rows = pipeline.export(&config.export)?;
    if rows.is_empty() {
        return Err(Error::empty_export("every row was deleted"));
    }
    let contents = to_csv_string(&rows)?;

    let output_path = args.output_dir.join(export_file_name(&config.export));
    let (output, bytes_written) = if args.dry_run {
        info!(
            "Dry run: would write {} rows to {}",
            rows.len(),
            output_path.display()
        );
        (None, 0)
    } else {
        let bytes = write_export(&output_path, &contents, args.force_overwrite).await?;
        (Some(output_path), bytes)
    };

    let stats = pipeline
        .stats()
        .cloned()
        .ok_or_else(|| Error::usage("Process the data before trying to export"))?;

    let report = CleanReport {
        input: args.input.clone(),
        output,
        load: load_stats,
        rows_exported: rows.len(),
        bytes_written,
        rows_deleted,
        duplicate_rows_found,
        duplicates_removed,
        next_sort_direction,
        stats,
        invalid_rows: pipeline
            .invalid_rows()
            .map(|(row, record)| InvalidRowReport {
                row,
                index: record.index,
                original_phone: record.original_phone.clone(),
                errors: record.errors.iter().map(ToString::to_string).collect(),
            })
            .collect(),
        carrier_caveat: CARRIER_PORTABILITY_CAVEAT,
    };

    info!("Clean completed in {:.2?}", start_time.elapsed());

    match args.output_format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Human if !args.quiet => print_human_report(&report, &pipeline),
        OutputFormat::Human => {}
    }

    Ok(report)
}

/// Take the phone column from the arguments or ask for it
fn resolve_phone_column(args: &CleanArgs, columns: &[String]) -> Result<String> {
    if let Some(column) = &args.phone_column {
        return Ok(column.clone());
    }

    if std::io::stdin().is_terminal() && args.output_format == OutputFormat::Human {
        return select_phone_column(columns).map_err(|e| Error::configuration(format!("{:#}", e)));
    }

    Err(Error::usage(format!(
        "Please select a phone number column with --phone-column. Available columns: {}",
        columns.join(", ")
    )))
}

/// Apply `--set-phone` edits against the processed row order
fn apply_edits(pipeline: &mut DatasetPipeline, args: &CleanArgs) -> Result<()> {
    for edit in &args.phone_edits {
        let stats = pipeline.edit_field(edit.row - 1, EditTarget::Phone, &edit.value)?;
        debug!("Edited row {}: {}", edit.row, stats.summary());
    }
    Ok(())
}

/// Apply `--delete-row` from the highest row down so row numbers stay put
fn apply_deletions(pipeline: &mut DatasetPipeline, args: &CleanArgs) -> Result<usize> {
    let positions = args.delete_positions();
    for &position in &positions {
        let removed = pipeline.delete_row(position)?;
        debug!(
            "Deleted row {} (phone '{}')",
            position + 1,
            removed.original_phone
        );
    }
    Ok(positions.len())
}

/// Deduplicate and sort as configured
fn apply_reshaping(
    pipeline: &mut DatasetPipeline,
    config: &CleanerConfig,
) -> Result<(usize, Option<SortDirection>)> {
    let duplicates_removed = if config.deduplicate {
        pipeline.deduplicate()?
    } else {
        0
    };

    let next_sort_direction = match config.sort {
        Some(direction) => Some(pipeline.sort_by_bundle(direction)?),
        None => None,
    };

    Ok((duplicates_removed, next_sort_direction))
}

/// Write the export, refusing to replace an existing file unless forced
async fn write_export(path: &Path, contents: &str, force_overwrite: bool) -> Result<u64> {
    if path.exists() && !force_overwrite {
        return Err(Error::configuration(format!(
            "Output file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            Error::io(
                format!("Failed to create output directory {}", parent.display()),
                e,
            )
        })?;
    }

    tokio::fs::write(path, contents)
        .await
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(contents.len() as u64)
}

fn print_human_report(report: &CleanReport, pipeline: &DatasetPipeline) {
    println!();
    print_dataset_summary(&report.stats);
    print_invalid_rows(pipeline.invalid_rows());

    if !report.load.is_rectangular() {
        warn!(
            "{} input rows had a different number of cells than the header",
            report.load.ragged_rows()
        );
    }

    println!();
    if report.rows_deleted > 0 {
        println!("Deleted {} rows", report.rows_deleted);
    }
    if report.duplicates_removed > 0 {
        println!("Removed {} duplicate rows", report.duplicates_removed);
    } else if report.duplicate_rows_found > 0 {
        println!(
            "{} rows repeat a valid number (use --dedupe to remove them)",
            report.duplicate_rows_found
        );
    }
    if let Some(direction) = report.next_sort_direction {
        println!("Sorted by bundle ({})", direction.toggled());
    }

    match &report.output {
        Some(path) => println!(
            "{} {} rows to {} ({})",
            "Exported".green().bold(),
            report.rows_exported,
            path.display(),
            format_size(report.bytes_written)
        ),
        None => println!(
            "{} {} rows would be exported",
            "Dry run:".yellow().bold(),
            report.rows_exported
        ),
    }
}
