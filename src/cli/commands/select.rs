//! Interactive column selection
//!
//! Used by `clean` when no phone column was given and stdin is a terminal.

use anyhow::{Context, Result};
use colored::*;
use std::io::{self, BufRead, Write};

/// Ask on the terminal which column holds the phone numbers
pub fn select_phone_column(columns: &[String]) -> Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    select_column_from(
        columns,
        "Select the phone number column (number): ",
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

/// Present columns as a numbered list and read the user's choice
///
/// # Arguments
///
/// * `columns` - Header names to choose from
/// * `prompt` - Question shown after the list
/// * `input` - Source of the answer
/// * `output` - Where the list and prompt are written
pub fn select_column_from<R: BufRead, W: Write>(
    columns: &[String],
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    if columns.is_empty() {
        anyhow::bail!("The input file has no columns to choose from");
    }

    writeln!(output, "{}", "Available columns:".bright_green().bold())
        .context("Failed to write to stdout")?;
    writeln!(output).context("Failed to write to stdout")?;

    for (i, column) in columns.iter().enumerate() {
        writeln!(
            output,
            "  {}. {}",
            (i + 1).to_string().bright_yellow().bold(),
            column.bright_cyan()
        )
        .context("Failed to write to stdout")?;
    }

    writeln!(output).context("Failed to write to stdout")?;
    write!(output, "{}", prompt.bright_white()).context("Failed to write to stdout")?;
    output.flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read user input")?;

    let selection: usize = answer
        .trim()
        .parse()
        .context("Please enter a valid number")?;

    if selection == 0 || selection > columns.len() {
        anyhow::bail!(
            "Invalid selection. Please choose a number between 1 and {}",
            columns.len()
        );
    }

    Ok(columns[selection - 1].clone())
}
