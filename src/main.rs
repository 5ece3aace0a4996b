use clap::Parser;
use csv_phone_cleaner::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(match signal {
                    Ok(()) => csv_phone_cleaner::Error::processing_interrupted(
                        "Processing interrupted by user",
                    ),
                    Err(e) => csv_phone_cleaner::Error::io("Failed to listen for CTRL+C", e),
                })
            }
        }
    });

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Phone Cleaner - Kenyan phone number cleaning for CSV files");
    println!("==========================================================");
    println!();
    println!("Normalize phone numbers to +254XXXXXXXXX, report invalid entries,");
    println!("detect carriers and export the cleaned data as CSV.");
    println!();
    println!("USAGE:");
    println!("    phone-cleaner <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    clean       Clean a CSV file and export the result");
    println!("    check       Validate individual phone numbers");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Clean a contact list and add the detected carrier:");
    println!("    phone-cleaner clean contacts.csv --phone-column phone --include-telco");
    println!();
    println!("    # Remove repeats, sort by bundle and keep only valid numbers:");
    println!("    phone-cleaner clean contacts.csv -p phone -b bundle --dedupe --sort desc \\");
    println!("                        --valid-only --output ./cleaned");
    println!();
    println!("    # Check a few numbers:");
    println!("    phone-cleaner check 0712345678 2.54712345678E+11 12345");
    println!();
    println!("For detailed help on any command, use:");
    println!("    phone-cleaner <COMMAND> --help");
}
