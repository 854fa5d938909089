use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use interlinear_json::config::Config;
use interlinear_json::consolidator::{run_book_exports, run_consolidation};
use interlinear_json::logging::init_tracing;
use interlinear_json::verify::{log_report, verify_directory};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interlinear TSV to JSON consolidation", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(long, short, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log skipped lines and other debug details.
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Runs `consolidate` and then `export` when omitted.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge every TSV file of the input directory into one chapters/verses/words JSON file
    Consolidate,

    /// Write the token-stream book project for each configured book
    Export {
        /// Only export the book with this id (repeatable)
        #[arg(long = "book", value_name = "ID")]
        books: Vec<String>,
    },

    /// Report chapter coverage and repeated glosses for the input directory
    Verify,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose).map_err(|e| anyhow::anyhow!(e))?;

    let config = Config::load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Some(Commands::Consolidate) => {
            run_consolidation(&config.consolidate)?;
        }
        Some(Commands::Export { books }) => {
            run_book_exports(&config.export, &config.print_settings, &books)?;
        }
        Some(Commands::Verify) => {
            let report = verify_directory(&config.consolidate.input_dir, &config.consolidate.extension)?;
            if report.files.is_empty() {
                warn!(
                    "No {} files found in {}",
                    config.consolidate.extension.to_uppercase(),
                    config.consolidate.input_dir.display()
                );
            }
            log_report(&report);
        }
        None => {
            run_consolidation(&config.consolidate)?;
            run_book_exports(&config.export, &config.print_settings, &[])?;
        }
    }

    Ok(())
}
