use std::path::PathBuf;

use tracing::{info, warn};

use crate::aggregate::aggregate_directory;
use crate::config::{BookConfig, ConsolidateConfig, ExportConfig};
use crate::document::{build_book_project, build_flat_document};
use crate::error::Result;
use crate::grouping::group_by_chapter;
use crate::parsing::tsv_parser::{parse_tsv_file, ParseStats};
use crate::types::book_project::PrintSettings;
use crate::writer::write_json_pretty;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsolidationOutcome {
    /// The input directory was missing or held no matching files. Nothing was written.
    NoInput,
    Written { output_file: PathBuf, files: usize, verses: usize, chapters: usize, stats: ParseStats },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookOutcome {
    Skipped { id: String, missing_input: PathBuf },
    /// The input exists but could not be read.
    Failed { id: String, input: PathBuf, error: String },
    Written { id: String, output_file: PathBuf, verses: usize, chapters: usize, stats: ParseStats },
}

impl BookOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, BookOutcome::Written { .. })
    }
}

/// Merges every TSV file in the input directory into one flat JSON document.
pub fn run_consolidation(config: &ConsolidateConfig) -> Result<ConsolidationOutcome> {
    let Some(aggregated) = aggregate_directory(&config.input_dir, &config.extension)? else {
        warn!("No {} files found in {}", config.extension.to_uppercase(), config.input_dir.display());
        return Ok(ConsolidationOutcome::NoInput);
    };

    let verses = aggregated.verses.len();
    info!("Total verses: {}", verses);
    if aggregated.stats.skipped_lines() > 0 {
        info!(
            "Skipped {} malformed line(s) and {} word segment(s)",
            aggregated.stats.skipped_lines(),
            aggregated.stats.dropped_segments
        );
    }

    let chapters = group_by_chapter(aggregated.verses);
    let document = build_flat_document(&chapters);
    write_json_pretty(&document, &config.output_file)?;
    info!("Wrote {} chapters to {}", chapters.len(), config.output_file.display());

    Ok(ConsolidationOutcome::Written {
        output_file: config.output_file.clone(),
        files: aggregated.files.len(),
        verses,
        chapters: chapters.len(),
        stats: aggregated.stats,
    })
}

/// Converts one book's TSV file into the token-stream document.
///
/// Missing or unreadable input yields an outcome, not an error; only write failures propagate.
pub fn export_book(book: &BookConfig, export: &ExportConfig, print_settings: &PrintSettings) -> Result<BookOutcome> {
    if !book.input.is_file() {
        warn!("  Input for '{}' not found at {}. Skipping.", book.id, book.input.display());
        return Ok(BookOutcome::Skipped { id: book.id.clone(), missing_input: book.input.clone() });
    }

    let parsed = match parse_tsv_file(&book.input) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("  Failed to read input for '{}': {}. Skipping.", book.id, e);
            return Ok(BookOutcome::Failed { id: book.id.clone(), input: book.input.clone(), error: e.to_string() });
        }
    };
    let verses = parsed.verses.len();
    let chapters = group_by_chapter(parsed.verses);
    let project = build_book_project(&chapters, book.meta(), print_settings.clone());

    let output_file = export.output_path(book);
    write_json_pretty(&project, &output_file)?;
    info!("  Wrote {} chapters ({} verses) to {}", chapters.len(), verses, output_file.display());

    Ok(BookOutcome::Written {
        id: book.id.clone(),
        output_file,
        verses,
        chapters: chapters.len(),
        stats: parsed.stats,
    })
}

/// Exports every configured book, or only those named in `only` when it is non-empty.
///
/// A missing or unreadable input skips that book; the remaining books are still processed.
pub fn run_book_exports(
    export: &ExportConfig,
    print_settings: &PrintSettings,
    only: &[String],
) -> Result<Vec<BookOutcome>> {
    let selected: Vec<&BookConfig> = export
        .books
        .iter()
        .filter(|book| only.is_empty() || only.iter().any(|id| id == &book.id))
        .collect();

    for id in only {
        if !export.books.iter().any(|book| &book.id == id) {
            warn!("Book '{}' is not configured", id);
        }
    }

    let mut outcomes = Vec::with_capacity(selected.len());
    for book in selected {
        info!("Processing {} ({})...", book.title, book.id);
        outcomes.push(export_book(book, export, print_settings)?);
    }

    let written = outcomes.iter().filter(|o| o.is_written()).count();
    info!("Exported {} of {} book(s)", written, outcomes.len());
    Ok(outcomes)
}
