use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{InterlinearError, Result};
use crate::parsing::tsv_parser::{parse_tsv_file, ParseStats};
use crate::types::interlinear::VerseRecord;

/// All verses from a directory of TSV files, in file then line order.
#[derive(Debug, Clone, Default)]
pub struct Aggregated {
    pub files: Vec<PathBuf>,
    pub verses: Vec<VerseRecord>,
    pub stats: ParseStats,
}

/// Lists regular files in `dir` whose extension equals `extension`, sorted by file name.
///
/// A missing directory yields an empty list rather than an error.
pub fn collect_input_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| InterlinearError::io(dir, e))? {
        let path = entry.map_err(|e| InterlinearError::io(dir, e))?.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Parses every file in order and concatenates their records.
pub fn aggregate_files(files: &[PathBuf]) -> Result<Aggregated> {
    let mut aggregated = Aggregated { files: files.to_vec(), ..Default::default() };

    for path in files {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        info!("  Processing {}...", name);
        let parsed = parse_tsv_file(path)?;
        if parsed.stats.skipped_lines() > 0 || parsed.stats.dropped_segments > 0 {
            debug!(
                "  {}: skipped {} malformed line(s), dropped {} word segment(s)",
                name,
                parsed.stats.skipped_lines(),
                parsed.stats.dropped_segments
            );
        }
        aggregated.stats += parsed.stats;
        aggregated.verses.extend(parsed.verses);
    }

    Ok(aggregated)
}

/// Scans `dir` and aggregates its files. Returns `None` when there is nothing to read.
pub fn aggregate_directory(dir: &Path, extension: &str) -> Result<Option<Aggregated>> {
    let files = collect_input_files(dir, extension)?;
    if files.is_empty() {
        return Ok(None);
    }
    info!("Found {} {} files", files.len(), extension.to_uppercase());
    aggregate_files(&files).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn files_are_filtered_by_extension_and_sorted_by_name() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "genesis_11-20.tsv", "");
        write(tmp.path(), "genesis_01-10.tsv", "");
        write(tmp.path(), "notes.txt", "");
        fs::create_dir(tmp.path().join("nested.tsv")).unwrap();

        let files = collect_input_files(tmp.path(), "tsv").unwrap();
        let names: Vec<_> = files.iter().map(|p| p.file_name().unwrap().to_str().unwrap()).collect();
        assert_eq!(names, vec!["genesis_01-10.tsv", "genesis_11-20.tsv"]);
    }

    #[test]
    fn missing_directory_has_no_files() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        assert!(collect_input_files(&missing, "tsv").unwrap().is_empty());
        assert!(aggregate_directory(&missing, "tsv").unwrap().is_none());
    }

    #[test]
    fn records_are_concatenated_in_file_order() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "b.tsv", "2:1\tDa|then\n");
        write(tmp.path(), "a.tsv", "1:2\tUnd|and\n\nbroken\n1:1\tAm|in-the\n");

        let aggregated = aggregate_directory(tmp.path(), "tsv").unwrap().unwrap();
        let refs: Vec<_> = aggregated.verses.iter().map(|v| (v.chapter, v.verse)).collect();
        assert_eq!(refs, vec![(1, 2), (1, 1), (2, 1)]);
        assert_eq!(aggregated.stats.parsed, 3);
        assert_eq!(aggregated.stats.wrong_field_count, 1);
        assert_eq!(aggregated.files.len(), 2);
    }
}
