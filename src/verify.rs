//! Sanity checks over a directory of TSV files before consolidating them.
//!
//! Two checks run per file: chapter coverage against the range encoded in
//! file names like `genesis_01-10.tsv`, and consecutive repeated glosses,
//! which usually point at a glossing slip.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{info, warn};

use crate::aggregate::collect_input_files;
use crate::error::Result;
use crate::parsing::tsv_parser::{parse_tsv_file, ParseStats};
use crate::types::interlinear::VerseRecord;

static CHAPTER_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_(\d+)-(\d+)\.[^.]+$").expect("valid chapter range regex"));

/// Glosses that legitimately repeat back to back.
const COMMON_REPEATS: &[&str] = &["and", "the", "of", "to", "in", "a"];

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGloss {
    pub reference: String,
    pub gloss: String,
    /// 1-based position of the second occurrence.
    pub position: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file: PathBuf,
    pub stats: ParseStats,
    pub chapters_found: Vec<u32>,
    pub expected_range: Option<(u32, u32)>,
    pub missing_chapters: Vec<u32>,
    pub duplicate_glosses: Vec<DuplicateGloss>,
}

impl FileReport {
    pub fn is_ok(&self) -> bool {
        self.missing_chapters.is_empty() && self.stats.wrong_field_count == 0
    }

    pub fn non_blank_lines(&self) -> usize {
        self.stats.parsed + self.stats.skipped_lines()
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    pub files: Vec<FileReport>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.files.iter().all(FileReport::is_ok)
    }

    pub fn total_verses(&self) -> usize {
        self.files.iter().map(|f| f.stats.parsed).sum()
    }

    pub fn duplicate_gloss_count(&self) -> usize {
        self.files.iter().map(|f| f.duplicate_glosses.len()).sum()
    }
}

/// Chapter range encoded as `<name>_<start>-<end>.<ext>`.
pub fn chapter_range_from_file_name(name: &str) -> Option<(u32, u32)> {
    let caps = CHAPTER_RANGE_RE.captures(name)?;
    let start = caps.get(1)?.as_str().parse().ok()?;
    let end = caps.get(2)?.as_str().parse().ok()?;
    Some((start, end))
}

pub fn find_duplicate_glosses(verse: &VerseRecord) -> Vec<DuplicateGloss> {
    let glosses: Vec<String> = verse.words.iter().map(|w| w.gloss.to_lowercase()).collect();
    glosses
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] == pair[1] && !COMMON_REPEATS.contains(&pair[1].as_str()))
        .map(|(i, pair)| DuplicateGloss {
            reference: format!("{}:{}", verse.chapter, verse.verse),
            gloss: pair[1].clone(),
            position: i + 2,
        })
        .collect()
}

pub fn verify_file(path: &Path) -> Result<FileReport> {
    let parsed = parse_tsv_file(path)?;

    let found: BTreeSet<u32> = parsed.verses.iter().map(|v| v.chapter).collect();
    let expected_range = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(chapter_range_from_file_name);
    let missing_chapters = match expected_range {
        Some((start, end)) => (start..=end).filter(|c| !found.contains(c)).collect(),
        None => Vec::new(),
    };
    let duplicate_glosses = parsed.verses.iter().flat_map(find_duplicate_glosses).collect();

    Ok(FileReport {
        file: path.to_path_buf(),
        stats: parsed.stats,
        chapters_found: found.into_iter().collect(),
        expected_range,
        missing_chapters,
        duplicate_glosses,
    })
}

pub fn verify_directory(dir: &Path, extension: &str) -> Result<VerifyReport> {
    let mut report = VerifyReport::default();
    for path in collect_input_files(dir, extension)? {
        report.files.push(verify_file(&path)?);
    }
    Ok(report)
}

/// Logs one line per file plus a summary.
pub fn log_report(report: &VerifyReport) {
    for file in &report.files {
        let name = file.file.file_name().unwrap_or_default().to_string_lossy();
        let chapters: Vec<String> = file.chapters_found.iter().map(u32::to_string).collect();
        let status = if file.is_ok() { "OK" } else { "ISSUE" };
        info!(
            "{}: {} verses, chapters {} [{}]",
            name,
            file.non_blank_lines(),
            chapters.join(","),
            status
        );
        if !file.missing_chapters.is_empty() {
            let missing: Vec<String> = file.missing_chapters.iter().map(u32::to_string).collect();
            warn!("  Missing chapters: {}", missing.join(", "));
        }
        if file.stats.wrong_field_count > 0 {
            warn!("  {} line(s) without exactly two tab-separated fields", file.stats.wrong_field_count);
        }
        for dup in &file.duplicate_glosses {
            warn!("  {}: \"{}\" repeated at position {}", dup.reference, dup.gloss, dup.position);
        }
    }
    info!("Total verses across all files: {}", report.total_verses());
    info!("Duplicate glosses: {}", report.duplicate_gloss_count());
    info!("Overall status: {}", if report.is_ok() { "ALL FILES OK" } else { "SOME ISSUES FOUND" });
}
