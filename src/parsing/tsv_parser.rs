use std::fs;
use std::ops::AddAssign;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{InterlinearError, Result};
use crate::types::interlinear::{VerseRecord, WordPair};

static REFERENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+):(\d+)").expect("valid reference regex"));

/// Why a line produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSkip {
    Blank,
    WrongFieldCount,
    BadReference,
}

/// Counters for lenient parsing. Skipped input never changes the output, it is only reported.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub parsed: usize,
    pub blank: usize,
    pub wrong_field_count: usize,
    pub bad_reference: usize,
    pub dropped_segments: usize,
}

impl ParseStats {
    pub fn skipped_lines(&self) -> usize {
        self.wrong_field_count + self.bad_reference
    }

    fn record_skip(&mut self, skip: LineSkip) {
        match skip {
            LineSkip::Blank => self.blank += 1,
            LineSkip::WrongFieldCount => self.wrong_field_count += 1,
            LineSkip::BadReference => self.bad_reference += 1,
        }
    }
}

impl AddAssign for ParseStats {
    fn add_assign(&mut self, other: Self) {
        self.parsed += other.parsed;
        self.blank += other.blank;
        self.wrong_field_count += other.wrong_field_count;
        self.bad_reference += other.bad_reference;
        self.dropped_segments += other.dropped_segments;
    }
}

/// Records and stats from a single TSV source.
#[derive(Debug, Clone, Default)]
pub struct ParsedFile {
    pub verses: Vec<VerseRecord>,
    pub stats: ParseStats,
}

/// Parses `chapter:verse<TAB>src|gloss src|gloss ...`.
///
/// Returns `None` for blank or malformed lines; never fails.
pub fn parse_line(line: &str) -> Option<VerseRecord> {
    parse_line_detailed(line).ok().map(|(record, _)| record)
}

/// Same as [`parse_line`], but reports why a line was skipped and how many
/// space segments were dropped for lacking a usable `|` pair.
pub fn parse_line_detailed(line: &str) -> std::result::Result<(VerseRecord, usize), LineSkip> {
    let line = line.trim();
    if line.is_empty() {
        return Err(LineSkip::Blank);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 2 {
        return Err(LineSkip::WrongFieldCount);
    }
    let (reference, word_pairs) = (fields[0], fields[1]);

    let (chapter, verse) = parse_reference(reference).ok_or(LineSkip::BadReference)?;

    let mut words = Vec::new();
    let mut dropped = 0;
    for segment in word_pairs.split(' ') {
        if segment.is_empty() {
            continue;
        }
        match parse_word_pair(segment) {
            Some(pair) => words.push(pair),
            None => dropped += 1,
        }
    }

    Ok((VerseRecord { chapter, verse, words }, dropped))
}

/// Matches `<digits>:<digits>` at the start of the field. Zero and
/// out-of-range numbers are rejected.
fn parse_reference(reference: &str) -> Option<(u32, u32)> {
    let caps = REFERENCE_RE.captures(reference)?;
    let chapter: u32 = caps.get(1)?.as_str().parse().ok()?;
    let verse: u32 = caps.get(2)?.as_str().parse().ok()?;
    if chapter == 0 || verse == 0 {
        return None;
    }
    Some((chapter, verse))
}

fn parse_word_pair(segment: &str) -> Option<WordPair> {
    let (source, gloss) = segment.split_once('|')?;
    if source.is_empty() || gloss.is_empty() {
        return None;
    }
    Some(WordPair::new(source, gloss))
}

pub fn parse_tsv_content(content: &str) -> ParsedFile {
    let mut parsed = ParsedFile::default();
    for line in content.lines() {
        match parse_line_detailed(line) {
            Ok((record, dropped)) => {
                parsed.stats.parsed += 1;
                parsed.stats.dropped_segments += dropped;
                parsed.verses.push(record);
            }
            Err(skip) => parsed.stats.record_skip(skip),
        }
    }
    parsed
}

pub fn parse_tsv_file(path: &Path) -> Result<ParsedFile> {
    let content = fs::read_to_string(path).map_err(|e| InterlinearError::io(path, e))?;
    Ok(parse_tsv_content(&content))
}
