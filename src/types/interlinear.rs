use serde::{Deserialize, Serialize};

/// A source-language word and its gloss, as written in a `source|gloss` segment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPair {
    pub source: String,
    pub gloss: String,
}

impl WordPair {
    pub fn new(source: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self { source: source.into(), gloss: gloss.into() }
    }
}

/// One parsed TSV line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerseRecord {
    pub chapter: u32,
    pub verse: u32,
    pub words: Vec<WordPair>,
}

/// Verses of one chapter, sorted by verse number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterGroup {
    pub number: u32,
    pub verses: Vec<VerseRecord>,
}

// Flat output schema: chapters -> verses -> words.

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatVerse {
    pub number: u32,
    pub words: Vec<WordPair>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatChapter {
    pub number: u32,
    pub verses: Vec<FlatVerse>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatDocument {
    pub chapters: Vec<FlatChapter>,
}
