use crate::types::book_project::{BookProject, Chapter, PrintSettings, ProjectMeta, Token, WordPart};
use crate::types::interlinear::{ChapterGroup, FlatChapter, FlatDocument, FlatVerse, WordPair};

/// Builds the `chapters -> verses -> words` document. Glosses are copied verbatim.
pub fn build_flat_document(chapters: &[ChapterGroup]) -> FlatDocument {
    FlatDocument {
        chapters: chapters
            .iter()
            .map(|chapter| FlatChapter {
                number: chapter.number,
                verses: chapter
                    .verses
                    .iter()
                    .map(|verse| FlatVerse { number: verse.verse, words: verse.words.clone() })
                    .collect(),
            })
            .collect(),
    }
}

/// Builds the typesetting document: each chapter becomes one paragraph whose
/// tokens interleave verse markers and words.
pub fn build_book_project(chapters: &[ChapterGroup], meta: ProjectMeta, print_settings: PrintSettings) -> BookProject {
    BookProject {
        meta,
        print_settings,
        chapters: chapters.iter().map(chapter_to_paragraph).collect(),
    }
}

fn chapter_to_paragraph(chapter: &ChapterGroup) -> Chapter {
    let mut tokens = Vec::new();
    for verse in &chapter.verses {
        tokens.push(Token::VerseNum { value: verse.verse.to_string() });
        tokens.extend(verse.words.iter().map(word_token));
    }
    Chapter { number: chapter.number, paragraphs: vec![tokens] }
}

fn word_token(word: &WordPair) -> Token {
    Token::Word {
        original_full: word.source.clone(),
        parts: vec![WordPart { text: word.source.clone(), gloss: word.gloss.to_uppercase() }],
    }
}
