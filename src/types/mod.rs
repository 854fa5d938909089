pub mod book_project;
pub mod interlinear;

pub use book_project::{BookProject, Chapter, Margins, PrintSettings, ProjectMeta, Token, Typography, WordPart};
pub use interlinear::{ChapterGroup, FlatChapter, FlatDocument, FlatVerse, VerseRecord, WordPair};
