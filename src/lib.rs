//! Consolidates tab-separated interlinear files (`chapter:verse<TAB>word|gloss ...`)
//! into JSON documents for the typesetting front end.

pub mod aggregate;
pub mod config;
pub mod consolidator;
pub mod document;
pub mod error;
pub mod grouping;
pub mod logging;
pub mod parsing;
pub mod types;
pub mod verify;
pub mod writer;

pub use config::Config;
pub use error::{InterlinearError, Result};
