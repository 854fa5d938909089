pub mod tsv_parser;

// Re-export the main parsing functions for convenience
pub use tsv_parser::{parse_line, parse_tsv_content, parse_tsv_file, ParseStats, ParsedFile};
