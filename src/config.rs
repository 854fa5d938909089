use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{InterlinearError, Result};
use crate::types::book_project::{PrintSettings, ProjectMeta};

/// Run configuration, normally read from a TOML file.
///
/// Every section is optional; the defaults reproduce the Genesis layout
/// (`data/interlinear/*.tsv` in, `data/genesis_interlinear.json` out).
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub consolidate: ConsolidateConfig,
    pub export: ExportConfig,
    /// Uses the renderer's camelCase keys, e.g. `pageSize`.
    pub print_settings: PrintSettings,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ConsolidateConfig {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    /// File extension without the dot.
    pub extension: String,
}

impl Default for ConsolidateConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data/interlinear"),
            output_file: PathBuf::from("data/genesis_interlinear.json"),
            extension: "tsv".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub file_name: String,
    pub books: Vec<BookConfig>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data/books"),
            file_name: "book.json".to_string(),
            books: vec![BookConfig {
                id: "genesis".to_string(),
                input: PathBuf::from("data/interlinear/genesis.tsv"),
                title: "Genesis".to_string(),
                language: "DE".to_string(),
            }],
        }
    }
}

impl ExportConfig {
    pub fn output_path(&self, book: &BookConfig) -> PathBuf {
        self.output_dir.join(&book.id).join(&self.file_name)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BookConfig {
    pub id: String,
    pub input: PathBuf,
    pub title: String,
    pub language: String,
}

impl BookConfig {
    pub fn meta(&self) -> ProjectMeta {
        ProjectMeta { title: self.title.clone(), language: self.language.clone() }
    }
}

impl Config {
    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => load_config_from_file(path),
            None => Ok(Config::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.consolidate.extension.trim().is_empty() {
            return Err(InterlinearError::InvalidConfig("consolidate.extension must not be empty".to_string()));
        }
        if self.export.file_name.trim().is_empty() {
            return Err(InterlinearError::InvalidConfig("export.file_name must not be empty".to_string()));
        }

        let mut seen = HashSet::new();
        for book in &self.export.books {
            if book.id.trim().is_empty() {
                return Err(InterlinearError::InvalidConfig(format!(
                    "book with input {:?} has an empty id",
                    book.input
                )));
            }
            if !seen.insert(book.id.as_str()) {
                return Err(InterlinearError::InvalidConfig(format!("duplicate book id '{}'", book.id)));
            }
        }
        Ok(())
    }
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(file_path)
        .map_err(|e| InterlinearError::ConfigRead { path: file_path.to_path_buf(), source: e })?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| InterlinearError::ConfigParse { path: file_path.to_path_buf(), source: e })?;
    config.validate()?;
    Ok(config)
}
