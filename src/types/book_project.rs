//! Token-stream schema consumed by the typesetting front end.
//!
//! Field names are camelCase on the wire because the schema is shared with
//! the renderer; token variants are tagged by `type`.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProjectMeta {
    pub title: String,
    pub language: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub inner: f64,
    pub outer: f64,
}

impl Default for Margins {
    // KDP recommended margins, inches.
    fn default() -> Self {
        Self { top: 0.75, bottom: 0.75, inner: 0.875, outer: 0.5 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
    pub main_font: String,
    pub main_font_size: u32,
    pub gloss_font: String,
    pub gloss_font_size: u32,
    pub verse_num_size: u32,
    pub verse_num_color: String,
    /// Vertical offset in pt, negative is up.
    pub verse_num_offset: i32,
    /// Horizontal offset in pt, negative is left.
    pub verse_num_offset_x: i32,
    pub line_height: f64,
    /// Word spacing bounds in mm used when justifying lines.
    pub min_word_space: f64,
    pub max_word_space: f64,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            main_font: "Georgia, serif".to_string(),
            main_font_size: 10,
            gloss_font: "Inter, sans-serif".to_string(),
            gloss_font_size: 5,
            verse_num_size: 6,
            verse_num_color: "#6b7280".to_string(),
            verse_num_offset: -2,
            verse_num_offset_x: 1,
            line_height: 1.8,
            min_word_space: 1.5,
            max_word_space: 8.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PrintSettings {
    /// KDP trim size key such as `6x9`.
    pub page_size: String,
    pub margins: Margins,
    pub base_font_size: u32,
    pub typography: Typography,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            page_size: "6x9".to_string(),
            margins: Margins::default(),
            base_font_size: 12,
            typography: Typography::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordPart {
    pub text: String,
    pub gloss: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Token {
    VerseNum { value: String },
    Word { original_full: String, parts: Vec<WordPart> },
}

pub type Paragraph = Vec<Token>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub number: u32,
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookProject {
    pub meta: ProjectMeta,
    pub print_settings: PrintSettings,
    pub chapters: Vec<Chapter>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tokens_serialize_with_type_tag() {
        let verse = Token::VerseNum { value: "3".to_string() };
        assert_eq!(serde_json::to_value(&verse).unwrap(), json!({"type": "verse_num", "value": "3"}));

        let word = Token::Word {
            original_full: "Anfang".to_string(),
            parts: vec![WordPart { text: "Anfang".to_string(), gloss: "BEGINNING".to_string() }],
        };
        assert_eq!(
            serde_json::to_value(&word).unwrap(),
            json!({
                "type": "word",
                "original_full": "Anfang",
                "parts": [{"text": "Anfang", "gloss": "BEGINNING"}]
            })
        );
    }

    #[test]
    fn print_settings_use_renderer_field_names() {
        let value = serde_json::to_value(PrintSettings::default()).unwrap();
        assert_eq!(value["pageSize"], "6x9");
        assert_eq!(value["baseFontSize"], 12);
        assert_eq!(value["margins"]["inner"], 0.875);
        assert_eq!(value["typography"]["mainFont"], "Georgia, serif");
        assert_eq!(value["typography"]["verseNumOffsetX"], 1);
        assert_eq!(value["typography"]["minWordSpace"], 1.5);
        assert_eq!(value["typography"]["maxWordSpace"], 8.0);
    }

    #[test]
    fn whole_number_settings_serialize_without_fraction() {
        let text = serde_json::to_string(&PrintSettings::default()).unwrap();
        assert!(text.contains("\"baseFontSize\":12,"));
        assert!(text.contains("\"mainFontSize\":10,"));
        assert!(text.contains("\"glossFontSize\":5,"));
        assert!(text.contains("\"verseNumSize\":6,"));
        assert!(text.contains("\"verseNumOffset\":-2,"));
        assert!(text.contains("\"verseNumOffsetX\":1,"));
        assert!(text.contains("\"lineHeight\":1.8,"));
    }

    #[test]
    fn partial_print_settings_fill_in_defaults() {
        let settings: PrintSettings =
            serde_json::from_value(json!({"pageSize": "A5", "typography": {"lineHeight": 2.0}})).unwrap();
        assert_eq!(settings.page_size, "A5");
        assert_eq!(settings.margins, Margins::default());
        assert_eq!(settings.typography.line_height, 2.0);
        assert_eq!(settings.typography.main_font_size, 10);
    }
}
