//! Editor configuration
//!
//! Configuration arrives from JavaScript as a plain object or from JSON.
//! Every field has a default so partial objects are accepted.

use serde::{Deserialize, Serialize};

use crate::errors::TabError;

/// Default per-line capacity, in tokens
pub const MAX_NOTES_PER_LINE: usize = 50;

/// How the sequence is split into sections
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChunkPolicy {
    /// Split when rendered width would exceed `max_notes_per_line * 2` columns
    #[default]
    WidthAware,
    /// Split every `max_notes_per_line` tokens with fixed two-column cells
    StrictTokenCount,
}

/// Font metrics used when rasterizing a snapshot
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FontMetrics {
    /// CSS font family for canvas text
    pub family: String,

    /// Font size in pixels
    pub size: f32,

    /// Advance width of one monospace character in pixels
    pub char_width: f32,

    /// Height of one tab line in pixels
    pub line_height: f32,

    /// Height of a label heading line in pixels
    pub label_height: f32,

    /// Vertical gap between sections in pixels
    pub section_gap: f32,

    /// Margin around the whole snapshot in pixels
    pub padding: f32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            family: "monospace".to_string(),
            size: 16.0,
            char_width: 9.6,
            line_height: 20.0,
            label_height: 24.0,
            section_gap: 16.0,
            padding: 16.0,
        }
    }
}

impl FontMetrics {
    /// CSS font shorthand for the canvas context
    pub fn css_font(&self) -> String {
        format!("{}px {}", self.size, self.family)
    }

    /// Bold variant used for label headings
    pub fn css_label_font(&self) -> String {
        format!("bold {}px {}", self.size, self.family)
    }
}

/// Configuration for the tab editor
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TabConfig {
    /// Per-line capacity in tokens (width-aware policy doubles it into columns)
    pub max_notes_per_line: usize,

    /// Section splitting policy
    pub chunk_policy: ChunkPolicy,

    /// Metrics for PNG/PDF snapshots
    pub font: FontMetrics,
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            max_notes_per_line: MAX_NOTES_PER_LINE,
            chunk_policy: ChunkPolicy::WidthAware,
            font: FontMetrics::default(),
        }
    }
}

impl TabConfig {
    /// Parse and validate a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, TabError> {
        let config: TabConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the formatter cannot lay out
    pub fn validate(&self) -> Result<(), TabError> {
        if self.max_notes_per_line == 0 {
            return Err(TabError::InvalidConfig(
                "max_notes_per_line must be at least 1".to_string(),
            ));
        }

        let font = &self.font;
        if font.char_width <= 0.0 || font.line_height <= 0.0 || font.size <= 0.0 {
            return Err(TabError::InvalidConfig(
                "font size, char_width and line_height must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Maximum rendered width of a section in columns
    pub fn max_line_columns(&self) -> usize {
        self.max_notes_per_line * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TabConfig::default();
        assert_eq!(config.max_notes_per_line, 50);
        assert_eq!(config.max_line_columns(), 100);
        assert_eq!(config.chunk_policy, ChunkPolicy::WidthAware);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = TabConfig::from_json(r#"{"chunk_policy":"strict_token_count"}"#).unwrap();
        assert_eq!(config.chunk_policy, ChunkPolicy::StrictTokenCount);
        assert_eq!(config.max_notes_per_line, 50);
        assert_eq!(config.font, FontMetrics::default());

        let config = TabConfig::from_json(r#"{"font":{"size":12}}"#).unwrap();
        assert_eq!(config.font.size, 12.0);
        assert_eq!(config.font.family, "monospace");
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = TabConfig::from_json(r#"{"max_notes_per_line":0}"#).unwrap_err();
        assert!(matches!(err, TabError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = TabConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, TabError::ConfigParse(_)));
    }
}
