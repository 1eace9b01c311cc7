//! Tablature formatter
//!
//! Turns the played sequence into sections of fixed-width text lines, one
//! line per string. Sections are recomputed from scratch on every render;
//! the output depends only on the sequence, the labels and the config.

use serde::{Deserialize, Serialize};

use crate::models::config::{ChunkPolicy, TabConfig};
use crate::models::labels::LabelManager;
use crate::models::sequence::Sequence;
use crate::models::token::{Token, FILLER_WIDTH};
use crate::models::tuning::{STRING_COUNT, STRING_NAMES};

/// Chunk used when the sequence is empty, so the grid is never zero-width
static EMPTY_CHUNK: [Token; 1] = [Token::Rest];

/// One rendered block of tab: an optional heading and one line per string
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TabSection {
    /// Section index (also the label index)
    pub index: usize,

    /// Label heading, if the section has non-empty label text
    pub label: Option<String>,

    /// Tab lines in string order (G, D, A, E)
    pub lines: Vec<String>,

    /// Number of tokens in this section
    pub token_count: usize,
}

impl TabSection {
    /// Rendered width in columns, including the `X|` prefix
    pub fn width(&self) -> usize {
        self.lines.iter().map(|l| l.chars().count()).max().unwrap_or(0)
    }

    /// Text block for this section: heading (if any) then the string lines
    pub fn to_text(&self) -> String {
        let mut out = Vec::with_capacity(self.lines.len() + 1);
        if let Some(label) = &self.label {
            out.push(label.as_str());
        }
        out.extend(self.lines.iter().map(String::as_str));
        out.join("\n")
    }
}

/// Formatter for a sequence under a given configuration
pub struct TabFormatter<'a> {
    config: &'a TabConfig,
}

impl<'a> TabFormatter<'a> {
    pub fn new(config: &'a TabConfig) -> Self {
        Self { config }
    }

    /// Split tokens into sections according to the configured policy
    ///
    /// An empty token list yields one section holding a single rest.
    pub fn partition<'t>(&self, tokens: &'t [Token]) -> Vec<&'t [Token]> {
        if tokens.is_empty() {
            return vec![&EMPTY_CHUNK[..]];
        }

        match self.config.chunk_policy {
            ChunkPolicy::StrictTokenCount => tokens
                .chunks(self.config.max_notes_per_line.max(1))
                .collect(),
            ChunkPolicy::WidthAware => partition_by_width(tokens, self.config.max_line_columns()),
        }
    }

    /// Width of one column: the widest cell any string needs at that position
    pub fn column_width(&self, token: &Token) -> usize {
        match self.config.chunk_policy {
            ChunkPolicy::StrictTokenCount => FILLER_WIDTH,
            ChunkPolicy::WidthAware => (0..STRING_COUNT)
                .map(|string| match token {
                    Token::Note { string: s, .. } if *s == string => token.display_width(),
                    _ => FILLER_WIDTH,
                })
                .max()
                .unwrap_or(FILLER_WIDTH),
        }
    }

    /// Render one chunk into its per-string lines
    pub fn render_chunk(&self, chunk: &[Token]) -> Vec<String> {
        let mut lines: Vec<String> = STRING_NAMES.iter().map(|name| format!("{}|", name)).collect();

        for token in chunk {
            let width = self.column_width(token);
            for (string, line) in lines.iter_mut().enumerate() {
                match token {
                    Token::Note { string: s, fret } if *s == string => {
                        let cell = format!("-{}", fret);
                        let pad = width.saturating_sub(cell.chars().count());
                        line.push_str(&cell);
                        line.extend(std::iter::repeat('-').take(pad));
                    }
                    _ => line.extend(std::iter::repeat('-').take(width)),
                }
            }
        }

        lines
    }

    /// Format the whole sequence into labelled sections
    pub fn format(&self, sequence: &Sequence, labels: &LabelManager) -> Vec<TabSection> {
        let sections: Vec<TabSection> = self
            .partition(sequence.tokens())
            .into_iter()
            .enumerate()
            .map(|(index, chunk)| TabSection {
                index,
                label: labels.label(index).map(str::to_string),
                lines: self.render_chunk(chunk),
                token_count: chunk.len(),
            })
            .collect();

        log::debug!(
            "formatted {} tokens into {} sections ({:?})",
            sequence.len(),
            sections.len(),
            self.config.chunk_policy
        );
        sections
    }
}

/// Greedy split keeping each chunk's display width within `max_columns`
///
/// A token wider than `max_columns` still gets a chunk of its own rather
/// than producing an empty chunk.
fn partition_by_width(tokens: &[Token], max_columns: usize) -> Vec<&[Token]> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut width = 0;

    for (i, token) in tokens.iter().enumerate() {
        let token_width = token.display_width();
        if width + token_width > max_columns && i > start {
            chunks.push(&tokens[start..i]);
            start = i;
            width = 0;
        }
        width += token_width;
    }
    chunks.push(&tokens[start..]);
    chunks
}

/// Join sections into plain text, separated by blank lines
pub fn render_text(sections: &[TabSection]) -> String {
    sections
        .iter()
        .map(TabSection::to_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::token::Technique;

    fn format(tokens: Vec<Token>, config: &TabConfig) -> Vec<TabSection> {
        TabFormatter::new(config).format(&Sequence::from_tokens(tokens), &LabelManager::new())
    }

    #[test]
    fn test_empty_sequence_renders_single_rest() {
        let sections = format(vec![], &TabConfig::default());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].lines, vec!["G|--", "D|--", "A|--", "E|--"]);
        assert_eq!(sections[0].token_count, 1);
    }

    #[test]
    fn test_single_note() {
        let sections = format(vec![Token::note(3, 5)], &TabConfig::default());
        assert_eq!(sections[0].lines, vec!["G|--", "D|--", "A|--", "E|-5"]);
    }

    #[test]
    fn test_two_digit_fret_widens_column() {
        let sections = format(
            vec![Token::note(3, 24), Token::note(0, 3)],
            &TabConfig::default(),
        );
        assert_eq!(
            sections[0].lines,
            vec!["G|----3", "D|-----", "A|-----", "E|-24--"]
        );
    }

    #[test]
    fn test_technique_symbols() {
        let sections = format(
            vec![
                Token::note(2, 5),
                Token::note(2, Technique::HammerOn),
                Token::note(2, 7),
                Token::Rest,
                Token::note(1, Technique::Mute),
            ],
            &TabConfig::default(),
        );
        assert_eq!(sections[0].lines[2], "A|-5-h-7----");
        assert_eq!(sections[0].lines[1], "D|---------x");
    }

    #[test]
    fn test_width_boundary() {
        let config = TabConfig {
            max_notes_per_line: 3,
            ..TabConfig::default()
        };
        // 2 + 2 + 2 == 6 columns fits exactly
        let fits = vec![Token::note(0, 1), Token::Rest, Token::note(1, 2)];
        assert_eq!(format(fits.clone(), &config).len(), 1);

        let mut overflow = fits;
        overflow.push(Token::Rest);
        let sections = format(overflow, &config);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].token_count, 1);
    }

    #[test]
    fn test_wide_tokens_split_earlier() {
        let config = TabConfig {
            max_notes_per_line: 3,
            ..TabConfig::default()
        };
        // 3 + 3 = 6 fits, the third two-digit fret starts a new section
        let sections = format(vec![Token::note(3, 12); 3], &config);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].token_count, 2);
        assert_eq!(sections[0].lines[3], "E|-12-12");
    }

    #[test]
    fn test_oversized_token_never_yields_empty_chunk() {
        let config = TabConfig {
            max_notes_per_line: 1,
            ..TabConfig::default()
        };
        let sections = format(vec![Token::note(0, 20), Token::note(0, 21)], &config);
        assert_eq!(sections.len(), 2);
        assert!(sections.iter().all(|s| s.token_count == 1));
    }

    #[test]
    fn test_strict_policy_splits_by_count() {
        let config = TabConfig {
            max_notes_per_line: 2,
            chunk_policy: ChunkPolicy::StrictTokenCount,
            ..TabConfig::default()
        };
        let sections = format(vec![Token::note(3, 10), Token::Rest, Token::note(0, 1)], &config);
        assert_eq!(sections.len(), 2);
        // fixed two-column cells: the two-digit fret overruns its column
        assert_eq!(sections[0].lines[3], "E|-10--");
        assert_eq!(sections[0].lines[0], "G|----");
        assert_eq!(sections[1].lines[0], "G|-1");
    }

    #[test]
    fn test_labels_attach_by_index() {
        let config = TabConfig {
            max_notes_per_line: 1,
            ..TabConfig::default()
        };
        let mut labels = LabelManager::new();
        labels.set_text(1, "Chorus");
        let seq = Sequence::from_tokens(vec![Token::Rest, Token::Rest]);
        let sections = TabFormatter::new(&config).format(&seq, &labels);
        assert_eq!(sections[0].label, None);
        assert_eq!(sections[1].label.as_deref(), Some("Chorus"));
        assert_eq!(
            render_text(&sections),
            "G|--\nD|--\nA|--\nE|--\n\nChorus\nG|--\nD|--\nA|--\nE|--"
        );
    }
}
