//! Models module for the bass tab editor
//!
//! Tokens, the played sequence, section labels, tuning tables and the
//! editor state that owns them.

pub mod config;
pub mod editor_state;
pub mod labels;
pub mod sequence;
pub mod token;
pub mod tuning;

// Re-export commonly used types
pub use config::{ChunkPolicy, FontMetrics, TabConfig, MAX_NOTES_PER_LINE};
pub use editor_state::{CaptureScope, TabEditor};
pub use labels::{LabelAffordance, LabelManager};
pub use sequence::Sequence;
pub use token::{Fret, Technique, Token};
pub use tuning::{note_name, string_name, FRET_COUNT, STRING_COUNT, STRING_NAMES};
