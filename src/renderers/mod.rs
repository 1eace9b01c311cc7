//! Renderers module for the bass tab editor
//!
//! This module contains rendering/export logic: tab text formatting, the
//! display list handed to JavaScript, snapshot layout and PDF output.

pub mod display_list;
pub mod pdf;
pub mod snapshot;
pub mod tablature;

// Re-export commonly used types
pub use display_list::{DisplayList, FretButton, FretboardRow, RenderSection};
pub use pdf::{write_image_pdf, PagePlacement, RgbImage};
pub use snapshot::{RunKind, SnapshotLayout, TextRun};
pub use tablature::{render_text, TabFormatter, TabSection};
