//! Bass Tab Editor WASM API
//!
//! This module provides the JavaScript-facing API. The editor instance is
//! owned here; JavaScript never holds tab state of its own.
//!
//! # Module Structure
//!
//! - `helpers`: Logging macros, editor access, serialization helpers
//! - `core`: Editing, input dispatch, labels, rendering
//! - `export`: PNG and PDF export

pub mod helpers;
pub mod core;
pub mod export;

pub use self::core::*;
pub use export::{export_pdf, export_png};
