//! Section labels
//!
//! Labels are stored parallel to the section list: `texts[i]` captions
//! section `i`, and `editing[i]` says whether its text-entry affordance is
//! open. Indices past the end of the lists read as "no label".

use serde::{Deserialize, Serialize};

/// Caption of the toggle button while the editor is closed
pub const ADD_LABEL: &str = "Add Label";

/// Caption of the toggle button while the editor is open
pub const DELETE_LABEL: &str = "Delete Label";

/// How a section's label should be presented
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LabelAffordance {
    /// Caption of the toggle button, or `None` when the button is hidden
    pub toggle_caption: Option<&'static str>,

    /// Whether the text-entry field is shown
    pub editor_visible: bool,

    /// Committed label shown as a plain heading
    pub heading: Option<String>,
}

/// Per-section label texts and editor visibility
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelManager {
    texts: Vec<String>,
    editing: Vec<bool>,
}

impl LabelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of label slots
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Append an empty slot with a closed editor (one per explicit line break)
    pub fn push_slot(&mut self) {
        self.texts.push(String::new());
        self.editing.push(false);
    }

    fn ensure_slot(&mut self, index: usize) {
        if index >= self.texts.len() {
            self.texts.resize(index + 1, String::new());
            self.editing.resize(index + 1, false);
        }
    }

    /// Label text for a section; empty text counts as no label
    pub fn label(&self, index: usize) -> Option<&str> {
        self.texts
            .get(index)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Whether the text-entry affordance is open for a section
    pub fn is_visible(&self, index: usize) -> bool {
        self.editing.get(index).copied().unwrap_or(false)
    }

    /// Show or hide the editor; hiding an open editor clears the text
    pub fn set_visible(&mut self, index: usize, visible: bool) {
        self.ensure_slot(index);
        if self.editing[index] && !visible {
            self.texts[index].clear();
        }
        self.editing[index] = visible;
    }

    /// Flip editor visibility with the same clearing rule as `set_visible`
    ///
    /// Returns the new visibility.
    pub fn toggle(&mut self, index: usize) -> bool {
        let visible = !self.is_visible(index);
        self.set_visible(index, visible);
        visible
    }

    /// Overwrite a section's label text
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) {
        self.ensure_slot(index);
        self.texts[index] = text.into();
    }

    /// Editor visibility flags, for saving before an export capture
    pub fn visibility(&self) -> Vec<bool> {
        self.editing.clone()
    }

    /// Hide every editor without touching label text
    pub fn hide_all_editors(&mut self) {
        self.editing.iter_mut().for_each(|v| *v = false);
    }

    /// Restore visibility flags captured with `visibility`
    pub fn restore_visibility(&mut self, flags: Vec<bool>) {
        let len = self.texts.len();
        self.editing = flags;
        self.editing.resize(len, false);
    }

    /// How a section's label is presented
    ///
    /// The toggle button shows while a section has no label or its editor is
    /// open; a committed label with a closed editor renders as a heading.
    pub fn affordance(&self, index: usize) -> LabelAffordance {
        let editor_visible = self.is_visible(index);
        let label = self.label(index);

        let toggle_caption = if label.is_none() || editor_visible {
            Some(if editor_visible { DELETE_LABEL } else { ADD_LABEL })
        } else {
            None
        };

        let heading = match (label, editor_visible) {
            (Some(text), false) => Some(text.to_string()),
            _ => None,
        };

        LabelAffordance {
            toggle_caption,
            editor_visible,
            heading,
        }
    }

    /// Discard all labels
    pub fn clear(&mut self) {
        self.texts.clear();
        self.editing.clear();
    }
}
