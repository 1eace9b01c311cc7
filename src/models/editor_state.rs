//! Editor state management
//!
//! `TabEditor` is the single owner of the played sequence and the section
//! labels. Every mutation goes through its methods and runs to completion
//! before the next one; rendering is recomputed from this state on demand.

use serde::{Deserialize, Serialize};

use crate::errors::TabError;
use crate::input::{InputEvent, InputOutcome, KeyCommand};
use crate::models::config::TabConfig;
use crate::models::labels::LabelManager;
use crate::models::sequence::Sequence;
use crate::models::token::{Fret, Token};
use crate::models::tuning::{FRET_COUNT, STRING_COUNT};
use crate::renderers::display_list::DisplayList;
use crate::renderers::tablature::{render_text, TabFormatter, TabSection};

/// Complete editor state
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TabEditor {
    /// Played tokens
    sequence: Sequence,

    /// Per-section labels and editor visibility
    labels: LabelManager,

    /// Show note names instead of fret numbers on the fretboard
    show_note_names: bool,

    /// Layout and snapshot configuration
    config: TabConfig,
}

impl TabEditor {
    /// Create an editor with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor with a specific configuration
    pub fn with_config(config: TabConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn labels(&self) -> &LabelManager {
        &self.labels
    }

    pub fn config(&self) -> &TabConfig {
        &self.config
    }

    /// Replace the configuration after validating it
    pub fn configure(&mut self, config: TabConfig) -> Result<(), TabError> {
        config.validate()?;
        log::info!(
            "configured: {} notes per line, {:?}",
            config.max_notes_per_line,
            config.chunk_policy
        );
        self.config = config;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Sequence editing
    // ------------------------------------------------------------------

    /// Append a fret or technique on a string
    ///
    /// The string index is trusted; callers at the JavaScript boundary use
    /// `append_note_checked`.
    pub fn append_note(&mut self, string: usize, fret: impl Into<Fret>) {
        self.sequence.append_note(string, fret);
    }

    /// Append a note from untrusted input
    pub fn append_note_checked(&mut self, string: usize, fret: &str) -> Result<(), TabError> {
        if string >= STRING_COUNT {
            return Err(TabError::StringOutOfRange(string));
        }
        let fret = Fret::parse(fret)?;
        self.append_note(string, fret);
        Ok(())
    }

    /// Append a rest
    pub fn append_rest(&mut self) {
        self.sequence.append_rest();
    }

    /// Force the next token onto a new line and open a label slot for it
    pub fn append_line_break(&mut self) {
        let appended = self
            .sequence
            .append_line_break(self.config.max_notes_per_line);
        self.labels.push_slot();
        log::debug!(
            "line break: {} rests appended, {} label slots",
            appended,
            self.labels.len()
        );
    }

    /// Remove the most recent token
    pub fn remove_last(&mut self) -> Option<Token> {
        self.sequence.remove_last()
    }

    /// Empty the sequence and discard every label
    pub fn clear(&mut self) {
        self.sequence.clear();
        self.labels.clear();
        log::debug!("editor cleared");
    }

    // ------------------------------------------------------------------
    // Labels
    // ------------------------------------------------------------------

    pub fn set_label_visible(&mut self, index: usize, visible: bool) {
        self.labels.set_visible(index, visible);
    }

    pub fn toggle_label(&mut self, index: usize) -> bool {
        self.labels.toggle(index)
    }

    pub fn set_label_text(&mut self, index: usize, text: impl Into<String>) {
        self.labels.set_text(index, text);
    }

    /// Label text for a section, if any
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.label(index)
    }

    // ------------------------------------------------------------------
    // Display
    // ------------------------------------------------------------------

    pub fn show_note_names(&self) -> bool {
        self.show_note_names
    }

    pub fn set_show_note_names(&mut self, show: bool) {
        self.show_note_names = show;
    }

    /// Format the sequence into sections
    pub fn sections(&self) -> Vec<TabSection> {
        TabFormatter::new(&self.config).format(&self.sequence, &self.labels)
    }

    /// Plain-text tab
    pub fn render_text(&self) -> String {
        render_text(&self.sections())
    }

    /// Everything the host page needs to draw the fretboard and tab output
    pub fn display_list(&self) -> DisplayList {
        DisplayList::build(&self.sections(), &self.labels, self.show_note_names)
    }

    /// Hide label editors for the duration of an export capture
    ///
    /// Visibility is restored when the returned guard is dropped.
    pub fn capture_scope(&mut self) -> CaptureScope<'_> {
        let saved = self.labels.visibility();
        self.labels.hide_all_editors();
        CaptureScope {
            editor: self,
            saved: Some(saved),
        }
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Apply one input event
    pub fn dispatch(&mut self, event: &InputEvent) -> InputOutcome {
        match event {
            InputEvent::Fret { string, fret } => {
                if *string >= STRING_COUNT {
                    log::warn!("ignoring fret event on string {}", string);
                    return InputOutcome::ignored();
                }
                if let Fret::Number(n) = fret {
                    if *n as usize >= FRET_COUNT {
                        log::warn!("ignoring fret {} beyond the fretboard", n);
                        return InputOutcome::ignored();
                    }
                }
                self.append_note(*string, *fret);
                InputOutcome::handled(false)
            }
            InputEvent::Key {
                code,
                text_input_focused,
            } => {
                if *text_input_focused {
                    return InputOutcome::ignored();
                }
                match KeyCommand::from_code(code) {
                    Some(command) => {
                        self.apply_key(command);
                        InputOutcome::handled(command.prevents_default())
                    }
                    None => InputOutcome::ignored(),
                }
            }
        }
    }

    fn apply_key(&mut self, command: KeyCommand) {
        match command {
            KeyCommand::Rest => self.append_rest(),
            KeyCommand::RemoveLast => {
                self.remove_last();
            }
            KeyCommand::LineBreak => self.append_line_break(),
        }
    }
}

/// Editor borrowed for an export capture with label editors hidden
pub struct CaptureScope<'a> {
    editor: &'a mut TabEditor,
    saved: Option<Vec<bool>>,
}

impl CaptureScope<'_> {
    /// Read-only view of the editor while editors are hidden
    pub fn editor(&self) -> &TabEditor {
        &*self.editor
    }

    /// Sections as they appear in the exported artifact
    pub fn sections(&self) -> Vec<TabSection> {
        self.editor.sections()
    }
}

impl Drop for CaptureScope<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.editor.labels.restore_visibility(saved);
        }
    }
}
