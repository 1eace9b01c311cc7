//! Input events
//!
//! The host page forwards fret-button activations and key presses as
//! `InputEvent` values; the editor interprets them. Nothing here listens to
//! the window directly.

use serde::{Deserialize, Serialize};

use crate::models::token::Fret;

/// Editing command bound to a keyboard key
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// Space: append a rest
    Rest,
    /// Backspace/Delete: remove the last token
    RemoveLast,
    /// Enter: start a new tab line
    LineBreak,
}

impl KeyCommand {
    /// Map a DOM `KeyboardEvent.code` to a command
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Space" => Some(KeyCommand::Rest),
            "Backspace" | "Delete" => Some(KeyCommand::RemoveLast),
            "Enter" | "NumpadEnter" => Some(KeyCommand::LineBreak),
            _ => None,
        }
    }

    /// Whether the browser's default action must be suppressed
    ///
    /// Space would scroll the page and Enter would activate the focused button.
    pub fn prevents_default(&self) -> bool {
        matches!(self, KeyCommand::Rest | KeyCommand::LineBreak)
    }
}

/// Discrete input delivered to the editor
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// A fret or technique button was activated
    Fret { string: usize, fret: Fret },

    /// A key was pressed
    Key {
        code: String,
        /// True while a text input (label editor) has focus
        #[serde(default)]
        text_input_focused: bool,
    },
}

impl InputEvent {
    pub fn key(code: impl Into<String>) -> Self {
        InputEvent::Key {
            code: code.into(),
            text_input_focused: false,
        }
    }
}

/// What the editor did with an event
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputOutcome {
    /// The event changed editor state
    pub handled: bool,

    /// The host should call `preventDefault()` on the DOM event
    pub prevent_default: bool,
}

impl InputOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled(prevent_default: bool) -> Self {
        Self {
            handled: true,
            prevent_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(KeyCommand::from_code("Space"), Some(KeyCommand::Rest));
        assert_eq!(KeyCommand::from_code("Backspace"), Some(KeyCommand::RemoveLast));
        assert_eq!(KeyCommand::from_code("Delete"), Some(KeyCommand::RemoveLast));
        assert_eq!(KeyCommand::from_code("Enter"), Some(KeyCommand::LineBreak));
        assert_eq!(KeyCommand::from_code("KeyA"), None);
    }

    #[test]
    fn test_prevent_default() {
        assert!(KeyCommand::Rest.prevents_default());
        assert!(KeyCommand::LineBreak.prevents_default());
        assert!(!KeyCommand::RemoveLast.prevents_default());
    }

    #[test]
    fn test_event_from_json() {
        let event: InputEvent =
            serde_json::from_str(r#"{"type":"fret","string":1,"fret":"h"}"#).unwrap();
        assert_eq!(
            event,
            InputEvent::Fret {
                string: 1,
                fret: Fret::Technique(crate::models::token::Technique::HammerOn)
            }
        );

        let event: InputEvent = serde_json::from_str(r#"{"type":"key","code":"Space"}"#).unwrap();
        assert_eq!(event, InputEvent::key("Space"));
    }
}
