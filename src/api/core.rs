//! Editing and rendering API
//!
//! JavaScript-facing wrappers around the WASM-owned `TabEditor`. Each call
//! locks the editor once, applies one operation and releases it.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, lock_editor, serialize, to_js_error};
use crate::input::InputEvent;
use crate::models::config::TabConfig;
use crate::{wasm_info, wasm_log, wasm_warn};

// ============================================================================
// Sequence Editing
// ============================================================================

/// Append a fret or technique on a string
///
/// # Parameters
/// - `string`: String index (0 = G, 1 = D, 2 = A, 3 = E)
/// - `fret`: Fret number "0".."24" or one of `\ / x h p`
#[wasm_bindgen(js_name = appendNote)]
pub fn append_note(string: usize, fret: &str) -> Result<(), JsValue> {
    wasm_log!("appendNote: string={}, fret={:?}", string, fret);
    let mut editor = lock_editor()?;
    editor.append_note_checked(string, fret).map_err(to_js_error)
}

/// Append a rest
#[wasm_bindgen(js_name = appendRest)]
pub fn append_rest() -> Result<(), JsValue> {
    lock_editor()?.append_rest();
    Ok(())
}

/// Pad to the end of the current line and open a new labelled section
#[wasm_bindgen(js_name = appendLineBreak)]
pub fn append_line_break() -> Result<(), JsValue> {
    let mut editor = lock_editor()?;
    editor.append_line_break();
    wasm_log!("appendLineBreak: sequence now {} tokens", editor.sequence().len());
    Ok(())
}

/// Remove the last token
///
/// # Returns
/// `true` if a token was removed, `false` if the sequence was empty
#[wasm_bindgen(js_name = removeLast)]
pub fn remove_last() -> Result<bool, JsValue> {
    Ok(lock_editor()?.remove_last().is_some())
}

/// Clear the sequence and every label
#[wasm_bindgen(js_name = clearTab)]
pub fn clear_tab() -> Result<(), JsValue> {
    wasm_info!("clearTab called");
    lock_editor()?.clear();
    Ok(())
}

// ============================================================================
// Input Channel
// ============================================================================

/// Apply a key press
///
/// # Parameters
/// - `code`: `KeyboardEvent.code` ("Space", "Backspace", "Delete", "Enter")
/// - `text_input_focused`: true while a label input has focus
///
/// # Returns
/// `{ handled, prevent_default }`
#[wasm_bindgen(js_name = dispatchKey)]
pub fn dispatch_key(code: &str, text_input_focused: bool) -> Result<JsValue, JsValue> {
    let event = InputEvent::Key {
        code: code.to_string(),
        text_input_focused,
    };
    let outcome = lock_editor()?.dispatch(&event);
    if outcome.handled {
        wasm_log!("dispatchKey: {} handled", code);
    }
    serialize(&outcome, "InputOutcome serialization error")
}

/// Apply an input event object (`{type: "fret", string, fret}` or
/// `{type: "key", code, text_input_focused}`)
#[wasm_bindgen(js_name = dispatchInput)]
pub fn dispatch_input(event_js: JsValue) -> Result<JsValue, JsValue> {
    let event: InputEvent = deserialize(event_js, "InputEvent deserialization error")?;
    let outcome = lock_editor()?.dispatch(&event);
    if !outcome.handled {
        wasm_warn!("dispatchInput: event ignored: {:?}", event);
    }
    serialize(&outcome, "InputOutcome serialization error")
}

// ============================================================================
// Labels
// ============================================================================

/// Show or hide the label editor for a section (hiding clears the text)
#[wasm_bindgen(js_name = setLabelVisible)]
pub fn set_label_visible(index: usize, visible: bool) -> Result<(), JsValue> {
    lock_editor()?.set_label_visible(index, visible);
    Ok(())
}

/// Flip the label editor for a section
///
/// # Returns
/// New editor visibility
#[wasm_bindgen(js_name = toggleLabel)]
pub fn toggle_label(index: usize) -> Result<bool, JsValue> {
    Ok(lock_editor()?.toggle_label(index))
}

/// Set a section's label text
#[wasm_bindgen(js_name = setLabelText)]
pub fn set_label_text(index: usize, text: &str) -> Result<(), JsValue> {
    lock_editor()?.set_label_text(index, text);
    Ok(())
}

// ============================================================================
// Display & Configuration
// ============================================================================

/// Switch fret-button captions between fret numbers and note names
#[wasm_bindgen(js_name = setShowNoteNames)]
pub fn set_show_note_names(show: bool) -> Result<(), JsValue> {
    lock_editor()?.set_show_note_names(show);
    Ok(())
}

/// Replace the editor configuration
///
/// Accepts a partial object; missing fields take their defaults.
#[wasm_bindgen]
pub fn configure(config_js: JsValue) -> Result<(), JsValue> {
    let config: TabConfig = deserialize(config_js, "Config deserialization error")?;
    lock_editor()?.configure(config).map_err(to_js_error)
}

/// Render the tab as sections (`[{index, label, lines, token_count}]`)
#[wasm_bindgen(js_name = renderTab)]
pub fn render_tab() -> Result<JsValue, JsValue> {
    let sections = lock_editor()?.sections();
    serialize(&sections, "Section serialization error")
}

/// Render the tab as plain text
#[wasm_bindgen(js_name = renderTabText)]
pub fn render_tab_text() -> Result<String, JsValue> {
    Ok(lock_editor()?.render_text())
}

/// Get the display list (fretboard grid and tab sections with label state)
#[wasm_bindgen(js_name = getDisplayList)]
pub fn get_display_list() -> Result<JsValue, JsValue> {
    let list = lock_editor()?.display_list();
    serialize(&list, "DisplayList serialization error")
}
