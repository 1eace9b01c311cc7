//! WASM build test
//!
//! Exercises the exported API in a browser. Built only for wasm32.

#![cfg(target_arch = "wasm32")]

use bass_tab_wasm::api::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_append_and_render_text() {
    clear_tab().unwrap();
    append_note(3, "5").unwrap();
    assert_eq!(render_tab_text().unwrap(), "G|--\nD|--\nA|--\nE|-5");
}

#[wasm_bindgen_test]
fn test_invalid_fret_is_rejected() {
    clear_tab().unwrap();
    assert!(append_note(0, "99").is_err());
    assert!(append_note(7, "1").is_err());
    assert!(!remove_last().unwrap());
}

#[wasm_bindgen_test]
fn test_key_dispatch_outcome() {
    clear_tab().unwrap();
    let outcome = dispatch_key("Space", false).unwrap();
    let handled = js_sys::Reflect::get(&outcome, &"handled".into()).unwrap();
    assert_eq!(handled.as_bool(), Some(true));

    let outcome = dispatch_key("Space", true).unwrap();
    let handled = js_sys::Reflect::get(&outcome, &"handled".into()).unwrap();
    assert_eq!(handled.as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn test_display_list_available() {
    clear_tab().unwrap();
    let list = get_display_list().unwrap();
    assert!(list.is_object());
}

#[wasm_bindgen_test]
fn test_png_export_returns_data_url() {
    clear_tab().unwrap();
    append_note(2, "h").unwrap();
    let url = export_png(false).unwrap();
    assert!(url.starts_with("data:image/png"));
}

#[wasm_bindgen_test]
fn test_pdf_export_returns_bytes() {
    clear_tab().unwrap();
    let bytes = export_pdf(false).unwrap().to_vec();
    assert!(bytes.starts_with(b"%PDF-"));
}
