// Test sequence editing, labels and the input channel

use bass_tab_wasm::input::{InputEvent, InputOutcome};
use bass_tab_wasm::models::{Fret, TabConfig, TabEditor, Technique, Token};

#[test]
fn test_remove_last_undoes_each_append() {
    let mut editor = TabEditor::new();
    editor.append_note(0, 3);
    editor.append_rest();
    editor.append_note(2, Technique::PullOff);
    editor.append_rest();

    assert_eq!(editor.remove_last(), Some(Token::Rest));
    assert_eq!(editor.remove_last(), Some(Token::note(2, Technique::PullOff)));
    assert_eq!(editor.remove_last(), Some(Token::Rest));
    assert_eq!(editor.remove_last(), Some(Token::note(0, 3)));
    assert_eq!(editor.remove_last(), None);
    assert!(editor.sequence().is_empty());
}

#[test]
fn test_line_break_padding_counts_tokens() {
    let config = TabConfig {
        max_notes_per_line: 8,
        ..TabConfig::default()
    };
    let mut editor = TabEditor::with_config(config);
    for _ in 0..3 {
        editor.append_note(1, 5);
    }
    editor.append_line_break();
    // 3 notes + 5 padding rests + 1 leading rest
    assert_eq!(editor.sequence().len(), 9);
    assert!(editor.sequence().tokens()[3..].iter().all(Token::is_rest));

    editor.append_line_break();
    // 9 % 8 == 1: 7 padding + 1
    assert_eq!(editor.sequence().len(), 17);
    assert_eq!(editor.labels().len(), 2);
}

#[test]
fn test_label_hide_clears_text() {
    let mut editor = TabEditor::new();
    editor.set_label_visible(0, true);
    editor.set_label_text(0, "Verse");
    assert_eq!(editor.label(0), Some("Verse"));

    editor.set_label_visible(0, false);
    assert_eq!(editor.label(0), None);
    assert_eq!(editor.sections()[0].label, None);
}

#[test]
fn test_label_text_without_editor_is_kept() {
    let mut editor = TabEditor::new();
    editor.set_label_text(3, "Bridge");
    assert_eq!(editor.label(3), Some("Bridge"));
    assert_eq!(editor.label(2), None);
    assert_eq!(editor.label(99), None);
}

#[test]
fn test_key_dispatch() {
    let mut editor = TabEditor::new();

    let outcome = editor.dispatch(&InputEvent::key("Space"));
    assert_eq!(outcome, InputOutcome { handled: true, prevent_default: true });
    assert_eq!(editor.sequence().tokens(), &[Token::Rest]);

    let outcome = editor.dispatch(&InputEvent::key("Backspace"));
    assert_eq!(outcome, InputOutcome { handled: true, prevent_default: false });
    assert!(editor.sequence().is_empty());

    let outcome = editor.dispatch(&InputEvent::key("Enter"));
    assert!(outcome.prevent_default);
    assert_eq!(editor.sequence().len(), 51);
    assert_eq!(editor.labels().len(), 1);

    let outcome = editor.dispatch(&InputEvent::key("KeyQ"));
    assert_eq!(outcome, InputOutcome::ignored());
}

#[test]
fn test_keys_ignored_while_text_input_focused() {
    let mut editor = TabEditor::new();
    editor.append_note(3, 1);

    for code in ["Space", "Backspace", "Delete", "Enter"] {
        let outcome = editor.dispatch(&InputEvent::Key {
            code: code.to_string(),
            text_input_focused: true,
        });
        assert!(!outcome.handled, "{} should be ignored", code);
    }
    assert_eq!(editor.sequence().tokens(), &[Token::note(3, 1)]);
}

#[test]
fn test_fret_events() {
    let mut editor = TabEditor::new();
    editor.dispatch(&InputEvent::Fret {
        string: 2,
        fret: Fret::Number(7),
    });
    editor.dispatch(&InputEvent::Fret {
        string: 2,
        fret: Fret::Technique(Technique::SlideUp),
    });
    let ignored = editor.dispatch(&InputEvent::Fret {
        string: 9,
        fret: Fret::Number(1),
    });
    assert!(!ignored.handled);

    let beyond_fretboard: InputEvent =
        serde_json::from_str(r#"{"type":"fret","string":3,"fret":200}"#).unwrap();
    assert_eq!(editor.dispatch(&beyond_fretboard), InputOutcome::ignored());
    let last_fret = editor.dispatch(&InputEvent::Fret {
        string: 3,
        fret: Fret::Number(24),
    });
    assert!(last_fret.handled);
    editor.remove_last();

    assert_eq!(editor.sequence().len(), 2);
    assert_eq!(editor.sections()[0].lines[2], "A|-7-/");
}

#[test]
fn test_display_list_follows_note_name_toggle() {
    let mut editor = TabEditor::new();
    assert_eq!(editor.display_list().fretboard[0].frets[2].caption, "2");

    editor.set_show_note_names(true);
    let list = editor.display_list();
    assert!(list.show_note_names);
    assert_eq!(list.fretboard[0].frets[2].caption, "A");
    assert_eq!(list.fretboard[2].frets[3].caption, "C");
}
