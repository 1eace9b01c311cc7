//! Display List for the tab editor
//!
//! This module defines the output structure returned to JavaScript. The
//! DisplayList carries every caption, flag and line the page needs, so the
//! JavaScript side only creates DOM elements and never computes layout.

use serde::Serialize;

use crate::models::labels::LabelManager;
use crate::models::token::{Fret, Technique};
use crate::models::tuning::{note_name, FRET_COUNT, STRING_COUNT, STRING_NAMES};
use crate::renderers::tablature::TabSection;

/// Top-level display list
#[derive(Serialize, Clone, Debug)]
pub struct DisplayList {
    /// Fretboard input grid, one row per string
    pub fretboard: Vec<FretboardRow>,

    /// Rendered tab sections in order
    pub sections: Vec<RenderSection>,

    /// Whether fret buttons show note names
    pub show_note_names: bool,
}

/// One string of the fretboard input grid
#[derive(Serialize, Clone, Debug)]
pub struct FretboardRow {
    pub string: usize,
    pub name: &'static str,
    /// Fret buttons 0..24
    pub frets: Vec<FretButton>,
    /// Technique buttons (`\`, `/`, `x`, `h`, `p`)
    pub symbols: Vec<FretButton>,
}

/// A button that appends a token when activated
#[derive(Serialize, Clone, Debug)]
pub struct FretButton {
    /// Value passed back to `appendNote` or `dispatchInput`
    pub fret: Fret,
    /// Text drawn on the button
    pub caption: String,
}

/// A tab section plus its label affordances
#[derive(Serialize, Clone, Debug)]
pub struct RenderSection {
    pub index: usize,
    pub lines: Vec<String>,

    /// Caption of the Add/Delete Label button, absent when hidden
    pub toggle_caption: Option<&'static str>,

    /// Whether the label text input is shown
    pub editor_visible: bool,

    /// Current text of the label input
    pub label_text: String,

    /// Committed label shown as a heading
    pub heading: Option<String>,
}

impl DisplayList {
    /// Build the display list from formatted sections and label state
    pub fn build(sections: &[TabSection], labels: &LabelManager, show_note_names: bool) -> Self {
        let fretboard = (0..STRING_COUNT)
            .map(|string| fretboard_row(string, show_note_names))
            .collect();

        let sections = sections
            .iter()
            .map(|section| {
                let affordance = labels.affordance(section.index);
                RenderSection {
                    index: section.index,
                    lines: section.lines.clone(),
                    toggle_caption: affordance.toggle_caption,
                    editor_visible: affordance.editor_visible,
                    label_text: labels.label(section.index).unwrap_or_default().to_string(),
                    heading: affordance.heading,
                }
            })
            .collect();

        DisplayList {
            fretboard,
            sections,
            show_note_names,
        }
    }
}

fn fretboard_row(string: usize, show_note_names: bool) -> FretboardRow {
    let frets = (0..FRET_COUNT)
        .map(|fret| {
            let caption = if show_note_names {
                note_name(string, fret).unwrap_or_default().to_string()
            } else {
                fret.to_string()
            };
            FretButton {
                fret: Fret::Number(fret as u8),
                caption,
            }
        })
        .collect();

    let symbols = Technique::ALL
        .iter()
        .map(|t| FretButton {
            fret: Fret::Technique(*t),
            caption: t.symbol().to_string(),
        })
        .collect();

    FretboardRow {
        string,
        name: STRING_NAMES[string],
        frets,
        symbols,
    }
}
