//! Snapshot layout for raster export
//!
//! Computes where every line of the tab lands on an export canvas. Positions
//! are the top-left corner of each text run (the canvas draws with a `top`
//! baseline). Label editors are never part of a snapshot; only committed
//! label text is drawn, as a heading above its section.

use serde::Serialize;

use crate::models::config::FontMetrics;
use crate::renderers::tablature::TabSection;

/// What a text run draws
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunKind {
    Label,
    TabLine,
}

/// A positioned piece of text
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TextRun {
    pub kind: RunKind,
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Canvas size and text positions for one export
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SnapshotLayout {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    pub runs: Vec<TextRun>,
}

impl SnapshotLayout {
    /// Lay out sections top to bottom with the given metrics
    pub fn compute(sections: &[TabSection], font: &FontMetrics) -> Self {
        let mut runs = Vec::new();
        let mut y = font.padding;
        let mut max_chars = 0usize;

        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                y += font.section_gap;
            }

            if let Some(label) = &section.label {
                max_chars = max_chars.max(label.chars().count());
                runs.push(TextRun {
                    kind: RunKind::Label,
                    text: label.clone(),
                    x: font.padding,
                    y,
                });
                y += font.label_height;
            }

            for line in &section.lines {
                max_chars = max_chars.max(line.chars().count());
                runs.push(TextRun {
                    kind: RunKind::TabLine,
                    text: line.clone(),
                    x: font.padding,
                    y,
                });
                y += font.line_height;
            }
        }

        let width = font.padding * 2.0 + max_chars as f32 * font.char_width;
        let height = y + font.padding;

        SnapshotLayout {
            width: width.ceil().max(1.0) as u32,
            height: height.ceil().max(1.0) as u32,
            runs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> FontMetrics {
        FontMetrics {
            family: "monospace".into(),
            size: 10.0,
            char_width: 5.0,
            line_height: 10.0,
            label_height: 20.0,
            section_gap: 8.0,
            padding: 4.0,
        }
    }

    fn section(index: usize, label: Option<&str>, width: usize) -> TabSection {
        TabSection {
            index,
            label: label.map(str::to_string),
            lines: ["G", "D", "A", "E"]
                .iter()
                .map(|n| format!("{}|{}", n, "-".repeat(width)))
                .collect(),
            token_count: width / 2,
        }
    }

    #[test]
    fn test_single_section_geometry() {
        let layout = SnapshotLayout::compute(&[section(0, None, 2)], &metrics());
        // 4 chars wide, 4 lines tall
        assert_eq!(layout.width, 4 + 4 + 20);
        assert_eq!(layout.height, 4 + 4 + 40);
        assert_eq!(layout.runs.len(), 4);
        assert_eq!(layout.runs[0].y, 4.0);
        assert_eq!(layout.runs[3].y, 34.0);
    }

    #[test]
    fn test_label_and_gap() {
        let layout = SnapshotLayout::compute(
            &[section(0, None, 2), section(1, Some("Chorus"), 2)],
            &metrics(),
        );
        let label = layout.runs.iter().find(|r| r.kind == RunKind::Label).unwrap();
        assert_eq!(label.text, "Chorus");
        // first section ends at 44, then the gap
        assert_eq!(label.y, 52.0);
        assert_eq!(layout.height, (52 + 20 + 40 + 4) as u32);
        // "Chorus" is wider than "G|--"
        assert_eq!(layout.width, (8 + 6 * 5) as u32);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let sections = vec![section(0, Some("A"), 10), section(1, None, 4)];
        assert_eq!(
            SnapshotLayout::compute(&sections, &metrics()),
            SnapshotLayout::compute(&sections, &metrics())
        );
    }
}
