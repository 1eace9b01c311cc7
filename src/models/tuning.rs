//! Standard four-string bass tuning
//!
//! Strings are indexed from the highest (G) to the lowest (E), matching the
//! order tab lines are printed in.

/// Number of strings on the instrument
pub const STRING_COUNT: usize = 4;

/// Number of selectable frets per string (open string through fret 24)
pub const FRET_COUNT: usize = 25;

/// String names in tab line order
pub const STRING_NAMES: [&str; STRING_COUNT] = ["G", "D", "A", "E"];

/// Sharp-spelled chromatic scale starting at C
const CHROMATIC: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Chromatic index of each open string (G=7, D=2, A=9, E=4)
const OPEN_STRING_OFFSETS: [usize; STRING_COUNT] = [7, 2, 9, 4];

/// Name of a string by index, or `None` if the index is out of range
pub fn string_name(string: usize) -> Option<&'static str> {
    STRING_NAMES.get(string).copied()
}

/// Note name sounded by a string at a fret
///
/// Returns `None` for strings or frets outside the 4×25 grid.
pub fn note_name(string: usize, fret: usize) -> Option<&'static str> {
    if fret >= FRET_COUNT {
        return None;
    }
    let open = OPEN_STRING_OFFSETS.get(string)?;
    Some(CHROMATIC[(open + fret) % CHROMATIC.len()])
}

/// Full row of note names for one string (frets 0..24)
pub fn string_note_names(string: usize) -> Vec<&'static str> {
    (0..FRET_COUNT)
        .filter_map(|fret| note_name(string, fret))
        .collect()
}
