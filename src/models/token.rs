//! Token types for the played sequence
//!
//! A token is either a rest or a concrete string + fret/technique pair.
//! Partial tokens (a string without a fret, or the reverse) cannot be built.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::TabError;
use crate::models::tuning::{FRET_COUNT, STRING_COUNT};

/// Width in columns of a rest, and of the filler emitted on inactive strings
pub const FILLER_WIDTH: usize = 2;

/// Playing technique symbols that can stand in place of a fret number
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Technique {
    #[serde(rename = "\\")]
    SlideDown,
    #[serde(rename = "/")]
    SlideUp,
    #[serde(rename = "x")]
    Mute,
    #[serde(rename = "h")]
    HammerOn,
    #[serde(rename = "p")]
    PullOff,
}

impl Technique {
    /// All techniques in fretboard button order
    pub const ALL: [Technique; 5] = [
        Technique::SlideDown,
        Technique::SlideUp,
        Technique::Mute,
        Technique::HammerOn,
        Technique::PullOff,
    ];

    /// Get the tab symbol for this technique
    pub fn symbol(&self) -> char {
        match self {
            Technique::SlideDown => '\\',
            Technique::SlideUp => '/',
            Technique::Mute => 'x',
            Technique::HammerOn => 'h',
            Technique::PullOff => 'p',
        }
    }

    /// Parse a technique from its tab symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.symbol() == symbol)
    }
}

/// What is played on a string: a fret number or a technique symbol
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Fret {
    Number(u8),
    Technique(Technique),
}

impl Fret {
    /// Parse a fret from button/keyboard text ("0".."24" or a technique symbol)
    pub fn parse(text: &str) -> Result<Self, TabError> {
        let text = text.trim();
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            return match text.parse::<u32>() {
                Ok(number) if (number as usize) < FRET_COUNT => Ok(Fret::Number(number as u8)),
                Ok(number) => Err(TabError::FretOutOfRange(number)),
                Err(_) => Err(TabError::FretOutOfRange(u32::MAX)),
            };
        }

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Technique::from_symbol(c)
                .map(Fret::Technique)
                .ok_or(TabError::UnknownSymbol(c)),
            _ => Err(TabError::InvalidFret(text.to_string())),
        }
    }

    /// Text written after the leading dash in a tab line
    pub fn value(&self) -> String {
        self.to_string()
    }

    /// Number of characters in the value
    pub fn value_len(&self) -> usize {
        match self {
            Fret::Number(n) => n.to_string().len(),
            Fret::Technique(_) => 1,
        }
    }
}

impl fmt::Display for Fret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fret::Number(n) => write!(f, "{}", n),
            Fret::Technique(t) => write!(f, "{}", t.symbol()),
        }
    }
}

impl From<u8> for Fret {
    fn from(number: u8) -> Self {
        Fret::Number(number)
    }
}

impl From<Technique> for Fret {
    fn from(technique: Technique) -> Self {
        Fret::Technique(technique)
    }
}

/// One unit of the played sequence
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Token {
    /// A space between notes
    Rest,
    /// A fret or technique played on a string (0 = G .. 3 = E)
    Note { string: usize, fret: Fret },
}

impl Token {
    /// Create a note token
    pub fn note(string: usize, fret: impl Into<Fret>) -> Self {
        debug_assert!(string < STRING_COUNT, "string index {} out of range", string);
        Token::Note {
            string,
            fret: fret.into(),
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, Token::Rest)
    }

    /// String index this token is played on, if any
    pub fn string(&self) -> Option<usize> {
        match self {
            Token::Rest => None,
            Token::Note { string, .. } => Some(*string),
        }
    }

    /// Number of text columns this token occupies when rendered
    ///
    /// A rest takes the filler width; a note takes one dash plus its value.
    pub fn display_width(&self) -> usize {
        match self {
            Token::Rest => FILLER_WIDTH,
            Token::Note { fret, .. } => 1 + fret.value_len(),
        }
    }
}
