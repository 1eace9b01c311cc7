//! Played sequence storage
//!
//! Append-only list of tokens with single-step removal and reset.
//! Explicit line breaks are stored as padding rests so the formatter never
//! needs a separate break token.

use serde::{Deserialize, Serialize};

use super::token::{Fret, Token};

/// Ordered list of played tokens
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    tokens: Vec<Token>,
}

impl Sequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Create a sequence from existing tokens
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Get all tokens as a slice
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Append a fret or technique played on a string
    pub fn append_note(&mut self, string: usize, fret: impl Into<Fret>) {
        self.tokens.push(Token::note(string, fret));
    }

    /// Append a rest
    pub fn append_rest(&mut self) {
        self.tokens.push(Token::Rest);
    }

    /// Pad the current line with rests up to `capacity`, then add one more
    ///
    /// The padding is measured in tokens: a sequence whose length is already a
    /// multiple of `capacity` receives a full line of rests. Returns the number
    /// of rests appended.
    pub fn append_line_break(&mut self, capacity: usize) -> usize {
        debug_assert!(capacity > 0, "line capacity must be positive");
        let current_line_length = self.tokens.len() % capacity;
        let padding = if current_line_length == 0 {
            capacity
        } else {
            capacity - current_line_length
        };

        let appended = padding + 1;
        self.tokens.extend(std::iter::repeat(Token::Rest).take(appended));
        appended
    }

    /// Remove and return the last token, if any
    pub fn remove_last(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    /// Remove every token
    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}
