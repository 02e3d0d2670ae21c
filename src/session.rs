//! Conversion session state machine
//!
//! Owns the live input text, the derived output text, and the bounded
//! conversion history. All mutation goes through three operations:
//! `set_input`, `save`, and `clear`. The output is recomputed inside
//! `set_input` itself, so input and output are never observable in an
//! inconsistent state.

use crate::convert::{mm_to_inches, parse_mm, FALLBACK_OUTPUT};
use crate::types::ConversionEntry;

/// Maximum number of retained history entries; the oldest is evicted first.
pub const HISTORY_CAP: usize = 10;

/// Live conversion state plus the saved-conversion history.
#[derive(Debug, Clone)]
pub struct Session {
    input: String,
    output: String,
    history: Vec<ConversionEntry>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a fresh session: empty input, fallback output, empty history.
    pub fn new() -> Self {
        Self {
            input: String::new(),
            output: FALLBACK_OUTPUT.to_string(),
            history: Vec::new(),
        }
    }

    /// Raw millimeter input text, exactly as entered.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Displayed inch output, always derived from the current input.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Saved conversions, most recent first.
    pub fn history(&self) -> &[ConversionEntry] {
        &self.history
    }

    /// Replace the input text and recompute the output in the same step.
    ///
    /// Any text is accepted, including partial numeric strings; validation
    /// only affects what the output shows and whether [`Session::save`] does
    /// anything.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.output = mm_to_inches(&self.input);
    }

    /// Append one character to the input (keystroke editing).
    pub fn push_char(&mut self, c: char) {
        let mut text = self.input.clone();
        text.push(c);
        self.set_input(text);
    }

    /// Remove the last character from the input (keystroke editing).
    pub fn pop_char(&mut self) {
        let mut text = self.input.clone();
        text.pop();
        self.set_input(text);
    }

    /// Whether the current input can be saved.
    ///
    /// This is the exact guard used by [`Session::save`]; the UI uses it to
    /// show the save action as enabled or disabled.
    pub fn can_save(&self) -> bool {
        !self.input.is_empty() && parse_mm(&self.input).is_some()
    }

    /// Save the current conversion to the history and reset the live state.
    ///
    /// Silent no-op when the input is empty or unparseable. On success the
    /// entry snapshots the output exactly as displayed (not recomputed), is
    /// prepended to the history, the history is truncated to
    /// [`HISTORY_CAP`] entries, and the input/output reset to their initial
    /// values. Returns the saved entry, if any, so the caller can surface
    /// feedback.
    pub fn save(&mut self) -> Option<ConversionEntry> {
        if !self.can_save() {
            return None;
        }

        let entry = ConversionEntry {
            millimeters: std::mem::take(&mut self.input),
            inches: std::mem::replace(&mut self.output, FALLBACK_OUTPUT.to_string()),
        };
        self.history.insert(0, entry.clone());
        self.history.truncate(HISTORY_CAP);

        Some(entry)
    }

    /// Reset the live input/output. Never touches the history.
    pub fn clear(&mut self) {
        self.input.clear();
        self.output = FALLBACK_OUTPUT.to_string();
    }
}
