//! Punctuation normalization applied before any pattern matching.

use regex::Regex;

use crate::error::PatternError;

/// Collapses comma-separated day-of-month tokens so the downstream
/// recognizer sees a single date span.
///
/// `"August, 15, 1955"` becomes `"August 15, 1955"`: a comma (with any
/// surrounding whitespace) between a word and a 1-2 digit number is replaced
/// by one space. Nothing else is touched.
#[derive(Debug)]
pub struct NoteNormalizer {
    day_comma: Regex,
}

impl NoteNormalizer {
    pub fn new() -> Result<Self, PatternError> {
        let day_comma = Regex::new(r"(\w+)\s*,\s*(\d{1,2})")
            .map_err(|e| PatternError::regex("day_comma", e))?;
        Ok(Self { day_comma })
    }

    /// Rewrite `<word>, <1-2 digits>` to `<word> <1-2 digits>` across the
    /// whole note. Replacement is non-overlapping and left to right, so a
    /// 4-digit year keeps its comma when the number before it was already
    /// consumed as a day token.
    #[must_use]
    pub fn normalize(&self, note: &str) -> String {
        self.day_comma.replace_all(note, "$1 $2").into_owned()
    }
}
