//! Cue-phrase isolation.
//!
//! Finds the substrings of a note most likely to contain the recording date,
//! anchored on cue words such as "Recorded". Two strategies are applied in
//! order: a sentence-bounded pattern that stops at clean punctuation, and an
//! open-ended pattern that runs to the end of the note for texts whose date
//! trails past any sentence boundary.

use regex::Regex;

use crate::error::PatternError;

/// Cue words that introduce a recording date in liner notes.
pub const DEFAULT_CUE_WORDS: &[&str] = &["Recorded", "Live", "Recording"];

/// Ordered phrase-isolation strategies over a normalized note.
#[derive(Debug)]
pub struct PhraseIsolator {
    sentence_bounded: Regex,
    open_ended: Regex,
}

impl PhraseIsolator {
    /// Build an isolator for the given cue words (matched case-insensitively).
    pub fn new<S: AsRef<str>>(cue_words: &[S]) -> Result<Self, PatternError> {
        if cue_words.is_empty() {
            return Err(PatternError::NoCueWords);
        }

        let cues = cue_words
            .iter()
            .map(|w| regex::escape(w.as_ref()))
            .collect::<Vec<_>>()
            .join("|");

        // A period followed by a digit is decimal punctuation, not a sentence
        // boundary, so the bounded pattern may step over it.
        let sentence_bounded = Regex::new(&format!(
            r"(?i)(?:{cues})(?:[^.\n]|\.\d)*(?:\.|\n|$)"
        ))
        .map_err(|e| PatternError::regex("sentence_bounded", e))?;

        let open_ended = Regex::new(&format!(r"(?is)(?:{cues}).*"))
            .map_err(|e| PatternError::regex("open_ended", e))?;

        Ok(Self {
            sentence_bounded,
            open_ended,
        })
    }

    /// Build an isolator for [`DEFAULT_CUE_WORDS`].
    pub fn with_defaults() -> Result<Self, PatternError> {
        Self::new(DEFAULT_CUE_WORDS)
    }

    /// Return candidate phrases in the order they should be tried.
    ///
    /// All sentence-bounded matches come first; the open-ended remainder of
    /// the note is appended afterwards as a last resort, unless it is
    /// identical to a phrase already present. An empty result means the note
    /// carries no cue word at all.
    #[must_use]
    pub fn isolate(&self, note: &str) -> Vec<String> {
        let mut phrases: Vec<String> = self
            .sentence_bounded
            .find_iter(note)
            .map(|m| m.as_str().to_string())
            .collect();

        for m in self.open_ended.find_iter(note) {
            if !phrases.iter().any(|p| p == m.as_str()) {
                phrases.push(m.as_str().to_string());
            }
        }

        phrases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn isolator() -> PhraseIsolator {
        PhraseIsolator::with_defaults().expect("default cue words should compile")
    }

    #[test]
    fn no_cue_word_yields_nothing() {
        let iso = isolator();
        assert!(iso.isolate("Mixed and mastered at Abbey Road in 1969.").is_empty());
    }

    #[test]
    fn stops_at_sentence_boundary() {
        let iso = isolator();
        let phrases = iso.isolate("Recorded in Tokyo. Remastered in 2003.");
        assert_eq!(phrases[0], "Recorded in Tokyo.");
    }

    #[test]
    fn decimal_point_does_not_terminate() {
        let iso = isolator();
        let phrases = iso.isolate("Recorded on 12.04.61 in Berlin");
        assert_eq!(phrases[0], "Recorded on 12.04.61 in Berlin");
    }

    #[test]
    fn newline_terminates_bounded_phrase() {
        let iso = isolator();
        let phrases = iso.isolate("Live at Montreux\nProduced by Claude Nobs");
        assert_eq!(phrases[0], "Live at Montreux\n");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let iso = isolator();
        assert!(!iso.isolate("RECORDED May 1978").is_empty());
        assert!(!iso.isolate("recording from 1967").is_empty());
    }

    #[test]
    fn bounded_matches_come_before_open_ended_remainder() {
        let iso = isolator();
        let note = "Recorded in Tokyo. Live in Paris on May 11 1984.";
        let phrases = iso.isolate(note);
        assert_eq!(phrases[0], "Recorded in Tokyo.");
        assert_eq!(phrases[1], "Live in Paris on May 11 1984.");
        // Open-ended remainder spans both sentences.
        assert_eq!(phrases[2], note);
    }

    #[test]
    fn open_ended_duplicate_is_not_repeated() {
        let iso = isolator();
        let phrases = iso.isolate("Recorded May 1978 in Chicago");
        assert_eq!(phrases, vec!["Recorded May 1978 in Chicago".to_string()]);
    }

    #[test]
    fn custom_cue_words() {
        #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
        let iso = PhraseIsolator::new(&["Taped"]).expect("cue word should compile");
        assert_eq!(iso.isolate("Taped in 1972."), vec!["Taped in 1972.".to_string()]);
        assert!(iso.isolate("Recorded in 1972.").is_empty());
    }

    #[test]
    fn empty_cue_list_is_rejected() {
        let words: [&str; 0] = [];
        assert!(matches!(
            PhraseIsolator::new(&words),
            Err(PatternError::NoCueWords)
        ));
    }
}
