//! Pipeline orchestration.

use chrono::NaiveDate;
use tracing::debug;

use crate::cascade::DateNormalizer;
use crate::entity::EntityLabel;
use crate::error::PatternError;
use crate::normalize::NoteNormalizer;
use crate::phrases::PhraseIsolator;
use crate::{DateParser, EntityRecognizer};

/// End-to-end recording-date extractor.
///
/// Sequences the pipeline stages and short-circuits on the first success:
/// the first DATE entity of the first candidate phrase that the cascade can
/// resolve wins, and later entities and phrases are never consulted.
pub struct RecordingDateExtractor {
    normalizer: NoteNormalizer,
    isolator: PhraseIsolator,
    cascade: DateNormalizer,
    recognizer: Box<dyn EntityRecognizer>,
    parser: Box<dyn DateParser>,
}

impl RecordingDateExtractor {
    /// Build an extractor with the default cue words.
    pub fn new(
        recognizer: Box<dyn EntityRecognizer>,
        parser: Box<dyn DateParser>,
    ) -> Result<Self, PatternError> {
        Ok(Self {
            normalizer: NoteNormalizer::new()?,
            isolator: PhraseIsolator::with_defaults()?,
            cascade: DateNormalizer::new()?,
            recognizer,
            parser,
        })
    }

    /// Build an extractor anchored on custom cue words.
    pub fn with_cue_words<S: AsRef<str>>(
        recognizer: Box<dyn EntityRecognizer>,
        parser: Box<dyn DateParser>,
        cue_words: &[S],
    ) -> Result<Self, PatternError> {
        Ok(Self {
            normalizer: NoteNormalizer::new()?,
            isolator: PhraseIsolator::new(cue_words)?,
            cascade: DateNormalizer::new()?,
            recognizer,
            parser,
        })
    }

    /// Extract the recording date from a note, if any.
    ///
    /// A `None` collapses three internally distinct outcomes: no cue phrase,
    /// no DATE entity inside any phrase, and DATE entities that defeat every
    /// normalization strategy. None of them is an error.
    #[must_use]
    pub fn extract(&self, note: &str) -> Option<NaiveDate> {
        let note = self.normalizer.normalize(note);
        let phrases = self.isolator.isolate(&note);
        if phrases.is_empty() {
            debug!("no cue phrase found");
            return None;
        }

        for phrase in &phrases {
            let entities = self.recognizer.recognize(phrase);
            for entity in &entities {
                if entity.label != EntityLabel::Date {
                    continue;
                }
                if let Some(date) = self.cascade.normalize(entity, &entities, self.parser.as_ref())
                {
                    return Some(date);
                }
            }
            debug!(phrase = phrase.as_str(), "phrase yielded no date");
        }

        None
    }
}
