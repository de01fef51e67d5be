#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! linerdate_core: recording-date extraction pipeline.
//!
//! Turns a free-form liner note into at most one canonical recording date:
//!
//! ```text
//! note ──► normalize ──► phrase isolation ──► entity recognition ──► date cascade
//! ```
//!
//! The entity recognizer and the loose date parser are collaborators behind
//! the [`EntityRecognizer`] and [`DateParser`] traits; everything in this
//! crate is synchronous and free of shared mutable state, so a single
//! [`RecordingDateExtractor`] can be reused across invocations.

use chrono::NaiveDate;

pub mod cascade;
pub mod entity;
pub mod error;
pub mod normalize;
pub mod phrases;
pub mod pipeline;

pub use cascade::DateNormalizer;
pub use entity::{Entity, EntityLabel};
pub use error::PatternError;
pub use normalize::NoteNormalizer;
pub use phrases::{DEFAULT_CUE_WORDS, PhraseIsolator};
pub use pipeline::RecordingDateExtractor;

/// Named-entity recognizer over a candidate phrase.
///
/// Implementations return entity spans in document order, each carrying its
/// 0-based ordinal index within the phrase. The pipeline only ever feeds it
/// isolated phrases, never the whole note.
pub trait EntityRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// Loose date-string parser.
///
/// Maps a loosely formatted date expression (`"May 11 1984"`, `"01 01 1967"`,
/// `"12.04.61"`) to a calendar date, or fails. Implementations carry a
/// reference timezone that deterministically resolves underspecified
/// expressions; failure is an expected outcome, not an error.
pub trait DateParser {
    fn parse(&self, text: &str) -> Option<NaiveDate>;
}
