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

//! linerdate_ner: rule-based named-entity recognition for liner notes.
//!
//! A deliberately small recognizer: an ordered set of labeled regex rules is
//! applied to a phrase, overlapping matches are resolved by rule priority,
//! and the surviving spans come back in document order. The `dd.mm.yy`
//! numeric rule carries the highest priority so it fires before the generic
//! date rules can carve the token up.

use linerdate_core::{Entity, EntityRecognizer};
use tracing::debug;

pub mod rules;

pub use rules::{CompiledRule, RulePattern, default_rules};

use linerdate_core::PatternError;

/// Regex-rule entity recognizer.
///
/// Rules compile once at construction; recognition itself never fails and
/// holds no mutable state, so one instance serves a whole process.
#[derive(Debug)]
pub struct RuleRecognizer {
    rules: Vec<CompiledRule>,
}

impl RuleRecognizer {
    /// Compile a rule set into a recognizer.
    pub fn new(rules: Vec<RulePattern>) -> Result<Self, PatternError> {
        let rules = rules
            .iter()
            .map(RulePattern::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Recognizer over [`default_rules`].
    pub fn with_defaults() -> Result<Self, PatternError> {
        Self::new(default_rules())
    }

    /// The compiled rules, in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }
}

impl EntityRecognizer for RuleRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let mut candidates: Vec<Candidate> = Vec::new();
        for rule in &self.rules {
            for m in rule.regex.find_iter(text) {
                candidates.push(Candidate {
                    start: m.start(),
                    end: m.end(),
                    rule,
                });
            }
        }

        // Higher-priority rules claim their spans first; within one priority
        // earlier and longer matches win. Spans overlapping an already
        // claimed region are discarded.
        candidates.sort_by_key(|c| (std::cmp::Reverse(c.rule.priority), c.start, c.end));
        let mut claimed: Vec<&Candidate> = Vec::new();
        for candidate in &candidates {
            if claimed
                .iter()
                .all(|c| candidate.end <= c.start || candidate.start >= c.end)
            {
                claimed.push(candidate);
            }
        }

        claimed.sort_by_key(|c| c.start);
        let entities: Vec<Entity> = claimed
            .iter()
            .enumerate()
            .map(|(index, c)| Entity::new(&text[c.start..c.end], c.rule.label, index))
            .collect();
        debug!(phrase = text, count = entities.len(), "recognized entities");
        entities
    }
}

struct Candidate<'r> {
    start: usize,
    end: usize,
    rule: &'r CompiledRule,
}
