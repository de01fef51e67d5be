//! Labeled extraction rules for the recognizer.
//!
//! Rule definitions are plain data (and serializable) so a rule set can be
//! loaded from configuration; [`RulePattern::build`] validates the regex and
//! the label up front.

use std::str::FromStr;

use linerdate_core::{EntityLabel, PatternError};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Definition of a single labeling rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulePattern {
    /// Unique identifier, used in build diagnostics.
    pub id: String,

    /// Entity label to assign, as its uppercase tag (e.g. `"DATE"`).
    pub label: String,

    /// Regex matched against the phrase text.
    pub pattern: String,

    /// Higher-priority rules claim overlapping spans first.
    pub priority: i32,
}

impl RulePattern {
    /// Compile into a [`CompiledRule`].
    pub fn build(&self) -> Result<CompiledRule, PatternError> {
        let label = EntityLabel::from_str(&self.label)
            .map_err(|_| PatternError::Label(self.label.clone()))?;
        let regex = Regex::new(&self.pattern).map_err(|e| PatternError::regex(&self.id, e))?;
        Ok(CompiledRule {
            id: self.id.clone(),
            label,
            regex,
            priority: self.priority,
        })
    }
}

/// A rule with its regex compiled and its label resolved.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub id: String,
    pub label: EntityLabel,
    pub regex: Regex,
    pub priority: i32,
}

const MONTH_NAMES: &str = "january|february|march|april|june|july|august|september|october|\
november|december|jan|feb|mar|apr|may|jun|jul|aug|sept|sep|oct|nov|dec";

/// Default rule set for English liner notes.
///
/// The dotted numeric date rule carries the highest priority: `dd.mm.yy`
/// tokens must be labeled DATE before any generic rule can carve them up
/// into cardinals.
#[must_use]
pub fn default_rules() -> Vec<RulePattern> {
    let mut rules = Vec::new();
    rules.extend(date_rules());
    rules.extend(context_rules());
    rules
}

fn date_rules() -> Vec<RulePattern> {
    vec![
        RulePattern {
            id: "numeric_dotted_date".to_string(),
            label: "DATE".to_string(),
            pattern: r"\b\d{2}\.\d{2}\.\d{2,4}\b".to_string(),
            priority: 100,
        },
        RulePattern {
            id: "month_name_date".to_string(),
            label: "DATE".to_string(),
            // One span for month, optional day (with "&" ranges) and
            // optional year, so "May 11 & 12, 1984" stays whole. The
            // year-first alternative keeps "May 1978" from reading "19"
            // as a day.
            pattern: format!(
                r"(?i)\b(?:{MONTH_NAMES})\.?(?:\s*,?\s+\d{{4}}|\s+\d{{1,2}}(?:\s*&\s*\d{{1,2}})?(?:\s*,?\s+\d{{4}})?)?\b"
            ),
            priority: 90,
        },
        RulePattern {
            id: "bare_year".to_string(),
            label: "DATE".to_string(),
            pattern: r"\b(?:1[6-9]\d{2}|20\d{2})\b".to_string(),
            priority: 80,
        },
        RulePattern {
            id: "time_of_day".to_string(),
            label: "TIME".to_string(),
            pattern: r"\b\d{1,2}:\d{2}(?::\d{2})?\b".to_string(),
            priority: 70,
        },
    ]
}

fn context_rules() -> Vec<RulePattern> {
    vec![
        RulePattern {
            id: "ordinal".to_string(),
            label: "ORDINAL".to_string(),
            pattern: r"(?i)\b\d{1,2}(?:st|nd|rd|th)\b".to_string(),
            priority: 60,
        },
        RulePattern {
            id: "known_venue".to_string(),
            label: "FAC".to_string(),
            pattern: r"\b(?:Village Vanguard|Carnegie Hall|Royal Albert Hall|Fillmore East|Budokan)\b"
                .to_string(),
            priority: 55,
        },
        RulePattern {
            id: "known_city".to_string(),
            label: "GPE".to_string(),
            pattern: r"\b(?:Tokyo|Paris|London|Chicago|Berlin|Hamburg|Montreux|Newport|New York|Los Angeles)\b"
                .to_string(),
            priority: 50,
        },
        RulePattern {
            id: "cardinal".to_string(),
            label: "CARDINAL".to_string(),
            pattern: r"\b\d{1,4}\b".to_string(),
            priority: 10,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn default_rules_all_build() {
        for rule in default_rules() {
            rule.build()
                .unwrap_or_else(|e| panic!("rule {} should build: {e}", rule.id));
        }
        let compiled = default_rules()
            .first()
            .expect("default rule set should not be empty")
            .build()
            .expect("first rule should build");
        assert_eq!(compiled.label, EntityLabel::Date);
        assert_eq!(compiled.priority, 100);
    }

    #[test]
    fn invalid_regex_is_reported_with_its_id() {
        let rule = RulePattern {
            id: "broken".to_string(),
            label: "DATE".to_string(),
            pattern: r"(unclosed".to_string(),
            priority: 0,
        };
        let err = rule.build();
        assert!(matches!(err, Err(PatternError::Regex { ref id, .. }) if id == "broken"));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let rule = RulePattern {
            id: "odd".to_string(),
            label: "SHRUBBERY".to_string(),
            pattern: r"\d+".to_string(),
            priority: 0,
        };
        assert!(matches!(rule.build(), Err(PatternError::Label(_))));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn rule_pattern_serialization_round_trips() {
        let rules = default_rules();
        let json = serde_json::to_string(&rules).expect("rules should serialize");
        let back: Vec<RulePattern> =
            serde_json::from_str(&json).expect("valid JSON should deserialize");
        assert_eq!(back.len(), rules.len());
        assert_eq!(back[0].id, rules[0].id);
    }
}
