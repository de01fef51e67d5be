//! Date-normalization cascade.
//!
//! Given a DATE entity, tries a fixed sequence of strategies to turn its
//! text into a fully specified date string for the loose date parser:
//!
//! 1. full month-day-year found inside the entity text,
//! 2. month + 4-digit year with the day defaulted to the 1st,
//! 3. bare 4-digit year with month and day defaulted to January 1st,
//! 4. month-day with the year borrowed from the next entity in the phrase,
//! 5. the entity text handed to the parser verbatim.
//!
//! The first strategy whose composed string the parser accepts wins; an
//! entity that defeats all five simply yields no result.

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, info};

use crate::entity::{Entity, EntityLabel};
use crate::error::PatternError;
use crate::DateParser;

/// Normalizes a single DATE entity against the phrase it came from.
#[derive(Debug)]
pub struct DateNormalizer {
    month_day_year: Regex,
    month_year: Regex,
    year: Regex,
    month_day: Regex,
    leading_numeral: Regex,
}

impl DateNormalizer {
    pub fn new() -> Result<Self, PatternError> {
        // A day token may not run into further digits: the separator after
        // the 1-2 digit day is mandatory and digit-free, which stands in for
        // lookahead. The run between day and year never crosses a comma.
        // Ranges such as "May 11 & 12, 1984" anchor on the first day.
        let month_day_year = Regex::new(r"(\w+\.? \d{1,2})(?:[^,\d][^,]*)?(?:,\s*|\s+)(\d{4})")
            .map_err(|e| PatternError::regex("month_day_year", e))?;
        let month_year = Regex::new(r"([a-zA-Z]+)\s*,?\s*(\d{4})")
            .map_err(|e| PatternError::regex("month_year", e))?;
        let year = Regex::new(r"(\d{4})").map_err(|e| PatternError::regex("year", e))?;
        let month_day =
            Regex::new(r"(\w+\.? \d{1,2})").map_err(|e| PatternError::regex("month_day", e))?;
        let leading_numeral =
            Regex::new(r"^\d{2,4}").map_err(|e| PatternError::regex("leading_numeral", e))?;

        Ok(Self {
            month_day_year,
            month_year,
            year,
            month_day,
            leading_numeral,
        })
    }

    /// Run the cascade for `entity`, consulting `entities` (the full ordered
    /// list of the containing phrase) for the borrowed-year fallback.
    ///
    /// Returns `None` for non-DATE entities and for DATE entities no
    /// strategy can resolve.
    #[must_use]
    pub fn normalize(
        &self,
        entity: &Entity,
        entities: &[Entity],
        parser: &dyn DateParser,
    ) -> Option<NaiveDate> {
        if entity.label != EntityLabel::Date {
            return None;
        }
        let text = entity.text.as_str();

        if let Some(caps) = self.month_day_year.captures(text) {
            let candidate = format!("{} {}", &caps[1], &caps[2]);
            if let Some(date) = Self::attempt(parser, text, &candidate) {
                return Some(date);
            }
        }

        if let Some(caps) = self.month_year.captures(text) {
            let candidate = format!("{} 01 {}", &caps[1], &caps[2]);
            if let Some(date) = Self::attempt(parser, text, &candidate) {
                return Some(date);
            }
        }

        if let Some(caps) = self.year.captures(text) {
            let candidate = format!("01 01 {}", &caps[1]);
            if let Some(date) = Self::attempt(parser, text, &candidate) {
                return Some(date);
            }
        }

        if let Some(next) = entities.get(entity.index + 1) {
            if self.leading_numeral.is_match(&next.text) {
                if let Some(caps) = self.month_day.captures(text) {
                    let candidate = format!("{} {}", &caps[1], next.text);
                    if let Some(date) = Self::attempt(parser, text, &candidate) {
                        return Some(date);
                    }
                }
            }
        }

        Self::attempt(parser, text, text)
    }

    fn attempt(parser: &dyn DateParser, source: &str, candidate: &str) -> Option<NaiveDate> {
        debug!(source, candidate, "handing candidate to the date parser");
        let parsed = parser.parse(candidate)?;
        info!("dateparser: {source} -> {parsed}");
        Some(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Parser stub that accepts a fixed set of strings and records every
    /// candidate it is asked about.
    struct ScriptedParser {
        accepted: HashMap<String, NaiveDate>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedParser {
        fn accepting(entries: &[(&str, (i32, u32, u32))]) -> Self {
            let accepted = entries
                .iter()
                .filter_map(|(s, (y, m, d))| {
                    NaiveDate::from_ymd_opt(*y, *m, *d).map(|date| ((*s).to_string(), date))
                })
                .collect();
            Self {
                accepted,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl DateParser for ScriptedParser {
        fn parse(&self, text: &str) -> Option<NaiveDate> {
            self.calls.borrow_mut().push(text.to_string());
            self.accepted.get(text).copied()
        }
    }

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn normalizer() -> DateNormalizer {
        DateNormalizer::new().expect("built-in patterns should compile")
    }

    fn date_entity(text: &str, index: usize) -> Entity {
        Entity::new(text, EntityLabel::Date, index)
    }

    #[test]
    fn full_month_day_year() {
        let cascade = normalizer();
        let parser = ScriptedParser::accepting(&[("May 11 1984", (1984, 5, 11))]);
        let entity = date_entity("May 11 1984", 0);

        let result = cascade.normalize(&entity, std::slice::from_ref(&entity), &parser);
        assert_eq!(result, NaiveDate::from_ymd_opt(1984, 5, 11));
        assert_eq!(parser.calls(), vec!["May 11 1984".to_string()]);
    }

    #[test]
    fn range_anchors_on_first_day() {
        let cascade = normalizer();
        let parser = ScriptedParser::accepting(&[("May 11 1984", (1984, 5, 11))]);
        let entity = date_entity("May 11 & 12 1984", 0);

        let result = cascade.normalize(&entity, std::slice::from_ref(&entity), &parser);
        assert_eq!(result, NaiveDate::from_ymd_opt(1984, 5, 11));
    }

    #[test]
    fn month_year_defaults_the_day() {
        let cascade = normalizer();
        let parser = ScriptedParser::accepting(&[("May 01 1978", (1978, 5, 1))]);
        let entity = date_entity("May 1978", 0);

        let result = cascade.normalize(&entity, std::slice::from_ref(&entity), &parser);
        assert_eq!(result, NaiveDate::from_ymd_opt(1978, 5, 1));
        assert_eq!(parser.calls(), vec!["May 01 1978".to_string()]);
    }

    #[test]
    fn bare_year_defaults_month_and_day() {
        let cascade = normalizer();
        let parser = ScriptedParser::accepting(&[("01 01 1967", (1967, 1, 1))]);
        let entity = date_entity("1967", 0);

        let result = cascade.normalize(&entity, std::slice::from_ref(&entity), &parser);
        assert_eq!(result, NaiveDate::from_ymd_opt(1967, 1, 1));
        assert_eq!(parser.calls(), vec!["01 01 1967".to_string()]);
    }

    #[test]
    fn borrows_year_from_next_entity() {
        let cascade = normalizer();
        let parser = ScriptedParser::accepting(&[("May 11 1984", (1984, 5, 11))]);
        let entities = vec![
            date_entity("May 11", 0),
            Entity::new("1984", EntityLabel::Cardinal, 1),
        ];

        let result = cascade.normalize(&entities[0], &entities, &parser);
        assert_eq!(result, NaiveDate::from_ymd_opt(1984, 5, 11));
    }

    #[test]
    fn borrowed_year_wins_over_verbatim_fallback() {
        let cascade = normalizer();
        // Both the borrowed-year composition and the raw text would parse;
        // the borrowed year must be consulted first.
        let parser = ScriptedParser::accepting(&[
            ("May 11 1984", (1984, 5, 11)),
            ("May 11", (2026, 5, 11)),
        ]);
        let entities = vec![
            date_entity("May 11", 0),
            Entity::new("1984", EntityLabel::Cardinal, 1),
        ];

        let result = cascade.normalize(&entities[0], &entities, &parser);
        assert_eq!(result, NaiveDate::from_ymd_opt(1984, 5, 11));
    }

    #[test]
    fn verbatim_fallback_without_neighbor() {
        let cascade = normalizer();
        let parser = ScriptedParser::accepting(&[("12.04.61", (2061, 4, 12))]);
        let entity = date_entity("12.04.61", 0);

        let result = cascade.normalize(&entity, std::slice::from_ref(&entity), &parser);
        assert_eq!(result, NaiveDate::from_ymd_opt(2061, 4, 12));
        // Steps 1-3 never produce a candidate for dotted numerics.
        assert_eq!(parser.calls(), vec!["12.04.61".to_string()]);
    }

    #[test]
    fn non_date_entity_is_ignored() {
        let cascade = normalizer();
        let parser = ScriptedParser::accepting(&[("01 01 1967", (1967, 1, 1))]);
        let entity = Entity::new("1967", EntityLabel::Cardinal, 0);

        let result = cascade.normalize(&entity, std::slice::from_ref(&entity), &parser);
        assert_eq!(result, None);
        assert!(parser.calls().is_empty());
    }

    #[test]
    fn rejected_candidate_falls_through_to_later_steps() {
        let cascade = normalizer();
        // Step 1 composes "May 11 1984" but the parser refuses it; the
        // remaining steps must still get their chance.
        let parser = ScriptedParser::accepting(&[("01 01 1984", (1984, 1, 1))]);
        let entity = date_entity("May 11, 1984", 0);

        let result = cascade.normalize(&entity, std::slice::from_ref(&entity), &parser);
        assert_eq!(result, NaiveDate::from_ymd_opt(1984, 1, 1));
        let calls = parser.calls();
        assert_eq!(calls[0], "May 11 1984");
        assert_eq!(calls[1], "01 01 1984");
    }

    #[test]
    fn day_running_into_the_year_skips_the_full_composition() {
        let cascade = normalizer();
        let parser = ScriptedParser::accepting(&[]);
        let entity = date_entity("May 111984", 0);

        let result = cascade.normalize(&entity, std::slice::from_ref(&entity), &parser);
        assert_eq!(result, None);
        // "111984" holds no 1-2 digit day, so step 1 must not synthesize
        // "May 11 1984" out of it; the later steps still run.
        assert_eq!(
            parser.calls(),
            vec![
                "May 01 1119".to_string(),
                "01 01 1119".to_string(),
                "May 111984".to_string(),
            ]
        );
    }

    #[test]
    fn unresolvable_entity_yields_nothing() {
        let cascade = normalizer();
        let parser = ScriptedParser::accepting(&[]);
        let entity = date_entity("next spring", 0);

        let result = cascade.normalize(&entity, std::slice::from_ref(&entity), &parser);
        assert_eq!(result, None);
    }
}
