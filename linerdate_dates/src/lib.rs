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

//! linerdate_dates: loose date-string parsing with a reference timezone.
//!
//! Accepts the small family of date expressions the normalization cascade
//! produces (`"May 11 1984"`, `"May 01 1978"`, `"01 01 1967"`) plus the raw
//! entity shapes that reach the verbatim fallback (`"12.04.61"`, bare
//! `"May 11"`). Formats are tried in a fixed order; the first that yields a
//! valid calendar date wins.
//!
//! Expressions without a year borrow the current year of the configured
//! reference timezone, evaluated against a reference instant fixed at
//! construction, so results are reproducible and the timezone dependency is
//! explicit rather than ambient process state.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use linerdate_core::{DateParser, PatternError};
use phf::phf_map;
use regex::Regex;
use tracing::trace;

/// Month-name table, full names and common abbreviations.
static MONTHS: phf::Map<&'static str, u32> = phf_map! {
    "jan" => 1, "january" => 1,
    "feb" => 2, "february" => 2,
    "mar" => 3, "march" => 3,
    "apr" => 4, "april" => 4,
    "may" => 5,
    "jun" => 6, "june" => 6,
    "jul" => 7, "july" => 7,
    "aug" => 8, "august" => 8,
    "sep" => 9, "sept" => 9, "september" => 9,
    "oct" => 10, "october" => 10,
    "nov" => 11, "november" => 11,
    "dec" => 12, "december" => 12,
};

/// Natural-language date parser with a fixed reference timezone.
#[derive(Debug, Clone)]
pub struct NaturalDateParser {
    tz: Tz,
    reference: DateTime<Utc>,
    month_day_year: Regex,
    day_month_year: Regex,
    dotted: Regex,
    iso: Regex,
}

impl NaturalDateParser {
    /// Parser anchored at the current instant.
    pub fn new(tz: Tz) -> Result<Self, PatternError> {
        Self::with_reference(tz, Utc::now())
    }

    /// Parser anchored at an explicit reference instant.
    ///
    /// The instant only matters for expressions missing a year; pinning it
    /// makes those expressions reproducible in tests and batch runs.
    pub fn with_reference(tz: Tz, reference: DateTime<Utc>) -> Result<Self, PatternError> {
        let month_day_year = Regex::new(r"(?i)^([a-z]{3,9})\.?\s+(\d{1,2})(?:,?\s+(\d{2,4}))?$")
            .map_err(|e| PatternError::regex("month_day_year", e))?;
        let day_month_year = Regex::new(r"^(\d{1,2})\s+(\d{1,2})\s+(\d{2,4})$")
            .map_err(|e| PatternError::regex("day_month_year", e))?;
        let dotted = Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{2,4})$")
            .map_err(|e| PatternError::regex("dotted", e))?;
        let iso = Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$")
            .map_err(|e| PatternError::regex("iso", e))?;

        Ok(Self {
            tz,
            reference,
            month_day_year,
            day_month_year,
            dotted,
            iso,
        })
    }

    /// The configured reference timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    fn parse_month_name(&self, text: &str) -> Option<NaiveDate> {
        let caps = self.month_day_year.captures(text)?;
        let month = month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        let year = match caps.get(3) {
            Some(y) => resolve_year(y.as_str().parse().ok()?),
            None => self.reference_year(),
        };
        NaiveDate::from_ymd_opt(year, month, day)
    }

    fn parse_day_month_year(&self, text: &str) -> Option<NaiveDate> {
        let caps = self.day_month_year.captures(text)?;
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year = resolve_year(caps[3].parse().ok()?);
        NaiveDate::from_ymd_opt(year, month, day)
    }

    fn parse_dotted(&self, text: &str) -> Option<NaiveDate> {
        let caps = self.dotted.captures(text)?;
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year = resolve_year(caps[3].parse().ok()?);
        NaiveDate::from_ymd_opt(year, month, day)
    }

    fn parse_iso(&self, text: &str) -> Option<NaiveDate> {
        let caps = self.iso.captures(text)?;
        NaiveDate::from_ymd_opt(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        )
    }

    /// The current year of the reference instant, seen from the reference
    /// timezone. Around New Year this differs between timezones, which is
    /// exactly the documented sensitivity for year-less expressions.
    fn reference_year(&self) -> i32 {
        self.reference.with_timezone(&self.tz).year()
    }
}

impl DateParser for NaturalDateParser {
    fn parse(&self, text: &str) -> Option<NaiveDate> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let parsed = self
            .parse_month_name(text)
            .or_else(|| self.parse_day_month_year(text))
            .or_else(|| self.parse_dotted(text))
            .or_else(|| self.parse_iso(text));
        trace!(text, ?parsed, tz = %self.tz, "loose date parse");
        parsed
    }
}

fn month_number(token: &str) -> Option<u32> {
    let key = token.trim_end_matches('.').to_lowercase();
    // Case-insensitive `[a-z]` also admits non-ASCII letters that case-fold
    // into it, so the 3-letter prefix is taken boundary-safely.
    MONTHS
        .get(key.as_str())
        .or_else(|| key.get(..3).and_then(|prefix| MONTHS.get(prefix)))
        .copied()
}

/// Two-digit years follow the POSIX pivot also used by chrono's `%y`:
/// 00-68 land in the 2000s, 69-99 in the 1900s.
const fn resolve_year(year: i32) -> i32 {
    if year >= 100 {
        year
    } else if year <= 68 {
        2000 + year
    } else {
        1900 + year
    }
}
