//! Named-entity spans and their label set.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of labels an entity recognizer may assign.
///
/// Only [`EntityLabel::Date`] is acted upon by the normalization cascade;
/// the remaining labels exist so that neighboring entities keep their
/// position in the phrase (the borrowed-year fallback walks to the next
/// entity regardless of its label).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Cardinal,
    Date,
    Event,
    Fac,
    Gpe,
    Language,
    Law,
    Loc,
    Money,
    Norp,
    Ordinal,
    Org,
    Percent,
    Person,
    Product,
    Quantity,
    Time,
    WorkOfArt,
}

impl EntityLabel {
    /// Returns the conventional uppercase tag for this label.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Cardinal => "CARDINAL",
            Self::Date => "DATE",
            Self::Event => "EVENT",
            Self::Fac => "FAC",
            Self::Gpe => "GPE",
            Self::Language => "LANGUAGE",
            Self::Law => "LAW",
            Self::Loc => "LOC",
            Self::Money => "MONEY",
            Self::Norp => "NORP",
            Self::Ordinal => "ORDINAL",
            Self::Org => "ORG",
            Self::Percent => "PERCENT",
            Self::Person => "PERSON",
            Self::Product => "PRODUCT",
            Self::Quantity => "QUANTITY",
            Self::Time => "TIME",
            Self::WorkOfArt => "WORK_OF_ART",
        }
    }
}

impl FromStr for EntityLabel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CARDINAL" => Ok(Self::Cardinal),
            "DATE" => Ok(Self::Date),
            "EVENT" => Ok(Self::Event),
            "FAC" => Ok(Self::Fac),
            "GPE" => Ok(Self::Gpe),
            "LANGUAGE" => Ok(Self::Language),
            "LAW" => Ok(Self::Law),
            "LOC" => Ok(Self::Loc),
            "MONEY" => Ok(Self::Money),
            "NORP" => Ok(Self::Norp),
            "ORDINAL" => Ok(Self::Ordinal),
            "ORG" => Ok(Self::Org),
            "PERCENT" => Ok(Self::Percent),
            "PERSON" => Ok(Self::Person),
            "PRODUCT" => Ok(Self::Product),
            "QUANTITY" => Ok(Self::Quantity),
            "TIME" => Ok(Self::Time),
            "WORK_OF_ART" => Ok(Self::WorkOfArt),
            _ => Err("unknown entity label"),
        }
    }
}

/// A labeled entity span within a single candidate phrase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    /// The matched text, exactly as it appears in the phrase.
    pub text: String,

    /// Label assigned by the recognizer.
    pub label: EntityLabel,

    /// 0-based ordinal among the entities of the same phrase.
    pub index: usize,
}

impl Entity {
    /// Create an entity span.
    #[must_use]
    pub fn new(text: impl Into<String>, label: EntityLabel, index: usize) -> Self {
        Self {
            text: text.into(),
            label,
            index,
        }
    }
}
