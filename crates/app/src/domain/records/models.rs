//! Marine Record Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::{
    Timestamp,
    civil::{Date, DateTime, Time},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque record identifier.
///
/// Generated identifiers are time-ordered, so sorting them lexically recovers
/// creation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh identifier for a record being created now.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Marine species category.
///
/// Values outside the fixed taxonomy are kept verbatim as [`Category::Unlisted`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Fish,
    Mammal,
    Turtle,
    Coral,
    Jellyfish,
    Crab,
    Mollusk,
    Other,
    Unlisted(String),
}

impl Category {
    /// The fixed taxonomy, in display order.
    pub const LISTED: [Category; 8] = [
        Self::Fish,
        Self::Mammal,
        Self::Turtle,
        Self::Coral,
        Self::Jellyfish,
        Self::Crab,
        Self::Mollusk,
        Self::Other,
    ];

    /// The stored value of the category.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Fish => "fish",
            Self::Mammal => "mammal",
            Self::Turtle => "turtle",
            Self::Coral => "coral",
            Self::Jellyfish => "jellyfish",
            Self::Crab => "crab",
            Self::Mollusk => "mollusk",
            Self::Other => "other",
            Self::Unlisted(value) => value,
        }
    }

    /// Display label, if the category belongs to the fixed taxonomy.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Fish => Some("Fish"),
            Self::Mammal => Some("Marine Mammals"),
            Self::Turtle => Some("Sea Turtles"),
            Self::Coral => Some("Coral"),
            Self::Jellyfish => Some("Jellyfish"),
            Self::Crab => Some("Crabs/Crustaceans"),
            Self::Mollusk => Some("Mollusks"),
            Self::Other => Some("Other"),
            Self::Unlisted(_) => None,
        }
    }

    /// Display label, falling back to the raw value for unlisted categories.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match self.label() {
            Some(label) => label,
            None => self.as_str(),
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "fish" => Self::Fish,
            "mammal" => Self::Mammal,
            "turtle" => Self::Turtle,
            "coral" => Self::Coral,
            "jellyfish" => Self::Jellyfish,
            "crab" => Self::Crab,
            "mollusk" => Self::Mollusk,
            "other" => Self::Other,
            _ => Self::Unlisted(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unlisted(value) => value,
            listed => listed.as_str().to_owned(),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Marine species sighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarineRecord {
    pub id: RecordId,
    pub species: String,
    pub category: Category,
    pub location: String,
    pub date: Date,
    #[serde(with = "time_of_day")]
    pub time: Time,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub observer_name: String,
    pub created_at: Timestamp,
}

impl MarineRecord {
    /// When the sighting happened, as reported by the observer.
    #[must_use]
    pub fn observed_at(&self) -> DateTime {
        self.date.to_datetime(self.time)
    }
}

/// `HH:MM` encoding for observation times.
pub mod time_of_day {
    use jiff::civil::{Time, time};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    const FORMAT: &str = "%H:%M";

    /// Parse a time of day, dropping anything finer than minutes.
    ///
    /// # Errors
    ///
    /// Returns an error when `value` is not a valid `HH:MM` or `HH:MM:SS` time.
    pub fn parse(value: &str) -> Result<Time, jiff::Error> {
        let parsed = Time::strptime(FORMAT, value).or_else(|_| value.parse::<Time>())?;

        Ok(time(parsed.hour(), parsed.minute(), 0, 0))
    }

    /// Format a time of day as `HH:MM`.
    #[must_use]
    pub fn format(value: Time) -> String {
        value.strftime(FORMAT).to_string()
    }

    #[expect(
        clippy::trivially_copy_pass_by_ref,
        reason = "signature required by serde's `with` attribute"
    )]
    pub(crate) fn serialize<S: Serializer>(value: &Time, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.strftime(FORMAT))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
        let value = String::deserialize(deserializer)?;

        parse(&value).map_err(D::Error::custom)
    }
}
