//! Semantic ingredient tags used for symptom matching
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed vocabulary of semantic tags attached to reagents and symptoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Toxic,
    Hot,
    Cooling,
    Holy,
    Dark,
    Purifying,
    Calming,
    Heavy,
    Soothing,
    Binding,
}

impl Tag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Toxic => "toxic",
            Self::Hot => "hot",
            Self::Cooling => "cooling",
            Self::Holy => "holy",
            Self::Dark => "dark",
            Self::Purifying => "purifying",
            Self::Calming => "calming",
            Self::Heavy => "heavy",
            Self::Soothing => "soothing",
            Self::Binding => "binding",
        }
    }

    /// Every tag, in canonical order. Used by data validation and tests.
    pub const ALL: [Self; 10] = [
        Self::Toxic,
        Self::Hot,
        Self::Cooling,
        Self::Holy,
        Self::Dark,
        Self::Purifying,
        Self::Calming,
        Self::Heavy,
        Self::Soothing,
        Self::Binding,
    ];
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toxic" => Ok(Self::Toxic),
            "hot" => Ok(Self::Hot),
            "cooling" => Ok(Self::Cooling),
            "holy" => Ok(Self::Holy),
            "dark" => Ok(Self::Dark),
            "purifying" => Ok(Self::Purifying),
            "calming" => Ok(Self::Calming),
            "heavy" => Ok(Self::Heavy),
            "soothing" => Ok(Self::Soothing),
            "binding" => Ok(Self::Binding),
            _ => Err(()),
        }
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trips_through_str() {
        for tag in Tag::ALL {
            assert_eq!(Tag::from_str(tag.as_str()), Ok(tag));
        }
        assert_eq!(Tag::from_str("glittery"), Err(()));
    }

    #[test]
    fn tag_serde_uses_lowercase() {
        let json = serde_json::to_string(&Tag::Purifying).unwrap();
        assert_eq!(json, "\"purifying\"");
        let back: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tag::Purifying);
    }
}
