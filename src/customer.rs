//! Customer archetypes and procedural symptom generation
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tags::Tag;

/// Customer archetype. Fixed enumeration; multipliers drive the outcome
/// economy and the narrative voice used in brew results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerClass {
    Commoner,
    Noble,
    Guard,
    Cultist,
    Beggar,
}

impl CustomerClass {
    pub const ALL: [Self; 5] = [
        Self::Commoner,
        Self::Noble,
        Self::Guard,
        Self::Cultist,
        Self::Beggar,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commoner => "commoner",
            Self::Noble => "noble",
            Self::Guard => "guard",
            Self::Cultist => "cultist",
            Self::Beggar => "beggar",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Commoner => "Commoner",
            Self::Noble => "Noble",
            Self::Guard => "City Guard",
            Self::Cultist => "Cultist",
            Self::Beggar => "Beggar",
        }
    }

    /// Gold multiplier applied to the base cure fee. Beggars pay nothing.
    #[must_use]
    pub const fn gold_mult(self) -> f32 {
        match self {
            Self::Commoner => 1.0,
            Self::Noble => 2.0,
            Self::Guard => 1.2,
            Self::Cultist => 1.5,
            Self::Beggar => 0.0,
        }
    }

    /// Reputation multiplier applied on a successful cure.
    #[must_use]
    pub const fn rep_success_mult(self) -> f32 {
        match self {
            Self::Commoner => 1.0,
            Self::Noble => 1.2,
            Self::Guard => 1.5,
            Self::Cultist => 0.8,
            Self::Beggar => 2.0,
        }
    }

    /// Cultists consider Dark-tinged brews a feature, not a flaw.
    #[must_use]
    pub const fn tolerates_dark(self) -> bool {
        matches!(self, Self::Cultist)
    }
}

impl std::fmt::Display for CustomerClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated complaint: flavor text plus the tag pair a cure must carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub description: String,
    pub required_tags: [Tag; 2],
}

/// A customer waiting at the counter. Created per serving slot and
/// discarded once the brew outcome resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub class: CustomerClass,
    pub symptom: Symptom,
}

const ADJECTIVES: [&str; 6] = [
    "throbbing",
    "creeping",
    "weeping",
    "twitching",
    "howling",
    "smouldering",
];

const LOCATIONS: [&str; 6] = [
    "left ear",
    "spleen",
    "kneecaps",
    "back teeth",
    "eyebrows",
    "big toe",
];

/// Sensation records. Each sensation binds exactly one required tag pair,
/// and every pair is obtainable from the built-in reagent table, so any
/// generated customer has at least one known cure.
const SENSATIONS: [(&str, [Tag; 2]); 6] = [
    ("a crawling dread", [Tag::Holy, Tag::Purifying]),
    ("a feverish tremor", [Tag::Cooling, Tag::Soothing]),
    ("a bilious churning", [Tag::Purifying, Tag::Calming]),
    ("a frozen stiffness", [Tag::Hot, Tag::Binding]),
    ("a sleepless jangling", [Tag::Calming, Tag::Soothing]),
    ("a spectral numbness", [Tag::Cooling, Tag::Holy]),
];

/// Generate the next customer in the serving queue.
pub fn generate_customer<R: Rng>(id: u32, rng: &mut R) -> Customer {
    let class = CustomerClass::ALL[rng.gen_range(0..CustomerClass::ALL.len())];
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let location = LOCATIONS[rng.gen_range(0..LOCATIONS.len())];
    let (sensation, required_tags) = SENSATIONS[rng.gen_range(0..SENSATIONS.len())];
    let description = format!("{sensation} in the {location}, with a {adjective} ache");
    Customer {
        id,
        class,
        symptom: Symptom {
            description,
            required_tags,
        },
    }
}
