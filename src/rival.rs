//! The rival alchemist: stats, scripted encounters, daily pressure
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    RIVAL_ENCOUNTER_AGGRESSION_SCALE, RIVAL_ENCOUNTER_BASE_CHANCE, RIVAL_HEAT_PRESSURE,
    RIVAL_HEAT_PRESSURE_THRESHOLD, RIVAL_TITHE_SCALE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RivalStatus {
    #[default]
    Active,
    Injured,
    Defeated,
}

/// The rival alchemist across the square. Generated once per game; stats
/// evolve only through encounter choice payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rival {
    pub name: String,
    /// Fraction of the local market held, 0.0..=1.0.
    pub market_share: f32,
    pub defense: i32,
    pub aggression: i32,
    #[serde(default)]
    pub status: RivalStatus,
}

const RIVAL_NAMES: [&str; 5] = [
    "Mistress Vex",
    "Aldous Crake",
    "Doctor Vesper",
    "The Widow Hemlock",
    "Sorrel Quince",
];

impl Rival {
    /// Roll a fresh rival for a new game.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self {
            name: RIVAL_NAMES[rng.gen_range(0..RIVAL_NAMES.len())].to_string(),
            market_share: 0.15 + rng.r#gen::<f32>() * 0.15,
            defense: rng.gen_range(6..=10),
            aggression: rng.gen_range(3..=8),
            status: RivalStatus::Active,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, RivalStatus::Active)
    }

    /// Nightly gold tithe the rival's market share levies while active.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn nightly_tithe(&self) -> i64 {
        if !self.is_active() {
            return 0;
        }
        (self.market_share * RIVAL_TITHE_SCALE).round() as i64
    }

    /// Extra heat the rival stirs up per night when feeling bold.
    #[must_use]
    pub const fn heat_pressure(&self) -> i32 {
        if self.is_active() && self.aggression >= RIVAL_HEAT_PRESSURE_THRESHOLD {
            RIVAL_HEAT_PRESSURE
        } else {
            0
        }
    }

    /// Chance an encounter triggers on a given night, scaled by aggression.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn encounter_chance(&self) -> f32 {
        if !self.is_active() {
            return 0.0;
        }
        RIVAL_ENCOUNTER_BASE_CHANCE + self.aggression as f32 * RIVAL_ENCOUNTER_AGGRESSION_SCALE
    }

    /// Absorb defense damage and downgrade status as thresholds pass.
    /// Returns the new status when it changed.
    pub fn take_defense_hit(&mut self, damage: i32) -> Option<RivalStatus> {
        if damage <= 0 || matches!(self.status, RivalStatus::Defeated) {
            return None;
        }
        self.defense -= damage;
        match self.status {
            RivalStatus::Active if self.defense <= 0 => {
                self.status = RivalStatus::Injured;
                self.defense = 3;
                Some(RivalStatus::Injured)
            }
            RivalStatus::Injured if self.defense <= 0 => {
                self.status = RivalStatus::Defeated;
                self.defense = 0;
                self.market_share = 0.0;
                Some(RivalStatus::Defeated)
            }
            _ => None,
        }
    }
}

/// Effects merged into the game state when an encounter choice resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EncounterEffects {
    #[serde(default)]
    pub gold: i64,
    #[serde(default)]
    pub reputation: f32,
    #[serde(default)]
    pub heat: i32,
    #[serde(default)]
    pub rival_defense: i32,
    #[serde(default)]
    pub rival_market_share: f32,
    #[serde(default)]
    pub rival_aggression: i32,
    #[serde(default)]
    pub log: Option<String>,
}

/// A choice the player can make during a rival encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterChoice {
    pub label: String,
    #[serde(default)]
    pub effects: EncounterEffects,
}

/// A scripted rival encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RivalEncounter {
    pub id: String,
    pub prompt: String,
    pub choices: Vec<EncounterChoice>,
}

/// Container for the scripted encounter table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RivalEncounterData {
    pub encounters: Vec<RivalEncounter>,
}

impl RivalEncounterData {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            encounters: Vec::new(),
        }
    }

    /// Load encounter data from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid encounter data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The scripted set shipped with the game.
    #[must_use]
    pub fn builtin() -> Self {
        fn choice(label: &str, effects: EncounterEffects) -> EncounterChoice {
            EncounterChoice {
                label: label.to_string(),
                effects,
            }
        }
        let encounters = vec![
            RivalEncounter {
                id: "undercut".to_string(),
                prompt: "Handbills across the square undercut your prices by half.".to_string(),
                choices: vec![
                    choice(
                        "Match the prices",
                        EncounterEffects {
                            gold: -10,
                            rival_market_share: -0.05,
                            log: Some("log.rival.undercut.matched".to_string()),
                            ..EncounterEffects::default()
                        },
                    ),
                    choice(
                        "Let it pass",
                        EncounterEffects {
                            rival_market_share: 0.05,
                            log: Some("log.rival.undercut.ignored".to_string()),
                            ..EncounterEffects::default()
                        },
                    ),
                ],
            },
            RivalEncounter {
                id: "tipoff".to_string(),
                prompt: "Word is your rival tipped the watch about your cellar stock.".to_string(),
                choices: vec![
                    choice(
                        "Bribe the desk sergeant",
                        EncounterEffects {
                            gold: -15,
                            heat: -5,
                            log: Some("log.rival.tipoff.bribed".to_string()),
                            ..EncounterEffects::default()
                        },
                    ),
                    choice(
                        "Deny everything",
                        EncounterEffects {
                            heat: 10,
                            rival_aggression: 1,
                            log: Some("log.rival.tipoff.denied".to_string()),
                            ..EncounterEffects::default()
                        },
                    ),
                ],
            },
            RivalEncounter {
                id: "sabotage".to_string(),
                prompt: "An urchin offers to 'rearrange' the rival's stall after dark.".to_string(),
                choices: vec![
                    choice(
                        "Pay the urchin",
                        EncounterEffects {
                            gold: -20,
                            heat: 8,
                            rival_defense: -4,
                            rival_market_share: -0.08,
                            log: Some("log.rival.sabotage.paid".to_string()),
                            ..EncounterEffects::default()
                        },
                    ),
                    choice(
                        "Turn the offer down",
                        EncounterEffects {
                            reputation: 1.0,
                            log: Some("log.rival.sabotage.declined".to_string()),
                            ..EncounterEffects::default()
                        },
                    ),
                ],
            },
            RivalEncounter {
                id: "truce".to_string(),
                prompt: "The rival proposes splitting the district, curse-free.".to_string(),
                choices: vec![
                    choice(
                        "Shake on it",
                        EncounterEffects {
                            rival_aggression: -2,
                            rival_market_share: 0.02,
                            log: Some("log.rival.truce.accepted".to_string()),
                            ..EncounterEffects::default()
                        },
                    ),
                    choice(
                        "Spit on the floor",
                        EncounterEffects {
                            rival_aggression: 2,
                            reputation: 0.5,
                            log: Some("log.rival.truce.refused".to_string()),
                            ..EncounterEffects::default()
                        },
                    ),
                ],
            },
        ];
        Self { encounters }
    }

    /// Pick an encounter for tonight, if any triggers.
    pub fn pick<R: Rng>(&self, rival: &Rival, rng: &mut R) -> Option<RivalEncounter> {
        if self.encounters.is_empty() || rng.r#gen::<f32>() >= rival.encounter_chance() {
            return None;
        }
        let idx = rng.gen_range(0..self.encounters.len());
        Some(self.encounters[idx].clone())
    }
}
