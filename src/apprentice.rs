//! Hireable apprentices: passive bonuses and multi-day missions
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    HERBALIST_STORE_DISCOUNT_PCT, MISSION_DURATION_DAYS, MISSION_INJURY_DAYS,
    MISSION_REWARD_GOLD, MISSION_SUCCESS_CHANCE,
};

/// What an apprentice is good at. Passive bonuses apply only while the
/// apprentice is present (not away on a mission, not laid up injured).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    /// Ex-watch muscle: halves the reputation fallout of an explosion.
    Guard,
    /// Knows every supplier: discounts store purchases.
    Herbalist,
    /// Keeps an ear on the street: speeds nightly heat decay.
    Scout,
}

impl Archetype {
    pub const ALL: [Self; 3] = [Self::Guard, Self::Herbalist, Self::Scout];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guard => "guard",
            Self::Herbalist => "herbalist",
            Self::Scout => "scout",
        }
    }

    /// Hiring fee in gold.
    #[must_use]
    pub const fn hire_cost(self) -> i64 {
        match self {
            Self::Guard => 30,
            Self::Herbalist => 25,
            Self::Scout => 20,
        }
    }
}

/// Mission/injury lifecycle. Driven entirely by day-advance ticks;
/// there are no background timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApprenticeStatus {
    #[default]
    Idle,
    OnMission { days_left: u32 },
    Injured { days_left: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apprentice {
    pub name: String,
    pub archetype: Archetype,
    #[serde(default)]
    pub status: ApprenticeStatus,
    /// Missions completed, for flavor and scoring.
    #[serde(default)]
    pub missions_completed: u32,
}

/// What a day-advance tick did to the apprentice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionTick {
    None,
    StillAway,
    Succeeded { reward: i64 },
    Injured { days: u32 },
    Recovered,
}

impl Apprentice {
    #[must_use]
    pub fn new(name: &str, archetype: Archetype) -> Self {
        Self {
            name: name.to_string(),
            archetype,
            status: ApprenticeStatus::Idle,
            missions_completed: 0,
        }
    }

    /// Present in the shop: passive bonuses apply and brews are assisted.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self.status, ApprenticeStatus::Idle)
    }

    /// Store discount granted while present, in percent.
    #[must_use]
    pub fn store_discount_pct(&self) -> f64 {
        if self.is_present() && self.archetype == Archetype::Herbalist {
            HERBALIST_STORE_DISCOUNT_PCT
        } else {
            0.0
        }
    }

    /// Dispatch on a mission. Locks the apprentice away immediately;
    /// resolution happens on a later day-advance tick.
    ///
    /// Returns false if the apprentice is not idle.
    pub fn assign_mission(&mut self) -> bool {
        if !self.is_present() {
            return false;
        }
        self.status = ApprenticeStatus::OnMission {
            days_left: MISSION_DURATION_DAYS,
        };
        true
    }

    /// Advance the mission/injury clock by one day. Missions resolve
    /// probabilistically the tick their countdown reaches zero.
    pub fn tick_day<R: Rng>(&mut self, rng: &mut R) -> MissionTick {
        match self.status {
            ApprenticeStatus::Idle => MissionTick::None,
            ApprenticeStatus::OnMission { days_left } => {
                let days_left = days_left.saturating_sub(1);
                if days_left > 0 {
                    self.status = ApprenticeStatus::OnMission { days_left };
                    return MissionTick::StillAway;
                }
                if rng.r#gen::<f32>() < MISSION_SUCCESS_CHANCE {
                    self.status = ApprenticeStatus::Idle;
                    self.missions_completed += 1;
                    MissionTick::Succeeded {
                        reward: MISSION_REWARD_GOLD,
                    }
                } else {
                    self.status = ApprenticeStatus::Injured {
                        days_left: MISSION_INJURY_DAYS,
                    };
                    MissionTick::Injured {
                        days: MISSION_INJURY_DAYS,
                    }
                }
            }
            ApprenticeStatus::Injured { days_left } => {
                let days_left = days_left.saturating_sub(1);
                if days_left > 0 {
                    self.status = ApprenticeStatus::Injured { days_left };
                    MissionTick::None
                } else {
                    self.status = ApprenticeStatus::Idle;
                    MissionTick::Recovered
                }
            }
        }
    }
}
