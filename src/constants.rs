//! Centralized balance and tuning constants for Hexbrew game logic.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Logging keys -------------------------------------------------------------
pub(crate) const DEBUG_ENV_VAR: &str = "HEXBREW_DEBUG_LOGS";
pub(crate) const LOG_SHOP_OPENED: &str = "log.shop.opened";
pub(crate) const LOG_SHOP_CLOSED: &str = "log.shop.closed";
pub(crate) const LOG_BREW_CURED: &str = "log.brew.cured";
pub(crate) const LOG_BREW_POISONED: &str = "log.brew.poisoned";
pub(crate) const LOG_BREW_INERT: &str = "log.brew.inert";
pub(crate) const LOG_BREW_EXPLODED: &str = "log.brew.exploded";
pub(crate) const LOG_RAID_TRIGGERED: &str = "log.raid.triggered";
pub(crate) const LOG_RAID_CLEARED: &str = "log.raid.cleared";
pub(crate) const LOG_BRIBE_PAID: &str = "log.bribe.paid";
pub(crate) const LOG_DONATION: &str = "log.donation";
pub(crate) const LOG_GAME_OVER: &str = "log.game-over";
pub(crate) const LOG_APPRENTICE_HIRED: &str = "log.apprentice.hired";
pub(crate) const LOG_MISSION_ASSIGNED: &str = "log.mission.assigned";
pub(crate) const LOG_MISSION_SUCCESS: &str = "log.mission.success";
pub(crate) const LOG_MISSION_INJURY: &str = "log.mission.injury";
pub(crate) const LOG_MISSION_RECOVERED: &str = "log.mission.recovered";
pub(crate) const LOG_RIVAL_TITHE: &str = "log.rival.tithe";
pub(crate) const LOG_RIVAL_ENCOUNTER: &str = "log.rival.encounter";
pub(crate) const LOG_RIVAL_INJURED: &str = "log.rival.injured";
pub(crate) const LOG_RIVAL_DEFEATED: &str = "log.rival.defeated";
pub(crate) const LOG_PURCHASE: &str = "log.store.purchase";
pub(crate) const LOG_SAVE_CORRUPT: &str = "log.save.corrupt";

// Brewing ------------------------------------------------------------------
pub(crate) const MIN_BREW_INGREDIENTS: usize = 2;
pub(crate) const MAX_BREW_INGREDIENTS: usize = 3;
pub(crate) const FATAL_TOXIC_COUNT: usize = 2;

// Outcome economy ----------------------------------------------------------
pub(crate) const CURE_BASE_GOLD: f32 = 15.0;
pub(crate) const CURE_BASE_REPUTATION: f32 = 5.0;
pub(crate) const GUILD_SEAL_GOLD_BONUS: i64 = 5;
pub(crate) const PERMIT_GOLD_BONUS: i64 = 10;
pub(crate) const EXPLOSION_REPUTATION_LOSS: f32 = -10.0;
pub(crate) const EXPLOSION_REPUTATION_LOSS_GUARDED: f32 = -5.0;
pub(crate) const POISON_REPUTATION_LOSS: f32 = -5.0;
pub(crate) const POISON_REPUTATION_LOSS_VENTED: f32 = -2.0;
pub(crate) const INERT_REPUTATION_LOSS: f32 = -2.0;

// Heat ---------------------------------------------------------------------
pub(crate) const HEAT_MAX: i32 = 100;
pub(crate) const HEAT_RAID_RESET: i32 = 30;
pub(crate) const HEAT_DECAY_PER_NIGHT: i32 = 2;
pub(crate) const HEAT_SCOUT_DECAY_BONUS: i32 = 1;
pub(crate) const HEAT_PER_EXPLOSION: i32 = 15;
pub(crate) const HEAT_PER_POISONING: i32 = 8;
pub(crate) const BRIBE_COST_GOLD: i64 = 25;
pub(crate) const BRIBE_HEAT_RELIEF: i32 = 15;
pub(crate) const BRIBE_MIN_HEAT: i32 = 10;

// Raids --------------------------------------------------------------------
pub(crate) const RAID_GOLD_FINE_PCT: i64 = 25;
pub(crate) const RAID_GOLD_FINE_MIN: i64 = 10;

// Donations ----------------------------------------------------------------
pub(crate) const DONATION_GOLD_PER_REPUTATION: i64 = 10;

// Apprentices --------------------------------------------------------------
pub(crate) const MISSION_DURATION_DAYS: u32 = 2;
pub(crate) const MISSION_SUCCESS_CHANCE: f32 = 0.65;
pub(crate) const MISSION_REWARD_GOLD: i64 = 40;
pub(crate) const MISSION_INJURY_DAYS: u32 = 3;
pub(crate) const HERBALIST_STORE_DISCOUNT_PCT: f64 = 10.0;

// Rival --------------------------------------------------------------------
pub(crate) const RIVAL_TITHE_SCALE: f32 = 20.0;
pub(crate) const RIVAL_ENCOUNTER_BASE_CHANCE: f32 = 0.10;
pub(crate) const RIVAL_ENCOUNTER_AGGRESSION_SCALE: f32 = 0.02;
pub(crate) const RIVAL_HEAT_PRESSURE_THRESHOLD: i32 = 6;
pub(crate) const RIVAL_HEAT_PRESSURE: i32 = 1;

// Starting state -----------------------------------------------------------
pub(crate) const START_GOLD: i64 = 50;
pub(crate) const START_REPUTATION: f32 = 10.0;
