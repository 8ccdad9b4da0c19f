//! Single-slot save blob encoding
//!
//! The platform shell persists one JSON snapshot under a fixed storage key.
//! Encoding is best-effort with one guard: a dead run (reputation at or
//! below zero) is never written, so a finished game cannot be resumed.
use thiserror::Error;

use crate::constants::LOG_SAVE_CORRUPT;
use crate::state::GameState;

/// Storage key the web shell writes the snapshot under.
pub const SAVE_KEY: &str = "hexbrew.save.v1";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("refusing to save a finished run")]
    RunOver,
    #[error("failed to serialize game state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serialize a snapshot of the game state.
///
/// # Errors
///
/// Returns `SaveError::RunOver` when reputation is at or below zero, or a
/// serialization error from serde.
pub fn encode_save(state: &GameState) -> Result<String, SaveError> {
    if state.reputation <= 0.0 {
        return Err(SaveError::RunOver);
    }
    Ok(serde_json::to_string(state)?)
}

/// Deserialize a snapshot. Missing transient handles (RNG, catalogs) must
/// be reattached with [`GameState::rehydrate`] before play resumes.
///
/// Corrupt data is swallowed and logged, never surfaced as a failure: the
/// caller sees the same `None` as a missing save.
#[must_use]
pub fn decode_save(raw: &str) -> Option<GameState> {
    match serde_json::from_str::<GameState>(raw) {
        Ok(state) => Some(state),
        Err(err) => {
            log::warn!("{LOG_SAVE_CORRUPT}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::IngredientCatalog;
    use crate::rival::RivalEncounterData;
    use crate::state::GamePhase;

    fn live_state() -> GameState {
        GameState::with_seed(
            77,
            IngredientCatalog::builtin(),
            RivalEncounterData::builtin(),
        )
    }

    #[test]
    fn save_load_round_trips_a_live_run() {
        let mut state = live_state();
        state.gold = 123;
        state.day = 4;
        state.heat = 17;
        state.inventory.insert("Mandrake Root".to_string(), 2);
        state.discovered.insert("Sage".to_string());

        let blob = encode_save(&state).unwrap();
        let loaded = decode_save(&blob)
            .unwrap()
            .rehydrate(IngredientCatalog::builtin(), RivalEncounterData::builtin());

        assert_eq!(loaded.gold, 123);
        assert_eq!(loaded.day, 4);
        assert_eq!(loaded.heat, 17);
        assert_eq!(loaded.phase, GamePhase::Playing);
        assert_eq!(loaded.inventory["Mandrake Root"], 2);
        assert!(loaded.discovered.contains("Sage"));
        assert_eq!(loaded.rival, state.rival);
        assert!(loaded.rng.is_some(), "rehydrate must reattach the rng");
        assert!(loaded.catalog.is_some());
    }

    #[test]
    fn dead_runs_are_never_saved() {
        let mut state = live_state();
        state.reputation = 0.0;
        assert!(matches!(encode_save(&state), Err(SaveError::RunOver)));
        state.reputation = -3.0;
        assert!(matches!(encode_save(&state), Err(SaveError::RunOver)));
    }

    #[test]
    fn corrupt_blobs_read_as_missing() {
        assert!(decode_save("").is_none());
        assert!(decode_save("{ not json").is_none());
        assert!(decode_save("{\"gold\": true}").is_none());
    }
}
