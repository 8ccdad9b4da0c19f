//! Drives a full multi-day run through the public API, touching every
//! system: serving, brewing, the store, the apprentice, the rival, bribes,
//! raids, and the save path.
use hexbrew_game::{
    ActionError, Archetype, Cart, GamePhase, GameState, IngredientCatalog, OutcomeKind,
    RivalEncounterData, Store, Tag, decode_save, encode_save,
};

const RUN_SEED: u64 = 0xB0_0B1E5;
const MAX_DAYS: u32 = 20;

fn new_run(seed: u64) -> GameState {
    GameState::with_seed(
        seed,
        IngredientCatalog::builtin(),
        RivalEncounterData::builtin(),
    )
}

/// A clean two-reagent cure for every sensation the generator produces.
fn cure_for(required: [Tag; 2]) -> [&'static str; 2] {
    match required {
        [Tag::Holy, Tag::Purifying] => ["Blessed Water", "Lavender"],
        [Tag::Cooling, Tag::Soothing] => ["Frostcap", "Sage"],
        [Tag::Purifying, Tag::Calming] => ["Sage", "Moonstone"],
        [Tag::Hot, Tag::Binding] => ["Dragonroot", "Sage"],
        [Tag::Calming, Tag::Soothing] => ["Lavender", "Sage"],
        [Tag::Cooling, Tag::Holy] => ["Moonstone", "Sage"],
        other => panic!("generator produced an unknown tag pair {other:?}"),
    }
}

fn resolve_side_phases(state: &mut GameState) {
    loop {
        match state.phase {
            GamePhase::RaidEvent => state.acknowledge_raid().unwrap(),
            GamePhase::RivalEncounter => {
                let encounter = state.pending_encounter.clone().expect("pending encounter");
                let affordable = encounter
                    .choices
                    .iter()
                    .position(|c| state.gold + c.effects.gold >= 0)
                    .expect("every encounter has an affordable choice");
                state.resolve_rival_choice(affordable).unwrap();
            }
            _ => break,
        }
    }
}

#[test]
fn full_season_exercises_core_systems() {
    let mut state = new_run(RUN_SEED);
    let store = Store::builtin();
    let mut hired = false;
    let mut mission_sent = false;
    let mut saved_blob = None;

    while state.day < MAX_DAYS && !state.is_over() {
        resolve_side_phases(&mut state);

        // Serve three customers a day with honest cures.
        for _ in 0..3 {
            if state.phase != GamePhase::Playing {
                break;
            }
            let required = state.serve_next_customer().unwrap().symptom.required_tags;
            let outcome = state.brew(&cure_for(required)).unwrap();
            assert_eq!(outcome.kind, OutcomeKind::Cured);
            resolve_side_phases(&mut state);
        }

        // Tavern-economy actions once the purse allows them.
        if !hired && state.gold >= 60 {
            state.hire_apprentice("Wren", Archetype::Scout).unwrap();
            hired = true;
        }
        if hired && !mission_sent && state.apprentice.as_ref().unwrap().is_present() {
            state.assign_mission().unwrap();
            mission_sent = true;
        }
        if state.gold >= 80 && !state.upgrades.guild_seal {
            let mut cart = Cart::new();
            cart.add_item("guild_seal", 1);
            state.checkout_cart(&store, &mut cart).unwrap();
        }
        if state.heat > 40 && state.gold >= 50 {
            state.bribe().unwrap();
        }
        if state.gold >= 120 {
            state.donate(10).unwrap();
        }

        if state.day == 5 {
            saved_blob = Some(encode_save(&state).unwrap());
        }

        if state.phase == GamePhase::Playing {
            state.rest().unwrap();
        }
        resolve_side_phases(&mut state);
        if state.phase == GamePhase::TavernHub {
            state.start_next_day().unwrap();
        }
        resolve_side_phases(&mut state);
    }

    assert!(!state.is_over(), "an honest shop should survive the season");
    assert_eq!(state.day, MAX_DAYS);
    assert!(state.reputation > 10.0);
    assert!(hired && mission_sent);
    assert!(!state.history.is_empty());
    assert!(
        state.history.iter().all(|r| r.kind == OutcomeKind::Cured),
        "only cures were brewed"
    );
    assert!(state.discovered.len() >= 4);
    assert!(state.logs.iter().any(|l| l == "log.shop.closed"));

    // The mid-run snapshot still loads and resumes.
    let blob = saved_blob.expect("day 5 snapshot taken");
    let mut resumed = decode_save(&blob).unwrap().rehydrate(
        IngredientCatalog::builtin(),
        RivalEncounterData::builtin(),
    );
    assert_eq!(resumed.day, 5);
    resolve_side_phases(&mut resumed);
    if resumed.phase == GamePhase::Playing {
        let required = resumed.serve_next_customer().unwrap().symptom.required_tags;
        assert!(resumed.brew(&cure_for(required)).is_ok());
    }
}

#[test]
fn reckless_brewing_burns_the_shop_down() {
    let mut state = new_run(42);
    let mut poisons = 0;
    while !state.is_over() {
        resolve_side_phases(&mut state);
        if state.phase != GamePhase::Playing {
            if state.phase == GamePhase::TavernHub {
                state.start_next_day().unwrap();
            }
            continue;
        }
        if state.current_customer.is_none() {
            state.serve_next_customer().unwrap();
        }
        // Mercury in everything. What could go wrong.
        state.brew(&["Mercury", "Sage"]).unwrap();
        poisons += 1;
        assert!(poisons < 100, "poisoning never ended the run");
    }
    assert_eq!(state.phase, GamePhase::GameOver);
    assert!(state.reputation <= 0.0);
    // Terminal state is frozen.
    assert_eq!(state.rest(), Err(ActionError::GameOver));
    assert_eq!(
        state.brew(&["Mercury", "Sage"]),
        Err(ActionError::GameOver)
    );
}

#[test]
fn identical_seeds_replay_identically() {
    let run = |seed: u64| {
        let mut state = new_run(seed);
        let mut transcript = Vec::new();
        for _ in 0..6 {
            resolve_side_phases(&mut state);
            if state.phase != GamePhase::Playing {
                break;
            }
            let customer = state.serve_next_customer().unwrap().clone();
            let outcome = state.brew(&cure_for(customer.symptom.required_tags)).unwrap();
            transcript.push((customer.class, outcome.gold_delta));
        }
        (transcript, state.gold, state.heat)
    };
    assert_eq!(run(0xFEED), run(0xFEED));
}
