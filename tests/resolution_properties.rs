use hexbrew_game::{
    Apprentice, Archetype, Customer, CustomerClass, IngredientCatalog, OutcomeContext,
    OutcomeKind, PoisonCause, Symptom, Tag, Upgrades, decode_save, encode_save, resolve_mixture,
    resolve_outcome,
};

fn catalog() -> IngredientCatalog {
    IngredientCatalog::builtin()
}

fn mixture_of(catalog: &IngredientCatalog, names: &[&str]) -> hexbrew_game::Mixture {
    let picked: Vec<_> = names.iter().map(|n| catalog.find(n).unwrap()).collect();
    resolve_mixture(&picked)
}

fn customer(class: CustomerClass, required: [Tag; 2]) -> Customer {
    Customer {
        id: 1,
        class,
        symptom: Symptom {
            description: "an integration-test complaint".to_string(),
            required_tags: required,
        },
    }
}

fn permutations3<'a>(names: [&'a str; 3]) -> [[&'a str; 3]; 6] {
    let [a, b, c] = names;
    [
        [a, b, c],
        [a, c, b],
        [b, a, c],
        [b, c, a],
        [c, a, b],
        [c, b, a],
    ]
}

#[test]
fn resolver_is_commutative_for_every_permutation() {
    let catalog = catalog();
    let triples = [
        ["Moonstone", "Sage", "Ember Pepper"],
        ["Mercury", "Nightshade", "Sage"],
        ["Frostcap", "Dragonroot", "Blessed Water"],
        ["Gravebloom", "Lavender", "Mandrake Root"],
    ];
    for triple in triples {
        let baseline = mixture_of(&catalog, &permutations3(triple)[0]);
        for perm in permutations3(triple) {
            let mixture = mixture_of(&catalog, &perm);
            assert_eq!(mixture, baseline, "permutation {perm:?} diverged");
        }
    }
}

#[test]
fn two_surviving_toxic_tags_are_always_fatal() {
    let catalog = catalog();
    // Every pair of toxic reagents, with and without a third bystander.
    let toxics = ["Mercury", "Nightshade"];
    let bystanders = ["Sage", "Moonstone", "Lavender"];
    let base = mixture_of(&catalog, &toxics);
    assert!(base.fatal);
    for extra in bystanders {
        let mixture = mixture_of(&catalog, &[toxics[0], toxics[1], extra]);
        assert!(mixture.fatal, "{extra} defused a fatal pair");
    }
}

#[test]
fn balanced_hot_and_cooling_fully_cancel() {
    let catalog = catalog();
    // One Hot + one Cooling + one Holy leaves just [Holy].
    let mixture = mixture_of(&catalog, &["Ember Pepper", "Moonstone"]);
    assert_eq!(mixture.tags.as_slice(), &[Tag::Holy]);
    assert!(!mixture.fatal);
}

#[test]
fn fatal_mixture_explodes_even_with_a_perfect_tag_match() {
    let catalog = catalog();
    let mixture = mixture_of(&catalog, &["Mercury", "Nightshade"]);
    let customer = customer(CustomerClass::Guard, [Tag::Heavy, Tag::Dark]);
    let upgrades = Upgrades::default();
    let outcome = resolve_outcome(
        &mixture,
        &OutcomeContext {
            customer: &customer,
            upgrades: &upgrades,
            helper: None,
            permit_reagent_used: false,
        },
    );
    assert_eq!(outcome.kind, OutcomeKind::Exploded);
    assert_eq!(outcome.gold_delta, 0);
    assert!((outcome.reputation_delta + 10.0).abs() < f32::EPSILON);
}

#[test]
fn moonstone_sage_cures_a_guard_for_18_gold() {
    let catalog = catalog();
    let mixture = mixture_of(&catalog, &["Moonstone", "Sage"]);
    let customer = customer(CustomerClass::Guard, [Tag::Purifying, Tag::Calming]);
    let upgrades = Upgrades::default();
    let outcome = resolve_outcome(
        &mixture,
        &OutcomeContext {
            customer: &customer,
            upgrades: &upgrades,
            helper: None,
            permit_reagent_used: false,
        },
    );
    assert_eq!(outcome.kind, OutcomeKind::Cured);
    assert_eq!(outcome.gold_delta, 18);
    assert!((outcome.reputation_delta - 7.5).abs() < f32::EPSILON);
}

#[test]
fn explosion_penalty_is_softened_by_upgrade_then_helper() {
    let catalog = catalog();
    let mixture = mixture_of(&catalog, &["Mercury", "Nightshade"]);
    let customer = customer(CustomerClass::Commoner, [Tag::Holy, Tag::Calming]);
    let guard = Apprentice::new("Brant", Archetype::Guard);

    let plain = resolve_outcome(
        &mixture,
        &OutcomeContext {
            customer: &customer,
            upgrades: &Upgrades::default(),
            helper: None,
            permit_reagent_used: false,
        },
    );
    assert!((plain.reputation_delta + 10.0).abs() < f32::EPSILON);

    let helped = resolve_outcome(
        &mixture,
        &OutcomeContext {
            customer: &customer,
            upgrades: &Upgrades::default(),
            helper: Some(&guard),
            permit_reagent_used: false,
        },
    );
    assert!((helped.reputation_delta + 5.0).abs() < f32::EPSILON);

    let upgrades = Upgrades {
        reinforced_cauldron: true,
        ..Upgrades::default()
    };
    let armored = resolve_outcome(
        &mixture,
        &OutcomeContext {
            customer: &customer,
            upgrades: &upgrades,
            helper: Some(&guard),
            permit_reagent_used: false,
        },
    );
    assert!(armored.reputation_delta.abs() < f32::EPSILON);
}

#[test]
fn inert_brews_report_poisoned_kind_with_inert_cause() {
    let catalog = catalog();
    let mixture = mixture_of(&catalog, &["Sage", "Lavender"]);
    let customer = customer(CustomerClass::Noble, [Tag::Hot, Tag::Binding]);
    let outcome = resolve_outcome(
        &mixture,
        &OutcomeContext {
            customer: &customer,
            upgrades: &Upgrades::default(),
            helper: None,
            permit_reagent_used: false,
        },
    );
    assert_eq!(outcome.kind, OutcomeKind::Poisoned);
    assert_eq!(outcome.cause, Some(PoisonCause::Inert));
    assert!((outcome.reputation_delta + 2.0).abs() < f32::EPSILON);
}

#[test]
fn save_blob_round_trips_and_refuses_dead_runs() {
    use hexbrew_game::{GameState, RivalEncounterData};

    let mut state = GameState::with_seed(99, catalog(), RivalEncounterData::builtin());
    state.gold = 77;
    state.heat = 12;
    let blob = encode_save(&state).unwrap();
    let loaded = decode_save(&blob)
        .unwrap()
        .rehydrate(catalog(), RivalEncounterData::builtin());
    assert_eq!(loaded.gold, 77);
    assert_eq!(loaded.heat, 12);
    assert_eq!(loaded.seed, state.seed);

    state.reputation = 0.0;
    assert!(encode_save(&state).is_err());
}
