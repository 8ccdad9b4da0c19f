//! Aggregate game state and the day/economy state machine
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::apprentice::{Apprentice, Archetype, MissionTick};
use crate::brew::resolve_mixture;
use crate::constants::{
    BRIBE_COST_GOLD, BRIBE_HEAT_RELIEF, BRIBE_MIN_HEAT, DONATION_GOLD_PER_REPUTATION,
    HEAT_DECAY_PER_NIGHT, HEAT_MAX, HEAT_PER_EXPLOSION, HEAT_PER_POISONING, HEAT_RAID_RESET,
    HEAT_SCOUT_DECAY_BONUS, LOG_APPRENTICE_HIRED, LOG_BREW_CURED, LOG_BREW_EXPLODED,
    LOG_BREW_INERT, LOG_BREW_POISONED, LOG_BRIBE_PAID, LOG_DONATION, LOG_GAME_OVER,
    LOG_MISSION_ASSIGNED, LOG_MISSION_INJURY, LOG_MISSION_RECOVERED, LOG_MISSION_SUCCESS,
    LOG_PURCHASE, LOG_RAID_CLEARED, LOG_RAID_TRIGGERED, LOG_RIVAL_DEFEATED, LOG_RIVAL_ENCOUNTER,
    LOG_RIVAL_INJURED, LOG_RIVAL_TITHE, LOG_SHOP_CLOSED, LOG_SHOP_OPENED, MAX_BREW_INGREDIENTS,
    MIN_BREW_INGREDIENTS, RAID_GOLD_FINE_MIN, RAID_GOLD_FINE_PCT, START_GOLD, START_REPUTATION,
};
use crate::customer::{Customer, CustomerClass, generate_customer};
use crate::data::{Ingredient, IngredientCatalog};
use crate::outcome::{BrewOutcome, OutcomeContext, OutcomeKind, PoisonCause, resolve_outcome};
use crate::rival::{Rival, RivalEncounter, RivalEncounterData, RivalStatus};
use crate::store::{Cart, Store, calculate_cart_total, calculate_effective_price};
use crate::tags::Tag;
use crate::upgrades::{PERMIT_REAGENT, Upgrades};

#[cfg(debug_assertions)]
fn debug_log_enabled() -> bool {
    matches!(std::env::var(crate::constants::DEBUG_ENV_VAR), Ok(val) if val != "0")
}

#[cfg(not(debug_assertions))]
const fn debug_log_enabled() -> bool {
    false
}

/// Where the simulation currently sits in the day cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Title,
    Playing,
    TavernHub,
    RaidEvent,
    RivalEncounter,
    GameOver,
}

/// Why a player action was refused. The UI surfaces these as disabled
/// controls or toasts; none of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("action not available in the current phase")]
    WrongPhase,
    #[error("the run is over")]
    GameOver,
    #[error("not enough gold")]
    InsufficientGold,
    #[error("heat is already at the minimum bribable level")]
    HeatTooLow,
    #[error("no customer is waiting")]
    NoCustomer,
    #[error("a customer is already waiting")]
    CustomerWaiting,
    #[error("a brew takes 2 or 3 reagents, got {0}")]
    BadIngredientCount(usize),
    #[error("unknown reagent: {0}")]
    UnknownIngredient(String),
    #[error("out of stock: {0}")]
    OutOfStock(String),
    #[error("no reagent catalog loaded")]
    MissingCatalog,
    #[error("an apprentice is already employed")]
    AlreadyHired,
    #[error("no apprentice employed")]
    NoApprentice,
    #[error("the apprentice is unavailable")]
    ApprenticeUnavailable,
    #[error("purchase refused")]
    PurchaseRefused,
    #[error("no such encounter choice")]
    BadChoice,
}

/// One resolved serving, kept in the run history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewRecord {
    pub day: u32,
    pub customer_id: u32,
    pub customer_class: CustomerClass,
    pub kind: OutcomeKind,
    #[serde(default)]
    pub cause: Option<PoisonCause>,
    pub gold_delta: i64,
    pub reputation_delta: f32,
    pub narrative: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub seed: u64,
    pub day: u32,
    pub phase: GamePhase,
    pub gold: i64,
    pub reputation: f32,
    pub heat: i32,
    #[serde(default)]
    pub customers_served: u32,
    #[serde(default)]
    pub current_customer: Option<Customer>,
    #[serde(default)]
    pub upgrades: Upgrades,
    #[serde(default)]
    pub apprentice: Option<Apprentice>,
    pub rival: Rival,
    #[serde(default)]
    pub pending_encounter: Option<RivalEncounter>,
    /// Stock counts for finite-stock reagents only; shelf staples are
    /// always available.
    #[serde(default)]
    pub inventory: HashMap<String, i32>,
    #[serde(default)]
    pub discovered: HashSet<String>,
    #[serde(default)]
    pub history: Vec<BrewRecord>,
    pub logs: Vec<String>,
    #[serde(default)]
    pub gold_earned: i64,
    #[serde(default)]
    pub bribes_spent: i64,
    #[serde(default)]
    pub donations_given: i64,
    #[serde(default)]
    pub raids_survived: u32,
    #[serde(skip)]
    pub rng: Option<ChaCha20Rng>,
    #[serde(skip)]
    pub catalog: Option<IngredientCatalog>,
    #[serde(skip)]
    pub encounter_data: Option<RivalEncounterData>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            seed: 0,
            day: 1,
            phase: GamePhase::Title,
            gold: START_GOLD,
            reputation: START_REPUTATION,
            heat: 0,
            customers_served: 0,
            current_customer: None,
            upgrades: Upgrades::default(),
            apprentice: None,
            rival: Rival {
                name: String::new(),
                market_share: 0.0,
                defense: 0,
                aggression: 0,
                status: RivalStatus::Defeated,
            },
            pending_encounter: None,
            inventory: HashMap::new(),
            discovered: HashSet::new(),
            history: Vec::new(),
            logs: vec![String::from("log.booting")],
            gold_earned: 0,
            bribes_spent: 0,
            donations_given: 0,
            raids_survived: 0,
            rng: None,
            catalog: None,
            encounter_data: None,
        }
    }
}

impl GameState {
    /// Start a new run from the title screen with a seeded RNG.
    #[must_use]
    pub fn with_seed(
        seed: u64,
        catalog: IngredientCatalog,
        encounters: RivalEncounterData,
    ) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let rival = Rival::generate(&mut rng);
        let mut state = Self {
            seed,
            phase: GamePhase::Playing,
            rival,
            rng: Some(rng),
            catalog: Some(catalog),
            encounter_data: Some(encounters),
            ..Self::default()
        };
        state.push_log(LOG_SHOP_OPENED);
        state
    }

    /// Reattach the transient handles a deserialized save lacks. The RNG is
    /// reseeded from the saved seed and day so a reloaded run stays
    /// deterministic without replaying history.
    #[must_use]
    pub fn rehydrate(
        mut self,
        catalog: IngredientCatalog,
        encounters: RivalEncounterData,
    ) -> Self {
        let stream = self.seed ^ (u64::from(self.day) << 32);
        self.rng = Some(ChaCha20Rng::seed_from_u64(stream));
        self.catalog = Some(catalog);
        self.encounter_data = Some(encounters);
        self
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    fn rng_mut(&mut self) -> &mut ChaCha20Rng {
        self.rng
            .get_or_insert_with(|| ChaCha20Rng::seed_from_u64(self.seed))
    }

    fn push_log(&mut self, key: &str) {
        if debug_log_enabled() {
            println!("Hexbrew | day {} {}", self.day, key);
        }
        self.logs.push(key.to_string());
    }

    fn guard_phase(&self, expected: GamePhase) -> Result<(), ActionError> {
        if self.is_over() {
            return Err(ActionError::GameOver);
        }
        if self.phase != expected {
            return Err(ActionError::WrongPhase);
        }
        Ok(())
    }

    // --- serving loop -----------------------------------------------------

    /// Pull the next customer to the counter.
    ///
    /// # Errors
    ///
    /// Refused outside the `Playing` phase or while a customer is waiting.
    pub fn serve_next_customer(&mut self) -> Result<&Customer, ActionError> {
        self.guard_phase(GamePhase::Playing)?;
        if self.current_customer.is_some() {
            return Err(ActionError::CustomerWaiting);
        }
        self.customers_served += 1;
        let id = self.customers_served;
        let customer = {
            let rng = self.rng_mut();
            generate_customer(id, rng)
        };
        Ok(&*self.current_customer.insert(customer))
    }

    /// Brew the named reagents and serve the result to the waiting
    /// customer. The customer is consumed whatever the result.
    ///
    /// # Errors
    ///
    /// Refused outside `Playing`, without a customer, with an invalid
    /// reagent list, or when finite stock has run out.
    pub fn brew(&mut self, ingredient_names: &[&str]) -> Result<BrewOutcome, ActionError> {
        self.guard_phase(GamePhase::Playing)?;
        let customer = self
            .current_customer
            .clone()
            .ok_or(ActionError::NoCustomer)?;
        if !(MIN_BREW_INGREDIENTS..=MAX_BREW_INGREDIENTS).contains(&ingredient_names.len()) {
            return Err(ActionError::BadIngredientCount(ingredient_names.len()));
        }

        let catalog = self.catalog.as_ref().ok_or(ActionError::MissingCatalog)?;
        let mut picked: Vec<&Ingredient> = Vec::with_capacity(ingredient_names.len());
        for name in ingredient_names {
            let ingredient = catalog
                .find(name)
                .ok_or_else(|| ActionError::UnknownIngredient((*name).to_string()))?;
            if ingredient.finite_stock
                && self.inventory.get(&ingredient.name).copied().unwrap_or(0) <= 0
            {
                return Err(ActionError::OutOfStock(ingredient.name.clone()));
            }
            picked.push(ingredient);
        }

        let mixture = resolve_mixture(&picked);
        let permit_reagent_used = picked.iter().any(|i| i.name == PERMIT_REAGENT);
        let finite_used: Vec<String> = picked
            .iter()
            .filter(|i| i.finite_stock)
            .map(|i| i.name.clone())
            .collect();
        let used_names: Vec<String> = picked.iter().map(|i| i.name.clone()).collect();

        let outcome = resolve_outcome(
            &mixture,
            &OutcomeContext {
                customer: &customer,
                upgrades: &self.upgrades,
                helper: self.apprentice.as_ref(),
                permit_reagent_used,
            },
        );

        for name in finite_used {
            if let Some(stock) = self.inventory.get_mut(&name) {
                *stock -= 1;
            }
        }
        for name in used_names {
            self.discovered.insert(name);
        }

        self.apply_outcome(&customer, &outcome);
        Ok(outcome)
    }

    fn apply_outcome(&mut self, customer: &Customer, outcome: &BrewOutcome) {
        self.gold += outcome.gold_delta;
        self.gold_earned += outcome.gold_delta.max(0);
        self.reputation += outcome.reputation_delta;

        let (log_key, heat_gain) = match (outcome.kind, outcome.cause) {
            (OutcomeKind::Cured, _) => (LOG_BREW_CURED, 0),
            (OutcomeKind::Exploded, _) => (LOG_BREW_EXPLODED, HEAT_PER_EXPLOSION),
            (OutcomeKind::Poisoned, Some(PoisonCause::Inert)) => (LOG_BREW_INERT, 0),
            (OutcomeKind::Poisoned, _) => (LOG_BREW_POISONED, HEAT_PER_POISONING),
        };
        self.heat += heat_gain;
        self.push_log(log_key);

        self.history.push(BrewRecord {
            day: self.day,
            customer_id: customer.id,
            customer_class: customer.class,
            kind: outcome.kind,
            cause: outcome.cause,
            gold_delta: outcome.gold_delta,
            reputation_delta: outcome.reputation_delta,
            narrative: outcome.narrative.clone(),
        });
        self.current_customer = None;
        self.check_terminal_and_raid();
    }

    /// Reputation death first, then raids. Once the run is over no further
    /// mutation happens.
    fn check_terminal_and_raid(&mut self) {
        if self.is_over() {
            return;
        }
        if self.reputation <= 0.0 {
            self.phase = GamePhase::GameOver;
            self.push_log(LOG_GAME_OVER);
            return;
        }
        if self.heat >= HEAT_MAX {
            self.trigger_raid();
        }
    }

    fn trigger_raid(&mut self) {
        self.heat = HEAT_RAID_RESET;
        let fine = (self.gold * RAID_GOLD_FINE_PCT / 100).max(RAID_GOLD_FINE_MIN);
        self.gold = (self.gold - fine).max(0);
        // The watch confiscates anything Toxic on the shelves.
        if let Some(catalog) = self.catalog.as_ref() {
            for ingredient in &catalog.ingredients {
                if ingredient.has_tag(Tag::Toxic)
                    && let Some(stock) = self.inventory.get_mut(&ingredient.name)
                {
                    *stock = 0;
                }
            }
        }
        self.raids_survived += 1;
        self.phase = GamePhase::RaidEvent;
        self.push_log(LOG_RAID_TRIGGERED);
    }

    /// Dismiss the raid aftermath screen.
    ///
    /// # Errors
    ///
    /// Refused outside the `RaidEvent` phase.
    pub fn acknowledge_raid(&mut self) -> Result<(), ActionError> {
        self.guard_phase(GamePhase::RaidEvent)?;
        self.phase = GamePhase::Playing;
        self.push_log(LOG_RAID_CLEARED);
        Ok(())
    }

    // --- day cycle ----------------------------------------------------------

    /// Close the shop for the night and retire to the tavern.
    ///
    /// # Errors
    ///
    /// Refused outside the `Playing` phase.
    pub fn rest(&mut self) -> Result<(), ActionError> {
        self.guard_phase(GamePhase::Playing)?;
        self.current_customer = None;
        self.phase = GamePhase::TavernHub;
        self.push_log(LOG_SHOP_CLOSED);
        Ok(())
    }

    /// Advance to the next morning: heat decays, the apprentice's mission
    /// clock ticks, and the rival collects her tithe or forces an
    /// encounter. All multi-day behavior resolves here; there are no
    /// background timers.
    ///
    /// # Errors
    ///
    /// Refused outside the `TavernHub` phase.
    pub fn start_next_day(&mut self) -> Result<(), ActionError> {
        self.guard_phase(GamePhase::TavernHub)?;
        self.day += 1;
        self.phase = GamePhase::Playing;

        let mut decay = HEAT_DECAY_PER_NIGHT;
        if self
            .apprentice
            .as_ref()
            .is_some_and(|a| a.is_present() && a.archetype == Archetype::Scout)
        {
            decay += HEAT_SCOUT_DECAY_BONUS;
        }
        self.heat = (self.heat - decay).max(0);

        self.tick_apprentice();
        self.tick_rival();
        self.push_log(LOG_SHOP_OPENED);
        self.check_terminal_and_raid();
        Ok(())
    }

    fn tick_apprentice(&mut self) {
        let Some(mut apprentice) = self.apprentice.take() else {
            return;
        };
        let tick = {
            let rng = self.rng_mut();
            apprentice.tick_day(rng)
        };
        match tick {
            MissionTick::Succeeded { reward } => {
                self.gold += reward;
                self.gold_earned += reward;
                self.push_log(LOG_MISSION_SUCCESS);
            }
            MissionTick::Injured { .. } => self.push_log(LOG_MISSION_INJURY),
            MissionTick::Recovered => self.push_log(LOG_MISSION_RECOVERED),
            MissionTick::None | MissionTick::StillAway => {}
        }
        self.apprentice = Some(apprentice);
    }

    fn tick_rival(&mut self) {
        if !self.rival.is_active() {
            return;
        }
        let tithe = self.rival.nightly_tithe();
        if tithe > 0 && self.gold > 0 {
            self.gold = (self.gold - tithe).max(0);
            self.push_log(LOG_RIVAL_TITHE);
        }
        self.heat += self.rival.heat_pressure();

        let picked = {
            let Some(data) = self.encounter_data.clone() else {
                return;
            };
            let rival = self.rival.clone();
            let rng = self.rng_mut();
            data.pick(&rival, rng)
        };
        if let Some(encounter) = picked {
            self.pending_encounter = Some(encounter);
            self.phase = GamePhase::RivalEncounter;
            self.push_log(LOG_RIVAL_ENCOUNTER);
        }
    }

    /// Resolve the pending rival encounter with the chosen option,
    /// merging its effect payload into the state.
    ///
    /// # Errors
    ///
    /// Refused outside `RivalEncounter`, for an out-of-range choice, or
    /// when the choice costs more gold than the player holds.
    pub fn resolve_rival_choice(&mut self, choice_idx: usize) -> Result<(), ActionError> {
        self.guard_phase(GamePhase::RivalEncounter)?;
        let encounter = self
            .pending_encounter
            .as_ref()
            .ok_or(ActionError::WrongPhase)?;
        let effects = encounter
            .choices
            .get(choice_idx)
            .ok_or(ActionError::BadChoice)?
            .effects
            .clone();
        if effects.gold < 0 && self.gold + effects.gold < 0 {
            return Err(ActionError::InsufficientGold);
        }
        self.pending_encounter = None;

        self.gold += effects.gold;
        self.reputation += effects.reputation;
        self.heat = (self.heat + effects.heat).max(0);
        self.rival.market_share =
            (self.rival.market_share + effects.rival_market_share).clamp(0.0, 1.0);
        self.rival.aggression = (self.rival.aggression + effects.rival_aggression).max(0);
        if effects.rival_defense < 0 {
            match self.rival.take_defense_hit(-effects.rival_defense) {
                Some(RivalStatus::Injured) => self.push_log(LOG_RIVAL_INJURED),
                Some(RivalStatus::Defeated) => self.push_log(LOG_RIVAL_DEFEATED),
                _ => {}
            }
        }
        if let Some(log) = effects.log {
            self.push_log(&log);
        }

        self.phase = GamePhase::Playing;
        self.check_terminal_and_raid();
        Ok(())
    }

    // --- economy actions ----------------------------------------------------

    /// Pay off the watch to shed heat. Bounded below by the minimum-heat
    /// gate: the desk sergeant has nothing to erase past that.
    ///
    /// # Errors
    ///
    /// Refused when heat is at or below the gate, or gold is short.
    pub fn bribe(&mut self) -> Result<(), ActionError> {
        if self.is_over() {
            return Err(ActionError::GameOver);
        }
        if !matches!(self.phase, GamePhase::Playing | GamePhase::TavernHub) {
            return Err(ActionError::WrongPhase);
        }
        if self.heat <= BRIBE_MIN_HEAT {
            return Err(ActionError::HeatTooLow);
        }
        if self.gold < BRIBE_COST_GOLD {
            return Err(ActionError::InsufficientGold);
        }
        self.gold -= BRIBE_COST_GOLD;
        self.bribes_spent += BRIBE_COST_GOLD;
        self.heat = (self.heat - BRIBE_HEAT_RELIEF).max(BRIBE_MIN_HEAT);
        self.push_log(LOG_BRIBE_PAID);
        Ok(())
    }

    /// Donate to the temple poor-box for reputation.
    ///
    /// # Errors
    ///
    /// Refused for non-positive amounts or insufficient gold.
    pub fn donate(&mut self, gold: i64) -> Result<f32, ActionError> {
        if self.is_over() {
            return Err(ActionError::GameOver);
        }
        if !matches!(self.phase, GamePhase::Playing | GamePhase::TavernHub) {
            return Err(ActionError::WrongPhase);
        }
        if gold <= 0 || gold > self.gold {
            return Err(ActionError::InsufficientGold);
        }
        self.gold -= gold;
        self.donations_given += gold;
        #[allow(clippy::cast_precision_loss)]
        let gained = gold as f32 / DONATION_GOLD_PER_REPUTATION as f32;
        self.reputation += gained;
        self.push_log(LOG_DONATION);
        Ok(gained)
    }

    fn store_discount_pct(&self) -> f64 {
        self.apprentice
            .as_ref()
            .map_or(0.0, Apprentice::store_discount_pct)
    }

    /// Buy a single store item, applying its grants.
    ///
    /// # Errors
    ///
    /// Refused when the item is unknown, a unique item is already owned,
    /// or gold is short.
    pub fn purchase(&mut self, store: &Store, item_id: &str) -> Result<(), ActionError> {
        if self.is_over() {
            return Err(ActionError::GameOver);
        }
        if !matches!(self.phase, GamePhase::Playing | GamePhase::TavernHub) {
            return Err(ActionError::WrongPhase);
        }
        let item = store
            .find_item(item_id)
            .ok_or(ActionError::PurchaseRefused)?;
        if item.unique
            && let Some(upgrade) = item.grants.upgrade.as_deref()
            && self.upgrades.owns(upgrade)
        {
            return Err(ActionError::PurchaseRefused);
        }
        let price = calculate_effective_price(item.price, self.store_discount_pct());
        if price > self.gold {
            return Err(ActionError::InsufficientGold);
        }
        self.gold -= price;
        self.apply_grants(item_id, store);
        self.push_log(LOG_PURCHASE);
        Ok(())
    }

    fn apply_grants(&mut self, item_id: &str, store: &Store) {
        let Some(item) = store.find_item(item_id) else {
            return;
        };
        let grants = item.grants.clone();
        if let Some(reagent) = grants.reagent {
            *self.inventory.entry(reagent).or_insert(0) += grants.reagent_qty.max(0);
        }
        if let Some(upgrade) = grants.upgrade {
            self.upgrades.grant(&upgrade);
        }
        if grants.heat_relief > 0 {
            self.heat = (self.heat - grants.heat_relief).max(0);
        }
    }

    /// Buy everything in the cart at once. The cart is cleared on success.
    /// Every line passes the same checks as a single purchase before any
    /// gold moves.
    ///
    /// # Errors
    ///
    /// Refused outside `Playing`/`TavernHub`, for unknown items, for
    /// unique items already owned or carted more than once, for lines
    /// over `max_qty`, or when the total exceeds the player's gold; no
    /// partial purchase happens.
    pub fn checkout_cart(&mut self, store: &Store, cart: &mut Cart) -> Result<i64, ActionError> {
        if self.is_over() {
            return Err(ActionError::GameOver);
        }
        if !matches!(self.phase, GamePhase::Playing | GamePhase::TavernHub) {
            return Err(ActionError::WrongPhase);
        }
        for line in &cart.lines {
            let item = store
                .find_item(&line.item_id)
                .ok_or(ActionError::PurchaseRefused)?;
            if line.qty > item.max_qty {
                return Err(ActionError::PurchaseRefused);
            }
            if item.unique
                && let Some(upgrade) = item.grants.upgrade.as_deref()
                && (line.qty > 1 || self.upgrades.owns(upgrade))
            {
                return Err(ActionError::PurchaseRefused);
            }
        }
        let total = calculate_cart_total(cart, store, self.store_discount_pct());
        if total > self.gold {
            return Err(ActionError::InsufficientGold);
        }
        self.gold -= total;
        for line in cart.lines.clone() {
            for _ in 0..line.qty {
                self.apply_grants(&line.item_id, store);
            }
        }
        cart.clear();
        self.push_log(LOG_PURCHASE);
        Ok(total)
    }

    // --- apprentice ---------------------------------------------------------

    /// Hire an apprentice. One at a time.
    ///
    /// # Errors
    ///
    /// Refused when someone is already employed or gold is short.
    pub fn hire_apprentice(&mut self, name: &str, archetype: Archetype) -> Result<(), ActionError> {
        if self.is_over() {
            return Err(ActionError::GameOver);
        }
        if self.apprentice.is_some() {
            return Err(ActionError::AlreadyHired);
        }
        let cost = archetype.hire_cost();
        if self.gold < cost {
            return Err(ActionError::InsufficientGold);
        }
        self.gold -= cost;
        self.apprentice = Some(Apprentice::new(name, archetype));
        self.push_log(LOG_APPRENTICE_HIRED);
        Ok(())
    }

    /// Send the apprentice out on a multi-day mission.
    ///
    /// # Errors
    ///
    /// Refused with no apprentice or one who is away or injured.
    pub fn assign_mission(&mut self) -> Result<(), ActionError> {
        if self.is_over() {
            return Err(ActionError::GameOver);
        }
        let apprentice = self
            .apprentice
            .as_mut()
            .ok_or(ActionError::NoApprentice)?;
        if !apprentice.assign_mission() {
            return Err(ActionError::ApprenticeUnavailable);
        }
        self.push_log(LOG_MISSION_ASSIGNED);
        Ok(())
    }

    // --- reset ----------------------------------------------------------------

    /// Full reset back to the title screen. The only exit from `GameOver`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
