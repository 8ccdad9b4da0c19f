//! Outcome resolver: mixture plus customer to a structured brew result
use serde::{Deserialize, Serialize};

use crate::apprentice::{Apprentice, Archetype};
use crate::brew::Mixture;
use crate::constants::{
    CURE_BASE_GOLD, CURE_BASE_REPUTATION, EXPLOSION_REPUTATION_LOSS,
    EXPLOSION_REPUTATION_LOSS_GUARDED, GUILD_SEAL_GOLD_BONUS, INERT_REPUTATION_LOSS,
    PERMIT_GOLD_BONUS, POISON_REPUTATION_LOSS, POISON_REPUTATION_LOSS_VENTED,
};
use crate::customer::{Customer, CustomerClass};
use crate::tags::Tag;
use crate::upgrades::Upgrades;

/// How a served brew landed. Inert mixtures share the `Poisoned` kind with
/// genuine toxin cases (the shared visual treatment is deliberate); the
/// `cause` field on [`BrewOutcome`] keeps the two apart internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Cured,
    Poisoned,
    Exploded,
}

impl OutcomeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cured => "cured",
            Self::Poisoned => "poisoned",
            Self::Exploded => "exploded",
        }
    }
}

/// Why a `Poisoned` outcome happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoisonCause {
    /// The mixture carried a live Toxic tag.
    Toxin,
    /// The mixture did nothing for the complaint.
    Inert,
}

/// Structured result of serving a brew to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewOutcome {
    pub kind: OutcomeKind,
    pub gold_delta: i64,
    pub reputation_delta: f32,
    pub narrative: String,
    #[serde(default)]
    pub cause: Option<PoisonCause>,
}

/// Everything the resolver reads besides the mixture itself.
pub struct OutcomeContext<'a> {
    pub customer: &'a Customer,
    pub upgrades: &'a Upgrades,
    pub helper: Option<&'a Apprentice>,
    /// Whether the permit-restricted reagent was among the ingredients.
    pub permit_reagent_used: bool,
}

/// Resolve a mixture against a customer. Pure and total; priority order is
/// fatal, cured, toxic, then inert. Callers pre-validate ingredient counts.
#[must_use]
pub fn resolve_outcome(mixture: &Mixture, ctx: &OutcomeContext<'_>) -> BrewOutcome {
    let class = ctx.customer.class;

    if mixture.fatal {
        // Upgrade takes precedence over the guard discount; no stacking.
        let reputation_delta = if ctx.upgrades.reinforced_cauldron {
            0.0
        } else if has_guard_helper(ctx) {
            EXPLOSION_REPUTATION_LOSS_GUARDED
        } else {
            EXPLOSION_REPUTATION_LOSS
        };
        return BrewOutcome {
            kind: OutcomeKind::Exploded,
            gold_delta: 0,
            reputation_delta,
            narrative: narrative(OutcomeKind::Exploded, None, ctx.customer),
            cause: None,
        };
    }

    let required_met = ctx
        .customer
        .symptom
        .required_tags
        .iter()
        .all(|tag| mixture.has_tag(*tag));
    let toxic = mixture.has_tag(Tag::Toxic);
    let dark_ok = !mixture.has_tag(Tag::Dark) || class.tolerates_dark();

    if required_met && !toxic && dark_ok {
        let gold_mult = class.gold_mult();
        #[allow(clippy::cast_possible_truncation)]
        let mut gold_delta = if gold_mult <= 0.0 {
            0
        } else {
            (CURE_BASE_GOLD * gold_mult).round() as i64
        };
        // Flat bonuses are additive and independent.
        if ctx.upgrades.guild_seal {
            gold_delta += GUILD_SEAL_GOLD_BONUS;
        }
        if ctx.upgrades.mandrake_permit && ctx.permit_reagent_used {
            gold_delta += PERMIT_GOLD_BONUS;
        }
        return BrewOutcome {
            kind: OutcomeKind::Cured,
            gold_delta,
            reputation_delta: CURE_BASE_REPUTATION * class.rep_success_mult(),
            narrative: narrative(OutcomeKind::Cured, None, ctx.customer),
            cause: None,
        };
    }

    if toxic {
        let reputation_delta = if ctx.upgrades.ventilation {
            POISON_REPUTATION_LOSS_VENTED
        } else {
            POISON_REPUTATION_LOSS
        };
        return BrewOutcome {
            kind: OutcomeKind::Poisoned,
            gold_delta: 0,
            reputation_delta,
            narrative: narrative(OutcomeKind::Poisoned, Some(PoisonCause::Toxin), ctx.customer),
            cause: Some(PoisonCause::Toxin),
        };
    }

    BrewOutcome {
        kind: OutcomeKind::Poisoned,
        gold_delta: 0,
        reputation_delta: INERT_REPUTATION_LOSS,
        narrative: narrative(OutcomeKind::Poisoned, Some(PoisonCause::Inert), ctx.customer),
        cause: Some(PoisonCause::Inert),
    }
}

fn has_guard_helper(ctx: &OutcomeContext<'_>) -> bool {
    ctx.helper
        .is_some_and(|a| a.archetype == Archetype::Guard && a.is_present())
}

fn narrative(kind: OutcomeKind, cause: Option<PoisonCause>, customer: &Customer) -> String {
    let voice = match (kind, cause, customer.class) {
        (OutcomeKind::Cured, _, CustomerClass::Noble) => {
            "sniffs the vial, drains it, and declares the vintage acceptable"
        }
        (OutcomeKind::Cured, _, CustomerClass::Guard) => {
            "knocks it back on duty and salutes with fresh color in the cheeks"
        }
        (OutcomeKind::Cured, _, CustomerClass::Cultist) => {
            "whispers thanks to something that is not you and glides out cured"
        }
        (OutcomeKind::Cured, _, CustomerClass::Beggar) => {
            "drinks, weeps with relief, and promises to tell the whole square"
        }
        (OutcomeKind::Cured, _, _) => "gulps it down and beams as the ailment lifts",
        (OutcomeKind::Poisoned, Some(PoisonCause::Inert), _) => {
            "finishes the draught, waits, and leaves looking exactly as sick as before"
        }
        (OutcomeKind::Poisoned, _, CustomerClass::Noble) => {
            "turns an expensive shade of green and vows to tell every salon in the city"
        }
        (OutcomeKind::Poisoned, _, CustomerClass::Guard) => {
            "doubles over mid-patrol and files a very official complaint"
        }
        (OutcomeKind::Poisoned, _, _) => "staggers out clutching their stomach",
        (OutcomeKind::Exploded, _, CustomerClass::Cultist) => {
            "watches the cauldron detonate and applauds the omen"
        }
        (OutcomeKind::Exploded, _, _) => "dives for cover as the cauldron blows its lid",
    };
    format!("The {} {voice}.", customer.class.display_name())
}
