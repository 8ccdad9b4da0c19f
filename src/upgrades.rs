//! Shop upgrade flags
use serde::{Deserialize, Serialize};

/// Name of the reagent whose use pays a bonus once its permit is owned.
pub const PERMIT_REAGENT: &str = "Mandrake Root";

/// Permanent shop upgrades. Each is bought once from the store and then
/// read by the outcome resolver and the heat/raid machinery.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Upgrades {
    /// Absorbs explosions: reputation loss on a fatal brew becomes zero.
    #[serde(default)]
    pub reinforced_cauldron: bool,
    /// Softens poisoning fallout: -5 reputation becomes -2.
    #[serde(default)]
    pub ventilation: bool,
    /// Guild membership: flat +5 gold on every cure.
    #[serde(default)]
    pub guild_seal: bool,
    /// Legal cover for mandrake: +10 gold when it is used in a cure.
    #[serde(default)]
    pub mandrake_permit: bool,
}

impl Upgrades {
    /// Apply a purchased upgrade by id. Returns false for unknown ids or
    /// upgrades already owned.
    pub fn grant(&mut self, id: &str) -> bool {
        let slot = match id {
            "reinforced_cauldron" => &mut self.reinforced_cauldron,
            "ventilation" => &mut self.ventilation,
            "guild_seal" => &mut self.guild_seal,
            "mandrake_permit" => &mut self.mandrake_permit,
            _ => return false,
        };
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    #[must_use]
    pub fn owns(&self, id: &str) -> bool {
        match id {
            "reinforced_cauldron" => self.reinforced_cauldron,
            "ventilation" => self.ventilation,
            "guild_seal" => self.guild_seal,
            "mandrake_permit" => self.mandrake_permit,
            _ => false,
        }
    }
}
