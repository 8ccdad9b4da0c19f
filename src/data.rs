use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::tags::Tag;

/// Display handle for a reagent. The logic layer never interprets this;
/// the presentation layer resolves glyph text or a symbol id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Icon {
    Glyph(String),
    SymbolRef(String),
}

impl Default for Icon {
    fn default() -> Self {
        Self::Glyph(String::new())
    }
}

/// A reagent available for brewing. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub tags: SmallVec<[Tag; 4]>,
    #[serde(default)]
    pub icon: Icon,
    /// Purchase price in gold; None means not sold in the store.
    #[serde(default)]
    pub cost: Option<i64>,
    /// Finite-stock reagents are tracked in the player inventory.
    #[serde(default)]
    pub finite_stock: bool,
    /// Name of the reagent this one refines into, if any.
    #[serde(default)]
    pub processed_form: Option<String>,
}

impl Ingredient {
    #[must_use]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Container for the full reagent table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IngredientCatalog {
    pub ingredients: Vec<Ingredient>,
}

impl IngredientCatalog {
    /// Create an empty catalog (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            ingredients: Vec::new(),
        }
    }

    /// Load the catalog from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid reagent data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Create a catalog from pre-parsed ingredients
    #[must_use]
    pub fn from_ingredients(ingredients: Vec<Ingredient>) -> Self {
        Self { ingredients }
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.name == name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.ingredients.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// The standard reagent table shipped with the game. External data can
    /// replace it, but the built-in set keeps the core loop playable and
    /// gives tests a stable fixture.
    #[must_use]
    pub fn builtin() -> Self {
        fn glyph(s: &str) -> Icon {
            Icon::Glyph(s.to_string())
        }
        let reagent = |name: &str, tags: SmallVec<[Tag; 4]>, icon: Icon, cost: Option<i64>| {
            Ingredient {
                name: name.to_string(),
                tags,
                icon,
                cost,
                finite_stock: false,
                processed_form: None,
            }
        };

        let mut ingredients = vec![
            reagent(
                "Moonstone",
                smallvec![Tag::Cooling, Tag::Holy],
                Icon::SymbolRef("moonstone".to_string()),
                Some(8),
            ),
            reagent("Sage", smallvec![Tag::Purifying, Tag::Calming], glyph("🌿"), Some(4)),
            reagent("Mercury", smallvec![Tag::Toxic, Tag::Heavy], glyph("💧"), Some(12)),
            reagent("Nightshade", smallvec![Tag::Toxic, Tag::Dark], glyph("🥀"), Some(6)),
            reagent("Ember Pepper", smallvec![Tag::Hot], glyph("🌶"), Some(3)),
            reagent("Frostcap", smallvec![Tag::Cooling, Tag::Soothing], glyph("🍄"), Some(5)),
            reagent("Blessed Water", smallvec![Tag::Holy, Tag::Purifying], glyph("💦"), Some(7)),
            reagent("Gravebloom", smallvec![Tag::Dark, Tag::Heavy], glyph("🌑"), Some(9)),
            reagent("Lavender", smallvec![Tag::Calming, Tag::Soothing], glyph("💐"), Some(4)),
            reagent(
                "Dragonroot",
                smallvec![Tag::Hot, Tag::Binding],
                Icon::SymbolRef("dragonroot".to_string()),
                Some(10),
            ),
        ];

        // Permit-restricted contraband: finite stock, refined from Gravebloom.
        ingredients.push(Ingredient {
            name: "Mandrake Root".to_string(),
            tags: smallvec![Tag::Dark, Tag::Binding],
            icon: Icon::SymbolRef("mandrake".to_string()),
            cost: Some(20),
            finite_stock: true,
            processed_form: None,
        });
        if let Some(gravebloom) = ingredients.iter_mut().find(|i| i.name == "Gravebloom") {
            gravebloom.processed_form = Some("Mandrake Root".to_string());
        }

        Self { ingredients }
    }
}
