//! Store management and shopping cart
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single item available in the shop's supplier list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreItem {
    pub id: String,
    pub name: String,
    pub desc: String,
    /// Price in gold
    pub price: i64,
    /// Whether this item can only be purchased once (upgrades)
    pub unique: bool,
    /// Maximum quantity that can be purchased per visit
    pub max_qty: i32,
    /// Grants applied when purchased
    pub grants: Grants,
    pub category: String,
}

/// Category of items in the store.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<StoreItem>,
}

/// Complete supplier price list.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Store {
    pub categories: Vec<StoreCategory>,
}

/// Grants applied to the player when purchasing an item.
/// All fields default to empty/zero if not specified in JSON.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Grants {
    /// Finite-stock reagent restocked by this purchase.
    #[serde(default)]
    pub reagent: Option<String>,
    #[serde(default)]
    pub reagent_qty: i32,
    /// Upgrade flag granted by this purchase.
    #[serde(default)]
    pub upgrade: Option<String>,
    /// Heat relief (services such as laundered ledgers).
    #[serde(default)]
    pub heat_relief: i32,
}

/// A line item in the shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: String,
    pub qty: i32,
}

/// Shopping cart state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a cart line by item ID.
    #[must_use]
    pub fn find_line(&self, item_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item_id == item_id)
    }

    fn find_line_mut(&mut self, item_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.item_id == item_id)
    }

    /// Add quantity to an item in the cart.
    /// Returns the new quantity for that item.
    pub fn add_item(&mut self, item_id: &str, qty_to_add: i32) -> i32 {
        if let Some(line) = self.find_line_mut(item_id) {
            line.qty += qty_to_add;
            line.qty
        } else {
            self.lines.push(CartLine {
                item_id: item_id.to_string(),
                qty: qty_to_add,
            });
            qty_to_add
        }
    }

    /// Remove quantity from an item in the cart.
    /// Returns the new quantity (0 if line is removed).
    pub fn remove_item(&mut self, item_id: &str, qty_to_remove: i32) -> i32 {
        if let Some(line) = self.find_line_mut(item_id) {
            line.qty = (line.qty - qty_to_remove).max(0);
            if line.qty == 0 {
                self.lines.retain(|l| l.item_id != item_id);
                0
            } else {
                line.qty
            }
        } else {
            0
        }
    }

    /// Clear the entire cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Get the current quantity of an item in the cart.
    #[must_use]
    pub fn get_quantity(&self, item_id: &str) -> i32 {
        self.find_line(item_id).map_or(0, |line| line.qty)
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Store {
    /// Find an item by ID across all categories.
    #[must_use]
    pub fn find_item(&self, item_id: &str) -> Option<&StoreItem> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .find(|item| item.id == item_id)
    }

    /// Get all items as a flat map by ID.
    #[must_use]
    pub fn items_by_id(&self) -> HashMap<String, &StoreItem> {
        let mut map = HashMap::new();
        for category in &self.categories {
            for item in &category.items {
                map.insert(item.id.clone(), item);
            }
        }
        map
    }

    /// Load the store from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid store data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The supplier list shipped with the game.
    #[must_use]
    pub fn builtin() -> Self {
        fn reagent(id: &str, name: &str, price: i64, qty: i32) -> StoreItem {
            StoreItem {
                id: id.to_string(),
                name: name.to_string(),
                desc: format!("Restocks {qty} measure(s) of {name}."),
                price,
                unique: false,
                max_qty: 5,
                grants: Grants {
                    reagent: Some(name.to_string()),
                    reagent_qty: qty,
                    ..Grants::default()
                },
                category: "reagents".to_string(),
            }
        }
        fn upgrade(id: &str, name: &str, desc: &str, price: i64) -> StoreItem {
            StoreItem {
                id: id.to_string(),
                name: name.to_string(),
                desc: desc.to_string(),
                price,
                unique: true,
                max_qty: 1,
                grants: Grants {
                    upgrade: Some(id.to_string()),
                    ..Grants::default()
                },
                category: "upgrades".to_string(),
            }
        }

        Self {
            categories: vec![
                StoreCategory {
                    id: "reagents".to_string(),
                    name: "Reagents".to_string(),
                    items: vec![reagent("mandrake_root", "Mandrake Root", 20, 1)],
                },
                StoreCategory {
                    id: "upgrades".to_string(),
                    name: "Upgrades".to_string(),
                    items: vec![
                        upgrade(
                            "reinforced_cauldron",
                            "Reinforced Cauldron",
                            "Dwarven iron. Explosions stay inside it.",
                            60,
                        ),
                        upgrade(
                            "ventilation",
                            "Ventilation Shafts",
                            "Fumes leave before the customers notice.",
                            40,
                        ),
                        upgrade(
                            "guild_seal",
                            "Guild Seal",
                            "Licensed premises command better fees.",
                            50,
                        ),
                        upgrade(
                            "mandrake_permit",
                            "Mandrake Permit",
                            "Legal cover for the cellar stock.",
                            45,
                        ),
                    ],
                },
                StoreCategory {
                    id: "services".to_string(),
                    name: "Services".to_string(),
                    items: vec![StoreItem {
                        id: "laundered_ledgers".to_string(),
                        name: "Laundered Ledgers".to_string(),
                        desc: "A bookkeeper who asks no questions.".to_string(),
                        price: 15,
                        unique: false,
                        max_qty: 1,
                        grants: Grants {
                            heat_relief: 5,
                            ..Grants::default()
                        },
                        category: "services".to_string(),
                    }],
                },
            ],
        }
    }
}

/// Calculate the effective price after an apprentice discount.
/// Returns price in gold, rounded up.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn calculate_effective_price(base_price: i64, discount_pct: f64) -> i64 {
    if discount_pct <= 0.0 {
        return base_price;
    }

    let multiplier = 1.0 - (discount_pct / 100.0);
    let discounted = base_price as f64 * multiplier;
    discounted.ceil() as i64
}

/// Calculate the total cost of a cart with the discount applied.
#[must_use]
pub fn calculate_cart_total(cart: &Cart, store: &Store, discount_pct: f64) -> i64 {
    let mut total = 0i64;

    for line in &cart.lines {
        if let Some(item) = store.find_item(&line.item_id) {
            let effective_price = calculate_effective_price(item.price, discount_pct);
            total += effective_price * i64::from(line.qty);
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_accumulates_and_removes_lines() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item("mandrake_root", 2), 2);
        assert_eq!(cart.add_item("mandrake_root", 1), 3);
        assert_eq!(cart.remove_item("mandrake_root", 2), 1);
        assert_eq!(cart.remove_item("mandrake_root", 5), 0);
        assert!(cart.is_empty());
        assert_eq!(cart.remove_item("missing", 1), 0);
    }

    #[test]
    fn effective_price_rounds_up() {
        assert_eq!(calculate_effective_price(20, 0.0), 20);
        assert_eq!(calculate_effective_price(20, 10.0), 18);
        // 15 gold at 10% off is 13.5, charged as 14.
        assert_eq!(calculate_effective_price(15, 10.0), 14);
    }

    #[test]
    fn cart_total_applies_discount_per_line() {
        let store = Store::builtin();
        let mut cart = Cart::new();
        cart.add_item("mandrake_root", 2);
        cart.add_item("laundered_ledgers", 1);
        assert_eq!(calculate_cart_total(&cart, &store, 0.0), 2 * 20 + 15);
        assert_eq!(calculate_cart_total(&cart, &store, 10.0), 2 * 18 + 14);
    }

    #[test]
    fn builtin_store_upgrades_are_unique() {
        let store = Store::builtin();
        let by_id = store.items_by_id();
        for id in [
            "reinforced_cauldron",
            "ventilation",
            "guild_seal",
            "mandrake_permit",
        ] {
            let item = by_id.get(id).unwrap_or_else(|| panic!("missing {id}"));
            assert!(item.unique);
            assert_eq!(item.grants.upgrade.as_deref(), Some(id));
        }
    }
}
