//! Cart Line Entity
//!
//! One orderable entry in the cart, unique per (item id, size).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::menu_item::{round_cents, MenuItem};

/// Portion size chosen when adding an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeVariant {
    #[default]
    Small,
    Medium,
    Large,
}

impl SizeVariant {
    pub const ALL: [SizeVariant; 3] = [SizeVariant::Small, SizeVariant::Medium, SizeVariant::Large];

    /// Amount added to the item's base price
    pub fn price_modifier(&self) -> f64 {
        match self {
            SizeVariant::Small => 0.0,
            SizeVariant::Medium => 2.0,
            SizeVariant::Large => 4.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeVariant::Small => "small",
            SizeVariant::Medium => "medium",
            SizeVariant::Large => "large",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizeVariant::Small => "Small",
            SizeVariant::Medium => "Medium",
            SizeVariant::Large => "Large",
        }
    }

    /// Base price plus this size's modifier
    pub fn unit_price(&self, base_price: f64) -> f64 {
        round_cents(base_price + self.price_modifier())
    }
}

/// Identity of a cart line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartLineKey {
    pub item_id: String,
    pub size: SizeVariant,
}

impl CartLineKey {
    pub fn new(item_id: impl Into<String>, size: SizeVariant) -> Self {
        Self {
            item_id: item_id.into(),
            size,
        }
    }
}

impl fmt::Display for CartLineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.item_id, self.size.as_str())
    }
}

/// A line in the cart (persisted under the `cart` key)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub base_price: f64,
    pub size: SizeVariant,
    /// Always >= 1
    pub quantity: u32,
    pub unit_price: f64,
}

impl CartLine {
    pub fn new(item: &MenuItem, size: SizeVariant, quantity: u32) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            image: item.image.clone(),
            base_price: item.price,
            size,
            quantity,
            unit_price: size.unit_price(item.price),
        }
    }

    pub fn key(&self) -> CartLineKey {
        CartLineKey::new(self.item_id.clone(), self.size)
    }

    pub fn subtotal(&self) -> f64 {
        round_cents(self.unit_price * f64::from(self.quantity))
    }
}

impl Entity for CartLine {
    type Id = CartLineKey;

    fn id(&self) -> Self::Id {
        self.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_price_includes_size_modifier() {
        let item = MenuItem::new("b1", "Burger", 10.5);
        assert_eq!(CartLine::new(&item, SizeVariant::Small, 1).unit_price, 10.5);
        assert_eq!(CartLine::new(&item, SizeVariant::Medium, 1).unit_price, 12.5);
        assert_eq!(CartLine::new(&item, SizeVariant::Large, 1).unit_price, 14.5);
    }

    #[test]
    fn test_subtotal() {
        let item = MenuItem::new("b1", "Burger", 3.3);
        let line = CartLine::new(&item, SizeVariant::Small, 3);
        assert_eq!(line.subtotal(), 9.9);
    }

    #[test]
    fn test_key_distinguishes_sizes() {
        let item = MenuItem::new("b1", "Burger", 10.0);
        let small = CartLine::new(&item, SizeVariant::Small, 1);
        let large = CartLine::new(&item, SizeVariant::Large, 1);
        assert_ne!(small.id(), large.id());
        assert_eq!(small.key().to_string(), "b1:small");
    }

    #[test]
    fn test_line_round_trips_through_json() {
        let item = MenuItem::new("b1", "Burger", 10.0);
        let line = CartLine::new(&item, SizeVariant::Medium, 2);
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"size\":\"medium\""));
        assert!(json.contains("\"unitPrice\":12.0"));
        let back: CartLine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
