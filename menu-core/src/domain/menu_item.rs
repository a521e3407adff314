//! Menu Item Entity
//!
//! Items are fetched read-only from the menu API and never mutated by the client.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::entity::{Entity, MenuError};

/// Dietary labels offered as filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    GlutenFree,
}

impl DietaryTag {
    pub const ALL: [DietaryTag; 3] = [DietaryTag::Vegetarian, DietaryTag::Vegan, DietaryTag::GlutenFree];

    /// Wire value, as found in `MenuItem::dietary`
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "vegetarian",
            DietaryTag::Vegan => "vegan",
            DietaryTag::GlutenFree => "gluten-free",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "Vegetarian",
            DietaryTag::Vegan => "Vegan",
            DietaryTag::GlutenFree => "Gluten-Free",
        }
    }
}

impl FromStr for DietaryTag {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietaryTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| MenuError::InvalidInput(format!("unknown dietary tag '{}'", s)))
    }
}

impl fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dish on the menu (matches the `/menuItems` payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub category: String,
    #[serde(default)]
    pub image: String,
    /// Dietary labels such as "vegetarian" or "gluten-free"
    #[serde(default)]
    pub dietary: Vec<String>,
    #[serde(default)]
    pub popular: bool,
    /// 0 (none) to 3 (hot)
    #[serde(default)]
    pub spicy_level: u8,
    /// Minutes
    #[serde(default)]
    pub preparation_time: u32,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            category: String::new(),
            image: String::new(),
            dietary: Vec::new(),
            popular: false,
            spicy_level: 0,
            preparation_time: 0,
        }
    }

    pub fn has_dietary(&self, tag: DietaryTag) -> bool {
        self.dietary.iter().any(|t| t.eq_ignore_ascii_case(tag.as_str()))
    }

    pub fn spice_label(&self) -> &'static str {
        match self.spicy_level {
            0 => "None",
            1 => "Mild",
            2 => "Medium",
            _ => "Hot",
        }
    }

    pub fn is_spicy(&self) -> bool {
        self.spicy_level > 0
    }
}

impl Entity for MenuItem {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// Round a currency amount to whole cents
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Render an amount as "$12.50"
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Accepts identifiers sent either as JSON strings or numbers
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_item() {
        let json = r#"{
            "id": "m1",
            "name": "Chicken Curry",
            "description": "Slow cooked",
            "price": 14.5,
            "category": "mains",
            "image": "/img/curry.jpg",
            "dietary": ["gluten-free"],
            "popular": true,
            "spicyLevel": 2,
            "preparationTime": 25
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "m1");
        assert_eq!(item.spicy_level, 2);
        assert_eq!(item.preparation_time, 25);
        assert!(item.popular);
        assert!(item.has_dietary(DietaryTag::GlutenFree));
        assert!(!item.has_dietary(DietaryTag::Vegan));
    }

    #[test]
    fn test_numeric_ids_and_missing_fields() {
        let item: MenuItem = serde_json::from_str(r#"{"id": 7, "name": "Soup", "price": 5, "category": 2}"#).unwrap();
        assert_eq!(item.id(), "7");
        assert_eq!(item.category, "2");
        assert!(item.dietary.is_empty());
        assert!(!item.popular);
        assert_eq!(item.spice_label(), "None");
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut item = MenuItem::new("1", "Wings", 9.0);
        item.spicy_level = 3;
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["spicyLevel"], 3);
        assert!(value.get("preparationTime").is_some());
    }

    #[test]
    fn test_spice_label_clamps() {
        let mut item = MenuItem::new("1", "Vindaloo", 12.0);
        item.spicy_level = 9;
        assert_eq!(item.spice_label(), "Hot");
        assert!(item.is_spicy());
    }

    #[test]
    fn test_dietary_tag_parsing() {
        assert_eq!("gluten-free".parse::<DietaryTag>().unwrap(), DietaryTag::GlutenFree);
        assert!("paleo".parse::<DietaryTag>().is_err());
        assert_eq!(DietaryTag::Vegan.to_string(), "vegan");
    }

    #[test]
    fn test_price_helpers() {
        assert_eq!(format_price(9.5), "$9.50");
        assert_eq!(round_cents(0.1 + 0.2), 0.3);
    }
}
