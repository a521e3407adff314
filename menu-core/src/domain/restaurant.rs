//! Restaurant and Category Entities

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::menu_item::deserialize_id;

/// Identifier of the synthetic "View All" category
pub const ALL_CATEGORY_ID: &str = "all";

/// Restaurant profile shown in the hero and footer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Restaurant {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub hours: String,
}

/// Menu category used for navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
        }
    }

    /// The client-side entry placed ahead of the fetched categories
    pub fn all() -> Self {
        Self {
            id: ALL_CATEGORY_ID.to_string(),
            name: "View All".to_string(),
            icon: Some("🍽️".to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY_ID
    }
}

impl Entity for Category {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}
