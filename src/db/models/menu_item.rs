//! Menu Item Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// Menu item ID type
pub type MenuItemId = RecordId;

/// Dish or product on a restaurant's menu.
///
/// `category` here is a free-text grouping label within the menu
/// ("drinks", "mains"); it is unrelated to the [`Category`](super::Category)
/// entity used for storefront browsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<MenuItemId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: i64,
    pub image: String,
    pub category: String,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_available: bool,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_special_offer: bool,
    /// Pre-discount price, shown struck through when `is_special_offer`
    #[serde(default)]
    pub original_price: Option<i64>,
    #[serde(default)]
    pub restaurant_id: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price: i64,
    #[validate(length(min = 1))]
    pub image: String,
    #[validate(length(min = 1))]
    pub category: String,
    pub is_available: Option<bool>,
    pub is_special_offer: Option<bool>,
    #[validate(range(min = 0))]
    pub original_price: Option<i64>,
    pub restaurant_id: Option<String>,
}

/// Update menu item payload (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_special_offer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub original_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,
}

impl MenuItem {
    /// Build a record from a create payload, applying defaults
    pub fn from_create(data: MenuItemCreate) -> Self {
        Self {
            id: None,
            name: data.name,
            description: data.description,
            price: data.price,
            image: data.image,
            category: data.category,
            is_available: data.is_available.unwrap_or(true),
            is_special_offer: data.is_special_offer.unwrap_or(false),
            original_price: data.original_price,
            restaurant_id: data.restaurant_id,
        }
    }
}
