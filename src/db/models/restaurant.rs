//! Restaurant Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// Restaurant ID type
pub type RestaurantId = RecordId;

/// Restaurant / shop listed on the storefront.
///
/// `category_id` is a plain reference string and is not checked for existence
/// at write time. `rating` is kept as decimal text ("4.8") since it is only
/// ever displayed, never computed on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RestaurantId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image: String,
    #[serde(default = "default_rating")]
    pub rating: String,
    #[serde(default)]
    pub review_count: i32,
    /// Display string, e.g. "30-45 minutes" or "opens at 8:00"
    pub delivery_time: String,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_open: bool,
    #[serde(default)]
    pub minimum_order: i64,
    #[serde(default)]
    pub delivery_fee: i64,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_rating() -> String {
    "0.0".to_string()
}

fn default_true() -> bool {
    true
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCreate {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub image: String,
    pub rating: Option<String>,
    pub review_count: Option<i32>,
    #[validate(length(min = 1))]
    pub delivery_time: String,
    pub is_open: Option<bool>,
    #[validate(range(min = 0))]
    pub minimum_order: Option<i64>,
    #[validate(range(min = 0))]
    pub delivery_fee: Option<i64>,
    pub category_id: Option<String>,
}

/// Update restaurant payload (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub minimum_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub delivery_fee: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl Restaurant {
    /// Build a record from a create payload, applying defaults
    pub fn from_create(data: RestaurantCreate) -> Self {
        Self {
            id: None,
            name: data.name,
            description: data.description,
            image: data.image,
            rating: data.rating.unwrap_or_else(default_rating),
            review_count: data.review_count.unwrap_or(0),
            delivery_time: data.delivery_time,
            is_open: data.is_open.unwrap_or(true),
            minimum_order: data.minimum_order.unwrap_or(0),
            delivery_fee: data.delivery_fee.unwrap_or(0),
            category_id: data.category_id,
            created_at: Some(Utc::now()),
        }
    }
}
