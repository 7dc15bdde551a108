//! Special Offer Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// Special offer ID type
pub type SpecialOfferId = RecordId;

/// Storefront-wide promotional banner.
///
/// Distinct from a menu item's own discount fields; either a percentage or a
/// flat amount may be set, neither is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialOffer {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<SpecialOfferId>,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub discount_percent: Option<i32>,
    #[serde(default)]
    pub discount_amount: Option<i64>,
    #[serde(default)]
    pub minimum_order: i64,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Create special offer payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpecialOfferCreate {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub image: String,
    #[validate(range(min = 0, max = 100))]
    pub discount_percent: Option<i32>,
    #[validate(range(min = 0))]
    pub discount_amount: Option<i64>,
    #[validate(range(min = 0))]
    pub minimum_order: Option<i64>,
    pub is_active: Option<bool>,
    pub valid_until: Option<DateTime<Utc>>,
}

/// Update special offer payload (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpecialOfferUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 100))]
    pub discount_percent: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub discount_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub minimum_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
}

impl SpecialOffer {
    /// Build a record from a create payload, applying defaults
    pub fn from_create(data: SpecialOfferCreate) -> Self {
        Self {
            id: None,
            title: data.title,
            description: data.description,
            image: data.image,
            discount_percent: data.discount_percent,
            discount_amount: data.discount_amount,
            minimum_order: data.minimum_order.unwrap_or(0),
            is_active: data.is_active.unwrap_or(true),
            valid_until: data.valid_until,
            created_at: Some(Utc::now()),
        }
    }
}
