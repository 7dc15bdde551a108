//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// Order ID type
pub type OrderId = RecordId;

/// Conventional order status values.
///
/// The status field is free text and no transition graph is enforced at
/// write time; any update may set any value, including "cancelled" from
/// every state.
pub const ORDER_STATUSES: [&str; 6] = [
    "pending",
    "confirmed",
    "preparing",
    "on_way",
    "delivered",
    "cancelled",
];

/// Default estimated delivery window applied on create
pub const DEFAULT_ESTIMATED_TIME: &str = "30-45 minutes";

/// Customer order.
///
/// `items` is a serialized JSON blob of cart line items, stored verbatim and
/// never inspected server-side. `restaurant_id`/`driver_id` are unchecked
/// reference strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<OrderId>,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    pub delivery_address: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub payment_method: String,
    #[serde(default = "default_status")]
    pub status: String,
    /// Serialized cart line items (JSON string)
    pub items: String,
    pub subtotal: i64,
    pub delivery_fee: i64,
    pub total: i64,
    #[serde(default = "default_estimated_time")]
    pub estimated_time: String,
    #[serde(default)]
    pub restaurant_id: Option<String>,
    #[serde(default)]
    pub driver_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_status() -> String {
    "pending".to_string()
}

fn default_estimated_time() -> String {
    DEFAULT_ESTIMATED_TIME.to_string()
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[validate(length(min = 1))]
    pub customer_name: String,
    #[validate(length(min = 1))]
    pub customer_phone: String,
    #[validate(email)]
    pub customer_email: Option<String>,
    #[validate(length(min = 1))]
    pub delivery_address: String,
    pub notes: Option<String>,
    #[validate(length(min = 1))]
    pub payment_method: String,
    pub status: Option<String>,
    #[validate(length(min = 1))]
    pub items: String,
    #[validate(range(min = 0))]
    pub subtotal: i64,
    #[validate(range(min = 0))]
    pub delivery_fee: i64,
    #[validate(range(min = 0))]
    pub total: i64,
    pub estimated_time: Option<String>,
    pub restaurant_id: Option<String>,
    pub driver_id: Option<String>,
}

/// Update order payload (all fields optional)
///
/// Status moves informally pending→confirmed→preparing→on_way→delivered,
/// or cancelled at any point; the server does not reject out-of-order moves.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub subtotal: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub delivery_fee: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
}

impl Order {
    /// Build a record from a create payload, applying defaults
    pub fn from_create(data: OrderCreate) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            customer_name: data.customer_name,
            customer_phone: data.customer_phone,
            customer_email: data.customer_email,
            delivery_address: data.delivery_address,
            notes: data.notes,
            payment_method: data.payment_method,
            status: data.status.unwrap_or_else(default_status),
            items: data.items,
            subtotal: data.subtotal,
            delivery_fee: data.delivery_fee,
            total: data.total,
            estimated_time: data.estimated_time.unwrap_or_else(default_estimated_time),
            restaurant_id: data.restaurant_id,
            driver_id: data.driver_id,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
