//! Driver Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// Driver ID type
pub type DriverId = RecordId;

/// Delivery driver.
///
/// Only `password_hash` (argon2id) is ever stored; API responses go through
/// [`DriverPublic`] so the hash never leaves the process. Drivers log in with
/// phone + password through the admin login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<DriverId>,
    pub name: String,
    pub phone: String,
    pub password_hash: String,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_available: bool,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
    #[serde(default)]
    pub current_location: Option<String>,
    pub earnings: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Driver as exposed by the API (no credential material)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPublic {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<DriverId>,
    pub name: String,
    pub phone: String,
    pub is_available: bool,
    pub is_active: bool,
    #[serde(default)]
    pub current_location: Option<String>,
    pub earnings: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Driver> for DriverPublic {
    fn from(d: Driver) -> Self {
        Self {
            id: d.id,
            name: d.name,
            phone: d.phone,
            is_available: d.is_available,
            is_active: d.is_active,
            current_location: d.current_location,
            earnings: d.earnings,
            created_at: d.created_at,
        }
    }
}

/// Create driver payload (plaintext password, hashed before storage)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DriverCreate {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 6))]
    pub password: String,
    pub is_available: Option<bool>,
    pub is_active: Option<bool>,
    pub current_location: Option<String>,
    #[validate(range(min = 0))]
    pub earnings: Option<i64>,
}

/// Update driver payload (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DriverUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 6))]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub earnings: Option<i64>,
}

impl Driver {
    /// Build a record from a create payload; `password_hash` must already
    /// be an argon2 hash of the payload password
    pub fn from_create(data: DriverCreate, password_hash: String) -> Self {
        Self {
            id: None,
            name: data.name,
            phone: data.phone,
            password_hash,
            is_available: data.is_available.unwrap_or(true),
            is_active: data.is_active.unwrap_or(true),
            current_location: data.current_location,
            earnings: data.earnings.unwrap_or(0),
            created_at: Some(Utc::now()),
        }
    }

    /// Verify a login password against the stored hash
    pub fn verify_password(&self, password: &str) -> bool {
        crate::auth::password::verify_password(password, &self.password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_view_has_no_hash_field() {
        let driver = Driver::from_create(
            DriverCreate {
                name: "Salim".into(),
                phone: "777123456".into(),
                password: "hunter22".into(),
                is_available: None,
                is_active: None,
                current_location: None,
                earnings: None,
            },
            "argon2-hash-here".into(),
        );
        let json = serde_json::to_value(DriverPublic::from(driver)).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["isAvailable"], serde_json::json!(true));
        assert_eq!(json["earnings"], serde_json::json!(0));
    }
}
