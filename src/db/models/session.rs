//! Admin Session Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Role carried by a session token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionRole {
    Admin,
    Driver,
}

/// Bearer-token session for the admin panel / driver app.
///
/// Lifecycle: created at login, removed at logout. Verification checks
/// `expires_at` but leaves expired rows in place; logout is the only cleanup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    /// Identity the token grants: "admin-main" or a driver record id
    pub admin_id: String,
    /// Opaque bearer token (UUID, unique)
    pub token: String,
    pub user_type: SessionRole,
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for persisting a freshly minted session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreate {
    pub admin_id: String,
    pub token: String,
    pub user_type: SessionRole,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    /// Build a record from a create payload
    pub fn from_create(data: SessionCreate) -> Self {
        Self {
            id: None,
            admin_id: data.admin_id,
            token: data.token,
            user_type: data.user_type,
            expires_at: data.expires_at,
            created_at: Some(Utc::now()),
        }
    }

    /// Whether the session has passed its expiry instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
