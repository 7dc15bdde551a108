//! Session authentication
//!
//! Opaque bearer tokens backed by the `admin_sessions` table. A session is
//! minted at login against one of two identity sources (the configured admin
//! account, or a driver by phone + password), checked at verify time, and
//! deleted at logout. Token lifecycle: absent → active → expired | revoked.

pub mod password;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::db::Store;
use crate::db::models::{AdminSession, SessionCreate, SessionRole};
use crate::utils::{AppError, AppResult};

/// Session lifetime from login
pub const SESSION_TTL_HOURS: i64 = 24;

/// Actor id recorded for the configured admin account
pub const ADMIN_ACTOR_ID: &str = "admin-main";

/// Successful login result
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user_type: SessionRole,
    /// Set when the session belongs to a driver
    pub driver_id: Option<String>,
}

/// Login / verify / logout over whichever [`Store`] backend is configured.
///
/// The admin credential pair comes from configuration; its password is
/// hashed once at startup so comparisons go through argon2 like driver
/// passwords do.
#[derive(Debug, Clone)]
pub struct SessionService {
    admin_email: String,
    admin_password_hash: String,
}

impl SessionService {
    pub fn new(admin_email: &str, admin_password: &str) -> AppResult<Self> {
        let admin_password_hash = password::hash_password(admin_password)
            .map_err(|e| AppError::Internal(format!("hashing admin password: {e}")))?;
        Ok(Self {
            admin_email: admin_email.to_string(),
            admin_password_hash,
        })
    }

    /// Authenticate and mint a session token.
    ///
    /// Both identity sources are tried in order; all failures collapse into
    /// the same `InvalidCredentials` so accounts cannot be enumerated.
    pub async fn login(
        &self,
        store: &dyn Store,
        email: &str,
        pass: &str,
    ) -> AppResult<LoginOutcome> {
        if email == self.admin_email && password::verify_password(pass, &self.admin_password_hash) {
            let token = self
                .mint_session(store, ADMIN_ACTOR_ID, SessionRole::Admin)
                .await?;
            return Ok(LoginOutcome {
                token,
                user_type: SessionRole::Admin,
                driver_id: None,
            });
        }

        // Drivers log in with their phone number in the email field
        if let Some(driver) = store.get_driver_by_phone(email).await?
            && driver.verify_password(pass)
        {
            let driver_id = driver
                .id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default();
            let token = self
                .mint_session(store, &driver_id, SessionRole::Driver)
                .await?;
            return Ok(LoginOutcome {
                token,
                user_type: SessionRole::Driver,
                driver_id: Some(driver_id),
            });
        }

        tracing::warn!(target: "auth", identifier = %email, "Login failed");
        Err(AppError::InvalidCredentials)
    }

    /// Resolve a bearer token to its session.
    ///
    /// Expired rows are rejected but left in place; logout is the only
    /// cleanup path, so stale rows accumulate until then.
    pub async fn verify(&self, store: &dyn Store, token: &str) -> AppResult<AdminSession> {
        let session = store
            .get_session_by_token(token)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if session.is_expired(Utc::now()) {
            return Err(AppError::SessionExpired);
        }
        Ok(session)
    }

    /// Revoke a token. Idempotent: an unknown or already-deleted token is
    /// not an error.
    pub async fn logout(&self, store: &dyn Store, token: &str) -> AppResult<()> {
        store.delete_session_by_token(token).await?;
        Ok(())
    }

    async fn mint_session(
        &self,
        store: &dyn Store,
        actor_id: &str,
        role: SessionRole,
    ) -> AppResult<String> {
        let token = Uuid::new_v4().to_string();
        store
            .create_session(SessionCreate {
                admin_id: actor_id.to_string(),
                token: token.clone(),
                user_type: role,
                expires_at: Utc::now() + Duration::hours(SESSION_TTL_HOURS),
            })
            .await?;
        Ok(token)
    }
}
