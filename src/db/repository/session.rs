//! Admin Session Store
//!
//! Token lookup is the hot path for `/api/admin/verify`. Expired rows are
//! not removed here; verification treats them as invalid and logout deletes
//! by token.

use async_trait::async_trait;

use super::{RepoResult, SurrealStore};
use crate::db::models::{AdminSession, SessionCreate};

const TABLE: &str = "admin_sessions";

/// Contract for bearer-token sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create_session(&self, data: SessionCreate) -> RepoResult<AdminSession>;
    async fn get_session_by_token(&self, token: &str) -> RepoResult<Option<AdminSession>>;
    /// Idempotent: deleting an unknown token returns `false`, not an error
    async fn delete_session_by_token(&self, token: &str) -> RepoResult<bool>;
}

#[async_trait]
impl SessionStore for SurrealStore {
    async fn create_session(&self, data: SessionCreate) -> RepoResult<AdminSession> {
        self.insert(TABLE, AdminSession::from_create(data)).await
    }

    async fn get_session_by_token(&self, token: &str) -> RepoResult<Option<AdminSession>> {
        let mut result = self
            .db()
            .query("SELECT * FROM admin_sessions WHERE token = $tok LIMIT 1")
            .bind(("tok", token.to_string()))
            .await?;
        let sessions: Vec<AdminSession> = result.take(0)?;
        Ok(sessions.into_iter().next())
    }

    async fn delete_session_by_token(&self, token: &str) -> RepoResult<bool> {
        let mut result = self
            .db()
            .query("DELETE FROM admin_sessions WHERE token = $tok RETURN BEFORE")
            .bind(("tok", token.to_string()))
            .await?;
        let deleted: Vec<AdminSession> = result.take(0)?;
        Ok(!deleted.is_empty())
    }
}
