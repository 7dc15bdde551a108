//! Repository Module
//!
//! Per-entity store traits plus their embedded-SurrealDB implementations.
//! Table and field names mirror the relational layout (plural snake tables,
//! camelCase fields); record keys are UUIDs minted here, so ids are opaque
//! strings of the form `table:key` that are never reused.
//!
//! The aggregate [`Store`] supertrait is what [`ServerState`](crate::core::ServerState)
//! holds; the in-memory backend in [`crate::db::memory`] implements the same
//! traits so the backend is chosen once at startup, by configuration.

pub mod category;
pub mod driver;
pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod session;
pub mod special_offer;

pub use category::CategoryStore;
pub use driver::DriverStore;
pub use menu_item::MenuItemStore;
pub use order::OrderStore;
pub use restaurant::RestaurantStore;
pub use session::SessionStore;
pub use special_offer::SpecialOfferStore;

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};
use thiserror::Error;
use uuid::Uuid;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Aggregate store contract: one object per backend, selected at startup
pub trait Store:
    CategoryStore
    + RestaurantStore
    + MenuItemStore
    + OrderStore
    + DriverStore
    + SpecialOfferStore
    + SessionStore
{
}

impl<T> Store for T where
    T: CategoryStore
        + RestaurantStore
        + MenuItemStore
        + OrderStore
        + DriverStore
        + SpecialOfferStore
        + SessionStore
{
}

/// Mint a record key. Simple-ident form (no hyphens) so the rendered id
/// stays `table:key` without escaping.
pub(crate) fn new_record_key() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Extract the pure key if the id carries a table prefix
/// (e.g. "categories:xxx" -> "xxx")
pub(crate) fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    match id.split_once(':') {
        Some((t, key)) if t == table => key,
        _ => id,
    }
}

/// Persistent backend - embedded SurrealDB over RocksDB
#[derive(Clone)]
pub struct SurrealStore {
    db: Surreal<Db>,
}

impl SurrealStore {
    /// Open (or create) the database under `path`
    pub async fn open(path: &Path) -> RepoResult<Self> {
        let db = Surreal::new::<RocksDb>(path).await?;
        db.use_ns("sufra").use_db("storefront").await?;
        Ok(Self { db })
    }

    pub(crate) fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    // ========== Generic CRUD helpers shared by the entity impls ==========

    pub(crate) async fn select_all<T>(&self, table: &str) -> RepoResult<Vec<T>>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let records: Vec<T> = self.db.select(table).await?;
        Ok(records)
    }

    pub(crate) async fn select_one<T>(&self, table: &str, id: &str) -> RepoResult<Option<T>>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let key = strip_table_prefix(table, id);
        let record: Option<T> = self.db.select((table, key)).await?;
        Ok(record)
    }

    /// Insert a record under a freshly minted UUID key
    pub(crate) async fn insert<T>(&self, table: &str, record: T) -> RepoResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        let key = new_record_key();
        let created: Option<T> = self.db.create((table, key.as_str())).content(record).await?;
        created.ok_or_else(|| RepoError::Database(format!("create on '{table}' returned no record")))
    }

    /// Merge partial data into an existing record.
    ///
    /// Returns `None` (store untouched) when the id does not resolve;
    /// callers translate absence to a not-found response.
    pub(crate) async fn merge<T, D>(&self, table: &str, id: &str, data: D) -> RepoResult<Option<T>>
    where
        T: DeserializeOwned + Send + Sync + 'static,
        D: Serialize + Send + Sync + 'static,
    {
        let key = strip_table_prefix(table, id);
        let updated: Option<T> = self.db.update((table, key)).merge(data).await?;
        Ok(updated)
    }

    /// Delete by id; `false` when the id does not resolve
    pub(crate) async fn remove<T>(&self, table: &str, id: &str) -> RepoResult<bool>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let key = strip_table_prefix(table, id);
        let deleted: Option<T> = self.db.delete((table, key)).await?;
        Ok(deleted.is_some())
    }
}
