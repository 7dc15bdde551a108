//! Storage layer
//!
//! Two interchangeable backends behind the [`Store`] contract:
//! embedded SurrealDB (RocksDB) for persistence, or seeded in-memory maps.
//! The backend is picked once at startup from configuration.

pub mod memory;
pub mod models;
pub mod repository;

pub use memory::MemStore;
pub use repository::{RepoError, RepoResult, Store, SurrealStore};
