//! Driver Store
//!
//! Create/update accept a plaintext password in the payload and store only
//! its argon2 hash; the hash never round-trips through update DTOs.

use async_trait::async_trait;
use serde::Serialize;

use super::{RepoError, RepoResult, SurrealStore};
use crate::auth::password::hash_password;
use crate::db::models::{Driver, DriverCreate, DriverUpdate};

const TABLE: &str = "drivers";

/// Contract for drivers, with availability filtering and phone lookup
#[async_trait]
pub trait DriverStore: Send + Sync {
    async fn list_drivers(&self) -> RepoResult<Vec<Driver>>;
    async fn available_drivers(&self) -> RepoResult<Vec<Driver>>;
    async fn get_driver(&self, id: &str) -> RepoResult<Option<Driver>>;
    /// Login lookup; phone is treated as the driver's login identifier
    async fn get_driver_by_phone(&self, phone: &str) -> RepoResult<Option<Driver>>;
    async fn create_driver(&self, data: DriverCreate) -> RepoResult<Driver>;
    async fn update_driver(&self, id: &str, data: DriverUpdate) -> RepoResult<Option<Driver>>;
    async fn delete_driver(&self, id: &str) -> RepoResult<bool>;
}

/// Merge payload: plaintext `password` swapped for `passwordHash`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DriverMergeDb {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    earnings: Option<i64>,
}

fn driver_merge_payload(data: DriverUpdate) -> RepoResult<DriverMergeDb> {
    let password_hash = match data.password {
        Some(ref pw) => {
            Some(hash_password(pw).map_err(|e| RepoError::Internal(format!("password hash: {e}")))?)
        }
        None => None,
    };
    Ok(DriverMergeDb {
        name: data.name,
        phone: data.phone,
        password_hash,
        is_available: data.is_available,
        is_active: data.is_active,
        current_location: data.current_location,
        earnings: data.earnings,
    })
}

#[async_trait]
impl DriverStore for SurrealStore {
    async fn list_drivers(&self) -> RepoResult<Vec<Driver>> {
        self.select_all(TABLE).await
    }

    async fn available_drivers(&self) -> RepoResult<Vec<Driver>> {
        let drivers: Vec<Driver> = self
            .db()
            .query("SELECT * FROM drivers WHERE isAvailable = true AND isActive = true")
            .await?
            .take(0)?;
        Ok(drivers)
    }

    async fn get_driver(&self, id: &str) -> RepoResult<Option<Driver>> {
        self.select_one(TABLE, id).await
    }

    async fn get_driver_by_phone(&self, phone: &str) -> RepoResult<Option<Driver>> {
        let mut result = self
            .db()
            .query("SELECT * FROM drivers WHERE phone = $phone LIMIT 1")
            .bind(("phone", phone.to_string()))
            .await?;
        let drivers: Vec<Driver> = result.take(0)?;
        Ok(drivers.into_iter().next())
    }

    async fn create_driver(&self, data: DriverCreate) -> RepoResult<Driver> {
        let hash = hash_password(&data.password)
            .map_err(|e| RepoError::Internal(format!("password hash: {e}")))?;
        self.insert(TABLE, Driver::from_create(data, hash)).await
    }

    async fn update_driver(&self, id: &str, data: DriverUpdate) -> RepoResult<Option<Driver>> {
        let merge = driver_merge_payload(data)?;
        self.merge(TABLE, id, merge).await
    }

    async fn delete_driver(&self, id: &str) -> RepoResult<bool> {
        self.remove::<Driver>(TABLE, id).await
    }
}
