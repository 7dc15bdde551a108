//! Order Store
//!
//! Orders are never deleted; the lifecycle ends at "delivered" or
//! "cancelled" and the row stays for history.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{RepoResult, SurrealStore};
use crate::db::models::{Order, OrderCreate, OrderUpdate};

const TABLE: &str = "orders";

/// Contract for orders, with restaurant filtering
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn list_orders(&self) -> RepoResult<Vec<Order>>;
    async fn orders_by_restaurant(&self, restaurant_id: &str) -> RepoResult<Vec<Order>>;
    async fn get_order(&self, id: &str) -> RepoResult<Option<Order>>;
    async fn create_order(&self, data: OrderCreate) -> RepoResult<Order>;
    /// Any field may change, including `status` to any value; `updated_at`
    /// is bumped on every successful update
    async fn update_order(&self, id: &str, data: OrderUpdate) -> RepoResult<Option<Order>>;
}

/// Merge payload: the update DTO plus a forced `updatedAt` bump
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderMergeDb {
    #[serde(flatten)]
    data: OrderUpdate,
    updated_at: DateTime<Utc>,
}

#[async_trait]
impl OrderStore for SurrealStore {
    async fn list_orders(&self) -> RepoResult<Vec<Order>> {
        self.select_all(TABLE).await
    }

    async fn orders_by_restaurant(&self, restaurant_id: &str) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .db()
            .query("SELECT * FROM orders WHERE restaurantId = $restaurant")
            .bind(("restaurant", restaurant_id.to_string()))
            .await?
            .take(0)?;
        Ok(orders)
    }

    async fn get_order(&self, id: &str) -> RepoResult<Option<Order>> {
        self.select_one(TABLE, id).await
    }

    async fn create_order(&self, data: OrderCreate) -> RepoResult<Order> {
        self.insert(TABLE, Order::from_create(data)).await
    }

    async fn update_order(&self, id: &str, data: OrderUpdate) -> RepoResult<Option<Order>> {
        let merge = OrderMergeDb {
            data,
            updated_at: Utc::now(),
        };
        self.merge(TABLE, id, merge).await
    }
}
