//! Menu Item Store

use async_trait::async_trait;

use super::{RepoResult, SurrealStore};
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

const TABLE: &str = "menu_items";

/// CRUD contract for menu items; listing is always per restaurant
#[async_trait]
pub trait MenuItemStore: Send + Sync {
    async fn menu_items_by_restaurant(&self, restaurant_id: &str) -> RepoResult<Vec<MenuItem>>;
    async fn get_menu_item(&self, id: &str) -> RepoResult<Option<MenuItem>>;
    async fn create_menu_item(&self, data: MenuItemCreate) -> RepoResult<MenuItem>;
    async fn update_menu_item(&self, id: &str, data: MenuItemUpdate)
    -> RepoResult<Option<MenuItem>>;
    async fn delete_menu_item(&self, id: &str) -> RepoResult<bool>;
}

#[async_trait]
impl MenuItemStore for SurrealStore {
    async fn menu_items_by_restaurant(&self, restaurant_id: &str) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .db()
            .query("SELECT * FROM menu_items WHERE restaurantId = $restaurant")
            .bind(("restaurant", restaurant_id.to_string()))
            .await?
            .take(0)?;
        Ok(items)
    }

    async fn get_menu_item(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        self.select_one(TABLE, id).await
    }

    async fn create_menu_item(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        self.insert(TABLE, MenuItem::from_create(data)).await
    }

    async fn update_menu_item(
        &self,
        id: &str,
        data: MenuItemUpdate,
    ) -> RepoResult<Option<MenuItem>> {
        self.merge(TABLE, id, data).await
    }

    async fn delete_menu_item(&self, id: &str) -> RepoResult<bool> {
        self.remove::<MenuItem>(TABLE, id).await
    }
}
