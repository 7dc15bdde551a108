//! Restaurant Store

use async_trait::async_trait;

use super::{RepoResult, SurrealStore};
use crate::db::models::{Restaurant, RestaurantCreate, RestaurantUpdate};

const TABLE: &str = "restaurants";

/// CRUD contract for restaurants, with category filtering
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    async fn list_restaurants(&self) -> RepoResult<Vec<Restaurant>>;
    /// Exactly the subset of `list_restaurants` whose `category_id` matches
    async fn restaurants_by_category(&self, category_id: &str) -> RepoResult<Vec<Restaurant>>;
    async fn get_restaurant(&self, id: &str) -> RepoResult<Option<Restaurant>>;
    async fn create_restaurant(&self, data: RestaurantCreate) -> RepoResult<Restaurant>;
    async fn update_restaurant(
        &self,
        id: &str,
        data: RestaurantUpdate,
    ) -> RepoResult<Option<Restaurant>>;
    async fn delete_restaurant(&self, id: &str) -> RepoResult<bool>;
}

#[async_trait]
impl RestaurantStore for SurrealStore {
    async fn list_restaurants(&self) -> RepoResult<Vec<Restaurant>> {
        self.select_all(TABLE).await
    }

    async fn restaurants_by_category(&self, category_id: &str) -> RepoResult<Vec<Restaurant>> {
        let restaurants: Vec<Restaurant> = self
            .db()
            .query("SELECT * FROM restaurants WHERE categoryId = $category")
            .bind(("category", category_id.to_string()))
            .await?
            .take(0)?;
        Ok(restaurants)
    }

    async fn get_restaurant(&self, id: &str) -> RepoResult<Option<Restaurant>> {
        self.select_one(TABLE, id).await
    }

    async fn create_restaurant(&self, data: RestaurantCreate) -> RepoResult<Restaurant> {
        self.insert(TABLE, Restaurant::from_create(data)).await
    }

    async fn update_restaurant(
        &self,
        id: &str,
        data: RestaurantUpdate,
    ) -> RepoResult<Option<Restaurant>> {
        self.merge(TABLE, id, data).await
    }

    async fn delete_restaurant(&self, id: &str) -> RepoResult<bool> {
        self.remove::<Restaurant>(TABLE, id).await
    }
}
