//! Category Store

use async_trait::async_trait;

use super::{RepoResult, SurrealStore};
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};

const TABLE: &str = "categories";

/// CRUD contract for browsing categories
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn list_categories(&self) -> RepoResult<Vec<Category>>;
    async fn get_category(&self, id: &str) -> RepoResult<Option<Category>>;
    async fn create_category(&self, data: CategoryCreate) -> RepoResult<Category>;
    async fn update_category(&self, id: &str, data: CategoryUpdate)
    -> RepoResult<Option<Category>>;
    async fn delete_category(&self, id: &str) -> RepoResult<bool>;
}

#[async_trait]
impl CategoryStore for SurrealStore {
    async fn list_categories(&self) -> RepoResult<Vec<Category>> {
        self.select_all(TABLE).await
    }

    async fn get_category(&self, id: &str) -> RepoResult<Option<Category>> {
        self.select_one(TABLE, id).await
    }

    async fn create_category(&self, data: CategoryCreate) -> RepoResult<Category> {
        self.insert(TABLE, Category::from_create(data)).await
    }

    async fn update_category(
        &self,
        id: &str,
        data: CategoryUpdate,
    ) -> RepoResult<Option<Category>> {
        self.merge(TABLE, id, data).await
    }

    async fn delete_category(&self, id: &str) -> RepoResult<bool> {
        self.remove::<Category>(TABLE, id).await
    }
}
