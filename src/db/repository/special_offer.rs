//! Special Offer Store

use async_trait::async_trait;

use super::{RepoResult, SurrealStore};
use crate::db::models::{SpecialOffer, SpecialOfferCreate, SpecialOfferUpdate};

const TABLE: &str = "special_offers";

/// CRUD contract for special offers, with active-flag filtering
#[async_trait]
pub trait SpecialOfferStore: Send + Sync {
    async fn list_special_offers(&self) -> RepoResult<Vec<SpecialOffer>>;
    async fn active_special_offers(&self) -> RepoResult<Vec<SpecialOffer>>;
    async fn create_special_offer(&self, data: SpecialOfferCreate) -> RepoResult<SpecialOffer>;
    async fn update_special_offer(
        &self,
        id: &str,
        data: SpecialOfferUpdate,
    ) -> RepoResult<Option<SpecialOffer>>;
    async fn delete_special_offer(&self, id: &str) -> RepoResult<bool>;
}

#[async_trait]
impl SpecialOfferStore for SurrealStore {
    async fn list_special_offers(&self) -> RepoResult<Vec<SpecialOffer>> {
        self.select_all(TABLE).await
    }

    async fn active_special_offers(&self) -> RepoResult<Vec<SpecialOffer>> {
        let offers: Vec<SpecialOffer> = self
            .db()
            .query("SELECT * FROM special_offers WHERE isActive = true")
            .await?
            .take(0)?;
        Ok(offers)
    }

    async fn create_special_offer(&self, data: SpecialOfferCreate) -> RepoResult<SpecialOffer> {
        self.insert(TABLE, SpecialOffer::from_create(data)).await
    }

    async fn update_special_offer(
        &self,
        id: &str,
        data: SpecialOfferUpdate,
    ) -> RepoResult<Option<SpecialOffer>> {
        self.merge(TABLE, id, data).await
    }

    async fn delete_special_offer(&self, id: &str) -> RepoResult<bool> {
        self.remove::<SpecialOffer>(TABLE, id).await
    }
}
