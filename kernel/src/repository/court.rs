use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    court::{event::CreateCourt, Court},
    id::CourtId,
};

#[async_trait]
pub trait CourtRepository: Send + Sync {
    async fn create(&self, event: CreateCourt) -> AppResult<CourtId>;
    async fn find_by_id(&self, court_id: CourtId) -> AppResult<Option<Court>>;
    async fn find_all(&self) -> AppResult<Vec<Court>>;
}
