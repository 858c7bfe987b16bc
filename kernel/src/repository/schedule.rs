use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::CourtId, schedule::ScheduleConfig};

#[async_trait]
pub trait ScheduleConfigRepository: Send + Sync {
    async fn find_by_court_id(&self, court_id: CourtId) -> AppResult<Option<ScheduleConfig>>;
    /// Full-replace write of a court's operating rules.
    async fn upsert(&self, config: &ScheduleConfig) -> AppResult<()>;
    /// Returns the stored configuration, materializing the default one on
    /// first use. The write is an idempotent insert-if-absent, so concurrent
    /// first validations agree on the same configuration.
    async fn get_or_create_default(&self, court_id: CourtId) -> AppResult<ScheduleConfig>;
}
