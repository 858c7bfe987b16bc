use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::CourtId, schedule::ScheduleConfig};
use kernel::repository::schedule::ScheduleConfigRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::schedule::ScheduleConfigRow, ConnectionPool};

#[derive(new)]
pub struct ScheduleConfigRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ScheduleConfigRepository for ScheduleConfigRepositoryImpl {
    async fn find_by_court_id(&self, court_id: CourtId) -> AppResult<Option<ScheduleConfig>> {
        let row: Option<ScheduleConfigRow> = sqlx::query_as(
            r#"
                SELECT court_id, open_time, close_time, slot_duration_minutes,
                       available_weekdays, min_advance_hours, max_advance_days
                FROM schedule_configs
                WHERE court_id = $1
            "#,
        )
        .bind(court_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::storage)?;

        row.map(ScheduleConfig::try_from).transpose()
    }

    async fn upsert(&self, config: &ScheduleConfig) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                INSERT INTO schedule_configs
                    (court_id, open_time, close_time, slot_duration_minutes,
                     available_weekdays, min_advance_hours, max_advance_days)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (court_id) DO UPDATE SET
                    open_time = EXCLUDED.open_time,
                    close_time = EXCLUDED.close_time,
                    slot_duration_minutes = EXCLUDED.slot_duration_minutes,
                    available_weekdays = EXCLUDED.available_weekdays,
                    min_advance_hours = EXCLUDED.min_advance_hours,
                    max_advance_days = EXCLUDED.max_advance_days
            "#,
        )
        .bind(config.court_id)
        .bind(config.open_time)
        .bind(config.close_time)
        .bind(config.slot_duration_minutes)
        .bind(config.available_weekdays.bits())
        .bind(config.min_advance_hours)
        .bind(config.max_advance_days)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::storage)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no schedule configuration has been stored".into(),
            ));
        }

        Ok(())
    }

    // First-use materialization: the default configuration is written with
    // an insert-if-absent so racing callers converge on one stored row, then
    // the row is read back.
    async fn get_or_create_default(&self, court_id: CourtId) -> AppResult<ScheduleConfig> {
        let default = ScheduleConfig::default_for(court_id);
        sqlx::query(
            r#"
                INSERT INTO schedule_configs
                    (court_id, open_time, close_time, slot_duration_minutes,
                     available_weekdays, min_advance_hours, max_advance_days)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (court_id) DO NOTHING
            "#,
        )
        .bind(default.court_id)
        .bind(default.open_time)
        .bind(default.close_time)
        .bind(default.slot_duration_minutes)
        .bind(default.available_weekdays.bits())
        .bind(default.min_advance_hours)
        .bind(default.max_advance_days)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::storage)?;

        self.find_by_court_id(court_id).await?.ok_or_else(|| {
            AppError::EntityNotFound(format!(
                "schedule configuration for court {court_id} disappeared after upsert"
            ))
        })
    }
}
