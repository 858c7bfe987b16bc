use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    court::{event::CreateCourt, Court},
    id::CourtId,
};
use kernel::repository::court::CourtRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::court::CourtRow, ConnectionPool};

#[derive(new)]
pub struct CourtRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CourtRepository for CourtRepositoryImpl {
    async fn create(&self, event: CreateCourt) -> AppResult<CourtId> {
        let court_id = CourtId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO courts (court_id, name, hourly_rate, is_active)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(court_id)
        .bind(&event.name)
        .bind(event.hourly_rate)
        .bind(event.is_active)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::storage)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no court record has been created".into(),
            ));
        }

        Ok(court_id)
    }

    async fn find_by_id(&self, court_id: CourtId) -> AppResult<Option<Court>> {
        let row: Option<CourtRow> = sqlx::query_as(
            r#"
                SELECT court_id, name, hourly_rate, is_active
                FROM courts
                WHERE court_id = $1
            "#,
        )
        .bind(court_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::storage)?;

        Ok(row.map(Court::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Court>> {
        let rows: Vec<CourtRow> = sqlx::query_as(
            r#"
                SELECT court_id, name, hourly_rate, is_active
                FROM courts
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::storage)?;

        Ok(rows.into_iter().map(Court::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_register_court(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CourtRepositoryImpl::new(ConnectionPool::new(pool));

        let court = CreateCourt {
            name: "Center Court".into(),
            hourly_rate: 1200.0,
            is_active: true,
        };

        repo.create(court).await?;

        let res = repo.find_all().await?;
        assert_eq!(res.len(), 1);

        let court_id = res[0].id;
        let res = repo.find_by_id(court_id).await?;
        assert!(res.is_some());

        let Court {
            id,
            name,
            hourly_rate,
            is_active,
        } = res.unwrap();
        assert_eq!(id, court_id);
        assert_eq!(name, "Center Court");
        assert_eq!(hourly_rate, 1200.0);
        assert!(is_active);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_find_unknown_court_returns_none(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CourtRepositoryImpl::new(ConnectionPool::new(pool));

        let res = repo.find_by_id(CourtId::new()).await?;
        assert!(res.is_none());

        Ok(())
    }
}
