use async_trait::async_trait;
use chrono::NaiveDateTime;
use derive_new::new;
use kernel::model::{
    id::{CourtId, ReservationId, UserId},
    reservation::{
        event::{CreateReservation, TransitionReservation},
        Reservation,
    },
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::reservation::ReservationRow, ConnectionPool};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    // The check-then-insert sequence runs inside one SERIALIZABLE
    // transaction, so two racing creates for overlapping ranges on the same
    // court cannot both commit. Cross-court creates touch disjoint rows and
    // proceed in parallel.
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId> {
        let mut tx = self.db.begin().await?;

        self.set_transaction_serializable(&mut tx).await?;

        let overlap: Option<(ReservationId,)> = sqlx::query_as(
            r#"
                SELECT reservation_id
                FROM reservations
                WHERE court_id = $1
                  AND status IN ('PENDING', 'CONFIRMED')
                  AND starts_at < $3
                  AND ends_at > $2
                LIMIT 1
            "#,
        )
        .bind(event.court_id)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_serialization_failure)?;

        if overlap.is_some() {
            return Err(AppError::SlotConflict(format!(
                "court {} already has a reservation in the requested range",
                event.court_id
            )));
        }

        let reservation_id = ReservationId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reservations
                    (reservation_id, court_id, requester_id, starts_at, ends_at,
                     amount, status, payment_status)
                VALUES ($1, $2, $3, $4, $5, $6, 'PENDING', 'PENDING')
            "#,
        )
        .bind(reservation_id)
        .bind(event.court_id)
        .bind(event.requester_id)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(event.amount)
        .execute(&mut *tx)
        .await
        .map_err(map_serialization_failure)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no reservation record has been created".into(),
            ));
        }

        tx.commit().await.map_err(map_serialization_failure)?;

        Ok(reservation_id)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
                SELECT reservation_id, court_id, requester_id, starts_at, ends_at,
                       amount, status, payment_status, payment_ref, created_at
                FROM reservations
                WHERE reservation_id = $1
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::storage)?;

        row.map(Reservation::try_from).transpose()
    }

    async fn find_live_in_range(
        &self,
        court_id: CourtId,
        from: NaiveDateTime,
        until: NaiveDateTime,
    ) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
                SELECT reservation_id, court_id, requester_id, starts_at, ends_at,
                       amount, status, payment_status, payment_ref, created_at
                FROM reservations
                WHERE court_id = $1
                  AND status IN ('PENDING', 'CONFIRMED')
                  AND starts_at < $3
                  AND ends_at > $2
                ORDER BY starts_at ASC
            "#,
        )
        .bind(court_id)
        .bind(from)
        .bind(until)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::storage)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_by_requester(&self, requester_id: UserId) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
                SELECT reservation_id, court_id, requester_id, starts_at, ends_at,
                       amount, status, payment_status, payment_ref, created_at
                FROM reservations
                WHERE requester_id = $1
                ORDER BY created_at DESC
            "#,
        )
        .bind(requester_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::storage)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    // Compare-and-set on the status column: the update only lands when the
    // row still carries the status the caller based its guard on.
    async fn transition(&self, event: TransitionReservation) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE reservations
                SET status = $1,
                    payment_status = COALESCE($2, payment_status),
                    payment_ref = COALESCE($3, payment_ref),
                    updated_at = CURRENT_TIMESTAMP
                WHERE reservation_id = $4
                  AND status = $5
            "#,
        )
        .bind(event.to.as_str())
        .bind(event.payment_status.map(|s| s.as_str()))
        .bind(&event.payment_ref)
        .bind(event.reservation_id)
        .bind(event.from.as_str())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::storage)?;

        if res.rows_affected() < 1 {
            return Err(AppError::InvalidState(format!(
                "reservation {} is no longer in status {}",
                event.reservation_id,
                event.from.as_str()
            )));
        }

        Ok(())
    }
}

impl ReservationRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'static, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::storage)?;
        Ok(())
    }
}

// A serialization failure (SQLSTATE 40001) means a concurrent create raced
// this one on the same court; the loser reports the slot as taken instead of
// an internal error.
fn map_serialization_failure(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some("40001") {
            return AppError::SlotConflict(
                "the requested range was reserved by a concurrent request".into(),
            );
        }
    }
    AppError::storage(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::court::CourtRepositoryImpl;
    use chrono::{NaiveDate, NaiveDateTime};
    use kernel::model::{
        court::event::CreateCourt,
        reservation::{PaymentStatus, ReservationStatus},
    };
    use kernel::repository::court::CourtRepository;

    async fn register_court(pool: &sqlx::PgPool) -> anyhow::Result<CourtId> {
        let repo = CourtRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let court_id = repo
            .create(CreateCourt {
                name: "Court 1".into(),
                hourly_rate: 1000.0,
                is_active: true,
            })
            .await?;
        Ok(court_id)
    }

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 9, 7)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[derive(Debug)]
    struct StubDbError(&'static str);

    impl std::fmt::Display for StubDbError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("database error")
        }
    }

    impl std::error::Error for StubDbError {}

    impl sqlx::error::DatabaseError for StubDbError {
        fn message(&self) -> &str {
            "database error"
        }

        fn code(&self) -> Option<std::borrow::Cow<'_, str>> {
            Some(self.0.into())
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::Other
        }
    }

    // Every statement in the create transaction (the overlap SELECT included)
    // must report SQLSTATE 40001 as a slot conflict, not an internal error.
    #[test]
    fn serialization_failures_map_to_slot_conflicts() {
        let lost_race = sqlx::Error::Database(Box::new(StubDbError("40001")));
        assert!(matches!(
            map_serialization_failure(lost_race),
            AppError::SlotConflict(_)
        ));

        let unrelated = sqlx::Error::Database(Box::new(StubDbError("23505")));
        assert!(matches!(
            map_serialization_failure(unrelated),
            AppError::SpecificOperationError(_)
        ));
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_overlapping_create_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let court_id = register_court(&pool).await?;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool));
        let requester_id = UserId::new();

        repo.create(CreateReservation::new(
            court_id,
            requester_id,
            at(10),
            at(12),
            2000.0,
        ))
        .await?;

        let res = repo
            .create(CreateReservation::new(
                court_id,
                UserId::new(),
                at(11),
                at(13),
                2000.0,
            ))
            .await;
        assert!(matches!(res, Err(AppError::SlotConflict(_))));

        // An adjacent range shares only a boundary instant and goes through.
        repo.create(CreateReservation::new(
            court_id,
            UserId::new(),
            at(12),
            at(13),
            1000.0,
        ))
        .await?;

        let live = repo.find_live_in_range(court_id, at(0), at(23)).await?;
        assert_eq!(live.len(), 2);

        let mine = repo.find_by_requester(requester_id).await?;
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].starts_at, at(10));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_transition_is_compare_and_set(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let court_id = register_court(&pool).await?;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool));

        let reservation_id = repo
            .create(CreateReservation::new(
                court_id,
                UserId::new(),
                at(10),
                at(11),
                1000.0,
            ))
            .await?;

        repo.transition(TransitionReservation::new(
            reservation_id,
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            Some(PaymentStatus::Paid),
            Some("pay_123".into()),
        ))
        .await?;

        let stored = repo.find_by_id(reservation_id).await?.unwrap();
        assert_eq!(stored.status, ReservationStatus::Confirmed);
        assert_eq!(stored.payment_status, PaymentStatus::Paid);
        assert_eq!(stored.payment_ref.as_deref(), Some("pay_123"));

        // The row moved on; a second transition based on PENDING misses.
        let res = repo
            .transition(TransitionReservation::new(
                reservation_id,
                ReservationStatus::Pending,
                ReservationStatus::Cancelled,
                None,
                None,
            ))
            .await;
        assert!(matches!(res, Err(AppError::InvalidState(_))));

        Ok(())
    }
}
