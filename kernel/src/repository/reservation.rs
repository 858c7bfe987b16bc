use async_trait::async_trait;
use chrono::NaiveDateTime;
use shared::error::AppResult;

use crate::model::{
    id::{CourtId, ReservationId, UserId},
    reservation::{
        event::{CreateReservation, TransitionReservation},
        Reservation,
    },
};

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Inserts a new PENDING reservation. Implementations must make the
    /// conflict re-check and the insert atomic per court, so two racing
    /// creates for overlapping ranges cannot both be admitted.
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    /// Live (PENDING or CONFIRMED) reservations for one court intersecting
    /// `[from, until)`.
    async fn find_live_in_range(
        &self,
        court_id: CourtId,
        from: NaiveDateTime,
        until: NaiveDateTime,
    ) -> AppResult<Vec<Reservation>>;
    async fn find_by_requester(&self, requester_id: UserId) -> AppResult<Vec<Reservation>>;
    /// Applies a compare-and-set status transition; fails with an
    /// invalid-state error when the stored status no longer matches.
    async fn transition(&self, event: TransitionReservation) -> AppResult<()>;
}
