use chrono::NaiveDateTime;
use kernel::model::{
    id::{CourtId, ReservationId, UserId},
    reservation::Reservation,
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub court_id: CourtId,
    pub requester_id: UserId,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub amount: f64,
    pub status: String,
    pub payment_status: String,
    pub payment_ref: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(value: ReservationRow) -> Result<Self, Self::Error> {
        let ReservationRow {
            reservation_id,
            court_id,
            requester_id,
            starts_at,
            ends_at,
            amount,
            status,
            payment_status,
            payment_ref,
            created_at,
        } = value;
        Ok(Reservation {
            id: reservation_id,
            court_id,
            requester_id,
            starts_at,
            ends_at,
            amount,
            status: status.parse()?,
            payment_status: payment_status.parse()?,
            payment_ref,
            created_at,
        })
    }
}
