use chrono::NaiveDateTime;
use derive_new::new;

use crate::model::{
    id::{CourtId, ReservationId, UserId},
    reservation::{PaymentStatus, ReservationStatus},
};

/// Admission request handed to the reservation store. The amount has already
/// been priced by the booking service; the store re-checks the slot for
/// conflicts atomically before inserting.
#[derive(Debug, Clone, new)]
pub struct CreateReservation {
    pub court_id: CourtId,
    pub requester_id: UserId,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub amount: f64,
}

/// Guarded state change. `from` is the status the caller observed; the store
/// applies the update only if the row still carries it, so a lost race
/// surfaces as an invalid-state error rather than a silent overwrite.
#[derive(Debug, Clone, new)]
pub struct TransitionReservation {
    pub reservation_id: ReservationId,
    pub from: ReservationStatus,
    pub to: ReservationStatus,
    pub payment_status: Option<PaymentStatus>,
    pub payment_ref: Option<String>,
}
