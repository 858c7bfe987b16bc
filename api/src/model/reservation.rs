use chrono::NaiveDateTime;
use garde::Validate;
use kernel::model::{
    id::{CourtId, ReservationId, UserId},
    reservation::{PaymentStatus, Reservation, ReservationStatus},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(skip)]
    pub requester_id: UserId,
    #[garde(skip)]
    pub starts_at: NaiveDateTime,
    #[garde(skip)]
    pub ends_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmReservationRequest {
    pub payment_ref: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelReservationRequest {
    pub requester_id: UserId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationListQuery {
    pub requester_id: UserId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub court_id: CourtId,
    pub requester_id: UserId,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub amount: f64,
    pub status: ReservationStatus,
    pub payment_status: PaymentStatus,
    pub payment_ref: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            id,
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
        Self {
            id,
            court_id,
            requester_id,
            starts_at,
            ends_at,
            amount,
            status,
            payment_status,
            payment_ref,
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}
