use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::{CourtId, ReservationId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::reservation::{
    CancelReservationRequest, ConfirmReservationRequest, CreateReservationRequest,
    ReservationListQuery, ReservationResponse, ReservationsResponse,
};

pub async fn create_reservation(
    Path(court_id): Path<CourtId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    req.validate(&())?;

    registry
        .booking_service()
        .create(court_id, req.requester_id, req.starts_at, req.ends_at)
        .await
        .map(|reservation| (StatusCode::CREATED, Json(reservation.into())))
}

pub async fn show_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await
        .and_then(|reservation| match reservation {
            Some(reservation) => Ok(Json(reservation.into())),
            None => Err(AppError::EntityNotFound(format!(
                "reservation {reservation_id} not found"
            ))),
        })
}

pub async fn show_reservation_list(
    State(registry): State<AppRegistry>,
    Query(query): Query<ReservationListQuery>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_by_requester(query.requester_id)
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn confirm_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<ConfirmReservationRequest>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .booking_service()
        .confirm(reservation_id, req.payment_ref)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn cancel_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CancelReservationRequest>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .booking_service()
        .cancel(reservation_id, req.requester_id)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn complete_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .booking_service()
        .complete(reservation_id)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}
