use axum::{
    extract::{Path, Query, State},
    Json,
};
use kernel::model::id::CourtId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::availability::{
    FreeSlotsQuery, FreeSlotsResponse, RangeCheckResponse, RangeQuery, SlotResponse,
};

pub async fn show_free_slots(
    Path(court_id): Path<CourtId>,
    State(registry): State<AppRegistry>,
    Query(query): Query<FreeSlotsQuery>,
) -> AppResult<Json<FreeSlotsResponse>> {
    registry
        .booking_service()
        .free_slots(court_id, query.date)
        .await
        .map(|slots| {
            Json(FreeSlotsResponse {
                court_id,
                date: query.date,
                items: slots.into_iter().map(SlotResponse::from).collect(),
            })
        })
}

pub async fn check_range(
    Path(court_id): Path<CourtId>,
    State(registry): State<AppRegistry>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<RangeCheckResponse>> {
    registry
        .booking_service()
        .is_range_valid(court_id, query.starts_at, query.ends_at)
        .await
        .map(RangeCheckResponse::from)
        .map(Json)
}
