use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::CourtId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::court::{CourtCreatedResponse, CourtResponse, CourtsResponse, CreateCourtRequest};

pub async fn register_court(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateCourtRequest>,
) -> AppResult<(StatusCode, Json<CourtCreatedResponse>)> {
    req.validate(&())?;

    registry
        .court_repository()
        .create(req.into())
        .await
        .map(|id| (StatusCode::CREATED, Json(CourtCreatedResponse { id })))
}

pub async fn show_court(
    Path(court_id): Path<CourtId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CourtResponse>> {
    registry
        .court_repository()
        .find_by_id(court_id)
        .await
        .and_then(|court| match court {
            Some(court) => Ok(Json(court.into())),
            None => Err(AppError::EntityNotFound(format!(
                "court {court_id} not found"
            ))),
        })
}

pub async fn show_court_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CourtsResponse>> {
    registry
        .court_repository()
        .find_all()
        .await
        .map(CourtsResponse::from)
        .map(Json)
}
