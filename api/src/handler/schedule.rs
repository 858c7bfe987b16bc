use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::CourtId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::schedule::{ScheduleConfigResponse, UpsertScheduleConfigRequest};

pub async fn get_schedule_config(
    Path(court_id): Path<CourtId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ScheduleConfigResponse>> {
    ensure_court_exists(&registry, court_id).await?;

    registry
        .schedule_config_repository()
        .get_or_create_default(court_id)
        .await
        .map(ScheduleConfigResponse::from)
        .map(Json)
}

pub async fn put_schedule_config(
    Path(court_id): Path<CourtId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpsertScheduleConfigRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;
    ensure_court_exists(&registry, court_id).await?;

    let config = req.into_config(court_id)?;
    config
        .ensure_valid()
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;

    registry
        .schedule_config_repository()
        .upsert(&config)
        .await
        .map(|_| StatusCode::OK)
}

async fn ensure_court_exists(registry: &AppRegistry, court_id: CourtId) -> AppResult<()> {
    registry
        .court_repository()
        .find_by_id(court_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::EntityNotFound(format!("court {court_id} not found")))
}
