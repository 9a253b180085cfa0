use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::storage::SightingStore;

use super::{
    error::ApiError,
    models::{
        CreateRequest, CreateResponse, EmptyResponse, ErrorResponse, GetResponse, HealthResponse,
        SightingInfoBody, UpdateRequest,
    },
    AppState,
};

pub async fn health<S: SightingStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    let uptime_secs = state.started_at.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            uptime_secs,
            sightings: state.store.len(),
        }),
    )
}

pub async fn create_sighting<S: SightingStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    payload: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<Json<CreateResponse>, ApiError> {
    let Json(req) = payload?;
    let info = req
        .info
        .ok_or_else(|| ApiError::InvalidArgument("info cannot be nil".to_string()))?;
    validate_info(&info)?;

    let uuid = state.store.create(info.into());
    log::info!("Created sighting with UUID {}", uuid);

    Ok(Json(CreateResponse { uuid }))
}

pub async fn get_sighting<S: SightingStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    Path(uuid): Path<String>,
) -> Result<Json<GetResponse>, ApiError> {
    let sighting = state.store.get(&uuid)?;
    Ok(Json(GetResponse {
        sighting: sighting.into(),
    }))
}

pub async fn update_sighting<S: SightingStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    Path(uuid): Path<String>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<EmptyResponse>, ApiError> {
    let Json(req) = payload?;
    let update_info = req
        .update_info
        .ok_or_else(|| ApiError::InvalidArgument("update_info cannot be nil".to_string()))?;

    state.store.update(&uuid, update_info.into())?;
    log::debug!("Updated sighting with UUID {}", uuid);

    Ok(Json(EmptyResponse {}))
}

pub async fn delete_sighting<S: SightingStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    Path(uuid): Path<String>,
) -> Result<Json<EmptyResponse>, ApiError> {
    state.store.delete(&uuid)?;
    log::info!("Soft-deleted sighting with UUID {}", uuid);

    Ok(Json(EmptyResponse {}))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            code: "NOT_FOUND".to_string(),
            message: "endpoint not found".to_string(),
        }),
    )
}

fn validate_info(info: &SightingInfoBody) -> Result<(), ApiError> {
    if info.location.trim().is_empty() {
        return Err(ApiError::InvalidArgument(
            "info.location must not be empty".to_string(),
        ));
    }
    if info.description.trim().is_empty() {
        return Err(ApiError::InvalidArgument(
            "info.description must not be empty".to_string(),
        ));
    }
    if let Some(duration) = info.duration_seconds.filter(|d| *d < 0) {
        return Err(ApiError::InvalidArgument(format!(
            "info.duration_seconds must not be negative, got {}",
            duration
        )));
    }
    Ok(())
}
