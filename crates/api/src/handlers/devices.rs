//! Handlers for the `/devices` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mdm_core::device::{DeviceRequest, DeviceStatusRequest};
use mdm_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::services::DeviceService;
use crate::state::AppState;

/// GET /devices
pub async fn list_devices(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let devices = DeviceService::list(&state.pool).await?;
    Ok(Json(devices))
}

/// GET /devices/{id}
pub async fn get_device(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let device = DeviceService::get_by_id(&state.pool, id).await?;
    Ok(Json(device))
}

/// GET /devices/deviceId/{device_id}
///
/// `deviceId` is not unique; the earliest-created match is returned.
pub async fn get_device_by_device_id(
    State(state): State<AppState>,
    AppPath(device_id): AppPath<i64>,
) -> AppResult<impl IntoResponse> {
    let device = DeviceService::get_by_device_id(&state.pool, device_id).await?;
    Ok(Json(device))
}

/// POST /devices
pub async fn create_device(
    State(state): State<AppState>,
    AppJson(input): AppJson<DeviceRequest>,
) -> AppResult<impl IntoResponse> {
    let device = DeviceService::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(device)))
}

/// PUT /devices/{id}
pub async fn update_device(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<DeviceRequest>,
) -> AppResult<impl IntoResponse> {
    let device = DeviceService::update(&state.pool, id, input).await?;
    Ok(Json(device))
}

/// PATCH /devices/{id}
pub async fn update_device_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<DeviceStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let device = DeviceService::update_status(&state.pool, id, input).await?;
    Ok(Json(device))
}

/// DELETE /devices/{id}
pub async fn delete_device(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    DeviceService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
