//! Route definitions for the device registry.

use axum::routing::get;
use axum::Router;

use crate::handlers::devices;
use crate::state::AppState;

/// Device routes mounted at `/devices`.
///
/// ```text
/// GET    /                       -> list_devices
/// POST   /                       -> create_device
/// GET    /{id}                   -> get_device
/// PUT    /{id}                   -> update_device
/// PATCH  /{id}                   -> update_device_status
/// DELETE /{id}                   -> delete_device
/// GET    /deviceId/{device_id}   -> get_device_by_device_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(devices::list_devices).post(devices::create_device),
        )
        .route(
            "/{id}",
            get(devices::get_device)
                .put(devices::update_device)
                .patch(devices::update_device_status)
                .delete(devices::delete_device),
        )
        .route(
            "/deviceId/{device_id}",
            get(devices::get_device_by_device_id),
        )
}
