use crate::error::AppError;
use crate::handlers::require;
use crate::models::{MessageResponse, UpdateLocationRequest};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use types::geo::DriverLocation;
use types::ids::RideId;

pub async fn update_location(
    State(state): State<AppState>,
    Json(payload): Json<UpdateLocationRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let driver_id = require(payload.driver_id, "driver_id")?;
    let lat = require(payload.lat, "lat")?;
    let lng = require(payload.lng, "lng")?;

    state.tracker.update(driver_id, lat, lng);

    Ok(Json(MessageResponse {
        message: "location_updated",
    }))
}

/// Last-known location of the driver assigned to a ride
///
/// The tracker never consults the ride store itself; the composition lives
/// here. A missing ride and an unassigned ride are indistinguishable on the
/// wire, matching the original protocol.
pub async fn driver_location(
    State(state): State<AppState>,
    Path(ride_id): Path<u64>,
) -> Result<Json<DriverLocation>, AppError> {
    let ride_id = RideId::new(ride_id);
    let driver_id = state
        .rides
        .get(ride_id)
        .and_then(|ride| ride.driver_id)
        .ok_or_else(|| {
            AppError::NotFound(format!("ride {ride_id} not found or has no assigned driver"))
        })?;

    match state.tracker.latest(driver_id) {
        Some(location) => Ok(Json(location)),
        None => Err(AppError::NotFound(format!(
            "no location yet for driver {driver_id}"
        ))),
    }
}
