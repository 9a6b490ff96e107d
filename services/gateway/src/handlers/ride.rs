use crate::error::AppError;
use crate::handlers::require;
use crate::models::{AcceptRideRequest, RequestRideRequest, RideIdRequest, RideResponse};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::{
    Json,
    extract::{Path, State},
};
use dispatch::RideHistory;
use types::ids::UserId;
use types::ride::Ride;

pub async fn request_ride(
    State(state): State<AppState>,
    Json(payload): Json<RequestRideRequest>,
) -> Result<(StatusCode, Json<RideResponse>), AppError> {
    let rider_id = require(payload.rider_id, "rider_id")?;
    let origin = require(payload.origin, "origin")?;
    let destination = require(payload.destination, "destination")?;

    let ride = state.rides.request(rider_id, origin, destination);
    tracing::info!(ride_id = %ride.id, %rider_id, "ride requested");

    Ok((
        StatusCode::CREATED,
        Json(RideResponse {
            message: "ride_requested",
            ride,
        }),
    ))
}

pub async fn available_rides(State(state): State<AppState>) -> Json<Vec<Ride>> {
    Json(state.rides.available())
}

pub async fn accept_ride(
    State(state): State<AppState>,
    Json(payload): Json<AcceptRideRequest>,
) -> Result<Json<RideResponse>, AppError> {
    let driver_id = require(payload.driver_id, "driver_id")?;
    let ride_id = require(payload.ride_id, "ride_id")?;

    let ride = state.rides.accept(ride_id, driver_id)?;
    tracing::info!(%ride_id, %driver_id, "ride accepted");

    Ok(Json(RideResponse {
        message: "ride_accepted",
        ride,
    }))
}

pub async fn start_ride(
    State(state): State<AppState>,
    Json(payload): Json<RideIdRequest>,
) -> Result<Json<RideResponse>, AppError> {
    let ride_id = require(payload.ride_id, "ride_id")?;
    let ride = state.rides.start(ride_id)?;

    Ok(Json(RideResponse {
        message: "ride_started",
        ride,
    }))
}

pub async fn complete_ride(
    State(state): State<AppState>,
    Json(payload): Json<RideIdRequest>,
) -> Result<Json<RideResponse>, AppError> {
    let ride_id = require(payload.ride_id, "ride_id")?;
    let ride = state.rides.complete(ride_id)?;

    Ok(Json(RideResponse {
        message: "ride_completed",
        ride,
    }))
}

pub async fn cancel_ride(
    State(state): State<AppState>,
    Json(payload): Json<RideIdRequest>,
) -> Result<Json<RideResponse>, AppError> {
    let ride_id = require(payload.ride_id, "ride_id")?;
    let ride = state.rides.cancel(ride_id)?;
    tracing::info!(%ride_id, "ride cancelled");

    Ok(Json(RideResponse {
        message: "ride_cancelled",
        ride,
    }))
}

pub async fn ride_history(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Json<RideHistory> {
    Json(state.rides.history(UserId::new(user_id)))
}
