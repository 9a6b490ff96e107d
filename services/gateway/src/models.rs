use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use types::geo::Coordinate;
use types::ids::{RideId, UserId};
use types::ride::Ride;

// Required fields are modeled as Option so that an absent field surfaces as a
// 400 from the handler instead of a body-deserialization rejection.

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub is_driver: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestRideRequest {
    pub rider_id: Option<UserId>,
    pub origin: Option<Coordinate>,
    pub destination: Option<Coordinate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AcceptRideRequest {
    pub driver_id: Option<UserId>,
    pub ride_id: Option<RideId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RideIdRequest {
    pub ride_id: Option<RideId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RideResponse {
    pub message: &'static str,
    pub ride: Ride,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLocationRequest {
    pub driver_id: Option<UserId>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
    pub time: DateTime<Utc>,
}
