//! Error types for the coordination stores
//!
//! Domain error taxonomy using thiserror

use crate::ids::RideId;
use crate::ride::RideStatus;
use thiserror::Error;

/// Registry-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("name is required")]
    NameRequired,
}

/// Ride-store-specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RideError {
    #[error("ride not found: {ride_id}")]
    NotFound { ride_id: RideId },

    #[error("ride {ride_id}: illegal transition from {from} to {to}")]
    InvalidTransition {
        ride_id: RideId,
        from: RideStatus,
        to: RideStatus,
    },
}
