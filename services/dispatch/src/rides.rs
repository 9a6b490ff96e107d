//! Ride store
//!
//! Owns every ride record and is the sole authority for lifecycle
//! transitions. Each transition runs find + status-check + mutate under a
//! single write-lock acquisition, so concurrent acceptance attempts on one
//! ride serialize and exactly one driver wins the claim.

use chrono::Utc;
use serde::Serialize;
use std::sync::RwLock;
use types::errors::RideError;
use types::geo::Coordinate;
use types::ids::{RideId, UserId};
use types::ride::{Ride, RideStatus};

/// Store of all ride records
#[derive(Default)]
pub struct RideStore {
    rides: RwLock<Vec<Ride>>,
}

/// A user's rides, partitioned by role
#[derive(Debug, Clone, Serialize)]
pub struct RideHistory {
    pub as_rider: Vec<Ride>,
    pub as_driver: Vec<Ride>,
}

impl RideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new waiting ride
    ///
    /// `rider_id` is not checked against the registry; the stores are
    /// deliberately unconnected at creation time.
    pub fn request(&self, rider_id: UserId, origin: Coordinate, destination: Coordinate) -> Ride {
        let mut rides = self.rides.write().expect("ride lock poisoned");
        let ride = Ride::new(
            RideId::new(rides.len() as u64 + 1),
            rider_id,
            origin,
            destination,
            Utc::now(),
        );
        rides.push(ride.clone());
        ride
    }

    /// Look up a single ride
    pub fn get(&self, ride_id: RideId) -> Option<Ride> {
        self.rides
            .read()
            .expect("ride lock poisoned")
            .iter()
            .find(|r| r.id == ride_id)
            .cloned()
    }

    /// All waiting rides, oldest first
    pub fn available(&self) -> Vec<Ride> {
        self.rides
            .read()
            .expect("ride lock poisoned")
            .iter()
            .filter(|r| r.status == RideStatus::Waiting)
            .cloned()
            .collect()
    }

    /// Claim a waiting ride for a driver
    ///
    /// The sole point where `driver_id` is established. Fails if the ride is
    /// unknown or no longer waiting; an already-claimed ride is never
    /// reassigned.
    pub fn accept(&self, ride_id: RideId, driver_id: UserId) -> Result<Ride, RideError> {
        self.transition(ride_id, RideStatus::Accepted, Some(driver_id))
    }

    /// Begin the trip; legal only from `accepted`
    pub fn start(&self, ride_id: RideId) -> Result<Ride, RideError> {
        self.transition(ride_id, RideStatus::Started, None)
    }

    /// Finish the trip; legal only from `started`
    pub fn complete(&self, ride_id: RideId) -> Result<Ride, RideError> {
        self.transition(ride_id, RideStatus::Completed, None)
    }

    /// Withdraw a ride; legal only while still `waiting`
    pub fn cancel(&self, ride_id: RideId) -> Result<Ride, RideError> {
        self.transition(ride_id, RideStatus::Cancelled, None)
    }

    /// Partition all rides by the user's role in them
    pub fn history(&self, user_id: UserId) -> RideHistory {
        let rides = self.rides.read().expect("ride lock poisoned");
        RideHistory {
            as_rider: rides.iter().filter(|r| r.rider_id == user_id).cloned().collect(),
            as_driver: rides
                .iter()
                .filter(|r| r.driver_id == Some(user_id))
                .cloned()
                .collect(),
        }
    }

    fn transition(
        &self,
        ride_id: RideId,
        to: RideStatus,
        claim: Option<UserId>,
    ) -> Result<Ride, RideError> {
        let mut rides = self.rides.write().expect("ride lock poisoned");
        let ride = rides
            .iter_mut()
            .find(|r| r.id == ride_id)
            .ok_or(RideError::NotFound { ride_id })?;

        if !ride.status.can_transition_to(to) {
            return Err(RideError::InvalidTransition {
                ride_id,
                from: ride.status,
                to,
            });
        }

        if let Some(driver_id) = claim {
            debug_assert!(ride.driver_id.is_none(), "claim on already-claimed ride");
            ride.driver_id = Some(driver_id);
        }
        ride.status = to;
        Ok(ride.clone())
    }
}
