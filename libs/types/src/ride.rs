//! Ride records and lifecycle status

use crate::geo::Coordinate;
use crate::ids::{RideId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ride lifecycle status
///
/// Rides advance `waiting -> accepted -> started -> completed`; a waiting
/// ride may instead be cancelled. `completed` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideStatus {
    /// Requested by a rider, no driver assigned yet
    Waiting,
    /// Claimed by a driver
    Accepted,
    /// Trip in progress
    Started,
    /// Trip finished (terminal)
    Completed,
    /// Withdrawn before a driver claimed it (terminal)
    Cancelled,
}

impl RideStatus {
    /// Check if status is terminal (no further transitions possible)
    pub fn is_terminal(&self) -> bool {
        matches!(self, RideStatus::Completed | RideStatus::Cancelled)
    }

    /// Check whether a transition to `next` is legal
    pub fn can_transition_to(&self, next: RideStatus) -> bool {
        matches!(
            (self, next),
            (RideStatus::Waiting, RideStatus::Accepted)
                | (RideStatus::Waiting, RideStatus::Cancelled)
                | (RideStatus::Accepted, RideStatus::Started)
                | (RideStatus::Started, RideStatus::Completed)
        )
    }
}

impl fmt::Display for RideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RideStatus::Waiting => "waiting",
            RideStatus::Accepted => "accepted",
            RideStatus::Started => "started",
            RideStatus::Completed => "completed",
            RideStatus::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

/// A single trip request moving through the ride lifecycle
///
/// `driver_id` is set exactly once, on acceptance. Invariant: `driver_id` is
/// present iff status is accepted, started or completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    pub id: RideId,
    pub rider_id: UserId,
    pub driver_id: Option<UserId>,
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub status: RideStatus,
    pub fare: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Ride {
    /// Create a new waiting ride with no driver and no fare
    pub fn new(
        id: RideId,
        rider_id: UserId,
        origin: Coordinate,
        destination: Coordinate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            rider_id,
            driver_id: None,
            origin,
            destination,
            status: RideStatus::Waiting,
            fare: None,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate { lat, lng }
    }

    #[test]
    fn test_new_ride_is_waiting_without_driver() {
        let ride = Ride::new(
            RideId::new(1),
            UserId::new(1),
            coord(0.0, 0.0),
            coord(1.0, 1.0),
            Utc::now(),
        );
        assert_eq!(ride.status, RideStatus::Waiting);
        assert!(ride.driver_id.is_none());
        assert!(ride.fare.is_none());
    }

    #[test]
    fn test_legal_transitions() {
        assert!(RideStatus::Waiting.can_transition_to(RideStatus::Accepted));
        assert!(RideStatus::Waiting.can_transition_to(RideStatus::Cancelled));
        assert!(RideStatus::Accepted.can_transition_to(RideStatus::Started));
        assert!(RideStatus::Started.can_transition_to(RideStatus::Completed));
    }

    #[test]
    fn test_state_skipping_is_illegal() {
        assert!(!RideStatus::Waiting.can_transition_to(RideStatus::Started));
        assert!(!RideStatus::Waiting.can_transition_to(RideStatus::Completed));
        assert!(!RideStatus::Accepted.can_transition_to(RideStatus::Completed));
        assert!(!RideStatus::Accepted.can_transition_to(RideStatus::Cancelled));
        assert!(!RideStatus::Started.can_transition_to(RideStatus::Cancelled));
    }

    #[test]
    fn test_terminal_states_admit_nothing() {
        for terminal in [RideStatus::Completed, RideStatus::Cancelled] {
            assert!(terminal.is_terminal());
            for next in [
                RideStatus::Waiting,
                RideStatus::Accepted,
                RideStatus::Started,
                RideStatus::Completed,
                RideStatus::Cancelled,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RideStatus::Waiting).unwrap(),
            "\"waiting\""
        );
        assert_eq!(
            serde_json::to_string(&RideStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }
}
