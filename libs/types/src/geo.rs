//! Coordinates and driver location records

use crate::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A geographic point
///
/// Structurally unvalidated: no range check on either field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Last-known position of a driver
///
/// One record per driver, overwritten on every ping. No history retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriverLocation {
    pub driver_id: UserId,
    pub lat: f64,
    pub lng: f64,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_roundtrip() {
        let coord = Coordinate { lat: 52.52, lng: 13.405 };
        let json = serde_json::to_string(&coord).unwrap();
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(coord, back);
    }

    #[test]
    fn test_location_timestamp_is_iso8601() {
        let loc = DriverLocation {
            driver_id: UserId::new(2),
            lat: 10.0,
            lng: 20.0,
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&loc).unwrap();
        let ts = json["updated_at"].as_str().unwrap();
        assert!(ts.contains('T'), "expected ISO-8601 timestamp, got {ts}");
    }
}
