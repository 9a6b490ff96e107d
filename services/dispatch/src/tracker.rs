//! Driver location tracker
//!
//! Holds the single most recent position per driver. No transitions, no
//! history; every ping overwrites the previous record.

use chrono::Utc;
use dashmap::DashMap;
use types::geo::DriverLocation;
use types::ids::UserId;

/// Last-known-position store, keyed by driver id
#[derive(Default)]
pub struct LocationTracker {
    locations: DashMap<UserId, DriverLocation>,
}

impl LocationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a driver's current position, replacing any prior record
    pub fn update(&self, driver_id: UserId, lat: f64, lng: f64) -> DriverLocation {
        let location = DriverLocation {
            driver_id,
            lat,
            lng,
            updated_at: Utc::now(),
        };
        self.locations.insert(driver_id, location);
        location
    }

    /// The driver's last-known position, if they have ever pinged
    pub fn latest(&self, driver_id: UserId) -> Option<DriverLocation> {
        self.locations.get(&driver_id).map(|entry| *entry.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_none_before_first_ping() {
        let tracker = LocationTracker::new();
        assert!(tracker.latest(UserId::new(1)).is_none());
    }

    #[test]
    fn test_update_overwrites_prior_record() {
        let tracker = LocationTracker::new();
        let driver = UserId::new(2);

        tracker.update(driver, 10.0, 20.0);
        tracker.update(driver, 11.5, 21.5);

        let location = tracker.latest(driver).unwrap();
        assert_eq!(location.lat, 11.5);
        assert_eq!(location.lng, 21.5);
        assert_eq!(location.driver_id, driver);
    }

    #[test]
    fn test_drivers_are_tracked_independently() {
        let tracker = LocationTracker::new();
        tracker.update(UserId::new(1), 1.0, 1.0);
        tracker.update(UserId::new(2), 2.0, 2.0);

        assert_eq!(tracker.latest(UserId::new(1)).unwrap().lat, 1.0);
        assert_eq!(tracker.latest(UserId::new(2)).unwrap().lat, 2.0);
    }
}
