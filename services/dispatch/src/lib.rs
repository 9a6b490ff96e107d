//! Dispatch Service
//!
//! In-memory stores for the ride coordination system: user registry, ride
//! store (matching and lifecycle transitions), and driver location tracker.
//! All state is process-lifetime only.
//!
//! **Key Invariants:**
//! - User and ride ids are unique and strictly increasing
//! - A ride carries a driver iff its status is accepted, started or completed
//! - A waiting ride is claimed by at most one driver, even under concurrent
//!   acceptance attempts
//! - Records are append-only; no eviction, no persistence

pub mod registry;
pub mod rides;
pub mod tracker;

pub use registry::UserRegistry;
pub use rides::{RideHistory, RideStore};
pub use tracker::LocationTracker;
