//! Types library for the ride coordination system
//!
//! This library provides all core type definitions shared across the system:
//! identifiers, user and ride records, the ride lifecycle, driver locations,
//! and the domain error taxonomy.
//!
//! # Modules
//! - `ids`: Sequential identifiers (UserId, RideId)
//! - `user`: Registered participant records
//! - `ride`: Ride records and lifecycle status
//! - `geo`: Coordinates and driver location records
//! - `errors`: Error taxonomy

pub mod ids;
pub mod user;
pub mod ride;
pub mod geo;
pub mod errors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::user::*;
    pub use crate::ride::*;
    pub use crate::geo::*;
    pub use crate::errors::*;
}
