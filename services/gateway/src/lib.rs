//! Gateway API service
//!
//! HTTP surface for the ride coordination system. Each endpoint maps to
//! exactly one operation on one of the dispatch stores.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
