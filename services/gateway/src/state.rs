use dispatch::{LocationTracker, RideStore, UserRegistry};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppState {
    pub registry: Arc<UserRegistry>,
    pub rides: Arc<RideStore>,
    pub tracker: Arc<LocationTracker>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
