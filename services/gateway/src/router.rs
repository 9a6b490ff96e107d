use crate::handlers::{health, location, ride, user};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(health::ping))
        .route("/register", post(user::register))
        .route("/users", get(user::list_users))
        .route("/request_ride", post(ride::request_ride))
        .route("/available_rides", get(ride::available_rides))
        .route("/accept_ride", post(ride::accept_ride))
        .route("/start_ride", post(ride::start_ride))
        .route("/complete_ride", post(ride::complete_ride))
        .route("/cancel_ride", post(ride::cancel_ride))
        .route("/ride_history/{user_id}", get(ride::ride_history))
        .route("/update_location", post(location::update_location))
        .route("/get_driver_location/{ride_id}", get(location::driver_location))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
