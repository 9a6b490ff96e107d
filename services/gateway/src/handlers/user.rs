use crate::error::AppError;
use crate::models::{RegisterRequest, RegisterResponse};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::{Json, extract::State};
use types::user::User;

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    // An absent name and an empty name are both rejected by the registry
    let name = payload.name.unwrap_or_default();
    let user = state
        .registry
        .register(&name, payload.phone, payload.is_driver)?;

    tracing::info!(user_id = %user.id, is_driver = user.is_driver, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "registered",
            user_id: user.id,
        }),
    ))
}

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.registry.list())
}
