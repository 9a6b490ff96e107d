use crate::models::PingResponse;
use axum::Json;
use chrono::Utc;

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong",
        time: Utc::now(),
    })
}
