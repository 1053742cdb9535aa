use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::response::{ApiResponse, Meta};

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = ApiResponse<HealthData>),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<ApiResponse<HealthData>> {
    let data = HealthData {
        status: "ok".to_string(),
    };

    Json(ApiResponse::success(
        "Health check",
        data,
        Some(Meta::empty()),
    ))
}

// Liveness greeting at the root, kept outside the /shop domain surface.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting"),
    ),
    tag = "Health"
)]
pub async fn root() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        "Hello, world!",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
