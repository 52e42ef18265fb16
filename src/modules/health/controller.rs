use axum::Json;

use todosapp_models::HealthResponse;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/healthy",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
