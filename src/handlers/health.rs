use crate::routes;
use axum::http::StatusCode;

/// GET /health handler - Health check endpoint
///
/// Reports liveness only. The store is not consulted, so a load balancer
/// keeps routing here even while DynamoDB is unavailable.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is up")
    ),
    tag = "health"
)]
pub async fn health_handler() -> StatusCode {
    StatusCode::OK
}
