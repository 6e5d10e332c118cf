use actix_web::HttpResponse;
use serde_json::json;

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Service name, version and docs location"))
)]
pub async fn handler() -> HttpResponse {
    tracing::info!("Root Handler");
    HttpResponse::Ok().json(json!({
        "message": "Welcome to the MovieSir API!",
        "docs": crate::openapi::DOCS_PATH,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy"
    }))
}
