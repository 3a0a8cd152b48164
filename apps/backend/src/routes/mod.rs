use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::AppError;
use crate::http::envelope;

pub mod auth;
pub mod health;
pub mod profile;

const SERVICE_DESCRIPTION: &str = "A modern screen capture and annotation service";

/// Root welcome page.
async fn index() -> Result<HttpResponse, AppError> {
    Ok(envelope::ok(json!({
        "name": "Clipture API",
        "description": SERVICE_DESCRIPTION,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "health": "/health",
            "db_health": "/db-health",
            "api_v1": "/api/v1",
        },
    })))
}

/// API v1 welcome page.
async fn api_v1_index() -> Result<HttpResponse, AppError> {
    Ok(envelope::ok(json!({
        "name": "Clipture API",
        "description": SERVICE_DESCRIPTION,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "health": "/api/v1/health",
            "db_health": "/api/v1/db-health",
        },
    })))
}

/// Default service for unmatched routes.
async fn not_found() -> HttpResponse {
    envelope::error(
        actix_web::http::StatusCode::NOT_FOUND,
        "NOT_FOUND",
        "The requested resource could not be found",
        Some(json!({ "documentation": "/api/docs" })),
    )
}

/// Wire the full routing table: root health checks, the welcome pages,
/// and the `/api/v1` scope with its placeholder auth and profile
/// routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .configure(health::configure_routes)
        .service(
            web::scope("/api/v1")
                .route("", web::get().to(api_v1_index))
                .route("/", web::get().to(api_v1_index))
                .configure(health::configure_routes)
                .service(web::scope("/auth").configure(auth::configure_routes))
                .configure(profile::configure_routes),
        )
        .default_service(web::route().to(not_found));
}
