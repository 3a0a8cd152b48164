use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::AppError;
use crate::http::envelope;
use crate::state::app_state::AppState;

const SERVICE_NAME: &str = "clipture-backend";
const DB_PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Service liveness probe.
async fn health() -> Result<HttpResponse, AppError> {
    Ok(envelope::ok(json!({
        "status": "healthy",
        "timestamp": envelope::rfc3339_now(),
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Database health probe.
///
/// Running without a database handle is a legal state and reports
/// "disconnected"; only a failing ping is an error.
async fn db_health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let Some(db) = app_state.db.as_ref() else {
        return Ok(envelope::ok(json!({
            "status": "disconnected",
            "timestamp": envelope::rfc3339_now(),
            "database": "postgresql",
        })));
    };

    let ping = match tokio::time::timeout(DB_PING_TIMEOUT, db.ping()).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(_) => Err(format!("ping timed out after {DB_PING_TIMEOUT:?}")),
    };

    match ping {
        Ok(()) => Ok(envelope::ok(json!({
            "status": "healthy",
            "timestamp": envelope::rfc3339_now(),
            "database": "postgresql",
        }))),
        Err(e) => Ok(envelope::error(
            StatusCode::SERVICE_UNAVAILABLE,
            "DB_UNHEALTHY",
            "Database is not healthy",
            Some(json!({ "error": e })),
        )),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/db-health", web::get().to(db_health));
}
