use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::AppError;
use crate::http::envelope;

// Placeholder handlers: the auth flows land with the product data
// model.

async fn register() -> Result<HttpResponse, AppError> {
    Ok(envelope::ok(json!({
        "message": "Registration endpoint - to be implemented",
    })))
}

async fn login() -> Result<HttpResponse, AppError> {
    Ok(envelope::ok(json!({
        "message": "Login endpoint - to be implemented",
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/login", web::post().to(login));
}
