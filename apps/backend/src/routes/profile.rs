use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::AppError;
use crate::http::envelope;

/// Placeholder until user accounts exist. Will sit behind the auth
/// middleware once tokens are issued.
async fn profile() -> Result<HttpResponse, AppError> {
    Ok(envelope::ok(json!({
        "message": "Profile endpoint - to be implemented",
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile", web::get().to(profile));
}
