//! The standard response envelope returned by every endpoint.
//!
//! Success responses carry `data`, failures carry `error`, and both
//! carry an RFC 3339 UTC `timestamp`:
//!
//! ```json
//! { "success": true, "data": { ... }, "timestamp": "2026-01-01T00:00:00Z" }
//! { "success": false, "error": { "code": "NOT_FOUND", "message": "..." }, "timestamp": "..." }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Envelope {
    pub fn success(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    pub fn failure(code: impl Into<String>, message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody {
                code: code.into(),
                message: message.into(),
                details,
            }),
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

/// Respond 200 with a success envelope.
pub fn ok(data: Value) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::success(data))
}

/// Respond with an error envelope at the given status.
pub fn error(
    status: StatusCode,
    code: impl Into<String>,
    message: impl Into<String>,
    details: Option<Value>,
) -> HttpResponse {
    HttpResponse::build(status).json(Envelope::failure(code, message, details))
}

/// Current UTC time as an RFC 3339 string, for handler payloads.
pub fn rfc3339_now() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}
