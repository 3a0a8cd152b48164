#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary that pulls this
// module in. TEST_LOG takes precedence, then RUST_LOG, default warn.
#[ctor::ctor]
fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_test_writer()
        .try_init();
}

/// Every response must carry the request id assigned by the trace
/// middleware.
pub fn assert_request_id_header(resp: &ServiceResponse<BoxBody>) {
    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header should be present");
    assert!(!request_id.is_empty(), "x-request-id should not be empty");
}

pub async fn read_json(resp: ServiceResponse<BoxBody>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("response body should be JSON")
}

/// Validate a success envelope and return its parsed body.
pub async fn assert_success_envelope(resp: ServiceResponse<BoxBody>) -> Value {
    assert!(
        resp.status().is_success(),
        "expected success status, got {}",
        resp.status()
    );
    assert_request_id_header(&resp);

    let json = read_json(resp).await;
    assert_eq!(json["success"], true);
    assert!(json.get("data").is_some(), "data should be present");
    assert!(json.get("error").is_none(), "error should be omitted");
    assert!(json["timestamp"].is_string(), "timestamp should be a string");
    json
}

/// Validate an error envelope and return its parsed body.
pub async fn assert_error_envelope(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
    expected_message: &str,
) -> Value {
    assert_eq!(resp.status().as_u16(), expected_status);
    assert_request_id_header(&resp);

    let json = read_json(resp).await;
    assert_eq!(json["success"], false);
    assert!(json.get("data").is_none(), "data should be omitted");
    assert_eq!(json["error"]["code"], expected_code);
    assert_eq!(json["error"]["message"], expected_message);
    assert!(json["timestamp"].is_string(), "timestamp should be a string");
    json
}
