mod common;
mod support;

use actix_web::test;

use crate::common::{assert_error_envelope, assert_success_envelope};
use crate::support::{create_test_app, test_state};

#[actix_web::test]
async fn test_health_returns_healthy_envelope() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    let json = assert_success_envelope(resp).await;
    assert_eq!(json["data"]["status"], "healthy");
    assert_eq!(json["data"]["service"], "clipture-backend");
    assert_eq!(json["data"]["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["data"]["timestamp"].is_string());
}

#[actix_web::test]
async fn test_api_v1_health_matches_root_health() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;

    let json = assert_success_envelope(resp).await;
    assert_eq!(json["data"]["status"], "healthy");
}

#[actix_web::test]
async fn test_db_health_reports_disconnected_without_handle() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/db-health").to_request();
    let resp = test::call_service(&app, req).await;

    // No database handle is a legal degraded state, not an error.
    let json = assert_success_envelope(resp).await;
    assert_eq!(json["data"]["status"], "disconnected");
    assert_eq!(json["data"]["database"], "postgresql");
}

#[actix_web::test]
async fn test_api_v1_db_health_reports_disconnected_without_handle() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/api/v1/db-health")
        .to_request();
    let resp = test::call_service(&app, req).await;

    let json = assert_success_envelope(resp).await;
    assert_eq!(json["data"]["status"], "disconnected");
}

#[actix_web::test]
async fn test_root_welcome_page() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    let json = assert_success_envelope(resp).await;
    assert_eq!(json["data"]["name"], "Clipture API");
    assert_eq!(json["data"]["status"], "running");
    assert_eq!(json["data"]["endpoints"]["health"], "/health");
    assert_eq!(json["data"]["endpoints"]["db_health"], "/db-health");
    assert_eq!(json["data"]["endpoints"]["api_v1"], "/api/v1");
}

#[actix_web::test]
async fn test_api_v1_welcome_page() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    for uri in ["/api/v1", "/api/v1/"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        let json = assert_success_envelope(resp).await;
        assert_eq!(json["data"]["endpoints"]["health"], "/api/v1/health", "{uri}");
    }
}

#[actix_web::test]
async fn test_unknown_route_returns_not_found_envelope() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/no/such/route").to_request();
    let resp = test::call_service(&app, req).await;

    let json = assert_error_envelope(
        resp,
        404,
        "NOT_FOUND",
        "The requested resource could not be found",
    )
    .await;
    assert_eq!(json["error"]["details"]["documentation"], "/api/docs");
}
