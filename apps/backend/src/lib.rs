#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod error;
pub mod http;
pub mod infra;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for public API
pub use config::AppConfig;
pub use error::AppError;
pub use middleware::cors::cors_middleware;
pub use middleware::request_logger::RequestLogger;
pub use middleware::request_trace::RequestTrace;
pub use state::app_state::AppState;
