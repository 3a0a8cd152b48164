use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

/// Application state containing shared resources.
///
/// Read-only after startup: the database handle is either connected or
/// absent, and the configuration never changes once loaded.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection, absent when the service runs without
    /// persistence.
    pub db: Option<DatabaseConnection>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Arc<AppConfig>) -> Self {
        Self {
            db: Some(db),
            config,
        }
    }

    pub fn without_db(config: Arc<AppConfig>) -> Self {
        Self { db: None, config }
    }
}
