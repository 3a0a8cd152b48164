//! Database connection bootstrap.
//!
//! Opens the SeaORM connection pool with bounded limits and verifies
//! liveness with a ping before handing the pool back. Connection
//! attempts are retried with a doubling delay; the delay is bounded
//! only by the attempt ceiling, not by a maximum.

use std::future::Future;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info, warn};

use crate::config::DatabaseConfig;
use crate::error::AppError;

const MAX_ATTEMPTS: u32 = 5;
const INITIAL_RETRY_DELAY: Duration = Duration::from_secs(2);

const POOL_MIN_CONNECTIONS: u32 = 10;
const POOL_MAX_CONNECTIONS: u32 = 100;
const POOL_MAX_LIFETIME: Duration = Duration::from_secs(3600);

/// Establish the database connection, retrying on failure.
///
/// A connect that succeeds but fails the liveness ping counts as a
/// failed attempt. After the ceiling is exhausted the last error is
/// returned; the caller decides whether that is fatal.
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new(cfg.url());
    opts.min_connections(POOL_MIN_CONNECTIONS)
        .max_connections(POOL_MAX_CONNECTIONS)
        .max_lifetime(POOL_MAX_LIFETIME)
        .sqlx_logging(false);

    let conn = retry_with_backoff(
        || {
            let opts = opts.clone();
            async move {
                let conn = Database::connect(opts)
                    .await
                    .map_err(|e| AppError::db(format!("failed to open connection: {e}")))?;
                if let Err(e) = conn.ping().await {
                    let _ = conn.close().await;
                    return Err(AppError::db(format!("connection ping failed: {e}")));
                }
                Ok(conn)
            }
        },
        MAX_ATTEMPTS,
        INITIAL_RETRY_DELAY,
    )
    .await?;

    info!(
        host = %cfg.host,
        port = %cfg.port,
        database = %cfg.name,
        user = %cfg.user,
        "successfully connected to database"
    );

    Ok(conn)
}

/// Retry an async connect operation up to `max_attempts` times.
/// The delay starts at `initial_delay` and doubles after every failed
/// attempt; no sleep happens after the final failure.
async fn retry_with_backoff<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    initial_delay: Duration,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut delay = initial_delay;
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match connect_fn().await {
            Ok(value) => {
                if attempt > 1 {
                    info!(attempt, "connection retry succeeded");
                }
                return Ok(value);
            }
            Err(e) => {
                warn!(
                    error = %e,
                    retry = attempt,
                    max_retries = max_attempts,
                    "failed to connect to database, retrying"
                );
                last_error = Some(e);
                if attempt < max_attempts {
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }

    let last = last_error.map(|e| e.to_string()).unwrap_or_default();
    Err(AppError::db_unavailable(format!(
        "failed to connect to database after {max_attempts} attempts: {last}"
    )))
}

/// Close the connection pool, logging the outcome.
pub async fn close(conn: DatabaseConnection) {
    match conn.close().await {
        Ok(()) => info!("database connection closed"),
        Err(e) => error!(error = %e, "error closing database connection"),
    }
}

/// Schema migration hook. No product entities exist yet, so this only
/// records that the step ran; entity migrations register here once the
/// capture and annotation models land.
pub async fn run_migrations(_conn: &DatabaseConnection) -> Result<(), AppError> {
    info!("database migrations completed successfully");
    Ok(())
}
