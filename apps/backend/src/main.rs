use std::process;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use backend::config::AppConfig;
use backend::infra::db;
use backend::infra::shutdown::{self, Shutdown};
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_logger::RequestLogger;
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::state::app_state::AppState;
use tracing::{error, info, warn};

mod telemetry;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::load();
    telemetry::init(&config);

    let port = config.server.port.parse::<u16>().unwrap_or_else(|_| {
        error!(port = %config.server.port, "PORT must be a valid port number");
        process::exit(1);
    });

    let config = Arc::new(config);

    // Connection failure is a degraded mode, not a fatal one: health
    // endpoints keep answering and report the database as absent.
    let state = match db::connect(&config.database).await {
        Ok(conn) => {
            if let Err(e) = db::run_migrations(&conn).await {
                error!(error = %e, "failed to run database migrations");
            }
            AppState::new(conn, Arc::clone(&config))
        }
        Err(e) => {
            warn!(error = %e, "failed to connect to database, continuing without database connection");
            AppState::without_db(Arc::clone(&config))
        }
    };

    let data = web::Data::new(state.clone());

    info!(port, env = %config.server.env, "starting server");

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(RequestLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", port))?
    .disable_signals()
    .run();

    let handle = server.handle();
    let watcher = tokio::spawn(async move {
        if let Err(e) = wait_for_signal().await {
            error!(error = %e, "failed to install signal handlers");
            return;
        }

        info!("shutdown signal received, draining connections");
        match shutdown::run_with_deadline(handle.stop(true), SHUTDOWN_TIMEOUT).await {
            Shutdown::Completed => info!("graceful shutdown complete"),
            Shutdown::TimedOut => {
                error!("graceful shutdown timed out, forcing exit");
                process::exit(1);
            }
        }
    });

    server.await?;

    // The listener is drained; release the database handle before
    // exiting.
    if let Some(conn) = state.db {
        db::close(conn).await;
    }
    let _ = watcher.await;

    info!("server stopped");
    Ok(())
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = signal(SignalKind::hangup())?;
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    let mut quit = signal(SignalKind::quit())?;

    tokio::select! {
        _ = hangup.recv() => {}
        _ = interrupt.recv() => {}
        _ = terminate.recv() => {}
        _ = quit.recv() => {}
    }

    Ok(())
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
