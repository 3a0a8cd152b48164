use backend::config::AppConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the filter comes
/// from `LOG_LEVEL` with the noisier dependencies pinned down. Output
/// is human-readable while developing (`LOG_PRETTY`) and JSON in
/// production.
pub fn init(config: &AppConfig) {
    let directives = format!(
        "{},actix_web=info,sqlx=warn,sea_orm=warn",
        config.logger.level
    );
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&directives))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.logger.pretty && config.server.env != "production" {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_ansi(false)
                    .json(),
            )
            .init();
    }
}
