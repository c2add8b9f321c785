use crate::config::LogConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Install the global subscriber.
///
/// Stdout always gets a layer. A rolling file layer is added when `log_dir`
/// is set, and the returned guard must outlive the process' logging.
pub fn init_logging(config: &LogConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let stdout_layer = if config.use_json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(false).with_ansi(true).boxed()
    };

    let (file_layer, guard) = match config.log_dir.as_deref() {
        Some(dir) => {
            let file_appender = match config.rotation.as_str() {
                "hourly" => tracing_appender::rolling::hourly(dir, &config.log_file),
                "daily" => tracing_appender::rolling::daily(dir, &config.log_file),
                _ => tracing_appender::rolling::never(dir, &config.log_file),
            };
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = if config.use_json {
                fmt::layer()
                    .json()
                    .with_target(true) // Keep target in JSON for structured queries
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .boxed()
            } else {
                fmt::layer()
                    .with_target(false)
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .boxed()
            };
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}
