use std::path::Path;
use tracing::warn;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. Keep the returned guard alive until exit
/// so the file writer flushes.
///
/// When the log directory cannot be created the file layer is skipped and
/// logging continues on the console only.
pub fn init_logger(component: &str, is_dev: bool, enable_file: bool) -> Option<WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_ansi(is_dev)
        .with_filter(console_filter);

    let log_dir = if is_dev { "./logs" } else { "/var/log/app" };

    let appender = if enable_file {
        Some(file_appender(Path::new(log_dir), component))
    } else {
        None
    };

    let (file_layer, guard, file_error) = match appender {
        Some(Ok(file_appender)) => {
            let (file_writer, guard) = non_blocking(file_appender);

            let layer = fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .json()
                .with_filter(EnvFilter::new("info"));

            (Some(layer), Some(guard), None)
        }
        Some(Err(e)) => (None, None, Some(e)),
        None => (None, None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        warn!("⚠️ File logging disabled, cannot write to {log_dir}: {e}");
    }

    guard
}

fn file_appender(log_dir: &Path, component: &str) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(format!("rust_app_{component}.log"))
        .build(log_dir)
}
