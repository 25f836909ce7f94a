//! Logging - tracing subscriber setup
//!
//! Console output plus a daily rolling file in the platform data directory.

use tracing::warn;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::helpers::get_or_create_log_dir;

const LOG_FILE_PREFIX: &str = "lang-switch";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer and must be held until exit.
pub fn init_tracing() -> Option<WorkerGuard> {
    let console_layer = fmt::layer().with_filter(env_filter());

    let file_appender = get_or_create_log_dir().map_err(|e| e.to_string()).and_then(|dir| {
        RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix("log")
            .build(dir)
            .map_err(|e| e.to_string())
    });

    let (file_layer, guard, file_error) = match file_appender {
        Ok(appender) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_line_number(true)
                .with_writer(non_blocking)
                .with_filter(env_filter());
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    Registry::default().with(console_layer).with(file_layer).init();

    if let Some(error) = file_error {
        warn!(error = %error, "File logging disabled");
    }

    guard
}
