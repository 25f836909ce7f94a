//! Lang-Switch - Main Entry Point

use lang_switch::app::application::run_app;
use lang_switch::config::AppConfig;
use lang_switch::logging::init_tracing;
use tracing::{info, warn};

fn main() {
    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_tracing();

    info!("Starting Lang-Switch...");

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Falling back to default config");
        AppConfig::default()
    });

    run_app(config);
}
