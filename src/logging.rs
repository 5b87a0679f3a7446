// src/logging.rs

use crate::config;
use crate::errors::{PanelError, PanelResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Starts file logging at the configured level. The returned handle must
/// stay alive for the lifetime of the process or logging stops.
pub fn init_logging() -> PanelResult<LoggerHandle> {
    let config = config::get_config();

    Logger::try_with_str(&config.log_level)
        .map_err(|e| PanelError::logging_error(format!("Invalid log level spec: {}", e)))?
        .log_to_file(FileSpec::default().basename("echopanel").suppress_timestamp())
        .append()
        .start()
        .map_err(|e| PanelError::logging_error(format!("Failed to start logger: {}", e)))
}
