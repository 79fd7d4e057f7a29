// src/logging.rs

use crate::errors::{CognivoError, CognivoResult};
use crate::models::ApiCallLog;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use log::warn;
use std::fs::OpenOptions;
use std::io::Write;

const WEBHOOK_LOG_FILE: &str = "webhook_calls.log";

/// Starts the file logger. The returned handle must stay alive for the
/// lifetime of the program so buffered records are flushed on exit.
pub fn init_logging(level: &str) -> CognivoResult<LoggerHandle> {
    let handle = Logger::try_with_str(level)
        .map_err(|e| CognivoError::config_error(format!("Invalid log level: {}", e)))?
        .log_to_file(FileSpec::default().basename("cognivo"))
        .start()
        .map_err(|e| CognivoError::config_error(format!("Failed to start logger: {}", e)))?;
    Ok(handle)
}

pub fn log_api_call(log: &ApiCallLog) {
    let log_entry = format!(
        "[{}] {} - {} - Status: {} - Time: {}ms\n",
        log.timestamp.to_rfc3339(),
        log.endpoint,
        log.request_summary,
        log.response_status,
        log.response_time_ms
    );

    match OpenOptions::new()
        .append(true)
        .create(true)
        .open(WEBHOOK_LOG_FILE)
    {
        Ok(mut file) => {
            if let Err(e) = file.write_all(log_entry.as_bytes()) {
                warn!("Failed to write webhook call log: {}", e);
            }
        }
        Err(e) => warn!("Failed to open webhook call log: {}", e),
    }
}
