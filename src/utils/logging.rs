use tracing::{debug, error, info};

/// Logs call dispatch start with consistent format
pub fn log_call_start(channel: &str, method: &str) {
    debug!("CALL_START: {} on {}", method, channel);
}

/// Logs a successfully answered call with consistent format
pub fn log_call_success(channel: &str, method: &str) {
    info!("CALL_SUCCESS: {} on {}", method, channel);
}

/// Logs an unrecognized call name with consistent format
pub fn log_call_not_implemented(channel: &str, method: &str) {
    info!("CALL_NOT_IMPLEMENTED: {} on {}", method, channel);
}

/// Logs a failed host query with consistent format
pub fn log_call_error(channel: &str, method: &str, code: &str, error: &str) {
    error!("CALL_ERROR: {} on {} failed: {} - {}", method, channel, code, error);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
