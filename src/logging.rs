//! Redaction of clinical values in log output.
//!
//! Field values are patient data. They only reach the logs when the binary
//! opts in with `--log-data`; everything else sees [`REDACTED_VALUE`].

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

pub const REDACTED_VALUE: &str = "[REDACTED]";

pub fn set_log_data(enabled: bool) {
    LOG_DATA_ENABLED.store(enabled, Ordering::Release);
}

pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Acquire)
}

pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}
