//! Error types for configuration handling.

use thiserror::Error;

/// A configuration value outside its accepted range or format
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("notifications.timeout_ms must be between {min} and {max}, got {value}")]
    TimeoutOutOfRange { value: u64, min: u64, max: u64 },

    #[error("ui.two_column_min_width must be between {min} and {max} columns, got {value}")]
    BreakpointOutOfRange { value: u16, min: u16, max: u16 },

    #[error("invalid {field} '{format}': {reason}")]
    InvalidFormat {
        field: &'static str,
        format: String,
        reason: String,
    },

    #[error("unknown logging.level '{0}' (expected error, warn, info, debug or trace)")]
    UnknownLogLevel(String),
}
