//! Error types for the latency logger

use core::fmt;

use thiserror::Error;

/// Errors that can occur during latency logger operations.
///
/// The logger is a best-effort diagnostic facility: the hot path
/// ([`log`](crate::LatencyLogger::log)) and lazy initialization
/// ([`init`](crate::LatencyLogger::init)) never return errors. Only
/// construction and teardown have failure modes worth surfacing.
#[derive(Debug, Clone, Error)]
pub enum LatencyLogError {
    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The worker thread panicked before draining its queue.
    #[error("Worker thread panicked before draining its queue")]
    WorkerPanicked,
}

impl LatencyLogError {
    /// Create an invalid-configuration error with context.
    pub fn invalid_configuration(context: impl fmt::Display) -> Self {
        LatencyLogError::InvalidConfiguration(context.to_string())
    }

    /// Check if this error is recoverable by the caller.
    pub fn is_recoverable(&self) -> bool {
        match self {
            LatencyLogError::InvalidConfiguration(_) => true,
            LatencyLogError::WorkerPanicked => false,
        }
    }
}

/// Result type alias for latency logger operations.
pub type LatencyLogResult<T> = Result<T, LatencyLogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let e = LatencyLogError::invalid_configuration("thread name is empty");
        assert!(matches!(e, LatencyLogError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(LatencyLogError::invalid_configuration("bad").is_recoverable());
        assert!(!LatencyLogError::WorkerPanicked.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let e = LatencyLogError::invalid_configuration("thread name is empty");
        assert!(e.to_string().contains("thread name is empty"));

        let e = LatencyLogError::WorkerPanicked;
        assert!(e.to_string().contains("panicked"));
    }
}
