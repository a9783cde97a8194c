// Typed errors with thiserror. Configuration problems surface at setup, never per frame.

use thiserror::Error;

/// Engine error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid duration: {0}s (must be a finite number of seconds > 0)")]
    InvalidDuration(f64),

    #[error("Invalid phase window [{start}, {end}]: bounds must lie in [0, 1] with start <= end")]
    InvalidPhaseWindow { start: f64, end: f64 },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}
