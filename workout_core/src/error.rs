//! Error types for the workout_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for workout_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workout code is not one of SWM, RUN, WLK
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    /// Value list length does not match the workout's fields
    #[error("Workout {code} expects {expected} values, got {got}")]
    Arity {
        code: String,
        expected: usize,
        got: usize,
    },

    /// A value has the wrong shape for its field (e.g. fractional step count)
    #[error("Invalid value for {code}.{field}: {value}")]
    InvalidValue {
        code: String,
        field: &'static str,
        value: f64,
    },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed line in a package file
    #[error("JSON error on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for errors raised while turning a reading into a workout.
    ///
    /// Only these may be skipped by the driver; I/O and parse failures
    /// always end the run.
    pub fn is_dispatch_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownWorkoutType(_) | Error::Arity { .. } | Error::InvalidValue { .. }
        )
    }
}
