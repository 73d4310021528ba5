//! Error types for table construction and interpolation.

use thiserror::Error;

/// Failure to interpolate a requested pressure.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InterpolationError {
    #[error("Pressure {pressure} MPa out of range [{min}–{max}]")]
    OutOfRange { pressure: f64, min: f64, max: f64 },
}

/// Rejected anchor table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("anchor table needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("anchor pressures must be strictly increasing: point {index} has {current} MPa after {previous} MPa")]
    NotStrictlyIncreasing {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("anchor point {index} has invalid {field}: {value}")]
    InvalidValue {
        index: usize,
        field: &'static str,
        value: f64,
    },
}
