// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for series loading, widget assembly, and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A series needs at least two samples; step width is undefined otherwise.
    #[error("series needs at least 2 samples, got {count}")]
    InvalidInput { count: usize },

    #[error("sample {index} is not a finite number")]
    NonFiniteSample { index: usize },

    #[error("forced bounds are inverted or non-finite: min={min}, max={max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("no trace at index {index}")]
    UnknownTrace { index: usize },

    #[error("region of trace '{name}' has no area")]
    EmptyRegion { name: String },

    #[error("regions of traces '{first}' and '{second}' overlap")]
    OverlappingRegions { first: String, second: String },

    #[error("invalid value specifier '{spec}': {reason}")]
    InvalidFormat { spec: String, reason: &'static str },

    #[error("invalid chart config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read chart config: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
