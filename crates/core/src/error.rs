//! Error types for the strata core.

use thiserror::Error;

/// Errors produced by field generation and compositing operations.
#[derive(Debug, Error)]
pub enum StackError {
    /// Width, height, or resolution was zero, or the cell count overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A pre-built sample buffer did not match the declared dimensions.
    #[error("sample count mismatch: expected {expected} samples, got {got}")]
    SampleCountMismatch { expected: usize, got: usize },

    /// A numeric layer parameter was out of its documented range.
    #[error("invalid {name}: {value}")]
    InvalidParam { name: &'static str, value: f64 },

    /// Octave count outside 1..=8.
    #[error("octaves must be in 1..=8, got {0}")]
    InvalidOctaves(u32),

    /// A hypsometric range with start above end.
    #[error("invalid hypsometric range: start {start} > end {end}")]
    InvalidRange { start: u8, end: u8 },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An I/O failure while writing output buffers.
    #[error("{0}")]
    Io(String),
}
