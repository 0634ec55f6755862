//! Error types for spectral-statistics operations.
//!
//! ## Purpose
//!
//! This module defines the unified [`SpectralError`] enum returned by every
//! fallible operation in the crate. Each variant carries the specific values
//! that triggered it, so callers can report precise diagnostics without
//! re-deriving context.
//!
//! ## Design notes
//!
//! * Every failure mode is surfaced to the caller; nothing is masked
//!   internally or turned into NaN.
//! * Variants embed the offending values (counts, window lengths, spans).
//! * A zero-length rigidity window is a defined boundary case returning 0,
//!   not an error.
//!
//! ## Visibility
//!
//! [`SpectralError`] is part of the public API and is re-exported from the
//! crate root.

use thiserror::Error;

// ============================================================================
// Error Enum
// ============================================================================

/// Unified error type for spectral-statistics operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectralError {
    /// Fewer raw energy levels than unfolding requires.
    #[error("insufficient data: got {got} levels, need at least {min}")]
    InsufficientData {
        /// Number of levels supplied.
        got: usize,
        /// Minimum number of levels required.
        min: usize,
    },

    /// All raw levels are identical, so the mean spacing is zero and the
    /// spectrum cannot be rescaled.
    #[error("degenerate spectrum: zero mean level spacing")]
    DegenerateSpectrum,

    /// A raw level is NaN or infinite.
    #[error("non-finite value: {0}")]
    NonFiniteValue(String),

    /// The requested rigidity window exceeds the span of the spectrum.
    #[error("window length {window} exceeds spectrum span {span}")]
    WindowTooLarge {
        /// Requested window length L.
        window: f64,
        /// Span of the spectrum (max - min).
        span: f64,
    },

    /// The requested rigidity window is negative or non-finite.
    #[error("invalid window length: {0}")]
    InvalidWindowLength(f64),

    /// A sampling-count parameter is below the minimum needed for a
    /// well-posed computation.
    #[error("invalid count for {parameter}: got {got}, need at least {min}")]
    InvalidWindowCount {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Value supplied.
        got: usize,
        /// Minimum accepted value.
        min: usize,
    },

    /// An unexpected numerical failure in the local linear fit.
    #[error("computation failed: {0}")]
    ComputationError(String),

    /// A builder parameter was set more than once.
    #[error("parameter '{parameter}' was set multiple times")]
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}
