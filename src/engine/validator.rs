//! Input validation for spectral-statistics operations.
//!
//! ## Purpose
//!
//! This module provides the validation functions applied at every public
//! boundary of the crate: raw level sequences before unfolding, reference
//! spectrum sizes, rigidity window lengths, and the sampling counts that
//! control the Δ3 estimator. All inputs are checked before any computation
//! begins, with clear error values when validation fails.
//!
//! ## Design notes
//!
//! * Validation is fail-fast: returns on the first error encountered.
//! * Error variants include the specific offending values for debugging.
//! * Checks are ordered from cheap to expensive.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Validated parameters
//!
//! * **Raw levels**: At least 2 values, all finite
//! * **Reference sizes**: At least 2 levels
//! * **Window length**: Finite, non-negative, within the spectrum span
//! * **Sampling counts**: At least 2 centers and 2 abscissae per window
//! * **Builder state**: No parameter set more than once
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * A zero window length passes validation; it is a defined boundary case.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or rescale input data.
//! * This module does not perform the rigidity computation itself.
//!
//! ## Visibility
//!
//! Internal implementation detail used by the spectrum constructors and the
//! builder; not part of the stable public API.

use num_traits::Float;

use crate::primitives::errors::SpectralError;

/// Minimum number of levels for unfolding and staircase statistics.
pub const MIN_LEVELS: usize = 2;

/// Minimum sampling count for window centers and per-window abscissae.
pub const MIN_SAMPLES: usize = 2;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for spectral inputs and estimator parameters.
///
/// All methods return `Result<(), SpectralError>` and fail fast upon the
/// first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Spectrum Input Validation
    // ========================================================================

    /// Validate a raw level sequence prior to unfolding.
    pub fn validate_levels<T: Float>(levels: &[T]) -> Result<(), SpectralError> {
        // Check 1: Enough levels for at least one spacing
        let n = levels.len();
        if n < MIN_LEVELS {
            return Err(SpectralError::InsufficientData {
                got: n,
                min: MIN_LEVELS,
            });
        }

        // Check 2: All values finite
        for (index, &level) in levels.iter().enumerate() {
            if !level.is_finite() {
                return Err(SpectralError::NonFiniteValue(format!(
                    "levels[{}]={}",
                    index,
                    level.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a requested reference-spectrum size.
    pub fn validate_level_count(n: usize) -> Result<(), SpectralError> {
        if n < MIN_LEVELS {
            return Err(SpectralError::InsufficientData {
                got: n,
                min: MIN_LEVELS,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Estimator Parameter Validation
    // ========================================================================

    /// Validate a sampling-count parameter (window centers or per-window
    /// abscissae).
    pub fn validate_sample_count(
        parameter: &'static str,
        got: usize,
    ) -> Result<(), SpectralError> {
        if got < MIN_SAMPLES {
            return Err(SpectralError::InvalidWindowCount {
                parameter,
                got,
                min: MIN_SAMPLES,
            });
        }
        Ok(())
    }

    /// Validate a rigidity window length against the spectrum span.
    ///
    /// Zero passes; it is a defined boundary case handled by the executor.
    pub fn validate_window<T: Float>(window: T, span: T) -> Result<(), SpectralError> {
        if !window.is_finite() || window < T::zero() {
            return Err(SpectralError::InvalidWindowLength(
                window.to_f64().unwrap_or(f64::NAN),
            ));
        }

        if window > span {
            return Err(SpectralError::WindowTooLarge {
                window: window.to_f64().unwrap_or(f64::NAN),
                span: span.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SpectralError> {
        if let Some(parameter) = duplicate_param {
            return Err(SpectralError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_and_non_finite_levels() {
        assert!(matches!(
            Validator::validate_levels(&[1.0_f64]),
            Err(SpectralError::InsufficientData { got: 1, min: 2 })
        ));
        assert!(matches!(
            Validator::validate_levels(&[1.0_f64, f64::NAN]),
            Err(SpectralError::NonFiniteValue(_))
        ));
        assert!(Validator::validate_levels(&[1.0_f64, 2.0]).is_ok());
    }

    #[test]
    fn test_window_bounds() {
        assert!(Validator::validate_window(0.0_f64, 9.0).is_ok());
        assert!(Validator::validate_window(9.0_f64, 9.0).is_ok());
        assert!(matches!(
            Validator::validate_window(9.5_f64, 9.0),
            Err(SpectralError::WindowTooLarge { .. })
        ));
        assert!(matches!(
            Validator::validate_window(-1.0_f64, 9.0),
            Err(SpectralError::InvalidWindowLength(_))
        ));
    }
}
