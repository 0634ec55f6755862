//! Trapezoidal integration over sampled values.
//!
//! ## Purpose
//!
//! This module integrates the squared staircase residuals across a rigidity
//! window. The samples are taken on a uniform grid, but the rule works for
//! any non-decreasing abscissae.
//!
//! ## Invariants
//!
//! * An empty or single-sample input integrates to zero.
//! * Exact for piecewise-linear integrands sampled at their breakpoints.

use num_traits::Float;

// ============================================================================
// Trapezoidal Rule
// ============================================================================

/// Trapezoidal-rule integral of `ys` over the abscissae `xs`.
pub fn trapezoid<T: Float>(xs: &[T], ys: &[T]) -> T {
    debug_assert_eq!(xs.len(), ys.len(), "trapezoid: mismatched sample lengths");

    let half = T::from(0.5).unwrap();
    xs.windows(2)
        .zip(ys.windows(2))
        .fold(T::zero(), |acc, (x, y)| {
            acc + (x[1] - x[0]) * (y[0] + y[1]) * half
        })
}

// ============================================================================
// Tests
// ============================================================================
