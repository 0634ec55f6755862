//! Closed-form degree-1 least-squares fitting.
//!
//! ## Purpose
//!
//! This module fits the local linear trend `y = a + b·x` that the rigidity
//! estimator subtracts from the staircase inside each window. The fit is the
//! closed-form two-parameter solution — two centered sums over a small
//! window — so the hot path carries no general polynomial solver or
//! linear-algebra dependency.
//!
//! ## Design notes
//!
//! * Sums are centered on the sample means for numerical stability.
//! * A window whose abscissae have zero variance has no well-defined slope;
//!   the fit returns `None` and the caller decides how to surface it.
//! * With at least 2 distinct abscissae the regression is always well-posed.
//!
//! ## Invariants
//!
//! * The fitted line passes exactly through a 2-point sample (up to
//!   floating-point rounding), so 2-point windows have zero residual.

use num_traits::Float;

// ============================================================================
// Line Fit
// ============================================================================

/// Intercept and slope of a fitted line `y = intercept + slope·x`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineFit<T> {
    /// Intercept a.
    pub intercept: T,

    /// Slope b.
    pub slope: T,
}

impl<T: Float> LineFit<T> {
    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }
}

/// Fit `y = a + b·x` by ordinary least squares over paired samples.
///
/// Returns `None` when fewer than 2 samples are given or the abscissae
/// have zero variance.
pub fn fit_line<T: Float>(xs: &[T], ys: &[T]) -> Option<LineFit<T>> {
    let n = xs.len();
    debug_assert_eq!(n, ys.len(), "fit_line: mismatched sample lengths");

    if n < 2 {
        return None;
    }

    let count = T::from(n).unwrap();
    let mean_x = xs.iter().fold(T::zero(), |acc, &x| acc + x) / count;
    let mean_y = ys.iter().fold(T::zero(), |acc, &y| acc + y) / count;

    let mut sxx = T::zero();
    let mut sxy = T::zero();
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        sxx = sxx + dx * dx;
        sxy = sxy + dx * (y - mean_y);
    }

    if sxx <= T::zero() {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    Some(LineFit { intercept, slope })
}

// ============================================================================
// Tests
// ============================================================================
