//! Closed-form rigidity baselines.
//!
//! ## Purpose
//!
//! This module provides the analytic Δ3 curves that classify a computed
//! rigidity curve: uncorrelated (Poisson) levels grow linearly, chaotic
//! (GOE) levels grow logarithmically, and a picket-fence spectrum saturates
//! at a constant. See Stöckmann, Quantum chaos: an introduction (2006),
//! p. 112.
//!
//! ## Design notes
//!
//! * Pure functions of the window length; no sampling, no randomness.
//! * The GOE expression is the large-L asymptotic form and is not meaningful
//!   for L near zero.

use num_traits::Float;

// ============================================================================
// Baselines
// ============================================================================

/// Δ3 of an uncorrelated (Poisson) spectrum: L/15.
pub fn poisson_delta3<T: Float>(window: T) -> T {
    window / T::from(15.0).unwrap()
}

/// Large-L Δ3 of a Gaussian-orthogonal-ensemble spectrum:
/// ln(L)/π² − 0.007.
pub fn goe_delta3<T: Float>(window: T) -> T {
    let pi_squared = T::from(std::f64::consts::PI * std::f64::consts::PI).unwrap();
    window.ln() / pi_squared - T::from(0.007).unwrap()
}

/// Saturation value of Δ3 for a picket-fence spectrum: 1/12.
pub fn picket_fence_delta3<T: Float>() -> T {
    T::from(1.0 / 12.0).unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_baseline_values() {
        assert_relative_eq!(poisson_delta3(15.0_f64), 1.0, epsilon = 1e-12);
        assert_relative_eq!(picket_fence_delta3::<f64>(), 1.0 / 12.0);
        assert_relative_eq!(
            goe_delta3(std::f64::consts::E),
            1.0 / (std::f64::consts::PI * std::f64::consts::PI) - 0.007,
            epsilon = 1e-12
        );
    }
}
