//! Nearest-neighbour spacing extraction.
//!
//! ## Purpose
//!
//! This module extracts the consecutive differences of an ascending level
//! sequence — the nearest-neighbour spacing distribution used for
//! distributional analysis by external collaborators, and the quantity whose
//! mean defines the unfolding rescale factor.
//!
//! ## Invariants
//!
//! * For an ascending input, every spacing is non-negative.
//! * An input of n levels yields n−1 spacings.

use num_traits::Float;

// ============================================================================
// Spacing Extraction
// ============================================================================

/// Consecutive differences of an ascending level sequence.
pub fn nearest_neighbour_spacings<T: Float>(levels: &[T]) -> Vec<T> {
    levels.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Arithmetic mean of the nearest-neighbour spacings.
///
/// Returns zero for sequences with fewer than 2 levels.
pub fn mean_spacing<T: Float>(levels: &[T]) -> T {
    if levels.len() < 2 {
        return T::zero();
    }

    let spacings = nearest_neighbour_spacings(levels);
    let total = spacings.iter().fold(T::zero(), |acc, &s| acc + s);
    total / T::from(spacings.len()).unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_spacings_and_mean() {
        let levels = [0.0_f64, 1.0, 3.0, 6.0];
        let spacings = nearest_neighbour_spacings(&levels);

        assert_eq!(spacings, vec![1.0, 2.0, 3.0]);
        assert_relative_eq!(mean_spacing(&levels), 2.0, epsilon = 1e-12);
    }
}
