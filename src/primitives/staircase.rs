//! Staircase counting functions over ascending level sequences.
//!
//! ## Purpose
//!
//! This module provides the spectral staircase N(ε): the cumulative count of
//! levels at or below an energy ε. The staircase is the quantity the rigidity
//! estimator detrends, and it is also sampled directly for plotting by
//! external collaborators.
//!
//! ## Design notes
//!
//! * **Zero-Copy**: Wraps a reference to an already-sorted slice; never
//!   copies or re-sorts.
//! * **Logarithmic**: Counting is a single binary search, O(log n).
//! * **Inclusive**: Levels exactly equal to ε are counted as included.
//!   Duplicate or degenerate levels get no special treatment.
//!
//! ## Invariants
//!
//! * The wrapped slice is ascending (checked with a debug assertion).
//! * `count` is monotone non-decreasing in ε.
//! * `count` returns 0 below the minimum level and `len()` at or above the
//!   maximum level.
//!
//! ## Visibility
//!
//! [`Staircase`] is public; it is usually obtained through
//! [`LevelSequence::staircase`](crate::primitives::traits::LevelSequence::staircase)
//! rather than constructed directly.

use num_traits::Float;

// ============================================================================
// Staircase View
// ============================================================================

/// Binary-search-backed counting view over an ascending level sequence.
#[derive(Copy, Clone, Debug)]
pub struct Staircase<'a, T> {
    levels: &'a [T],
}

impl<'a, T: Float> Staircase<'a, T> {
    /// Wrap an ascending-sorted slice.
    pub fn new(levels: &'a [T]) -> Self {
        debug_assert!(
            levels.windows(2).all(|pair| pair[0] <= pair[1]),
            "Staircase::new: levels must be ascending"
        );
        Self { levels }
    }

    /// Returns the number of levels in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns `true` if the sequence contains no levels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Count of levels at or below `energy`, O(log n).
    ///
    /// Levels exactly equal to `energy` are included in the count.
    #[inline]
    pub fn count(&self, energy: T) -> usize {
        self.levels.partition_point(|&level| level <= energy)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_at_domain_boundaries() {
        let levels = [0.0_f64, 1.0, 2.0, 3.0];
        let staircase = Staircase::new(&levels);

        assert_eq!(staircase.count(-1.0), 0);
        assert_eq!(staircase.count(0.0), 1);
        assert_eq!(staircase.count(3.0), 4);
        assert_eq!(staircase.count(100.0), 4);
    }

    #[test]
    fn test_duplicate_levels_all_counted() {
        let levels = [1.0_f64, 2.0, 2.0, 3.0];
        let staircase = Staircase::new(&levels);

        assert_eq!(staircase.count(2.0), 3);
        assert_eq!(staircase.count(1.5), 1);
    }

    #[test]
    fn test_monotone_over_grid() {
        let levels = [0.3_f64, 0.9, 1.4, 2.2, 5.1];
        let staircase = Staircase::new(&levels);

        let mut previous = 0;
        for step in 0..100 {
            let energy = -1.0 + 0.08 * step as f64;
            let current = staircase.count(energy);
            assert!(current >= previous);
            previous = current;
        }
    }
}
