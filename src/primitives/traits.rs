//! The level-sequence capability shared by all spectrum kinds.
//!
//! ## Purpose
//!
//! This module defines [`LevelSequence`], the trait that makes any ordered
//! collection of levels staircase-queryable. Empirical spectra and the
//! synthetic reference spectra all implement it, so the rigidity estimator
//! treats them polymorphically.
//!
//! ## Design notes
//!
//! * Implementors only supply `levels()`; everything else is provided.
//! * `bounds()` assumes a non-empty sequence, which every constructor in
//!   this crate guarantees (at least 2 levels).
//!
//! ## Visibility
//!
//! Part of the public API; implement it to feed custom level sequences to
//! the estimator.

use num_traits::Float;

use crate::primitives::staircase::Staircase;

// ============================================================================
// LevelSequence Trait
// ============================================================================

/// An ascending sequence of energy levels with staircase queries.
pub trait LevelSequence<T: Float> {
    /// The levels in ascending order.
    fn levels(&self) -> &[T];

    /// Number of levels.
    fn len(&self) -> usize {
        self.levels().len()
    }

    /// Returns `true` if the sequence contains no levels.
    fn is_empty(&self) -> bool {
        self.levels().is_empty()
    }

    /// Smallest and largest level.
    fn bounds(&self) -> (T, T) {
        let levels = self.levels();
        debug_assert!(!levels.is_empty(), "bounds: empty level sequence");
        (levels[0], levels[levels.len() - 1])
    }

    /// Staircase view N(ε) over the levels.
    fn staircase(&self) -> Staircase<'_, T> {
        Staircase::new(self.levels())
    }

    /// Count of levels at or below `energy`.
    fn count(&self, energy: T) -> usize {
        self.staircase().count(energy)
    }
}
