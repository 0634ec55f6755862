//! Unfolding raw spectra to unit mean spacing.
//!
//! ## Purpose
//!
//! This module rescales a raw, unordered sequence of energy eigenvalues so
//! its mean nearest-neighbour spacing is exactly 1. Unfolding removes the
//! system- and energy-range-dependent level density, which is what makes
//! staircase and rigidity statistics comparable across systems.
//!
//! ## Design notes
//!
//! * The input is sorted ascending and divided by the arithmetic mean of its
//!   consecutive differences; the constructor is the only way to obtain an
//!   [`UnfoldedSpectrum`].
//! * Validation happens before any computation: at least 2 levels, all
//!   finite. A zero mean spacing (all levels identical) is rejected rather
//!   than producing infinities.
//! * Pure function of its input; no side effects.
//!
//! ## Invariants
//!
//! * Levels are ascending and the mean nearest-neighbour spacing equals 1
//!   up to floating-point tolerance.
//! * Unfolding an already unit-spaced sequence (e.g. the integers 0..n) is
//!   a no-op.
//!
//! ## Visibility
//!
//! [`UnfoldedSpectrum`] is part of the public API and re-exported from the
//! crate root.

use core::cmp::Ordering;

use num_traits::Float;

use crate::engine::validator::Validator;
use crate::primitives::errors::SpectralError;
use crate::primitives::traits::LevelSequence;
use crate::spectrum::spacings::{mean_spacing, nearest_neighbour_spacings};

// ============================================================================
// UnfoldedSpectrum
// ============================================================================

/// Ascending level sequence rescaled to unit mean nearest-neighbour spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct UnfoldedSpectrum<T> {
    levels: Vec<T>,
}

impl<T: Float> UnfoldedSpectrum<T> {
    /// Unfold a raw, unordered sequence of energy eigenvalues.
    ///
    /// Sorts ascending and divides every level by the mean
    /// nearest-neighbour spacing of the sorted sequence.
    pub fn unfold(raw: &[T]) -> Result<Self, SpectralError> {
        Validator::validate_levels(raw)?;

        let mut levels = raw.to_vec();
        levels.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let spacing = mean_spacing(&levels);
        if spacing <= T::zero() {
            return Err(SpectralError::DegenerateSpectrum);
        }

        for level in levels.iter_mut() {
            *level = *level / spacing;
        }

        Ok(Self { levels })
    }

    /// The unfolded levels in ascending order.
    pub fn levels(&self) -> &[T] {
        &self.levels
    }

    /// Nearest-neighbour spacings (unit mean by construction).
    pub fn spacings(&self) -> Vec<T> {
        nearest_neighbour_spacings(&self.levels)
    }
}

impl<T: Float> LevelSequence<T> for UnfoldedSpectrum<T> {
    fn levels(&self) -> &[T] {
        &self.levels
    }
}

// ============================================================================
// Tests
// ============================================================================
