//! Synthetic reference spectra.
//!
//! ## Purpose
//!
//! This module generates the two baseline spectra that computed rigidity
//! curves are benchmarked against: the perfectly even picket fence (maximal
//! rigidity) and the uncorrelated Poisson spectrum (maximal fluctuation).
//! Both satisfy the same [`LevelSequence`] capability as empirical spectra,
//! so the estimator treats all three polymorphically.
//!
//! ## Design notes
//!
//! * The Poisson generator draws from an *injected* random source rather
//!   than a hidden global generator; a fixed seed reproduces the same
//!   spectrum bit-for-bit.
//! * Poisson levels go through the exact same unfolding path as empirical
//!   data, so the two spectrum kinds differ only in where their raw levels
//!   come from.
//! * Picket-fence levels already have unit mean spacing; no rescaling is
//!   performed or needed.
//!
//! ## Invariants
//!
//! * Both constructors require n ≥ 2 levels.
//! * Picket-fence generation is deterministic; Poisson generation is
//!   deterministic given the random source state.
//!
//! ## Visibility
//!
//! Both spectrum types are part of the public API and re-exported from the
//! crate root.

use num_traits::Float;
use rand::Rng;

use crate::engine::validator::Validator;
use crate::primitives::errors::SpectralError;
use crate::primitives::traits::LevelSequence;
use crate::spectrum::unfold::UnfoldedSpectrum;

// ============================================================================
// Picket-Fence Spectrum
// ============================================================================

/// Perfectly evenly spaced reference levels: the integers 0..n.
#[derive(Debug, Clone, PartialEq)]
pub struct PicketFenceSpectrum<T> {
    levels: Vec<T>,
}

impl<T: Float> PicketFenceSpectrum<T> {
    /// The deterministic ascending sequence {0, 1, ..., n−1}.
    pub fn new(n: usize) -> Result<Self, SpectralError> {
        Validator::validate_level_count(n)?;

        let levels = (0..n).map(|index| T::from(index).unwrap()).collect();
        Ok(Self { levels })
    }

    /// The levels in ascending order.
    pub fn levels(&self) -> &[T] {
        &self.levels
    }
}

impl<T: Float> LevelSequence<T> for PicketFenceSpectrum<T> {
    fn levels(&self) -> &[T] {
        &self.levels
    }
}

// ============================================================================
// Poisson Spectrum
// ============================================================================

/// Uncorrelated random reference levels with unit mean spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonSpectrum<T> {
    inner: UnfoldedSpectrum<T>,
}

impl<T: Float> PoissonSpectrum<T> {
    /// Draw `n` independent uniform(0, 1) levels from `rng`, sort, and
    /// unfold exactly as for an empirical spectrum.
    pub fn sample<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self, SpectralError> {
        Validator::validate_level_count(n)?;

        let raw: Vec<T> = (0..n)
            .map(|_| T::from(rng.gen::<f64>()).unwrap())
            .collect();

        let inner = UnfoldedSpectrum::unfold(&raw)?;
        Ok(Self { inner })
    }

    /// The unfolded levels in ascending order.
    pub fn levels(&self) -> &[T] {
        self.inner.levels()
    }

    /// Nearest-neighbour spacings (unit mean by construction).
    pub fn spacings(&self) -> Vec<T> {
        self.inner.spacings()
    }
}

impl<T: Float> LevelSequence<T> for PoissonSpectrum<T> {
    fn levels(&self) -> &[T] {
        self.inner.levels()
    }
}
