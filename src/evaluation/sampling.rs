//! Staircase evaluation on uniform energy grids.
//!
//! ## Purpose
//!
//! This module samples the staircase N(ε) of any level sequence on an
//! inclusive uniform grid. The pairs are what an external plotting
//! collaborator renders as the normalized spectral staircase; no rendering
//! happens here.
//!
//! ## Non-goals
//!
//! * This module does not bin spacings or build histograms.
//! * This module does not write files or draw anything.

use num_traits::Float;

use crate::engine::validator::Validator;
use crate::math::grid::linspace;
use crate::primitives::errors::SpectralError;
use crate::primitives::traits::LevelSequence;

// ============================================================================
// Grid Sampling
// ============================================================================

/// Evaluate the staircase on `num` evenly spaced energies over
/// `[start, end]`, inclusive.
pub fn staircase_samples<T, S>(
    spectrum: &S,
    start: T,
    end: T,
    num: usize,
) -> Result<Vec<(T, usize)>, SpectralError>
where
    T: Float,
    S: LevelSequence<T> + ?Sized,
{
    Validator::validate_sample_count("num", num)?;

    let staircase = spectrum.staircase();
    Ok(linspace(start, end, num)
        .into_iter()
        .map(|energy| (energy, staircase.count(energy)))
        .collect())
}
