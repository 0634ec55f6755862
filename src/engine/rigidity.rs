//! Execution engine for spectral rigidity.
//!
//! ## Purpose
//!
//! This module computes the spectral rigidity Δ3(L): the mean-squared
//! deviation of the staircase function from its local linear trend, averaged
//! over windows of length L spanning the spectrum. Δ3 separates rigid
//! (picket-fence), chaotic (slow logarithmic growth), and uncorrelated
//! (Poisson, linear growth) level statistics.
//!
//! ## Design notes
//!
//! * Operates on any [`LevelSequence`], so empirical and reference spectra
//!   share one code path.
//! * Per-window work reuses scratch buffers; the sequential path allocates
//!   once per evaluation, the parallel path once per worker thread.
//! * Per-center contributions are collected positionally and reduced
//!   sequentially, so parallel and sequential results are bitwise identical.
//! * Deterministic given (sequence, window, centers, samples); there is no
//!   hidden randomness anywhere in the evaluation.
//!
//! ## Key concepts
//!
//! ### Window Evaluation
//!
//! For each window center E, the staircase is sampled on an inclusive
//! uniform grid over [E−L/2, E+L/2], detrended by a closed-form degree-1
//! least-squares line, and the squared residuals are integrated by the
//! trapezoidal rule and normalized by L. Δ3(L) is the mean over all centers.
//!
//! ### Boundary Cases
//!
//! * L = 0 is defined as Δ3 = 0, not an error.
//! * L equal to the full span gives a single repeated center; anything
//!   larger fails validation.
//! * A 2-point sampling grid fits its window exactly, so Δ3 collapses to 0
//!   regardless of the spectrum; resolving the asymptotic values needs more
//!   abscissae per window.
//!
//! ## Invariants
//!
//! * Window centers lie in [min+L/2, max−L/2], inclusive of both endpoints.
//! * Every per-center contribution is non-negative.
//! * A failure in any window aborts the evaluation; no partial results.
//!
//! ## Non-goals
//!
//! * This module does not validate builder parameters (handled by
//!   `validator` at build time).
//! * This module does not construct or unfold spectra.
//!
//! ## Visibility
//!
//! [`RigidityExecutor`] is internal; the public entry point is the
//! [`Rigidity`](crate::api::Rigidity) builder.

use num_traits::Float;

use crate::engine::output::RigidityCurve;
use crate::engine::validator::Validator;
use crate::math::grid::{linspace, linspace_into};
use crate::math::integrate::trapezoid;
use crate::math::linfit::fit_line;
use crate::primitives::errors::SpectralError;
use crate::primitives::staircase::Staircase;
use crate::primitives::traits::LevelSequence;

// ============================================================================
// Scratch Buffers
// ============================================================================

/// Working buffers for one window evaluation.
pub(crate) struct WindowScratch<T> {
    /// Sampling abscissae across the window.
    pub abscissae: Vec<T>,

    /// Staircase counts at each abscissa.
    pub counts: Vec<T>,

    /// Squared residuals after detrending.
    pub residuals: Vec<T>,
}

impl<T: Float> WindowScratch<T> {
    /// Allocate buffers sized for `samples` abscissae per window.
    pub(crate) fn allocate(samples: usize) -> Self {
        Self {
            abscissae: Vec::with_capacity(samples),
            counts: Vec::with_capacity(samples),
            residuals: Vec::with_capacity(samples),
        }
    }
}

// ============================================================================
// Window Evaluation
// ============================================================================

/// Mean-squared deviation of the staircase from its local linear trend over
/// one window, normalized by the window length.
pub(crate) fn window_deviation<T: Float>(
    staircase: &Staircase<'_, T>,
    center: T,
    window: T,
    samples: usize,
    scratch: &mut WindowScratch<T>,
) -> Result<T, SpectralError> {
    let half = window / T::from(2.0).unwrap();
    linspace_into(center - half, center + half, samples, &mut scratch.abscissae);

    scratch.counts.clear();
    for &energy in &scratch.abscissae {
        scratch
            .counts
            .push(T::from(staircase.count(energy)).unwrap());
    }

    let fit = fit_line(&scratch.abscissae, &scratch.counts).ok_or_else(|| {
        SpectralError::ComputationError(format!(
            "local linear fit is degenerate at center {}",
            center.to_f64().unwrap_or(f64::NAN)
        ))
    })?;

    scratch.residuals.clear();
    for (&energy, &level_count) in scratch.abscissae.iter().zip(scratch.counts.iter()) {
        let residual = level_count - fit.predict(energy);
        scratch.residuals.push(residual * residual);
    }

    Ok(trapezoid(&scratch.abscissae, &scratch.residuals) / window)
}

// ============================================================================
// RigidityExecutor
// ============================================================================

/// Executor holding the validated sampling configuration.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RigidityExecutor {
    /// Number of window centers per Δ3 evaluation.
    pub centers: usize,

    /// Number of staircase abscissae per window.
    pub samples: usize,

    /// Whether to spread window centers across CPU cores.
    pub parallel: bool,
}

impl RigidityExecutor {
    /// Compute Δ3 for a single window length.
    pub fn run<T, S>(&self, spectrum: &S, window: T) -> Result<T, SpectralError>
    where
        T: Float + Send + Sync,
        S: LevelSequence<T> + ?Sized,
    {
        // Defined boundary: a zero-length window has zero rigidity.
        if window == T::zero() {
            return Ok(T::zero());
        }

        let (lo, hi) = spectrum.bounds();
        Validator::validate_window(window, hi - lo)?;

        let half = window / T::from(2.0).unwrap();
        let center_grid = linspace(lo + half, hi - half, self.centers);
        let staircase = spectrum.staircase();

        let deviations = self.window_deviations(&staircase, &center_grid, window)?;

        let total = deviations.iter().fold(T::zero(), |acc, &d| acc + d);
        Ok(total / T::from(deviations.len()).unwrap())
    }

    /// Compute Δ3 for every window length in a caller-supplied grid.
    pub fn run_curve<T, S>(
        &self,
        spectrum: &S,
        windows: &[T],
    ) -> Result<RigidityCurve<T>, SpectralError>
    where
        T: Float + Send + Sync,
        S: LevelSequence<T> + ?Sized,
    {
        let mut delta3 = Vec::with_capacity(windows.len());
        for &window in windows {
            delta3.push(self.run(spectrum, window)?);
        }

        Ok(RigidityCurve {
            windows: windows.to_vec(),
            delta3,
            centers: self.centers,
            samples: self.samples,
        })
    }

    /// Evaluate every window center, dispatching to the parallel pass when
    /// enabled and compiled in.
    fn window_deviations<T>(
        &self,
        staircase: &Staircase<'_, T>,
        center_grid: &[T],
        window: T,
    ) -> Result<Vec<T>, SpectralError>
    where
        T: Float + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        if self.parallel {
            return crate::engine::parallel::window_deviations_parallel(
                *staircase,
                center_grid,
                window,
                self.samples,
            );
        }

        let mut scratch = WindowScratch::allocate(self.samples);
        let mut deviations = Vec::with_capacity(center_grid.len());
        for &center in center_grid {
            deviations.push(window_deviation(
                staircase,
                center,
                window,
                self.samples,
                &mut scratch,
            )?);
        }
        Ok(deviations)
    }
}
