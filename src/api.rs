//! High-level API for spectral rigidity.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for rigidity
//! computations. It implements a fluent builder for configuring the sampling
//! parameters and producing a validated estimator.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: The estimator accepts any [`LevelSequence`], so
//!   empirical and reference spectra share the same entry points.
//! * **Validated**: Parameters are checked once at `build()`; the estimator
//!   itself cannot be misconfigured.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via [`Rigidity::new`].
//! 2. Chain configuration methods (`.centers()`, `.samples_per_window()`,
//!    `.parallel()`).
//! 3. Call `.build()` to obtain a [`RigidityEstimator`].
//!
//! ### Defaults
//!
//! * 500 window centers per Δ3 evaluation.
//! * 50 staircase abscissae per window.
//! * Parallel execution enabled (a no-op unless the `parallel` feature is
//!   compiled in).
//!
//! ## Visibility
//!
//! This is the primary public API. Types re-exported here are considered
//! stable.

use num_traits::Float;

use crate::engine::output::RigidityCurve;
use crate::engine::rigidity::RigidityExecutor;
use crate::engine::validator::Validator;
use crate::primitives::errors::SpectralError;
use crate::primitives::traits::LevelSequence;

/// Default number of window centers per Δ3 evaluation.
pub const DEFAULT_CENTERS: usize = 500;

/// Default number of staircase abscissae per window.
pub const DEFAULT_SAMPLES_PER_WINDOW: usize = 50;

// ============================================================================
// Rigidity Builder
// ============================================================================

/// Fluent builder for configuring spectral rigidity computations.
#[derive(Debug, Clone)]
pub struct Rigidity {
    /// Window centers per evaluation.
    centers: Option<usize>,

    /// Staircase abscissae per window.
    samples: Option<usize>,

    /// Whether to spread window centers across CPU cores.
    parallel: bool,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl Default for Rigidity {
    fn default() -> Self {
        Self::new()
    }
}

impl Rigidity {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            centers: None,
            samples: None,
            parallel: true,
            duplicate_param: None,
        }
    }

    /// Set the number of window centers sampled per Δ3 evaluation.
    pub fn centers(mut self, centers: usize) -> Self {
        if self.centers.is_some() {
            self.duplicate_param = Some("centers");
        }
        self.centers = Some(centers);
        self
    }

    /// Set the number of staircase abscissae sampled per window.
    pub fn samples_per_window(mut self, samples: usize) -> Self {
        if self.samples.is_some() {
            self.duplicate_param = Some("samples_per_window");
        }
        self.samples = Some(samples);
        self
    }

    /// Enable or disable parallel execution across window centers.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the estimator, validating the configuration.
    pub fn build(self) -> Result<RigidityEstimator, SpectralError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let centers = self.centers.unwrap_or(DEFAULT_CENTERS);
        let samples = self.samples.unwrap_or(DEFAULT_SAMPLES_PER_WINDOW);

        Validator::validate_sample_count("centers", centers)?;
        Validator::validate_sample_count("samples_per_window", samples)?;

        Ok(RigidityEstimator {
            executor: RigidityExecutor {
                centers,
                samples,
                parallel: self.parallel,
            },
        })
    }
}

// ============================================================================
// Rigidity Estimator
// ============================================================================

/// Validated Δ3 estimator.
#[derive(Debug, Clone, Copy)]
pub struct RigidityEstimator {
    executor: RigidityExecutor,
}

impl RigidityEstimator {
    /// Spectral rigidity Δ3 for a single window length.
    ///
    /// A zero-length window returns 0; a window exceeding the spectrum span
    /// fails with [`SpectralError::WindowTooLarge`].
    pub fn delta3<T, S>(&self, spectrum: &S, window: T) -> Result<T, SpectralError>
    where
        T: Float + Send + Sync,
        S: LevelSequence<T> + ?Sized,
    {
        self.executor.run(spectrum, window)
    }

    /// Evaluate Δ3 over a caller-supplied grid of window lengths.
    ///
    /// Each window length is evaluated independently; the first failure
    /// aborts the whole call.
    pub fn curve<T, S>(&self, spectrum: &S, windows: &[T]) -> Result<RigidityCurve<T>, SpectralError>
    where
        T: Float + Send + Sync,
        S: LevelSequence<T> + ?Sized,
    {
        self.executor.run_curve(spectrum, windows)
    }

    /// Number of window centers sampled per evaluation.
    pub fn centers(&self) -> usize {
        self.executor.centers
    }

    /// Number of staircase abscissae sampled per window.
    pub fn samples_per_window(&self) -> usize {
        self.executor.samples
    }
}
