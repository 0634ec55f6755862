//! Spectral statistics for quantum level sequences.
//!
//! `levelstat` turns a raw sequence of energy eigenvalues into the
//! quantitative measures used to classify a quantum system's dynamics:
//!
//! * **Unfolding** — rescaling a spectrum to unit mean level spacing, so
//!   statistics are comparable across systems and energy ranges.
//! * **Staircase function** — the cumulative level count N(ε), queryable in
//!   O(log n).
//! * **Nearest-neighbour spacings** — the spacing distribution handed to
//!   external histogram/plotting tools.
//! * **Spectral rigidity Δ3(L)** — the mean-squared deviation of the
//!   staircase from its local linear trend over windows of length L,
//!   benchmarked against picket-fence and Poisson reference spectra and the
//!   closed-form Poisson/GOE/picket-fence baselines.
//!
//! Reading data from disk, plotting, and rendering are the responsibility of
//! external collaborators; this crate only consumes and returns in-memory
//! arrays.
//!
//! # Example
//!
//! ```
//! use levelstat::prelude::*;
//!
//! let raw = [0.21, 1.0, 1.55, 2.4, 3.1, 4.05, 4.9, 6.2, 7.0, 8.1];
//! let spectrum = UnfoldedSpectrum::unfold(&raw)?;
//!
//! let estimator = Rigidity::new()
//!     .centers(100)
//!     .samples_per_window(20)
//!     .build()?;
//!
//! let delta3 = estimator.delta3(&spectrum, 2.0)?;
//! assert!(delta3 >= 0.0);
//! # Ok::<(), levelstat::SpectralError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API         (api)
//!   ↓
//! Layer 5: Spectrum    (unfold, spacings, reference)
//!   ↓
//! Layer 4: Evaluation  (theory, sampling)
//!   ↓
//! Layer 3: Engine      (validator, rigidity, parallel, output)
//!   ↓
//! Layer 2: Math        (grid, linfit, integrate)
//!   ↓
//! Layer 1: Primitives  (errors, traits, staircase)
//! ```
//!
//! # Feature Flags
//!
//! * `parallel` (default) — spread window centers across CPU cores via
//!   `rayon`. The builder's `.parallel(bool)` toggles it at runtime; without
//!   the feature the sequential path is always used. Both paths produce
//!   bitwise-identical results.

pub mod api;
pub mod engine;
pub mod evaluation;
pub mod math;
pub mod primitives;
pub mod spectrum;

// Publicly re-exported types
pub use api::{Rigidity, RigidityEstimator};
pub use engine::output::RigidityCurve;
pub use primitives::errors::SpectralError;
pub use primitives::staircase::Staircase;
pub use primitives::traits::LevelSequence;
pub use spectrum::reference::{PicketFenceSpectrum, PoissonSpectrum};
pub use spectrum::unfold::UnfoldedSpectrum;

/// Convenient single-line import of the public surface.
pub mod prelude {
    pub use crate::api::{Rigidity, RigidityEstimator};
    pub use crate::engine::output::RigidityCurve;
    pub use crate::evaluation::sampling::staircase_samples;
    pub use crate::evaluation::theory::{goe_delta3, picket_fence_delta3, poisson_delta3};
    pub use crate::math::grid::linspace;
    pub use crate::primitives::errors::SpectralError;
    pub use crate::primitives::staircase::Staircase;
    pub use crate::primitives::traits::LevelSequence;
    pub use crate::spectrum::reference::{PicketFenceSpectrum, PoissonSpectrum};
    pub use crate::spectrum::spacings::nearest_neighbour_spacings;
    pub use crate::spectrum::unfold::UnfoldedSpectrum;
}
