//! Layer 5: Spectrum
//!
//! Validated spectrum construction.
//!
//! This layer turns raw data or synthetic recipes into level sequences the
//! engine can consume: empirical spectra unfolded to unit mean spacing, and
//! the two reference spectra used as rigidity benchmarks.
//!
//! # Module Organization
//!
//! - **unfold**: Raw energies → `UnfoldedSpectrum`
//! - **spacings**: Nearest-neighbour spacing extraction
//! - **reference**: Picket-fence and Poisson reference spectra
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Spectrum ← You are here
//!   ↓
//! Layer 4: Evaluation (theory, sampling)
//!   ↓
//! Layer 3: Engine (validator, rigidity, parallel, output)
//!   ↓
//! Layer 2: Math (grid, linfit, integrate)
//!   ↓
//! Layer 1: Primitives (errors, traits, staircase)
//! ```

/// Unfolding.
///
/// Provides:
/// - `UnfoldedSpectrum` and its constructor
/// - Rescaling to unit mean nearest-neighbour spacing
pub mod unfold;

/// Nearest-neighbour spacings.
///
/// Provides:
/// - Consecutive-difference extraction
/// - Mean spacing computation
pub mod spacings;

/// Reference spectra.
///
/// Provides:
/// - Deterministic picket-fence levels
/// - Seeded Poisson levels from an injected random source
pub mod reference;
