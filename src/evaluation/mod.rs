//! Layer 4: Evaluation
//!
//! Analytic baselines and staircase sampling.
//!
//! This layer provides the closed-form reference curves that computed
//! rigidity values are compared against, and the uniform staircase sampling
//! consumed by external plotting collaborators.
//!
//! # Module Organization
//!
//! - **theory**: Closed-form Δ3 baselines (Poisson, GOE, picket-fence)
//! - **sampling**: Staircase evaluation on uniform energy grids
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Spectrum (unfold, spacings, reference)
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Engine (validator, rigidity, parallel, output)
//!   ↓
//! Layer 2: Math (grid, linfit, integrate)
//!   ↓
//! Layer 1: Primitives (errors, traits, staircase)
//! ```

/// Closed-form rigidity baselines.
///
/// Provides:
/// - Poisson linear growth L/15
/// - GOE large-L logarithmic growth
/// - Picket-fence saturation 1/12
pub mod theory;

/// Staircase grid sampling.
///
/// Provides:
/// - `(ε, N(ε))` pairs on inclusive uniform grids
pub mod sampling;
