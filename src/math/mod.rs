//! Layer 2: Math
//!
//! Pure mathematical functions.
//!
//! This layer provides the mathematical building blocks used by the rigidity
//! engine: uniform sample grids, closed-form linear fitting, and numerical
//! integration. These are reusable functions with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Spectrum (unfold, spacings, reference)
//!   ↓
//! Layer 4: Evaluation (theory, sampling)
//!   ↓
//! Layer 3: Engine (validator, rigidity, parallel, output)
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives (errors, traits, staircase)
//! ```

/// Uniform sample grids.
///
/// Provides:
/// - Inclusive evenly spaced grids (`linspace`)
/// - Buffer-reusing variant for hot loops
pub mod grid;

/// Degree-1 least-squares fitting.
///
/// Provides:
/// - Closed-form two-parameter regression
/// - Line evaluation for residual computation
pub mod linfit;

/// Numerical integration.
///
/// Provides:
/// - Trapezoidal rule over sampled values
pub mod integrate;
