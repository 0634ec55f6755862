//! Layer 3: Engine
//!
//! Rigidity execution and input validation.
//!
//! This layer contains the Δ3 executor, the fail-fast validator used by every
//! public boundary, the optional parallel pass, and the result container.
//!
//! # Module Organization
//!
//! - **validator**: Fail-fast parameter and input checks
//! - **rigidity**: The Δ3 executor (window sampling, detrending, integration)
//! - **parallel**: Rayon-based per-center execution (feature `parallel`)
//! - **output**: The `RigidityCurve` result type
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
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math (grid, linfit, integrate)
//!   ↓
//! Layer 1: Primitives (errors, traits, staircase)
//! ```

/// Fail-fast validation.
///
/// Provides:
/// - Raw-level checks (length, finiteness)
/// - Window-length and sampling-count checks
/// - Duplicate-parameter detection for builders
pub mod validator;

/// The Δ3 executor.
///
/// Provides:
/// - Per-window staircase detrending and integration
/// - Single-window and full-curve entry points
pub mod rigidity;

/// Parallel execution.
///
/// Provides:
/// - Rayon pass over window centers with per-thread scratch buffers
#[cfg(feature = "parallel")]
pub mod parallel;

/// Result types.
///
/// Provides:
/// - The `RigidityCurve` container with display formatting
pub mod output;
