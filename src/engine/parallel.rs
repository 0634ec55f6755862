//! Parallel execution of window-center evaluations.
//!
//! ## Purpose
//!
//! This module spreads the per-center rigidity contributions of one Δ3
//! evaluation across CPU cores. Each window is independent, so the
//! computation is a purely functional fan-out followed by a sequential mean.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` for data-parallel execution across cores.
//! * **Optimization**: Per-thread scratch buffers avoid allocating inside
//!   every window.
//! * **Determinism**: Results are collected positionally; the caller reduces
//!   them in center order, so output is bitwise identical to the sequential
//!   path.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).
//! * This module does not decide whether to run in parallel (handled by the
//!   executor's dispatch).

use num_traits::Float;
use rayon::prelude::*;

use crate::engine::rigidity::{window_deviation, WindowScratch};
use crate::primitives::errors::SpectralError;
use crate::primitives::staircase::Staircase;

// ============================================================================
// Parallel Pass
// ============================================================================

/// Evaluate every window center in parallel, preserving center order.
pub(crate) fn window_deviations_parallel<T>(
    staircase: Staircase<'_, T>,
    center_grid: &[T],
    window: T,
    samples: usize,
) -> Result<Vec<T>, SpectralError>
where
    T: Float + Send + Sync,
{
    center_grid
        .par_iter()
        .map_init(
            || WindowScratch::allocate(samples),
            |scratch, &center| window_deviation(&staircase, center, window, samples, scratch),
        )
        .collect()
}
