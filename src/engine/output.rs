//! Result types for rigidity computations.
//!
//! ## Purpose
//!
//! This module defines [`RigidityCurve`], the container returned when Δ3 is
//! evaluated over a grid of window lengths. It stores the curve itself plus
//! the sampling parameters that produced it, and formats a readable table
//! for quick inspection.
//!
//! ## Design notes
//!
//! * Results are generic over `Float` types to support f32 and f64.
//! * The curve is immutable once produced; fields are public for direct
//!   consumption by plotting collaborators.
//! * `Display` elides the middle of long grids (first and last rows only).
//!
//! ## Invariants
//!
//! * `windows` and `delta3` always have the same length.
//! * `windows` preserves the caller-supplied order.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization or rendering.

use core::cmp::Ordering;

use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Spectral rigidity evaluated over a grid of window lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidityCurve<T> {
    /// Window lengths L, in caller-supplied order.
    pub windows: Vec<T>,

    /// Δ3(L) for each window length.
    pub delta3: Vec<T>,

    /// Number of window centers sampled per evaluation.
    pub centers: usize,

    /// Number of staircase abscissae sampled per window.
    pub samples: usize,
}

impl<T: Float> RigidityCurve<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of grid points on the curve.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Returns `true` if the curve contains no grid points.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Iterate over `(L, Δ3(L))` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.windows
            .iter()
            .copied()
            .zip(self.delta3.iter().copied())
    }

    /// Largest Δ3 value on the curve.
    pub fn max_delta3(&self) -> Option<T> {
        self.delta3
            .iter()
            .copied()
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + core::fmt::Display> core::fmt::Display for RigidityCurve<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Spectral rigidity:")?;
        writeln!(f, "  Grid points: {}", self.len())?;
        writeln!(f, "  Centers per window length: {}", self.centers)?;
        writeln!(f, "  Abscissae per window: {}", self.samples)?;
        writeln!(f)?;

        writeln!(f, "{:>10} {:>12}", "L", "Delta3")?;
        writeln!(f, "{:-<23}", "")?;

        // Show first 10 and last 10 rows if more than 20 points
        let n = self.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev_idx = idx;

            writeln!(f, "{:>10.4} {:>12.6}", self.windows[idx], self.delta3[idx])?;
        }

        Ok(())
    }
}
