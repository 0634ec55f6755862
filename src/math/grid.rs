//! Uniform sample grids.
//!
//! ## Purpose
//!
//! This module generates evenly spaced abscissae over closed intervals: the
//! window-center grids and per-window sampling grids of the rigidity
//! computation, and the energy grids used when sampling a staircase for
//! external plotting.
//!
//! ## Design notes
//!
//! * Both interval endpoints are included; the final point is pinned to the
//!   exact endpoint rather than the accumulated step sum.
//! * `linspace_into` refills a caller-owned buffer so hot loops do not
//!   allocate per window.
//!
//! ## Invariants
//!
//! * For `num >= 2` the first element equals `start` and the last equals
//!   `end` exactly.
//! * Output length always equals `num`.

use num_traits::Float;

// ============================================================================
// Grid Generation
// ============================================================================

/// Generate `num` evenly spaced values over `[start, end]`, inclusive.
pub fn linspace<T: Float>(start: T, end: T, num: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(num);
    linspace_into(start, end, num, &mut out);
    out
}

/// Fill `out` with `num` evenly spaced values over `[start, end]`.
///
/// Clears `out` first; existing capacity is reused.
pub fn linspace_into<T: Float>(start: T, end: T, num: usize, out: &mut Vec<T>) {
    out.clear();
    match num {
        0 => {}
        1 => out.push(start),
        _ => {
            let step = (end - start) / T::from(num - 1).unwrap();
            for index in 0..num {
                out.push(start + T::from(index).unwrap() * step);
            }
            // Pin the endpoint exactly.
            out[num - 1] = end;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        let grid = linspace(0.1_f64, 0.7, 7);
        assert_eq!(grid.len(), 7);
        assert_eq!(grid[0], 0.1);
        assert_eq!(grid[6], 0.7);
    }

    #[test]
    fn test_collapsed_interval() {
        let grid = linspace(2.0_f64, 2.0, 5);
        assert!(grid.iter().all(|&value| value == 2.0));
    }
}
