//! Parallel frequency-response sweeps using rayon.
//!
//! Every grid point reads the same immutable (A, B, C, D) and writes its
//! own output slot, so the sweep is an embarrassingly parallel map. For
//! small grids the thread-pool overhead dominates and the sequential path
//! is used instead.

use rayon::prelude::*;

use attenua_core::{FrequencyGrid, StateSpace};

use crate::error::Result;
use crate::response::{frequency_response, ComplexParts, FrequencyResponse, ResponsePoint};

/// Configuration for parallel sweep execution.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Minimum grid points to use parallel execution (below this,
    /// sequential is faster).
    pub min_points_for_parallel: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            min_points_for_parallel: 64,
        }
    }
}

impl ParallelConfig {
    /// Set the minimum parallel threshold.
    pub fn with_min_parallel(mut self, min: usize) -> Self {
        self.min_points_for_parallel = min;
        self
    }
}

/// Evaluate the frequency response in parallel across the grid.
///
/// Falls back to the sequential sweep if the grid is below the configured
/// threshold or only one rayon thread is available. Results are identical
/// to [`frequency_response`] either way; each point is solved exactly.
pub fn frequency_response_parallel(
    sys: &StateSpace,
    grid: &FrequencyGrid,
    config: &ParallelConfig,
) -> Result<FrequencyResponse> {
    let use_parallel = grid.len() >= config.min_points_for_parallel
        && rayon::current_num_threads() > 1;

    if !use_parallel {
        return frequency_response(sys, grid);
    }

    log::info!(
        "parallel frequency response sweep: {} points across {} threads",
        grid.len(),
        rayon::current_num_threads()
    );

    let parts = ComplexParts::from_system(sys);
    let points = grid
        .omegas()
        .par_iter()
        .map(|&omega| {
            Ok(ResponsePoint {
                omega,
                value: parts.eval(omega)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FrequencyResponse { points })
}
