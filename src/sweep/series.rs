//! 1D series evaluation.

use rayon::prelude::*;

use crate::domain::{Series, SeriesRun, SweepStats};
use crate::math::Grid1D;
use crate::model::ModelError;

/// Evaluate a fallible model function over a 1D grid, in parallel.
///
/// Unphysical samples become NaN points so the series keeps its grid
/// alignment; the caller can mask or report them via the returned stats.
pub fn evaluate_series<F>(grid: &Grid1D, label: impl Into<String>, f: F) -> SeriesRun
where
    F: Fn(f64) -> Result<f64, ModelError> + Sync,
{
    let x: Vec<f64> = grid.values().collect();
    let evals: Vec<Result<f64, ModelError>> = x.par_iter().map(|&v| f(v)).collect();

    let unphysical = evals.iter().filter(|e| e.is_err()).count();
    let y: Vec<f64> = evals
        .into_iter()
        .map(|e| e.unwrap_or(f64::NAN))
        .collect();

    SeriesRun {
        series: Series {
            label: label.into(),
            x,
            y,
        },
        stats: SweepStats {
            evaluated: grid.len(),
            unphysical,
        },
    }
}
