//! 2D scan filling.
//!
//! A scan samples a two-argument model function on a Cartesian grid and
//! accumulates the values into a [`Histogram2D`] whose axes span the same
//! domain with one bin per grid point, so each bin's mean degenerates to
//! the raw sampled value. The aggregator itself stays correct if a caller
//! picks a denser grid than bin count (multiple fills per bin).
//!
//! Parallelism uses sharded partial histograms (rayon fold) merged at the
//! end; concurrent workers never write the same bin, so no update is lost.

use rayon::prelude::*;

use crate::domain::SweepStats;
use crate::error::AppError;
use crate::hist::{BinAxis, Histogram2D};
use crate::math::{Grid1D, Grid2D};
use crate::model::ModelError;

/// A filled scan with its sweep bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRun {
    pub hist: Histogram2D,
    pub stats: SweepStats,
}

/// Sample `f` on `x_grid × y_grid` and fill a matching histogram.
///
/// Unphysical samples are skipped (no bin is touched) and counted in the
/// stats; a per-sample condition never aborts the scan.
pub fn fill_scan<F>(x_grid: &Grid1D, y_grid: &Grid1D, f: F) -> Result<ScanRun, AppError>
where
    F: Fn(f64, f64) -> Result<f64, ModelError> + Sync,
{
    let x_axis = BinAxis::new(x_grid.min(), x_grid.max(), x_grid.len())?;
    let y_axis = BinAxis::new(y_grid.min(), y_grid.max(), y_grid.len())?;

    let pairs: Vec<(f64, f64)> = Grid2D::new(*x_grid, *y_grid).pairs().collect();

    let (hist, stats) = pairs
        .par_iter()
        .fold(
            || (Histogram2D::new(x_axis, y_axis), SweepStats::default()),
            |(mut hist, mut stats), &(x, y)| {
                stats.evaluated += 1;
                match f(x, y) {
                    Ok(w) => hist.fill(x, y, w),
                    Err(ModelError::UnphysicalRegion { .. }) => stats.unphysical += 1,
                }
                (hist, stats)
            },
        )
        .reduce(
            || (Histogram2D::new(x_axis, y_axis), SweepStats::default()),
            |(mut a, mut sa), (b, sb)| {
                a.merge(&b);
                sa.merge(sb);
                (a, sa)
            },
        );

    Ok(ScanRun { hist, stats })
}
