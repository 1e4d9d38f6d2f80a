//! Formatted terminal output for sweep results.
//!
//! We keep formatting code in one place so:
//! - the model/sweep code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::SeriesRun;
use crate::sweep::ScanRun;

/// Format a block of 1D series (one sweep variant panel).
pub fn format_series_block(title: &str, runs: &[SeriesRun]) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {title} ===\n"));

    for run in runs {
        let nan_count = run.series.y.iter().filter(|y| y.is_nan()).count();
        let range = match finite_min_max(run.series.y.iter().copied()) {
            Some((lo, hi)) => format!("y=[{lo:.6}, {hi:.6}]"),
            None => "y=(no finite values)".to_string(),
        };
        out.push_str(&format!(
            "{:<28} n={} {range} unphysical={} nan={}\n",
            run.series.label,
            run.stats.evaluated,
            run.stats.unphysical,
            nan_count,
        ));
    }

    out
}

/// Format a 2D scan summary (axes, occupancy, value range over bins).
pub fn format_scan_block(title: &str, run: &ScanRun) -> String {
    let hist = &run.hist;
    let (xa, ya) = (hist.x_axis(), hist.y_axis());

    let mut out = String::new();
    out.push_str(&format!("=== {title} ===\n"));
    out.push_str(&format!(
        "x: [{:.3}, {:.3}] / {} bins | y: [{:.3}, {:.3}] / {} bins\n",
        xa.min(),
        xa.max(),
        xa.bins(),
        ya.min(),
        ya.max(),
        ya.bins(),
    ));
    out.push_str(&format!(
        "fills={} occupied={}/{} underflow={} overflow={} unphysical={}\n",
        hist.fills(),
        hist.occupied_bins(),
        xa.bins() * ya.bins(),
        hist.underflow_count(),
        hist.overflow_count(),
        run.stats.unphysical,
    ));

    let means = (0..xa.bins())
        .flat_map(|ix| (0..ya.bins()).map(move |iy| (ix, iy)))
        .map(|(ix, iy)| hist.mean_at(ix, iy));
    match finite_min_max(means) {
        Some((lo, hi)) => out.push_str(&format!("bin means in [{lo:.6}, {hi:.6}]\n")),
        None => out.push_str("bin means: no finite values\n"),
    }

    out
}

/// Min/max over the finite values of an iterator, if any.
fn finite_min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for v in values.filter(|v| v.is_finite()) {
        range = Some(match range {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    range
}
