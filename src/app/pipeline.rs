//! Sweep pipeline: builds grids, evaluates the model, collects results.
//!
//! The four sweep variants share one evaluation engine (`crate::sweep`);
//! this module only decides which grids to build and which model function
//! to sample. The rendering/export of the results belongs to downstream
//! consumers of the returned structs.

use crate::domain::SeriesRun;
use crate::error::AppError;
use crate::math::{Grid1D, Grid2D};
use crate::model;
use crate::sweep::{evaluate_series, fill_scan, ScanRun};

/// Configuration for the mass-dependence sweep.
#[derive(Debug, Clone)]
pub struct WidthsConfig {
    pub m_dm: f64,
    pub coupling_min: f64,
    pub coupling_max: f64,
    pub coupling_steps: usize,
    pub mass_min: f64,
    pub mass_max: f64,
    pub high_mass_min: f64,
    pub high_mass_max: f64,
    pub mass_points: usize,
}

/// Configuration for the coupling-dependence sweep.
#[derive(Debug, Clone)]
pub struct CouplingsConfig {
    pub m_v: f64,
    pub m_dm: f64,
    pub g_min: f64,
    pub g_max: f64,
    pub g_points: usize,
    pub g_dm_values: Vec<f64>,
}

/// Configuration for the forward 2D coupling scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub m_v: f64,
    pub m_dm: f64,
    pub g_min: f64,
    pub g_max: f64,
    pub points: usize,
}

/// Configuration for the inverse (width, BR) scan.
#[derive(Debug, Clone)]
pub struct InvertConfig {
    pub m_v: f64,
    pub width_min: f64,
    pub width_max: f64,
    pub br_min: f64,
    pub br_max: f64,
    pub points: usize,
}

/// Mass-dependence sweep output: one series per coupling pair, per window.
#[derive(Debug, Clone)]
pub struct WidthsRun {
    pub low: Vec<SeriesRun>,
    pub high: Vec<SeriesRun>,
}

/// Coupling-dependence sweep output: width and BR series per g_DM value.
#[derive(Debug, Clone)]
pub struct CouplingsRun {
    pub width: Vec<SeriesRun>,
    pub br: Vec<SeriesRun>,
}

/// Forward scan output: BR and total-width grids over (g_SM, g_DM).
#[derive(Debug, Clone)]
pub struct ScanOutput {
    pub br: ScanRun,
    pub width: ScanRun,
}

/// Inverse scan output: coupling grids over (Gamma_V, BR).
#[derive(Debug, Clone)]
pub struct InvertOutput {
    pub g_sm: ScanRun,
    pub g_dm: ScanRun,
}

/// Sweep `Gamma_V/m_V` vs mediator mass for every coupling pair, over the
/// low- and high-mass windows.
pub fn run_widths(config: &WidthsConfig) -> Result<WidthsRun, AppError> {
    let couplings = Grid1D::new(
        config.coupling_min,
        config.coupling_max,
        config.coupling_steps,
    )?;
    let pairs: Vec<(f64, f64)> = Grid2D::new(couplings, couplings).pairs().collect();

    let low_grid = Grid1D::new(config.mass_min, config.mass_max, config.mass_points)?;
    let high_grid = Grid1D::new(config.high_mass_min, config.high_mass_max, config.mass_points)?;
    let m_dm = config.m_dm;

    let sweep_window = |grid: &Grid1D| -> Vec<SeriesRun> {
        pairs
            .iter()
            .map(|&(g_sm, g_dm)| {
                let label = format!("(g_SM, g_DM) = ({g_sm:.1}, {g_dm:.1})");
                evaluate_series(grid, label, move |m_v| {
                    Ok(model::width_tot(g_sm, g_dm, m_v, m_dm)? / m_v)
                })
            })
            .collect()
    };

    Ok(WidthsRun {
        low: sweep_window(&low_grid),
        high: sweep_window(&high_grid),
    })
}

/// Sweep `Gamma_V` and `BR_chi` vs `g_SM` for each fixed `g_DM`.
pub fn run_couplings(config: &CouplingsConfig) -> Result<CouplingsRun, AppError> {
    let grid = Grid1D::new(config.g_min, config.g_max, config.g_points)?;
    let (m_v, m_dm) = (config.m_v, config.m_dm);

    let mut width = Vec::with_capacity(config.g_dm_values.len());
    let mut br = Vec::with_capacity(config.g_dm_values.len());
    for &g_dm in &config.g_dm_values {
        let label = format!("g_DM = {g_dm:.1}");
        width.push(evaluate_series(&grid, label.clone(), move |g_sm| {
            model::width_tot(g_sm, g_dm, m_v, m_dm)
        }));
        br.push(evaluate_series(&grid, label, move |g_sm| {
            model::branching_fraction(g_sm, g_dm, m_v, m_dm)
        }));
    }

    Ok(CouplingsRun { width, br })
}

/// Scan BR and total width over the (g_SM, g_DM) plane.
pub fn run_scan(config: &ScanConfig) -> Result<ScanOutput, AppError> {
    let grid = Grid1D::new(config.g_min, config.g_max, config.points)?;
    let (m_v, m_dm) = (config.m_v, config.m_dm);

    let br = fill_scan(&grid, &grid, |g_sm, g_dm| {
        model::branching_fraction(g_sm, g_dm, m_v, m_dm)
    })?;
    let width = fill_scan(&grid, &grid, |g_sm, g_dm| {
        model::width_tot(g_sm, g_dm, m_v, m_dm)
    })?;

    Ok(ScanOutput { br, width })
}

/// Solve both couplings over the (Gamma_V, BR) plane.
pub fn run_invert(config: &InvertConfig) -> Result<InvertOutput, AppError> {
    let width_grid = Grid1D::new(config.width_min, config.width_max, config.points)?;
    let br_grid = Grid1D::new(config.br_min, config.br_max, config.points)?;
    let m_v = config.m_v;

    let g_sm = fill_scan(&width_grid, &br_grid, |width, br| {
        model::coupling_sm_from_br_width(br, width, m_v)
    })?;
    let g_dm = fill_scan(&width_grid, &br_grid, |width, br| {
        model::coupling_dm_from_br_width(br, width, m_v)
    })?;

    Ok(InvertOutput { g_sm, g_dm })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model;

    #[test]
    fn widths_run_has_one_series_per_coupling_pair() {
        let config = WidthsConfig {
            m_dm: 1.0,
            coupling_min: 0.1,
            coupling_max: 1.6,
            coupling_steps: 3,
            mass_min: model::M_TOP / 5.0,
            mass_max: model::M_TOP * 10.0,
            high_mass_min: 500.0,
            high_mass_max: 5000.0,
            mass_points: 50,
        };
        let run = run_widths(&config).unwrap();
        assert_eq!(run.low.len(), 9);
        assert_eq!(run.high.len(), 9);
        for sr in run.low.iter().chain(run.high.iter()) {
            assert_eq!(sr.series.y.len(), 50);
            assert_eq!(sr.stats.unphysical, 0);
        }
    }

    #[test]
    fn couplings_run_reproduces_point_evaluations() {
        let config = CouplingsConfig {
            m_v: 1000.0,
            m_dm: 1.0,
            g_min: 0.0,
            g_max: 1.5,
            g_points: 16,
            g_dm_values: vec![0.5, 1.0],
        };
        let run = run_couplings(&config).unwrap();
        assert_eq!(run.width.len(), 2);
        assert_eq!(run.br.len(), 2);

        let sr = &run.width[1]; // g_dm = 1.0
        let g_sm = sr.series.x[7];
        assert_eq!(
            sr.series.y[7],
            model::width_tot(g_sm, 1.0, 1000.0, 1.0).unwrap()
        );
    }

    #[test]
    fn scan_fills_every_bin() {
        let config = ScanConfig {
            m_v: 1000.0,
            m_dm: 1.0,
            g_min: 0.0,
            g_max: 1.5,
            points: 12,
        };
        let run = run_scan(&config).unwrap();
        assert_eq!(run.br.hist.fills(), 144);
        assert_eq!(run.width.hist.fills(), 144);
        assert_eq!(run.br.hist.overflow_count(), 0);
        assert_eq!(run.br.hist.underflow_count(), 0);

        // The (0, 0) corner has zero total width: BR is the NaN sentinel,
        // still filled (the sample is in range), not an unphysical error.
        assert_eq!(run.br.stats.unphysical, 0);
        assert!(run.br.hist.mean_at(0, 0).is_nan());
        assert!(run.width.hist.mean_at(0, 0) == 0.0);
    }

    #[test]
    fn invert_matches_direct_inversion() {
        let config = InvertConfig {
            m_v: 1000.0,
            width_min: 0.0,
            width_max: 500.0,
            br_min: 0.0,
            br_max: 1.0,
            points: 10,
        };
        let run = run_invert(&config).unwrap();
        assert_eq!(run.g_sm.stats.evaluated, 100);

        // Spot-check one in-range grid point against the direct solve.
        let width_grid = Grid1D::new(0.0, 500.0, 10).unwrap();
        let br_grid = Grid1D::new(0.0, 1.0, 10).unwrap();
        let (w, b) = (width_grid.value(4), br_grid.value(3));
        let expected = model::coupling_sm_from_br_width(b, w, 1000.0).unwrap();
        let ix = 4; // grid point 4 of 10 lands in bin 4 of 10
        let iy = 3;
        assert_eq!(run.g_sm.hist.mean_at(ix, iy), expected);
    }
}
