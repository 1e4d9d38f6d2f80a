//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they
//! can be:
//!
//! - used in-memory during sweeps
//! - handed to a rendering/export frontend unchanged
//! - compared in tests without ceremony

use serde::{Deserialize, Serialize};

use crate::model::{self, ModelError};

/// Couplings and masses defining one model point.
///
/// Passed by value to every formula call; the top-quark mass is a fixed
/// constant of the model ([`crate::model::M_TOP`]), not a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Visible-sector coupling (mediator to top quarks), dimensionless.
    pub g_sm: f64,
    /// Dark-sector coupling, dimensionless.
    pub g_dm: f64,
    /// Mediator mass in GeV.
    pub m_v: f64,
    /// Dark-matter mass in GeV.
    pub m_dm: f64,
}

impl ModelParameters {
    /// Total mediator width at this point.
    pub fn width_tot(&self) -> Result<f64, ModelError> {
        model::width_tot(self.g_sm, self.g_dm, self.m_v, self.m_dm)
    }

    /// Invisible branching fraction at this point.
    pub fn branching_fraction(&self) -> Result<f64, ModelError> {
        model::branching_fraction(self.g_sm, self.g_dm, self.m_v, self.m_dm)
    }
}

/// One evaluated line: grid coordinates and sampled values.
///
/// Unphysical samples are stored as NaN so the series keeps its grid
/// alignment; the matching [`SweepStats`] reports how many there were.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Per-sweep bookkeeping for per-sample domain failures.
///
/// An unphysical sample never aborts a sweep; the driver decides whether to
/// mask, substitute, or report it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepStats {
    /// Number of grid points evaluated.
    pub evaluated: usize,
    /// Number of evaluations that hit an unphysical region.
    pub unphysical: usize,
}

impl SweepStats {
    pub fn merge(&mut self, other: SweepStats) {
        self.evaluated += other.evaluated;
        self.unphysical += other.unphysical;
    }
}

/// A series together with its sweep bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRun {
    pub series: Series,
    pub stats: SweepStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_methods_match_free_functions() {
        let p = ModelParameters {
            g_sm: 0.6,
            g_dm: 1.1,
            m_v: 1000.0,
            m_dm: 1.0,
        };
        assert_eq!(
            p.width_tot().unwrap(),
            crate::model::width_tot(0.6, 1.1, 1000.0, 1.0).unwrap()
        );
        assert_eq!(
            p.branching_fraction().unwrap(),
            crate::model::branching_fraction(0.6, 1.1, 1000.0, 1.0).unwrap()
        );
    }

    #[test]
    fn sweep_stats_merge_adds() {
        let mut a = SweepStats {
            evaluated: 10,
            unphysical: 2,
        };
        a.merge(SweepStats {
            evaluated: 5,
            unphysical: 1,
        });
        assert_eq!(a.evaluated, 15);
        assert_eq!(a.unphysical, 3);
    }
}
