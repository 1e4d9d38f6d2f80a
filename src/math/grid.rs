//! Sampling grids.
//!
//! Sweeps are deterministic grid evaluations: given the same range and
//! point count they always visit the same coordinates, so runs are
//! reproducible without any seeding.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// `n` evenly spaced values covering `[min, max]`, both endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid1D {
    min: f64,
    max: f64,
    n: usize,
}

impl Grid1D {
    /// Build a grid, validating the range.
    pub fn new(min: f64, max: f64, n: usize) -> Result<Self, AppError> {
        if !(min.is_finite() && max.is_finite() && max > min) {
            return Err(AppError::new(
                2,
                format!("Invalid grid range: min={min}, max={max} (must be finite and max>min)."),
            ));
        }
        if n < 2 {
            return Err(AppError::new(2, "Grid point count must be >= 2."));
        }
        Ok(Self { min, max, n })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The `i`-th coordinate: `min + i·(max−min)/(n−1)`.
    pub fn value(&self, i: usize) -> f64 {
        self.min + i as f64 * (self.max - self.min) / (self.n as f64 - 1.0)
    }

    /// Ordered coordinates, restartable (each call yields a fresh iterator).
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.n).map(|i| self.value(i))
    }
}

/// Cartesian product of two 1D grids (`n_x · n_y` coordinate pairs).
///
/// Enumeration order is x-major but carries no semantic weight: any
/// traversal order yields the same aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid2D {
    pub x: Grid1D,
    pub y: Grid1D,
}

impl Grid2D {
    pub fn new(x: Grid1D, y: Grid1D) -> Self {
        Self { x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len() * self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// All coordinate pairs, restartable.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x
            .values()
            .flat_map(move |xv| self.y.values().map(move |yv| (xv, yv)))
    }
}
