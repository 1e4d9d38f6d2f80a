//! Mathematical utilities: linear sampling grids for parameter sweeps.

pub mod grid;

pub use grid::*;
