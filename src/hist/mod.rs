//! Fixed-resolution binned aggregation for 2D scans.

pub mod hist2d;

pub use hist2d::*;
