//! Parallel grid sweeps over the mediator model.
//!
//! Every model evaluation is pure and independent, so sweeps are
//! embarrassingly parallel; results never depend on evaluation order.

pub mod scan;
pub mod series;

pub use scan::*;
pub use series::*;
