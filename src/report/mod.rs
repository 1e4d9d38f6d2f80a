//! Reporting utilities: formatted terminal summaries of sweeps.

pub mod format;

pub use format::*;
