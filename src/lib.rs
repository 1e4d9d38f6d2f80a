//! `mediator-scan` library crate.
//!
//! The binary (`medscan`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., a future plotting frontend or notebooks)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod hist;
pub mod math;
pub mod model;
pub mod report;
pub mod sweep;
