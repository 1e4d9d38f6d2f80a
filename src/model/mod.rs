//! Decay-width model: phase-space factors, widths, branching fractions,
//! and coupling inversions.

pub mod widths;

pub use widths::*;

/// Domain failure of a model formula.
///
/// The closed-form widths contain square roots whose radicands go negative
/// outside the physical region (e.g., the invisible channel below its mass
/// threshold). Those inputs are reported explicitly so sweeps can count and
/// mask them instead of silently propagating NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelError {
    /// A square root would have received a negative radicand.
    UnphysicalRegion {
        /// Which quantity was being computed.
        quantity: &'static str,
        /// The offending (negative) radicand, kept for diagnostics.
        radicand: f64,
    },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::UnphysicalRegion { quantity, radicand } => write!(
                f,
                "unphysical region in {quantity} (radicand = {radicand})"
            ),
        }
    }
}

impl std::error::Error for ModelError {}
