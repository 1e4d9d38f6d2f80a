//! Command-line parsing for the mediator parameter-space scanner.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the modeling/math code.

use clap::{Parser, Subcommand};

use crate::model::M_TOP;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "medscan", version, about = "Mediator width/BR parameter-space scanner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands: one per sweep variant.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Relative total width Gamma_V/m_V vs mediator mass, for a small grid
    /// of coupling pairs, over a low- and a high-mass window.
    Widths(WidthsArgs),
    /// Total width and invisible BR vs g_SM, for a few fixed g_DM values.
    Couplings(CouplingsArgs),
    /// 2D (g_SM, g_DM) scan producing BR and total-width grids.
    Scan(ScanArgs),
    /// Inverse 2D (Gamma_V, BR) scan solving for the couplings.
    Invert(InvertArgs),
}

/// Options for the mass-dependence sweep.
#[derive(Debug, Parser, Clone)]
pub struct WidthsArgs {
    /// Dark-matter mass in GeV.
    #[arg(long, default_value_t = 1.0)]
    pub m_dm: f64,

    /// Minimum coupling for the (g_SM, g_DM) pair grid.
    #[arg(long, default_value_t = 0.1)]
    pub coupling_min: f64,

    /// Maximum coupling for the (g_SM, g_DM) pair grid.
    #[arg(long, default_value_t = 1.6)]
    pub coupling_max: f64,

    /// Points per coupling axis (the pair grid has the square of this).
    #[arg(long, default_value_t = 3)]
    pub coupling_steps: usize,

    /// Minimum mediator mass (GeV) of the low window.
    #[arg(long, default_value_t = M_TOP / 5.0)]
    pub mass_min: f64,

    /// Maximum mediator mass (GeV) of the low window.
    #[arg(long, default_value_t = M_TOP * 10.0)]
    pub mass_max: f64,

    /// Minimum mediator mass (GeV) of the high window.
    #[arg(long, default_value_t = 500.0)]
    pub high_mass_min: f64,

    /// Maximum mediator mass (GeV) of the high window.
    #[arg(long, default_value_t = 5000.0)]
    pub high_mass_max: f64,

    /// Mass points per window.
    #[arg(long, default_value_t = 1000)]
    pub mass_points: usize,
}

/// Options for the coupling-dependence sweep.
#[derive(Debug, Parser, Clone)]
pub struct CouplingsArgs {
    /// Mediator mass in GeV.
    #[arg(long, default_value_t = 1000.0)]
    pub m_v: f64,

    /// Dark-matter mass in GeV.
    #[arg(long, default_value_t = 1.0)]
    pub m_dm: f64,

    /// Minimum g_SM of the sweep.
    #[arg(long, default_value_t = 0.0)]
    pub g_min: f64,

    /// Maximum g_SM of the sweep.
    #[arg(long, default_value_t = 1.5)]
    pub g_max: f64,

    /// Number of g_SM points.
    #[arg(long, default_value_t = 150)]
    pub g_points: usize,

    /// Fixed g_DM values, one series each.
    #[arg(long = "g-dm", num_args = 1.., default_values_t = vec![0.5, 1.0, 1.5])]
    pub g_dm_values: Vec<f64>,
}

/// Options for the forward 2D coupling scan.
#[derive(Debug, Parser, Clone)]
pub struct ScanArgs {
    /// Mediator mass in GeV.
    #[arg(long, default_value_t = 1000.0)]
    pub m_v: f64,

    /// Dark-matter mass in GeV.
    #[arg(long, default_value_t = 1.0)]
    pub m_dm: f64,

    /// Minimum coupling on both axes.
    #[arg(long, default_value_t = 0.0)]
    pub g_min: f64,

    /// Maximum coupling on both axes.
    #[arg(long, default_value_t = 1.5)]
    pub g_max: f64,

    /// Grid points (and bins) per axis.
    #[arg(long, default_value_t = 150)]
    pub points: usize,
}

/// Options for the inverse (Gamma_V, BR) scan.
#[derive(Debug, Parser, Clone)]
pub struct InvertArgs {
    /// Mediator mass in GeV.
    #[arg(long, default_value_t = 1000.0)]
    pub m_v: f64,

    /// Minimum total width (GeV) on the x axis.
    #[arg(long, default_value_t = 0.0)]
    pub width_min: f64,

    /// Maximum total width (GeV) on the x axis.
    #[arg(long, default_value_t = 500.0)]
    pub width_max: f64,

    /// Minimum invisible BR on the y axis.
    #[arg(long, default_value_t = 0.0)]
    pub br_min: f64,

    /// Maximum invisible BR on the y axis.
    #[arg(long, default_value_t = 1.0)]
    pub br_max: f64,

    /// Grid points (and bins) per axis.
    #[arg(long, default_value_t = 150)]
    pub points: usize,
}
