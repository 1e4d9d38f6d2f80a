//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the requested parameter-space sweep
//! - prints the terminal report

use clap::Parser;

use crate::cli::{Cli, Command, CouplingsArgs, InvertArgs, ScanArgs, WidthsArgs};
use crate::error::AppError;

pub mod pipeline;

use pipeline::{CouplingsConfig, InvertConfig, ScanConfig, WidthsConfig};

/// Entry point for the `medscan` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Widths(args) => handle_widths(args),
        Command::Couplings(args) => handle_couplings(args),
        Command::Scan(args) => handle_scan(args),
        Command::Invert(args) => handle_invert(args),
    }
}

fn handle_widths(args: WidthsArgs) -> Result<(), AppError> {
    let config = widths_config_from_args(&args);
    let run = pipeline::run_widths(&config)?;

    println!(
        "{}",
        crate::report::format_series_block(
            &format!(
                "Relative mediator width; m_DM = {:.0} GeV; m_V in [{:.1}, {:.1}] GeV",
                config.m_dm, config.mass_min, config.mass_max
            ),
            &run.low,
        )
    );
    println!(
        "{}",
        crate::report::format_series_block(
            &format!(
                "Relative mediator width; m_DM = {:.0} GeV; m_V in [{:.1}, {:.1}] GeV",
                config.m_dm, config.high_mass_min, config.high_mass_max
            ),
            &run.high,
        )
    );
    Ok(())
}

fn handle_couplings(args: CouplingsArgs) -> Result<(), AppError> {
    let config = couplings_config_from_args(&args);
    let run = pipeline::run_couplings(&config)?;

    let title = format!(
        "m_V = {:.0} GeV ; m_DM = {:.0} GeV",
        config.m_v, config.m_dm
    );
    println!(
        "{}",
        crate::report::format_series_block(&format!("Gamma_V vs g_SM ; {title}"), &run.width)
    );
    println!(
        "{}",
        crate::report::format_series_block(&format!("BR_chi vs g_SM ; {title}"), &run.br)
    );
    Ok(())
}

fn handle_scan(args: ScanArgs) -> Result<(), AppError> {
    let config = scan_config_from_args(&args);
    let run = pipeline::run_scan(&config)?;

    let title = format!(
        "m_V = {:.0} GeV ; m_DM = {:.0} GeV",
        config.m_v, config.m_dm
    );
    println!(
        "{}",
        crate::report::format_scan_block(&format!("Gamma_V over (g_SM, g_DM) ; {title}"), &run.width)
    );
    println!(
        "{}",
        crate::report::format_scan_block(&format!("BR_chi over (g_SM, g_DM) ; {title}"), &run.br)
    );
    Ok(())
}

fn handle_invert(args: InvertArgs) -> Result<(), AppError> {
    let config = invert_config_from_args(&args);
    let run = pipeline::run_invert(&config)?;

    let title = format!("m_V = {:.0} GeV", config.m_v);
    println!(
        "{}",
        crate::report::format_scan_block(&format!("g_SM over (Gamma_V, BR_chi) ; {title}"), &run.g_sm)
    );
    println!(
        "{}",
        crate::report::format_scan_block(&format!("g_DM over (Gamma_V, BR_chi) ; {title}"), &run.g_dm)
    );
    Ok(())
}

pub fn widths_config_from_args(args: &WidthsArgs) -> WidthsConfig {
    WidthsConfig {
        m_dm: args.m_dm,
        coupling_min: args.coupling_min,
        coupling_max: args.coupling_max,
        coupling_steps: args.coupling_steps,
        mass_min: args.mass_min,
        mass_max: args.mass_max,
        high_mass_min: args.high_mass_min,
        high_mass_max: args.high_mass_max,
        mass_points: args.mass_points,
    }
}

pub fn couplings_config_from_args(args: &CouplingsArgs) -> CouplingsConfig {
    CouplingsConfig {
        m_v: args.m_v,
        m_dm: args.m_dm,
        g_min: args.g_min,
        g_max: args.g_max,
        g_points: args.g_points,
        g_dm_values: args.g_dm_values.clone(),
    }
}

pub fn scan_config_from_args(args: &ScanArgs) -> ScanConfig {
    ScanConfig {
        m_v: args.m_v,
        m_dm: args.m_dm,
        g_min: args.g_min,
        g_max: args.g_max,
        points: args.points,
    }
}

pub fn invert_config_from_args(args: &InvertArgs) -> InvertConfig {
    InvertConfig {
        m_v: args.m_v,
        width_min: args.width_min,
        width_max: args.width_max,
        br_min: args.br_min,
        br_max: args.br_max,
        points: args.points,
    }
}
