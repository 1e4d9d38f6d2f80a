//! Closed-form partial widths for a heavy vector mediator.
//!
//! The mediator `V` couples to top quarks (visible channel) and to a
//! dark-matter fermion pair (invisible channel). Each partial width factors
//! into a squared coupling times a phase-space term that depends only on
//! the mass ratio `r`:
//!
//! - `Φ_inv(m_DM, m_V) = (m_V / 12π) · √(1 − 4r²) · (1 + 2r²)`, `r = m_DM/m_V`
//! - `Φ_vis(m_f, m_V)  = (m_V / π) · (1 − r²) · (1 − r²/2 − r⁴/2)`, `r = m_f/m_V`
//!
//! All functions are pure and take explicit arguments; there is no shared
//! model state. A square root of a negative radicand is reported as
//! [`ModelError::UnphysicalRegion`] rather than returned as a silent NaN.

use crate::model::ModelError;
use std::f64::consts::PI;

/// Top-quark mass in GeV (fixed constant of the model, not a parameter).
pub const M_TOP: f64 = 172.0;

/// Phase-space factor for the invisible (dark-matter pair) channel.
///
/// Real only when the channel is open, i.e. `m_v >= 2 * m_dm`; below
/// threshold the radicand `1 − 4r²` is negative and the unphysical region
/// is reported instead.
pub fn phi_inv(m_dm: f64, m_v: f64) -> Result<f64, ModelError> {
    let r = m_dm / m_v;
    let r2 = r * r;
    let radicand = 1.0 - 4.0 * r2;
    if radicand < 0.0 {
        return Err(ModelError::UnphysicalRegion {
            quantity: "invisible phase space",
            radicand,
        });
    }
    Ok(m_v / (12.0 * PI) * radicand.sqrt() * (1.0 + 2.0 * r2))
}

/// Phase-space factor for the visible (fermion pair) channel.
///
/// Total over all finite inputs. The bracket factors as
/// `(1 − r²)² (r² + 2) / 2`, so the value is non-negative for any mass
/// ratio and vanishes exactly at `m_f == m_v`. Physically meaningful only
/// for `m_v > m_f`; the value is left unclamped so callers see exactly
/// what the formula produces below threshold.
pub fn phi_vis(m_f: f64, m_v: f64) -> f64 {
    let r = m_f / m_v;
    let r2 = r * r;
    let r4 = r2 * r2;
    m_v / PI * (1.0 - r2) * (1.0 - 0.5 * r2 - 0.5 * r4)
}

/// Partial width of the visible decay `V → t t̄`.
pub fn width_vis(g_sm: f64, m_v: f64) -> f64 {
    g_sm * g_sm * phi_vis(M_TOP, m_v)
}

/// Partial width of the invisible decay `V → χ χ̄`.
pub fn width_inv(g_dm: f64, m_v: f64, m_dm: f64) -> Result<f64, ModelError> {
    Ok(g_dm * g_dm * phi_inv(m_dm, m_v)?)
}

/// Total mediator width (visible + invisible).
pub fn width_tot(g_sm: f64, g_dm: f64, m_v: f64, m_dm: f64) -> Result<f64, ModelError> {
    Ok(width_vis(g_sm, m_v) + width_inv(g_dm, m_v, m_dm)?)
}

/// Invisible branching fraction `Γ_inv / Γ_tot`.
///
/// Returns `Ok(NaN)` when the total width is zero (all couplings zero);
/// callers must check before further arithmetic.
pub fn branching_fraction(g_sm: f64, g_dm: f64, m_v: f64, m_dm: f64) -> Result<f64, ModelError> {
    Ok(width_inv(g_dm, m_v, m_dm)? / width_tot(g_sm, g_dm, m_v, m_dm)?)
}

/// Solve for `g_SM` given a target invisible BR and total width.
///
/// `g_SM = √(width / Φ_vis(m_t, m_v) · (1 − br))`. A negative radicand
/// (e.g. `br > 1` with a positive width target, or a negative width) is an
/// unphysical region.
pub fn coupling_sm_from_br_width(br: f64, width: f64, m_v: f64) -> Result<f64, ModelError> {
    let radicand = width / phi_vis(M_TOP, m_v) * (1.0 - br);
    if radicand < 0.0 {
        return Err(ModelError::UnphysicalRegion {
            quantity: "g_SM from (BR, width)",
            radicand,
        });
    }
    Ok(radicand.sqrt())
}

/// Solve for `g_DM` given a target invisible BR and total width.
///
/// Note: the invisible phase space is evaluated at the **top mass** here,
/// not at the dark-matter mass used by [`width_inv`]. See DESIGN.md for the
/// documented inconsistency; it is preserved deliberately.
pub fn coupling_dm_from_br_width(br: f64, width: f64, m_v: f64) -> Result<f64, ModelError> {
    let radicand = width / phi_inv(M_TOP, m_v)? * br;
    if radicand < 0.0 {
        return Err(ModelError::UnphysicalRegion {
            quantity: "g_DM from (BR, width)",
            radicand,
        });
    }
    Ok(radicand.sqrt())
}

/// Solve for `g_DM` given a target total width and a fixed `g_SM`.
///
/// The visible width is a floor: requesting a total width below it leaves
/// no room for the invisible channel and is an unphysical region.
pub fn coupling_dm_from_width(
    width: f64,
    g_sm: f64,
    m_v: f64,
    m_dm: f64,
) -> Result<f64, ModelError> {
    let radicand = (width - width_vis(g_sm, m_v)) / phi_inv(m_dm, m_v)?;
    if radicand < 0.0 {
        return Err(ModelError::UnphysicalRegion {
            quantity: "g_DM from width",
            radicand,
        });
    }
    Ok(radicand.sqrt())
}

/// Solve for `g_DM` given a target invisible BR and a fixed `g_SM`.
///
/// `g_DM² = g_SM² · br/(1−br) · Φ_vis(m_t, m_v) / Φ_inv(m_dm, m_v)`.
pub fn coupling_dm_from_br(br: f64, g_sm: f64, m_v: f64, m_dm: f64) -> Result<f64, ModelError> {
    let radicand = g_sm * g_sm * (br / (1.0 - br)) * phi_vis(M_TOP, m_v) / phi_inv(m_dm, m_v)?;
    if radicand < 0.0 {
        return Err(ModelError::UnphysicalRegion {
            quantity: "g_DM from BR",
            radicand,
        });
    }
    Ok(radicand.sqrt())
}
