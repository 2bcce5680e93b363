//! Launch-window search for the return leg.
//!
//! The spacecraft leaves the destination at `t` and reaches the origin's orbit after
//! `transfer_duration`. A Hohmann return only intercepts the origin if, at arrival, the
//! origin sits diametrically opposite the point the spacecraft departed from. The search
//! scans a fixed grid for the first `t` where that holds within tolerance.

use solar_core::angle::{separation_deg, wrap_deg};
use solar_impulsive::{ArcError, HohmannGeometry};
use solar_orbits::OrbitalBody;
use thiserror::Error;
use tracing::debug;

/// Largest grid the search will walk before refusing the configuration.
const MAX_GRID_POINTS: f64 = 1.0e8;

/// Grid-search tunables. All times are in years from launch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSearch {
    /// Latest departure time considered.
    pub horizon_years: f64,
    pub step_years: f64,
    pub tolerance_deg: f64,
}

impl Default for WindowSearch {
    /// Ten-year horizon, 1e-4 yr step, 0.1° tolerance. For Earth–Mars the residual moves
    /// about 168.7°/yr, so each step advances it by roughly 0.017°: the grid cannot jump
    /// over the tolerance band.
    fn default() -> Self {
        Self {
            horizon_years: 10.0,
            step_years: 1e-4,
            tolerance_deg: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WindowError {
    #[error(
        "no launch window within {tolerance_deg}° between t = {start} and the {horizon} yr horizon"
    )]
    NoWindow {
        start: f64,
        horizon: f64,
        tolerance_deg: f64,
    },
    #[error("invalid window search: {0}")]
    InvalidSearch(String),
}

/// Raw alignment residual in `[0, 360)` degrees for departing the destination at `t`.
///
/// `(θ_origin(t + transfer) − (θ_destination(t) − 180)) mod 360`; zero means the origin
/// arrives exactly opposite the departure point.
pub fn alignment_residual_deg(
    origin: &OrbitalBody,
    destination: &OrbitalBody,
    transfer_duration: f64,
    t: f64,
) -> f64 {
    let origin_at_arrival = origin.phase_angle_deg(t + transfer_duration);
    let target = wrap_deg(destination.phase_angle_deg(t) - 180.0);
    wrap_deg(origin_at_arrival - target)
}

/// Find the earliest departure time `t ≥ transfer_duration` at which the origin, one
/// transfer later, is antipodal to the destination's current position.
///
/// The grid is `transfer_duration + k·step` up to and including `horizon_years`. A miss is
/// reported as [`WindowError::NoWindow`]; any fallback is the caller's decision.
pub fn find_departure_time(
    origin: &OrbitalBody,
    destination: &OrbitalBody,
    transfer_duration: f64,
    search: &WindowSearch,
) -> Result<f64, WindowError> {
    if !(transfer_duration.is_finite() && transfer_duration >= 0.0) {
        return Err(WindowError::InvalidSearch(format!(
            "transfer duration must be non-negative and finite, got {transfer_duration}"
        )));
    }
    if !(search.step_years.is_finite() && search.step_years > 0.0) {
        return Err(WindowError::InvalidSearch(format!(
            "step must be positive, got {}",
            search.step_years
        )));
    }
    if !(search.tolerance_deg.is_finite() && search.tolerance_deg > 0.0) {
        return Err(WindowError::InvalidSearch(format!(
            "tolerance must be positive, got {}",
            search.tolerance_deg
        )));
    }
    if !search.horizon_years.is_finite() {
        return Err(WindowError::InvalidSearch(format!(
            "horizon must be finite, got {}",
            search.horizon_years
        )));
    }

    let start = transfer_duration;
    let no_window = WindowError::NoWindow {
        start,
        horizon: search.horizon_years,
        tolerance_deg: search.tolerance_deg,
    };
    if search.horizon_years < start {
        return Err(no_window);
    }

    let last_index = ((search.horizon_years - start) / search.step_years).floor();
    if last_index > MAX_GRID_POINTS {
        return Err(WindowError::InvalidSearch(format!(
            "step {} yr over a {} yr span needs {last_index:.0} evaluations",
            search.step_years,
            search.horizon_years - start
        )));
    }

    for k in 0..=(last_index as u64) {
        // index-based so rounding does not accumulate over long horizons
        let t = start + k as f64 * search.step_years;
        let residual = alignment_residual_deg(origin, destination, transfer_duration, t);
        if separation_deg(residual, 0.0) < search.tolerance_deg {
            debug!(t, residual, evaluations = k + 1, "launch window found");
            return Ok(t);
        }
    }

    Err(no_window)
}

/// Destination body whose initial phase makes the outbound transfer meet it exactly.
///
/// The destination is placed at the Hohmann lead angle ahead of the origin at `t = 0`,
/// keeping its radius and angular velocity.
pub fn phase_matched_destination(
    origin: &OrbitalBody,
    destination: &OrbitalBody,
    mu_au3_yr2: f64,
) -> Result<OrbitalBody, ArcError> {
    let geometry = HohmannGeometry::between(origin.radius_au, destination.radius_au, mu_au3_yr2)?;
    let lead = geometry.lead_angle_deg(destination.angular_velocity_deg);
    Ok(OrbitalBody::new(
        destination.radius_au,
        destination.angular_velocity_deg,
        wrap_deg(origin.phase_angle_deg(0.0) + lead),
    ))
}
