//! Idealised bodies on fixed, coplanar circular orbits around the Sun.

use std::f64::consts::PI;

use solar_core::angle::wrap_deg;
use solar_core::constants::FULL_TURN_DEG;
use solar_core::vector::{self, Vector3};

/// A body on a circular heliocentric orbit in the reference plane.
///
/// Phase angles are measured in degrees from the +x axis; time is in years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalBody {
    pub radius_au: f64,
    /// Mean motion in degrees per year.
    pub angular_velocity_deg: f64,
    /// Phase angle at `t = 0` in degrees.
    pub initial_phase_deg: f64,
}

impl OrbitalBody {
    pub fn new(radius_au: f64, angular_velocity_deg: f64, initial_phase_deg: f64) -> Self {
        Self {
            radius_au,
            angular_velocity_deg,
            initial_phase_deg,
        }
    }

    /// Build a body whose mean motion follows Kepler's third law for the given `mu`
    /// (AU³/yr²).
    pub fn keplerian(radius_au: f64, mu_au3_yr2: f64, initial_phase_deg: f64) -> Self {
        let period = circular_period(radius_au, mu_au3_yr2);
        Self::new(radius_au, FULL_TURN_DEG / period, initial_phase_deg)
    }

    /// Phase angle in `[0, 360)` degrees at time `t` (years).
    pub fn phase_angle_deg(&self, t: f64) -> f64 {
        wrap_deg(self.angular_velocity_deg * t + self.initial_phase_deg)
    }

    /// Heliocentric position (AU) at time `t` (years).
    pub fn position_at(&self, t: f64) -> Vector3 {
        vector::in_plane(self.radius_au, self.phase_angle_deg(t).to_radians())
    }

    /// Orbital period in years implied by the angular velocity.
    pub fn period(&self) -> f64 {
        FULL_TURN_DEG / self.angular_velocity_deg.abs()
    }
}

/// Period (years) of a circular orbit of radius `r` under gravitational parameter `mu`.
pub fn circular_period(radius_au: f64, mu_au3_yr2: f64) -> f64 {
    2.0 * PI * (radius_au.powi(3) / mu_au3_yr2).sqrt()
}

/// Synodic period (years) between two bodies: the time between identical alignments.
///
/// Returns `None` when the bodies share the same angular velocity.
pub fn synodic_period(a: &OrbitalBody, b: &OrbitalBody) -> Option<f64> {
    let relative = (a.angular_velocity_deg - b.angular_velocity_deg).abs();
    if relative <= f64::EPSILON {
        None
    } else {
        Some(FULL_TURN_DEG / relative)
    }
}
