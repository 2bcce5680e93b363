//! Analytic Hohmann transfer geometry in the coplanar, circular limit.
//!
//! Given the radii of two circular orbits and the central body's GM, derives the transfer
//! ellipse (semi-major axis, eccentricity, period) and the half-period time of flight.
//! Units are AU and years; with `GM = 4π²` a 1 AU circular orbit has a one-year period.

use std::f64::consts::PI;

use solar_core::angle::wrap_deg;

use crate::arc::{ArcError, TransferArc, TransferLeg};

/// Transfer ellipse connecting two circular, coplanar orbits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HohmannGeometry {
    pub from_radius_au: f64,
    pub to_radius_au: f64,
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub period_years: f64,
    /// Half the ellipse period: periapsis to apoapsis or the reverse.
    pub time_of_flight_years: f64,
    pub leg: TransferLeg,
}

impl HohmannGeometry {
    /// Compute the Hohmann ellipse from `r_from` to `r_to` (AU) under `mu` (AU³/yr²).
    ///
    /// Fails for non-positive or non-finite inputs and for equal radii, which would
    /// describe a degenerate circular "transfer".
    pub fn between(r_from_au: f64, r_to_au: f64, mu_au3_yr2: f64) -> Result<Self, ArcError> {
        for (name, value) in [
            ("origin radius", r_from_au),
            ("destination radius", r_to_au),
            ("gravitational parameter", mu_au3_yr2),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ArcError::InvalidParameter { name, value });
            }
        }
        if r_from_au == r_to_au {
            return Err(ArcError::DegenerateTransfer {
                radius_au: r_from_au,
            });
        }

        let inner = r_from_au.min(r_to_au);
        let a = 0.5 * (r_from_au + r_to_au);
        let e = 1.0 - inner / a;
        let period = 2.0 * PI * (a.powi(3) / mu_au3_yr2).sqrt();
        let leg = if r_from_au < r_to_au {
            TransferLeg::Raising
        } else {
            TransferLeg::Lowering
        };

        Ok(Self {
            from_radius_au: r_from_au,
            to_radius_au: r_to_au,
            semi_major_axis_au: a,
            eccentricity: e,
            period_years: period,
            time_of_flight_years: 0.5 * period,
            leg,
        })
    }

    pub fn periapsis_radius(&self) -> f64 {
        self.semi_major_axis_au * (1.0 - self.eccentricity)
    }

    pub fn apoapsis_radius(&self) -> f64 {
        self.semi_major_axis_au * (1.0 + self.eccentricity)
    }

    /// Angle (degrees, `[0, 360)`) by which the target must lead the departure point so that
    /// it reaches the arrival apse together with the spacecraft.
    pub fn lead_angle_deg(&self, target_angular_velocity_deg: f64) -> f64 {
        wrap_deg(180.0 - target_angular_velocity_deg * self.time_of_flight_years)
    }

    /// Argument of periapsis for a transfer leaving from phase angle `departure_angle_deg`.
    ///
    /// A raising leg departs at periapsis; a lowering leg departs at apoapsis, so its
    /// periapsis sits on the opposite side of the Sun.
    pub fn orientation_for_departure(&self, departure_angle_deg: f64) -> f64 {
        match self.leg {
            TransferLeg::Raising => wrap_deg(departure_angle_deg),
            TransferLeg::Lowering => wrap_deg(departure_angle_deg - 180.0),
        }
    }

    /// Transfer arc starting at `t_start` with the given argument of periapsis.
    pub fn arc(&self, t_start: f64, orientation_deg: f64) -> Result<TransferArc, ArcError> {
        TransferArc::new(
            self.semi_major_axis_au,
            self.eccentricity,
            self.period_years,
            t_start,
            t_start + self.time_of_flight_years,
            orientation_deg,
            self.leg,
        )
    }

    /// Transfer arc starting at `t_start` from the body at `departure_angle_deg`.
    pub fn arc_from(&self, t_start: f64, departure_angle_deg: f64) -> Result<TransferArc, ArcError> {
        self.arc(t_start, self.orientation_for_departure(departure_angle_deg))
    }
}
