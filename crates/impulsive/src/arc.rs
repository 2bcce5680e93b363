//! A single Hohmann transfer arc parameterised by time.
//!
//! The arc covers exactly half of the transfer ellipse. Which half is encoded by
//! [`TransferLeg`]: a raising leg flies periapsis → apoapsis (mean anomaly `0 → π`), a
//! lowering leg flies apoapsis → periapsis (mean anomaly `π → 2π`). The leg must agree with
//! how the orientation was chosen, otherwise the spacecraft runs along the wrong half.

use std::f64::consts::PI;

use solar_core::angle::wrap_deg;
use solar_core::vector::{self, Vector3};
use solar_orbits::kepler::{self, KeplerError, KeplerSolver};
use thiserror::Error;

/// Which half of the transfer ellipse an arc traverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferLeg {
    /// Periapsis at the start of the arc (outward transfer).
    Raising,
    /// Apoapsis at the start of the arc (inward transfer).
    Lowering,
}

impl TransferLeg {
    /// Mean anomaly at the start of the arc.
    pub fn initial_mean_anomaly(self) -> f64 {
        match self {
            TransferLeg::Raising => 0.0,
            TransferLeg::Lowering => PI,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransferLeg::Raising => "raising",
            TransferLeg::Lowering => "lowering",
        }
    }
}

/// Errors raised when a transfer arc cannot be constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArcError {
    #[error("transfer interval must be positive: start {t_start}, end {t_end}")]
    InvalidInterval { t_start: f64, t_end: f64 },
    #[error("transfer eccentricity must lie strictly inside (0, 1), got {0}")]
    InvalidEccentricity(f64),
    #[error("{name} must be positive and finite, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("origin and destination share radius {radius_au} AU; no transfer ellipse exists")]
    DegenerateTransfer { radius_au: f64 },
}

/// Immutable transfer arc: ellipse shape, time interval, and orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferArc {
    semi_major_axis_au: f64,
    eccentricity: f64,
    period_years: f64,
    t_start: f64,
    t_end: f64,
    orientation_deg: f64,
    leg: TransferLeg,
}

impl TransferArc {
    /// Validate and build an arc. `orientation_deg` is the argument of periapsis measured
    /// from the +x axis and is normalised into `[0, 360)`.
    pub fn new(
        semi_major_axis_au: f64,
        eccentricity: f64,
        period_years: f64,
        t_start: f64,
        t_end: f64,
        orientation_deg: f64,
        leg: TransferLeg,
    ) -> Result<Self, ArcError> {
        for (name, value) in [
            ("semi-major axis", semi_major_axis_au),
            ("orbital period", period_years),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ArcError::InvalidParameter { name, value });
            }
        }
        if !orientation_deg.is_finite() {
            return Err(ArcError::InvalidParameter {
                name: "orientation",
                value: orientation_deg,
            });
        }
        if !(eccentricity > 0.0 && eccentricity < 1.0) {
            return Err(ArcError::InvalidEccentricity(eccentricity));
        }
        if !(t_start.is_finite() && t_end.is_finite() && t_end > t_start) {
            return Err(ArcError::InvalidInterval { t_start, t_end });
        }

        Ok(Self {
            semi_major_axis_au,
            eccentricity,
            period_years,
            t_start,
            t_end,
            orientation_deg: wrap_deg(orientation_deg),
            leg,
        })
    }

    pub fn semi_major_axis_au(&self) -> f64 {
        self.semi_major_axis_au
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn period_years(&self) -> f64 {
        self.period_years
    }

    pub fn t_start(&self) -> f64 {
        self.t_start
    }

    pub fn t_end(&self) -> f64 {
        self.t_end
    }

    pub fn orientation_deg(&self) -> f64 {
        self.orientation_deg
    }

    pub fn leg(&self) -> TransferLeg {
        self.leg
    }

    pub fn duration(&self) -> f64 {
        self.t_end - self.t_start
    }

    pub fn periapsis_radius(&self) -> f64 {
        self.semi_major_axis_au * (1.0 - self.eccentricity)
    }

    pub fn apoapsis_radius(&self) -> f64 {
        self.semi_major_axis_au * (1.0 + self.eccentricity)
    }

    /// Whether `t` falls inside the closed interval `[t_start, t_end]`.
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_start && t <= self.t_end
    }

    /// Fraction of the arc flown at time `t`, or `None` outside the arc.
    pub fn progress(&self, t: f64) -> Option<f64> {
        if !self.contains(t) {
            return None;
        }
        Some(((t - self.t_start) / self.duration()).clamp(0.0, 1.0))
    }

    /// Mean anomaly (radians) after flying `fraction` of the arc.
    pub fn mean_anomaly(&self, fraction: f64) -> f64 {
        self.leg.initial_mean_anomaly() + PI * fraction
    }

    /// Heliocentric distance (AU) at time `t`, or `None` outside the arc.
    pub fn radius_at(&self, t: f64, solver: &KeplerSolver) -> Result<Option<f64>, KeplerError> {
        let Some(fraction) = self.progress(t) else {
            return Ok(None);
        };
        let ecc_anomaly = solver.solve(self.mean_anomaly(fraction), self.eccentricity)?;
        Ok(Some(self.radius_from_eccentric(ecc_anomaly)))
    }

    /// Heliocentric position (AU) at time `t`.
    ///
    /// Returns `Ok(None)` when `t` lies outside `[t_start, t_end]` so a dispatcher can try
    /// another phase; Kepler failures propagate as errors.
    pub fn position_at(
        &self,
        t: f64,
        solver: &KeplerSolver,
    ) -> Result<Option<Vector3>, KeplerError> {
        let Some(fraction) = self.progress(t) else {
            return Ok(None);
        };
        let ecc_anomaly = solver.solve(self.mean_anomaly(fraction), self.eccentricity)?;
        let radius = self.radius_from_eccentric(ecc_anomaly);
        let nu = kepler::true_anomaly(ecc_anomaly, self.eccentricity);
        Ok(Some(vector::in_plane(
            radius,
            nu + self.orientation_deg.to_radians(),
        )))
    }

    fn radius_from_eccentric(&self, ecc_anomaly: f64) -> f64 {
        self.semi_major_axis_au * (1.0 - self.eccentricity * ecc_anomaly.cos())
    }
}
