//! Bounded Newton–Raphson solver for Kepler's equation `E − e·sin E = M`.

use std::f64::consts::PI;

use thiserror::Error;

/// Default residual tolerance on `|E − e·sin E − M|` (radians).
pub const DEFAULT_TOLERANCE: f64 = 1e-12;
/// Default iteration cap before the solve is declared failed.
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

/// Eccentricity above which `E₀ = π` is a safer starting point than `E₀ = M`.
const HIGH_ECCENTRICITY: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeplerError {
    #[error(
        "Kepler solve did not converge after {iterations} iterations (M = {mean_anomaly}, e = {eccentricity}, residual = {residual:e})"
    )]
    NoConvergence {
        mean_anomaly: f64,
        eccentricity: f64,
        iterations: u32,
        residual: f64,
    },
    #[error("invalid Kepler input: {0}")]
    InvalidInput(String),
}

/// Newton–Raphson solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolver {
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl KeplerSolver {
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Solve for the eccentric anomaly `E` (radians) given mean anomaly `M` (radians) and
    /// eccentricity `e ∈ [0, 1)`.
    ///
    /// Iterates `E ← E − f(E)/f'(E)` with `f(E) = E − e sin E − M` and
    /// `f'(E) = 1 − e cos E` until `|f(E)|` drops below the tolerance. Running out of
    /// iterations is an error; an unconverged `E` is never returned.
    pub fn solve(&self, mean_anomaly: f64, eccentricity: f64) -> Result<f64, KeplerError> {
        if !mean_anomaly.is_finite() {
            return Err(KeplerError::InvalidInput(format!(
                "mean anomaly must be finite, got {mean_anomaly}"
            )));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(KeplerError::InvalidInput(format!(
                "eccentricity must lie in [0, 1), got {eccentricity}"
            )));
        }
        if !(self.tolerance > 0.0) || self.max_iterations == 0 {
            return Err(KeplerError::InvalidInput(format!(
                "solver needs a positive tolerance and iteration cap, got {} / {}",
                self.tolerance, self.max_iterations
            )));
        }

        let mut ecc_anomaly = if eccentricity < HIGH_ECCENTRICITY {
            mean_anomaly
        } else {
            PI
        };
        let mut f = residual(ecc_anomaly, eccentricity, mean_anomaly);

        for _ in 0..self.max_iterations {
            if f.abs() < self.tolerance {
                return Ok(ecc_anomaly);
            }
            // f' >= 1 - e > 0, so the step is always defined
            let derivative = 1.0 - eccentricity * ecc_anomaly.cos();
            ecc_anomaly -= f / derivative;
            f = residual(ecc_anomaly, eccentricity, mean_anomaly);
        }

        if f.abs() < self.tolerance {
            return Ok(ecc_anomaly);
        }
        Err(KeplerError::NoConvergence {
            mean_anomaly,
            eccentricity,
            iterations: self.max_iterations,
            residual: f,
        })
    }
}

/// Solve Kepler's equation with the default solver settings.
pub fn solve(mean_anomaly: f64, eccentricity: f64) -> Result<f64, KeplerError> {
    KeplerSolver::default().solve(mean_anomaly, eccentricity)
}

/// Residual of Kepler's equation, `E − e·sin E − M`.
#[inline]
pub fn residual(ecc_anomaly: f64, eccentricity: f64, mean_anomaly: f64) -> f64 {
    ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly
}

/// True anomaly from eccentric anomaly via the half-angle form, stable near `ν = π`.
#[inline]
pub fn true_anomaly(ecc_anomaly: f64, eccentricity: f64) -> f64 {
    let half = 0.5 * ecc_anomaly;
    2.0 * f64::atan2(
        (1.0 + eccentricity).sqrt() * half.sin(),
        (1.0 - eccentricity).sqrt() * half.cos(),
    )
}
