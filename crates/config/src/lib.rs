//! Configuration models and loaders for the Solar Round Trip calculator.
//!
//! Every field has a default matching the Earth–Mars scenario, so an empty file (or no
//! file at all) yields a runnable mission.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use solar_core::constants::{FULL_TURN_DEG, GM_SUN_AU3_YR2};
use solar_orbits::circular_period;
use thiserror::Error;

/// Top-level mission parameters.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(from = "ParameterFile")]
pub struct MissionParameters {
    pub gravitational_parameter_au3_yr2: f64,
    pub origin: BodyConfig,
    pub destination: BodyConfig,
    pub window: WindowConfig,
    pub solver: SolverConfig,
    pub sampling: SamplingConfig,
}

impl Default for MissionParameters {
    fn default() -> Self {
        Self {
            gravitational_parameter_au3_yr2: GM_SUN_AU3_YR2,
            origin: BodyConfig::earth(),
            destination: BodyConfig::mars(),
            window: WindowConfig::default(),
            solver: SolverConfig::default(),
            sampling: SamplingConfig::default(),
        }
    }
}

/// Parameter file as written on disk. Body tables override any subset of the default
/// Earth (origin) and Mars (destination) fields.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ParameterFile {
    gravitational_parameter_au3_yr2: Option<f64>,
    origin: BodyOverrides,
    destination: BodyOverrides,
    window: WindowConfig,
    solver: SolverConfig,
    sampling: SamplingConfig,
}

impl From<ParameterFile> for MissionParameters {
    fn from(file: ParameterFile) -> Self {
        Self {
            gravitational_parameter_au3_yr2: file
                .gravitational_parameter_au3_yr2
                .unwrap_or(GM_SUN_AU3_YR2),
            origin: file.origin.apply(BodyConfig::earth()),
            destination: file.destination.apply(BodyConfig::mars()),
            window: file.window,
            solver: file.solver,
            sampling: file.sampling,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BodyOverrides {
    name: Option<String>,
    radius_au: Option<f64>,
    angular_velocity_deg_per_year: Option<f64>,
    initial_phase_deg: Option<f64>,
}

impl BodyOverrides {
    /// Overlay the given fields onto `base`. A new radius without an explicit angular
    /// velocity drops the base mean motion so it is re-derived for the new orbit.
    fn apply(self, base: BodyConfig) -> BodyConfig {
        let angular_velocity_deg_per_year =
            match (self.angular_velocity_deg_per_year, self.radius_au) {
                (Some(omega), _) => Some(omega),
                (None, Some(_)) => None,
                (None, None) => base.angular_velocity_deg_per_year,
            };
        BodyConfig {
            name: self.name.unwrap_or(base.name),
            radius_au: self.radius_au.unwrap_or(base.radius_au),
            angular_velocity_deg_per_year,
            initial_phase_deg: self.initial_phase_deg.unwrap_or(base.initial_phase_deg),
        }
    }
}

/// A body on a circular orbit.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub radius_au: f64,
    /// Mean motion in degrees per year; derived from Kepler's third law when `None`.
    pub angular_velocity_deg_per_year: Option<f64>,
    pub initial_phase_deg: f64,
}

impl BodyConfig {
    pub fn earth() -> Self {
        Self {
            name: "Earth".to_string(),
            radius_au: 1.0,
            angular_velocity_deg_per_year: Some(360.0),
            initial_phase_deg: 0.0,
        }
    }

    pub fn mars() -> Self {
        Self {
            name: "Mars".to_string(),
            radius_au: 1.524,
            angular_velocity_deg_per_year: None,
            initial_phase_deg: 44.4,
        }
    }

    /// Angular velocity in degrees per year, falling back to the circular-orbit mean motion
    /// for the given GM.
    pub fn angular_velocity(&self, mu_au3_yr2: f64) -> f64 {
        self.angular_velocity_deg_per_year
            .unwrap_or_else(|| FULL_TURN_DEG / circular_period(self.radius_au, mu_au3_yr2))
    }
}

/// Launch-window grid search tunables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Latest departure time considered (years after launch).
    pub horizon_years: f64,
    pub step_years: f64,
    pub tolerance_deg: f64,
    /// Wait at the destination used when no window is found. Absent means the search
    /// failure is reported instead.
    pub fallback_wait_years: Option<f64>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            horizon_years: 10.0,
            step_years: 1e-4,
            tolerance_deg: 0.1,
            fallback_wait_years: None,
        }
    }
}

/// Kepler solver tunables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 50,
        }
    }
}

/// Frame sampling for rendering and export.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SamplingConfig {
    pub frames: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self { frames: 200 }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl MissionParameters {
    /// Check physical and numerical sanity of every parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("gravitational_parameter_au3_yr2", self.gravitational_parameter_au3_yr2)?;
        for (label, body) in [("origin", &self.origin), ("destination", &self.destination)] {
            positive(&format!("{label}.radius_au"), body.radius_au)?;
            finite(&format!("{label}.initial_phase_deg"), body.initial_phase_deg)?;
            if let Some(omega) = body.angular_velocity_deg_per_year {
                finite(&format!("{label}.angular_velocity_deg_per_year"), omega)?;
            }
        }
        if self.origin.radius_au == self.destination.radius_au {
            return Err(ConfigError::Invalid(
                "origin and destination radii must differ".to_string(),
            ));
        }

        finite("window.horizon_years", self.window.horizon_years)?;
        positive("window.step_years", self.window.step_years)?;
        positive("window.tolerance_deg", self.window.tolerance_deg)?;
        if let Some(wait) = self.window.fallback_wait_years {
            if !wait.is_finite() || wait < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "window.fallback_wait_years must be non-negative, got {wait}"
                )));
            }
        }

        positive("solver.tolerance", self.solver.tolerance)?;
        if self.solver.max_iterations == 0 {
            return Err(ConfigError::Invalid(
                "solver.max_iterations must be at least 1".to_string(),
            ));
        }
        if self.sampling.frames < 2 {
            return Err(ConfigError::Invalid(format!(
                "sampling.frames must be at least 2, got {}",
                self.sampling.frames
            )));
        }
        Ok(())
    }
}

fn finite(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be finite, got {value}")))
    }
}

fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

/// Load and validate mission parameters from a TOML or YAML file (chosen by extension).
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<MissionParameters, ConfigError> {
    let path = path.as_ref();
    let params: MissionParameters = if path.extension().map(|ext| ext == "toml").unwrap_or(false)
    {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    params.validate()?;
    Ok(params)
}

/// Load parameters from `path` when given, otherwise fall back to the defaults.
pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<MissionParameters, ConfigError> {
    match path {
        Some(path) => load_parameters(path),
        None => Ok(MissionParameters::default()),
    }
}
