use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use solar_round_trip::config::{MissionParameters, load_or_default};
use solar_round_trip::transfer::parameters::bodies;
use solar_round_trip::transfer::phase_matched_destination;

/// Mission parameter source and per-run overrides shared by the binaries.
#[derive(Args, Debug, Clone)]
pub struct ParameterArgs {
    /// Mission parameter file (TOML or YAML); built-in Earth–Mars defaults when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Destination phase angle at launch, in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub destination_phase: Option<f64>,

    /// Place the destination at the Hohmann lead angle so the outbound leg meets it exactly
    #[arg(long, default_value_t = false, conflicts_with = "destination_phase")]
    pub phase_matched: bool,

    /// Launch-window grid step in years
    #[arg(long)]
    pub step: Option<f64>,

    /// Launch-window alignment tolerance in degrees
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Latest departure time searched, in years after launch
    #[arg(long)]
    pub horizon: Option<f64>,

    /// Depart this many years after arrival if no launch window is found
    #[arg(long)]
    pub fallback_wait: Option<f64>,
}

impl ParameterArgs {
    /// Load the configured parameters and apply command-line overrides.
    pub fn resolve(&self) -> anyhow::Result<MissionParameters> {
        let mut params = load_or_default(self.config.as_ref()).with_context(|| match &self.config
        {
            Some(path) => format!("failed to load mission parameters from {}", path.display()),
            None => "failed to build default mission parameters".to_string(),
        })?;

        if let Some(phase) = self.destination_phase {
            params.destination.initial_phase_deg = phase;
        }
        if let Some(step) = self.step {
            params.window.step_years = step;
        }
        if let Some(tolerance) = self.tolerance {
            params.window.tolerance_deg = tolerance;
        }
        if let Some(horizon) = self.horizon {
            params.window.horizon_years = horizon;
        }
        if let Some(wait) = self.fallback_wait {
            params.window.fallback_wait_years = Some(wait);
        }
        params.validate()?;

        if self.phase_matched {
            let (origin, destination) = bodies(&params);
            let matched = phase_matched_destination(
                &origin,
                &destination,
                params.gravitational_parameter_au3_yr2,
            )?;
            tracing::info!(
                phase_deg = matched.initial_phase_deg,
                "destination placed at the Hohmann lead angle"
            );
            params.destination.initial_phase_deg = matched.initial_phase_deg;
        }

        Ok(params)
    }
}
