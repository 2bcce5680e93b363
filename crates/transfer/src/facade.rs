//! Re-exported APIs for consumers of the transfer crate.

pub use crate::mission::sampler::{FrameSample, FrameSampler};
pub use crate::mission::window::{
    WindowError, WindowSearch, alignment_residual_deg, find_departure_time,
    phase_matched_destination,
};
pub use crate::mission::{
    DeparturePolicy, DepartureSource, KeyTimes, MissionPhase, MissionTimeline, PhaseKind,
    PhaseSpan, TimelineError, TimelineOptions,
};
pub use solar_impulsive::{ArcError, HohmannGeometry, TransferArc, TransferLeg};
pub use solar_orbits::{KeplerError, KeplerSolver, OrbitalBody};

pub mod parameters {
    use solar_config::{BodyConfig, MissionParameters};
    use solar_orbits::{KeplerSolver, OrbitalBody};

    use crate::mission::window::WindowSearch;
    use crate::mission::{DeparturePolicy, MissionTimeline, TimelineError, TimelineOptions};

    /// Convert a `BodyConfig` into its runtime circular-orbit body.
    pub fn body_from_config(config: &BodyConfig, mu_au3_yr2: f64) -> OrbitalBody {
        OrbitalBody::new(
            config.radius_au,
            config.angular_velocity(mu_au3_yr2),
            config.initial_phase_deg,
        )
    }

    /// Timeline construction options taken from the configuration.
    pub fn options_from_parameters(params: &MissionParameters) -> TimelineOptions {
        let policy = match params.window.fallback_wait_years {
            Some(wait_years) => DeparturePolicy::FallbackWait { wait_years },
            None => DeparturePolicy::Strict,
        };
        TimelineOptions {
            mu_au3_yr2: params.gravitational_parameter_au3_yr2,
            search: WindowSearch {
                horizon_years: params.window.horizon_years,
                step_years: params.window.step_years,
                tolerance_deg: params.window.tolerance_deg,
            },
            policy,
            solver: KeplerSolver::new(params.solver.tolerance, params.solver.max_iterations),
        }
    }

    /// Origin and destination bodies described by the configuration.
    pub fn bodies(params: &MissionParameters) -> (OrbitalBody, OrbitalBody) {
        let mu = params.gravitational_parameter_au3_yr2;
        (
            body_from_config(&params.origin, mu),
            body_from_config(&params.destination, mu),
        )
    }

    /// Build the full round-trip timeline from mission parameters.
    pub fn build_timeline(params: &MissionParameters) -> Result<MissionTimeline, TimelineError> {
        let (origin, destination) = bodies(params);
        MissionTimeline::build(origin, destination, &options_from_parameters(params))
    }
}
