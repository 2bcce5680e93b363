//! Mission timeline that sequences the outbound transfer, the stay at the destination, the
//! return transfer, and the time back home.
//!
//! The timeline is built once: both transfer arcs, the three key times, and the return-arc
//! orientation are fixed at construction. Queries never mutate it, so `position_at` is
//! idempotent and can be called in any order.

pub mod sampler;
pub mod window;

use std::fmt;
use std::ops::{Bound, RangeBounds};

use solar_core::vector::Vector3;
use solar_impulsive::{ArcError, HohmannGeometry, TransferArc};
use solar_orbits::{KeplerError, KeplerSolver, OrbitalBody, synodic_period};
use tracing::{debug, info, warn};

use self::sampler::FrameSampler;
use self::window::{WindowError, WindowSearch, find_departure_time};

/// Phase labels, in mission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Outbound,
    Waiting,
    Return,
    Idle,
}

impl PhaseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseKind::Outbound => "outbound",
            PhaseKind::Waiting => "waiting",
            PhaseKind::Return => "return",
            PhaseKind::Idle => "idle",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time interval governed by a phase. Bounds are explicit so adjacent phases never overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSpan {
    pub start: Bound<f64>,
    pub end: Bound<f64>,
}

impl PhaseSpan {
    /// `[start, end)`
    pub fn half_open(start: f64, end: f64) -> Self {
        Self {
            start: Bound::Included(start),
            end: Bound::Excluded(end),
        }
    }

    /// `[start, end]`
    pub fn closed(start: f64, end: f64) -> Self {
        Self {
            start: Bound::Included(start),
            end: Bound::Included(end),
        }
    }

    /// `(start, ∞)`
    pub fn after(start: f64) -> Self {
        Self {
            start: Bound::Excluded(start),
            end: Bound::Unbounded,
        }
    }

    pub fn contains(&self, t: f64) -> bool {
        (self.start, self.end).contains(&t)
    }

    pub fn start_time(&self) -> f64 {
        bound_value(self.start).unwrap_or(f64::NEG_INFINITY)
    }

    pub fn end_time(&self) -> f64 {
        bound_value(self.end).unwrap_or(f64::INFINITY)
    }
}

fn bound_value(bound: Bound<f64>) -> Option<f64> {
    match bound {
        Bound::Included(v) | Bound::Excluded(v) => Some(v),
        Bound::Unbounded => None,
    }
}

/// One leg of the mission and the interval it governs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MissionPhase {
    Outbound { span: PhaseSpan, arc: TransferArc },
    /// Spacecraft co-located with the destination.
    Waiting { span: PhaseSpan, body: OrbitalBody },
    Return { span: PhaseSpan, arc: TransferArc },
    /// Spacecraft co-located with the origin after returning.
    Idle { span: PhaseSpan, body: OrbitalBody },
}

impl MissionPhase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            MissionPhase::Outbound { .. } => PhaseKind::Outbound,
            MissionPhase::Waiting { .. } => PhaseKind::Waiting,
            MissionPhase::Return { .. } => PhaseKind::Return,
            MissionPhase::Idle { .. } => PhaseKind::Idle,
        }
    }

    pub fn span(&self) -> &PhaseSpan {
        match self {
            MissionPhase::Outbound { span, .. }
            | MissionPhase::Waiting { span, .. }
            | MissionPhase::Return { span, .. }
            | MissionPhase::Idle { span, .. } => span,
        }
    }

    pub fn arc(&self) -> Option<&TransferArc> {
        match self {
            MissionPhase::Outbound { arc, .. } | MissionPhase::Return { arc, .. } => Some(arc),
            MissionPhase::Waiting { .. } | MissionPhase::Idle { .. } => None,
        }
    }

    /// Spacecraft position if `t` belongs to this phase, `Ok(None)` otherwise.
    pub fn position_at(
        &self,
        t: f64,
        solver: &KeplerSolver,
    ) -> Result<Option<Vector3>, KeplerError> {
        if !self.span().contains(t) {
            return Ok(None);
        }
        match self {
            MissionPhase::Outbound { arc, .. } | MissionPhase::Return { arc, .. } => {
                arc.position_at(t, solver)
            }
            MissionPhase::Waiting { body, .. } | MissionPhase::Idle { body, .. } => {
                Ok(Some(body.position_at(t)))
            }
        }
    }
}

/// The three derived mission times, in years from launch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyTimes {
    pub t_arrival: f64,
    pub t_departure: f64,
    pub t_return: f64,
}

/// What to do when the launch-window search finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DeparturePolicy {
    /// Surface the search failure.
    #[default]
    Strict,
    /// Depart `wait_years` after arrival without an alignment guarantee.
    FallbackWait { wait_years: f64 },
}

/// How the departure time was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DepartureSource {
    Searched,
    Fallback { wait_years: f64 },
}

impl DepartureSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, DepartureSource::Fallback { .. })
    }
}

/// Construction options for a [`MissionTimeline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineOptions {
    pub mu_au3_yr2: f64,
    pub search: WindowSearch,
    pub policy: DeparturePolicy,
    pub solver: KeplerSolver,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            mu_au3_yr2: solar_core::constants::GM_SUN_AU3_YR2,
            search: WindowSearch::default(),
            policy: DeparturePolicy::Strict,
            solver: KeplerSolver::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimelineError {
    #[error("transfer arc construction failed: {0}")]
    Arc(#[from] ArcError),
    #[error("launch window search failed: {0}")]
    Window(#[from] WindowError),
    #[error("position solve failed: {0}")]
    Kepler(#[from] KeplerError),
    #[error("time {0} precedes launch at t = 0")]
    BeforeLaunch(f64),
    #[error("time must be finite, got {0}")]
    InvalidTime(f64),
    #[error("invalid departure policy: {0}")]
    InvalidPolicy(String),
    #[error("no mission phase covers t = {0}")]
    Uncovered(f64),
}

/// Immutable, ordered sequence of mission phases with a single position query.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionTimeline {
    origin: OrbitalBody,
    destination: OrbitalBody,
    solver: KeplerSolver,
    outbound: HohmannGeometry,
    inbound: HohmannGeometry,
    outbound_arc: TransferArc,
    return_arc: TransferArc,
    phases: Vec<MissionPhase>,
    key_times: KeyTimes,
    departure_source: DepartureSource,
}

impl MissionTimeline {
    /// Build the round trip `origin → destination → origin`, launching at `t = 0`.
    ///
    /// The outbound arc departs from the origin's position at `t = 0`. The return departure
    /// comes from the launch-window search (or `options.policy` when the search misses), and
    /// the return arc's orientation is taken from the destination's phase angle at that
    /// instant.
    pub fn build(
        origin: OrbitalBody,
        destination: OrbitalBody,
        options: &TimelineOptions,
    ) -> Result<Self, TimelineError> {
        let mu = options.mu_au3_yr2;
        let outbound = HohmannGeometry::between(origin.radius_au, destination.radius_au, mu)?;
        let inbound = HohmannGeometry::between(destination.radius_au, origin.radius_au, mu)?;
        debug!(
            semi_major_axis_au = outbound.semi_major_axis_au,
            eccentricity = outbound.eccentricity,
            period_years = outbound.period_years,
            synodic_period_years = synodic_period(&origin, &destination),
            "transfer ellipse derived"
        );

        let t_arrival = outbound.time_of_flight_years;
        let outbound_arc = outbound.arc_from(0.0, origin.phase_angle_deg(0.0))?;

        let (t_departure, departure_source) = match find_departure_time(
            &origin,
            &destination,
            inbound.time_of_flight_years,
            &options.search,
        ) {
            Ok(t) => (t, DepartureSource::Searched),
            Err(err @ WindowError::NoWindow { .. }) => match options.policy {
                DeparturePolicy::Strict => return Err(err.into()),
                DeparturePolicy::FallbackWait { wait_years } => {
                    if !(wait_years.is_finite() && wait_years >= 0.0) {
                        return Err(TimelineError::InvalidPolicy(format!(
                            "fallback wait must be non-negative, got {wait_years}"
                        )));
                    }
                    warn!(
                        wait_years,
                        error = %err,
                        "no launch window found; departing after the configured fallback wait"
                    );
                    (
                        t_arrival + wait_years,
                        DepartureSource::Fallback { wait_years },
                    )
                }
            },
            Err(err) => return Err(err.into()),
        };

        let return_arc = inbound.arc_from(t_departure, destination.phase_angle_deg(t_departure))?;
        let t_return = return_arc.t_end();

        let phases = vec![
            MissionPhase::Outbound {
                span: PhaseSpan::half_open(0.0, t_arrival),
                arc: outbound_arc,
            },
            MissionPhase::Waiting {
                span: PhaseSpan::half_open(t_arrival, t_departure),
                body: destination,
            },
            MissionPhase::Return {
                span: PhaseSpan::closed(t_departure, t_return),
                arc: return_arc,
            },
            MissionPhase::Idle {
                span: PhaseSpan::after(t_return),
                body: origin,
            },
        ];

        info!(
            t_arrival,
            t_departure,
            t_return,
            fallback = departure_source.is_fallback(),
            "mission timeline built"
        );

        Ok(Self {
            origin,
            destination,
            solver: options.solver,
            outbound,
            inbound,
            outbound_arc,
            return_arc,
            phases,
            key_times: KeyTimes {
                t_arrival,
                t_departure,
                t_return,
            },
            departure_source,
        })
    }

    /// Spacecraft position (AU) at time `t` (years).
    pub fn position_at(&self, t: f64) -> Result<Vector3, TimelineError> {
        self.locate(t).map(|(_, position)| position)
    }

    /// Phase label and spacecraft position at time `t`.
    pub fn locate(&self, t: f64) -> Result<(PhaseKind, Vector3), TimelineError> {
        if !t.is_finite() {
            return Err(TimelineError::InvalidTime(t));
        }
        if t < 0.0 {
            return Err(TimelineError::BeforeLaunch(t));
        }
        for phase in &self.phases {
            if let Some(position) = phase.position_at(t, &self.solver)? {
                return Ok((phase.kind(), position));
            }
        }
        Err(TimelineError::Uncovered(t))
    }

    /// Phase governing time `t`, if any.
    pub fn phase_at(&self, t: f64) -> Option<&MissionPhase> {
        self.phases.iter().find(|phase| phase.span().contains(t))
    }

    pub fn phases(&self) -> &[MissionPhase] {
        &self.phases
    }

    pub fn key_times(&self) -> KeyTimes {
        self.key_times
    }

    pub fn t_arrival(&self) -> f64 {
        self.key_times.t_arrival
    }

    pub fn t_departure(&self) -> f64 {
        self.key_times.t_departure
    }

    pub fn t_return(&self) -> f64 {
        self.key_times.t_return
    }

    pub fn departure_source(&self) -> DepartureSource {
        self.departure_source
    }

    /// Time spent at the destination.
    pub fn waiting_duration(&self) -> f64 {
        self.key_times.t_departure - self.key_times.t_arrival
    }

    /// Launch to return.
    pub fn mission_duration(&self) -> f64 {
        self.key_times.t_return
    }

    pub fn origin(&self) -> &OrbitalBody {
        &self.origin
    }

    pub fn destination(&self) -> &OrbitalBody {
        &self.destination
    }

    pub fn solver(&self) -> &KeplerSolver {
        &self.solver
    }

    pub fn outbound_geometry(&self) -> &HohmannGeometry {
        &self.outbound
    }

    pub fn inbound_geometry(&self) -> &HohmannGeometry {
        &self.inbound
    }

    pub fn outbound_arc(&self) -> &TransferArc {
        &self.outbound_arc
    }

    /// Return arc; its orientation was fixed from the destination's phase at departure.
    pub fn return_arc(&self) -> &TransferArc {
        &self.return_arc
    }

    pub fn origin_position_at(&self, t: f64) -> Vector3 {
        self.origin.position_at(t)
    }

    pub fn destination_position_at(&self, t: f64) -> Vector3 {
        self.destination.position_at(t)
    }

    /// Pull-based sampler over `frames` evenly spaced times in `[0, t_return]`.
    pub fn sample(&self, frames: usize) -> FrameSampler<'_> {
        FrameSampler::new(self, 0.0, self.key_times.t_return, frames)
    }
}
