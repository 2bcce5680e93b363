//! Bridges a built timeline to the export formats.

use std::io::{self, Write};

use chrono::NaiveDate;
use solar_config::{BodyConfig, MissionParameters};
use solar_core::time::years_to_days;
use solar_core::units::au_to_km;
use solar_export::summary::{BodySummary, CalendarSummary, MissionSummary, TransferSummary};
use solar_export::trajectory;
use solar_transfer::{DepartureSource, MissionTimeline, OrbitalBody, TimelineError};
use thiserror::Error;
use tracing::debug;

use crate::calendar::{self, CalendarError};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Timeline(#[from] TimelineError),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

fn body_summary(config: &BodyConfig, body: &OrbitalBody) -> BodySummary {
    BodySummary {
        name: config.name.clone(),
        radius_au: body.radius_au,
        angular_velocity_deg_per_year: body.angular_velocity_deg,
        initial_phase_deg: body.initial_phase_deg,
    }
}

/// Summarise the timeline for JSON export, with calendar dates when `launch` is given.
pub fn mission_summary(
    params: &MissionParameters,
    timeline: &MissionTimeline,
    launch: Option<NaiveDate>,
) -> Result<MissionSummary, CalendarError> {
    let times = timeline.key_times();
    let geometry = timeline.outbound_geometry();

    let calendar = match launch {
        Some(launch) => Some(CalendarSummary {
            launch: calendar::format_offset(launch, 0.0)?,
            arrival: calendar::format_offset(launch, times.t_arrival)?,
            departure: calendar::format_offset(launch, times.t_departure)?,
            return_home: calendar::format_offset(launch, times.t_return)?,
        }),
        None => None,
    };

    let (departure_source, fallback_wait_years) = match timeline.departure_source() {
        DepartureSource::Searched => ("searched", None),
        DepartureSource::Fallback { wait_years } => ("fallback", Some(wait_years)),
    };

    Ok(MissionSummary {
        origin: body_summary(&params.origin, timeline.origin()),
        destination: body_summary(&params.destination, timeline.destination()),
        transfer: TransferSummary {
            semi_major_axis_au: geometry.semi_major_axis_au,
            semi_major_axis_km: au_to_km(geometry.semi_major_axis_au),
            eccentricity: geometry.eccentricity,
            period_years: geometry.period_years,
            time_of_flight_years: geometry.time_of_flight_years,
            time_of_flight_days: years_to_days(geometry.time_of_flight_years),
            outbound_leg: timeline.outbound_arc().leg().as_str().to_string(),
            outbound_orientation_deg: timeline.outbound_arc().orientation_deg(),
            return_leg: timeline.return_arc().leg().as_str().to_string(),
            return_orientation_deg: timeline.return_arc().orientation_deg(),
        },
        t_arrival_years: times.t_arrival,
        t_departure_years: times.t_departure,
        t_return_years: times.t_return,
        waiting_years: timeline.waiting_duration(),
        departure_source: departure_source.to_string(),
        fallback_wait_years,
        calendar,
    })
}

/// Sample `frames` evenly spaced times over the mission and write them as trajectory CSV.
/// Returns the number of rows written.
pub fn write_trajectory(
    writer: &mut dyn Write,
    timeline: &MissionTimeline,
    frames: usize,
) -> Result<usize, ReportError> {
    trajectory::write_header(writer)?;
    let mut rows = 0;
    for sample in timeline.sample(frames) {
        let sample = sample?;
        trajectory::Record {
            frame: sample.index,
            t_years: sample.t,
            t_days: years_to_days(sample.t),
            phase: sample.phase.as_str(),
            spacecraft_au: sample.spacecraft,
            origin_au: sample.origin,
            destination_au: sample.destination,
        }
        .write_to(writer)?;
        rows += 1;
    }
    writer.flush()?;
    debug!(rows, t_return = timeline.t_return(), "trajectory rows written");
    Ok(rows)
}
