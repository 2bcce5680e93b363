//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod trajectory {
    use std::io::{self, Write};

    /// Column names, in the order `Record::write_to` emits them.
    pub const COLUMNS: [&str; 12] = [
        "frame",
        "t_years",
        "t_days",
        "phase",
        "sc_x_au",
        "sc_y_au",
        "sc_z_au",
        "origin_x_au",
        "origin_y_au",
        "destination_x_au",
        "destination_y_au",
        "sc_radius_au",
    ];

    /// Write the trajectory CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", COLUMNS.join(","))
    }

    /// One sampled frame of the mission.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub frame: usize,
        pub t_years: f64,
        pub t_days: f64,
        pub phase: &'a str,
        pub spacecraft_au: [f64; 3],
        pub origin_au: [f64; 3],
        pub destination_au: [f64; 3],
    }

    impl Record<'_> {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            let [x, y, z] = self.spacecraft_au;
            writeln!(
                writer,
                "{},{:.9},{:.4},{},{:.9},{:.9},{:.9},{:.9},{:.9},{:.9},{:.9},{:.9}",
                self.frame,
                self.t_years,
                self.t_days,
                self.phase,
                x,
                y,
                z,
                self.origin_au[0],
                self.origin_au[1],
                self.destination_au[0],
                self.destination_au[1],
                (x * x + y * y + z * z).sqrt(),
            )
        }
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};
    use std::path::Path;

    /// Circular-orbit body as it was used for the run.
    #[derive(Debug, Clone, Serialize)]
    pub struct BodySummary {
        pub name: String,
        pub radius_au: f64,
        pub angular_velocity_deg_per_year: f64,
        pub initial_phase_deg: f64,
    }

    /// Transfer ellipse shared by both legs.
    #[derive(Debug, Clone, Serialize)]
    pub struct TransferSummary {
        pub semi_major_axis_au: f64,
        pub semi_major_axis_km: f64,
        pub eccentricity: f64,
        pub period_years: f64,
        pub time_of_flight_years: f64,
        pub time_of_flight_days: f64,
        /// `raising` or `lowering`.
        pub outbound_leg: String,
        pub outbound_orientation_deg: f64,
        pub return_leg: String,
        pub return_orientation_deg: f64,
    }

    /// Calendar rendering of the key times when a launch date was supplied.
    #[derive(Debug, Clone, Serialize)]
    pub struct CalendarSummary {
        pub launch: String,
        pub arrival: String,
        pub departure: String,
        pub return_home: String,
    }

    /// Top-level JSON document describing a planned round trip.
    #[derive(Debug, Clone, Serialize)]
    pub struct MissionSummary {
        pub origin: BodySummary,
        pub destination: BodySummary,
        pub transfer: TransferSummary,
        pub t_arrival_years: f64,
        pub t_departure_years: f64,
        pub t_return_years: f64,
        pub waiting_years: f64,
        /// `searched` or `fallback`.
        pub departure_source: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub fallback_wait_years: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub calendar: Option<CalendarSummary>,
    }

    /// Pretty-print the summary to `writer`.
    pub fn write_to(writer: &mut dyn Write, summary: &MissionSummary) -> io::Result<()> {
        to_writer_pretty(&mut *writer, summary)?;
        writeln!(writer)
    }

    /// Write the summary to `path` (`-` for stdout), creating parent directories.
    pub fn write_summary(path: &Path, summary: &MissionSummary) -> io::Result<()> {
        let mut writer = super::writer_for_path(path)?;
        write_to(writer.as_mut(), summary)?;
        writer.flush()
    }
}
