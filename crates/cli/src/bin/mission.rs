use std::path::PathBuf;

use clap::Parser;
use solar_round_trip::calendar;
use solar_round_trip::constants::DAYS_PER_YEAR;
use solar_round_trip::export::summary;
use solar_round_trip::report::mission_summary;
use solar_round_trip::units::au_to_km;
use solar_round_trip::transfer::DepartureSource;
use solar_round_trip::transfer::parameters::build_timeline;

#[path = "common/parameters.rs"]
mod parameters;

use parameters::ParameterArgs;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Round-trip Hohmann mission planner (arrival, launch window, return)"
)]
struct Cli {
    #[command(flatten)]
    parameters: ParameterArgs,

    /// Launch date (YYYY-MM-DD) used to print calendar dates for the key events
    #[arg(long)]
    launch_date: Option<String>,

    /// Write the JSON mission summary to this path ('-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    solar_round_trip::logging::init();
    let cli = Cli::parse();
    let params = cli.parameters.resolve()?;
    let launch = cli
        .launch_date
        .as_deref()
        .map(calendar::parse_launch_date)
        .transpose()?;

    let timeline = build_timeline(&params)?;
    let report = mission_summary(&params, &timeline, launch)?;

    if let Some(path) = &cli.json {
        summary::write_summary(path, &report)?;
        if path.as_os_str() == "-" {
            return Ok(());
        }
    }

    let times = timeline.key_times();
    let geometry = timeline.outbound_geometry();
    let origin = &params.origin.name;
    let destination = &params.destination.name;
    let date_suffix = |years: f64| -> anyhow::Result<String> {
        Ok(match launch {
            Some(launch) => format!("  [{}]", calendar::format_offset(launch, years)?),
            None => String::new(),
        })
    };

    println!("=== Round Trip Profile ===");
    println!("Route          : {origin} -> {destination} -> {origin}");
    println!(
        "Transfer orbit : a = {:.6} AU ({:.0} km), e = {:.6}, period = {:.4} yr",
        geometry.semi_major_axis_au,
        au_to_km(geometry.semi_major_axis_au),
        geometry.eccentricity,
        geometry.period_years
    );
    println!(
        "Perihelion     : {:.4} AU, aphelion = {:.4} AU",
        geometry.periapsis_radius(),
        geometry.apoapsis_radius()
    );
    println!("Launch         : t = 0.000000 yr{}", date_suffix(0.0)?);
    println!(
        "Arrival        : t = {:.6} yr ({:.1} days){}",
        times.t_arrival,
        times.t_arrival * DAYS_PER_YEAR,
        date_suffix(times.t_arrival)?
    );
    let source = match timeline.departure_source() {
        DepartureSource::Searched => "launch window".to_string(),
        DepartureSource::Fallback { wait_years } => {
            format!("FALLBACK: fixed {wait_years} yr wait, alignment not verified")
        }
    };
    println!(
        "Departure      : t = {:.6} yr ({source}){}",
        times.t_departure,
        date_suffix(times.t_departure)?
    );
    println!(
        "Return         : t = {:.6} yr ({:.1} days){}",
        times.t_return,
        times.t_return * DAYS_PER_YEAR,
        date_suffix(times.t_return)?
    );
    println!(
        "Stay at {destination:<7}: {:.6} yr ({:.1} days)",
        timeline.waiting_duration(),
        timeline.waiting_duration() * DAYS_PER_YEAR
    );
    for (label, arc) in [
        ("Outbound arc", timeline.outbound_arc()),
        ("Return arc", timeline.return_arc()),
    ] {
        println!(
            "{label:<15}: {} leg, periapsis direction {:.3} deg",
            arc.leg().as_str(),
            arc.orientation_deg()
        );
    }

    Ok(())
}
