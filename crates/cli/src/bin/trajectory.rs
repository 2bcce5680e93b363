use std::path::PathBuf;

use clap::Parser;
use solar_round_trip::export::writer_for_path;
use solar_round_trip::report::write_trajectory;
use solar_round_trip::transfer::parameters::build_timeline;

#[path = "common/parameters.rs"]
mod parameters;

use parameters::ParameterArgs;

/// Sample the round-trip trajectory at evenly spaced frames and export it as CSV.
#[derive(Parser, Debug)]
#[command(author, version, about = "Trajectory CSV sampler for the round-trip mission")]
struct Cli {
    #[command(flatten)]
    parameters: ParameterArgs,

    /// Number of frames over [0, t_return] (defaults to the configured sampling)
    #[arg(long)]
    frames: Option<usize>,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/trajectory.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    solar_round_trip::logging::init();
    let cli = Cli::parse();
    let params = cli.parameters.resolve()?;
    let frames = cli.frames.unwrap_or(params.sampling.frames);
    if frames < 2 {
        anyhow::bail!("at least two frames are required, got {frames}");
    }

    let timeline = build_timeline(&params)?;
    let mut writer = writer_for_path(&cli.output)?;
    let rows = write_trajectory(writer.as_mut(), &timeline, frames)?;
    tracing::info!(rows, output = %cli.output.display(), "trajectory written");

    Ok(())
}
