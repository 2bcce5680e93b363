use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;
use std::f64::consts::TAU;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render the round-trip trajectory CSV as a top-down orbit plot"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/trajectory.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 900)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
    /// Skip captions, axis labels, and legend (no font lookup)
    #[arg(long, default_value_t = false)]
    bare: bool,
}

#[derive(Debug, Clone)]
struct Frame {
    phase: String,
    spacecraft: (f64, f64),
    origin: (f64, f64),
    destination: (f64, f64),
}

const OUTBOUND_COLOR: RGBColor = RGBColor(220, 90, 30);
const WAITING_COLOR: RGBColor = RGBColor(150, 60, 160);
const RETURN_COLOR: RGBColor = RGBColor(30, 140, 70);
const IDLE_COLOR: RGBColor = RGBColor(120, 120, 120);
const ORIGIN_COLOR: RGBColor = RGBColor(40, 90, 200);
const DESTINATION_COLOR: RGBColor = RGBColor(190, 50, 40);

fn main() -> anyhow::Result<()> {
    solar_round_trip::logging::init();
    let cli = Cli::parse();
    let (frames, skipped) = read_frames(&cli.input)?;
    if skipped > 0 {
        tracing::warn!(
            skipped,
            kept = frames.len(),
            input = %cli.input,
            "skipped CSV rows with unusable coordinates"
        );
    }
    let (first, last) = match (frames.first(), frames.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(anyhow::anyhow!("No frames in the provided CSV")),
    };

    let origin_radius = radius(first.origin);
    let destination_radius = radius(first.destination);
    let reach = frames
        .iter()
        .map(|f| radius(f.spacecraft))
        .fold(origin_radius.max(destination_radius), f64::max);
    if !reach.is_finite() || reach <= 0.0 {
        return Err(anyhow::anyhow!("Trajectory CSV has no usable positions"));
    }
    let extent = reach * 1.15;

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if !cli.bare {
        let caption_font = FontDesc::new(select_font_family(), 24.0, FontStyle::Bold);
        builder
            .caption("Round-trip Hohmann trajectory", caption_font)
            .x_label_area_size(50)
            .y_label_area_size(60);
    }
    let mut chart = builder.build_cartesian_2d(-extent..extent, -extent..extent)?;

    if !cli.bare {
        let label_font = FontDesc::new(select_font_family(), 16.0, FontStyle::Normal);
        chart
            .configure_mesh()
            .x_desc("x (AU)")
            .y_desc("y (AU)")
            .label_style(label_font)
            .x_labels(7)
            .y_labels(7)
            .x_label_formatter(&|v| format!("{v:.1}"))
            .y_label_formatter(&|v| format!("{v:.1}"))
            .draw()?;
    }

    chart.draw_series(std::iter::once(PathElement::new(
        circle_points(origin_radius),
        ShapeStyle::from(&ORIGIN_COLOR.mix(0.4)).stroke_width(1),
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        circle_points(destination_radius),
        ShapeStyle::from(&DESTINATION_COLOR.mix(0.4)).stroke_width(1),
    )))?;
    chart.draw_series(std::iter::once(Circle::new(
        (0.0, 0.0),
        8,
        RGBColor(240, 190, 20).filled(),
    )))?;

    for phase in ["outbound", "waiting", "return", "idle"] {
        let color = phase_color(phase);
        let points: Vec<(f64, f64)> = frames
            .iter()
            .filter(|f| f.phase == phase)
            .map(|f| f.spacecraft)
            .collect();
        if points.is_empty() {
            continue;
        }
        let series = chart.draw_series(std::iter::once(PathElement::new(
            points,
            ShapeStyle::from(&color).stroke_width(2),
        )))?;
        if !cli.bare {
            series
                .label(phase)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
        }
    }

    chart.draw_series([
        Circle::new(last.origin, 5, ORIGIN_COLOR.filled()),
        Circle::new(last.destination, 5, DESTINATION_COLOR.filled()),
        Circle::new(last.spacecraft, 3, BLACK.filled()),
    ])?;

    if !cli.bare {
        let label_font = FontDesc::new(select_font_family(), 14.0, FontStyle::Normal);
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .label_font(label_font)
            .position(SeriesLabelPosition::UpperRight)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

/// Frames with finite coordinates, plus the number of rows that had to be skipped.
fn read_frames(path: &str) -> anyhow::Result<(Vec<Frame>, usize)> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow::anyhow!("CSV missing '{name}' column"))
    };
    let phase_idx = column("phase")?;
    let sc_x = column("sc_x_au")?;
    let sc_y = column("sc_y_au")?;
    let origin_x = column("origin_x_au")?;
    let origin_y = column("origin_y_au")?;
    let destination_x = column("destination_x_au")?;
    let destination_y = column("destination_y_au")?;

    let mut frames = Vec::new();
    let mut skipped = 0;
    for rec in rdr.records() {
        let r = rec?;
        let value = |idx: usize| -> f64 { r.get(idx).unwrap_or("").parse().unwrap_or(f64::NAN) };
        let frame = Frame {
            phase: r.get(phase_idx).unwrap_or("").to_ascii_lowercase(),
            spacecraft: (value(sc_x), value(sc_y)),
            origin: (value(origin_x), value(origin_y)),
            destination: (value(destination_x), value(destination_y)),
        };
        let finite = [frame.spacecraft, frame.origin, frame.destination]
            .iter()
            .all(|(x, y)| x.is_finite() && y.is_finite());
        if finite {
            frames.push(frame);
        } else {
            skipped += 1;
        }
    }
    Ok((frames, skipped))
}

fn radius((x, y): (f64, f64)) -> f64 {
    x.hypot(y)
}

fn circle_points(radius: f64) -> Vec<(f64, f64)> {
    (0..=360)
        .map(|i| {
            let angle = TAU * i as f64 / 360.0;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

fn phase_color(phase: &str) -> RGBColor {
    match phase {
        "outbound" => OUTBOUND_COLOR,
        "waiting" => WAITING_COLOR,
        "return" => RETURN_COLOR,
        _ => IDLE_COLOR,
    }
}
