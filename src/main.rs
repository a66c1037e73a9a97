use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use polysweep::config::FileConfig;
use polysweep::domain::{ActionType, GeoPoint, Polygon};
use polysweep::export::{DEFAULT_MISSION_FILENAME, write_mission_xml};
use polysweep::geometry::{BoundingBox, SweepConfig};
use polysweep::mission::{Session, connections_of, path_length_m};

/// Generate boustrophedon survey missions from a polygon area
///
/// Examples:
///   # Sweep a polygon at the default 50m spacing
///   polysweep -p area.json
///
///   # Tighter spacing, higher altitude, custom output
///   polysweep -p area.json -s 30 -a 12 -o survey.xml
///
///   # Pin the exported map origin and land at the final waypoint
///   polysweep -p area.json --center-lat 41.8721 --center-lon -87.7878 --land-at-end
///
///   # Append manually placed waypoints after the sweep
///   polysweep -p area.json --extra-point 41.8725,-87.7870
///
///   # Use a config file
///   polysweep --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "polysweep")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches polysweep.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Polygon JSON file: {"vertices": [{"lat": .., "lon": ..}, ...]}
    #[arg(short = 'p', long)]
    polygon: Option<PathBuf>,

    /// Sweep spacing between passes in meters
    #[arg(short = 's', long, default_value = "50.0")]
    spacing: f64,

    /// Default waypoint altitude in meters
    #[arg(short = 'a', long, default_value = "3.0")]
    altitude: f64,

    /// Mission origin latitude (defaults to the polygon's bounding-box center)
    #[arg(long, requires = "center_lon")]
    center_lat: Option<f64>,

    /// Mission origin longitude
    #[arg(long, requires = "center_lat", allow_hyphen_values = true)]
    center_lon: Option<f64>,

    /// Map zoom level written to the mission header
    #[arg(short = 'z', long, default_value = "18")]
    zoom: u32,

    /// Output mission XML path (defaults to mission.xml)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Manually placed waypoint appended after the sweep, as "lat,lon" (repeatable)
    #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
    extra_point: Vec<String>,

    /// Retype the final waypoint as a landing item
    #[arg(long)]
    land_at_end: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let polygon_path = args
        .polygon
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.polygon.clone()));
    let spacing = if (args.spacing - 50.0).abs() > 1e-9 {
        args.spacing
    } else {
        file_config.as_ref().map(|c| c.spacing).unwrap_or(50.0)
    };
    let altitude = if (args.altitude - 3.0).abs() > 1e-9 {
        args.altitude
    } else {
        file_config.as_ref().map(|c| c.altitude).unwrap_or(3.0)
    };
    let zoom = if args.zoom != 18 {
        args.zoom
    } else {
        file_config.as_ref().map(|c| c.zoom).unwrap_or(18)
    };
    let center_lat = args
        .center_lat
        .or_else(|| file_config.as_ref().and_then(|c| c.center_lat));
    let center_lon = args
        .center_lon
        .or_else(|| file_config.as_ref().and_then(|c| c.center_lon));
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()));
    let land_at_end =
        args.land_at_end || file_config.as_ref().map(|c| c.land_at_end).unwrap_or(false);
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    let Some(polygon_path) = polygon_path else {
        bail!("Must provide a polygon file via --polygon/-p or a config file");
    };
    if spacing <= 0.0 {
        bail!("--spacing must be greater than zero, got {}", spacing);
    }
    if altitude < 0.0 {
        bail!("--altitude must not be negative, got {}", altitude);
    }

    let extra_points: Vec<GeoPoint> = args
        .extra_point
        .iter()
        .map(|raw| parse_lat_lon(raw))
        .collect::<Result<_>>()?;

    println!("polysweep - Survey Mission Generator");
    println!("====================================");
    println!();

    let output_path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_MISSION_FILENAME));

    if verbose {
        println!("Configuration:");
        println!("  Polygon: {}", polygon_path.display());
        println!("  Spacing: {}m", spacing);
        println!("  Altitude: {}m", altitude);
        if let (Some(lat), Some(lon)) = (center_lat, center_lon) {
            println!("  Origin: ({:.4}, {:.4})", lat, lon);
        }
        println!("  Zoom: {}", zoom);
        println!("  Extra points: {}", extra_points.len());
        println!("  Land at end: {}", land_at_end);
        println!("  Output: {}", output_path.display());
        println!();
    }

    let spinner = create_spinner("Loading polygon...");
    let contents = std::fs::read_to_string(&polygon_path)
        .with_context(|| format!("Failed to read polygon file: {}", polygon_path.display()))?;
    let polygon: Polygon =
        serde_json::from_str(&contents).context("Failed to parse polygon JSON")?;
    if !polygon.is_valid() {
        bail!(
            "Polygon needs at least 3 vertices, got {}",
            polygon.vertices.len()
        );
    }
    spinner.finish_with_message(format!("Loaded polygon with {} vertices", polygon.vertices.len()));

    let center = if let (Some(lat), Some(lon)) = (center_lat, center_lon) {
        GeoPoint::new(lat, lon)
    } else {
        BoundingBox::of_polygon(&polygon)
            .context("Failed to compute polygon bounding box")?
            .center()
    };

    let config = SweepConfig::new(spacing, altitude);
    let mut session = Session::new(center, zoom);
    session.set_polygon(polygon);

    let spinner = create_spinner("Generating sweep waypoints...");
    let start = Instant::now();
    let count = session
        .generate(&config)
        .context("Failed to generate sweep")?;
    spinner.finish_with_message(format!(
        "Generated {} waypoints [{:.1}s]",
        count,
        start.elapsed().as_secs_f32()
    ));

    if count == 0 {
        println!("No waypoints generated - the polygon is smaller than the sweep spacing.");
        println!("Try a smaller --spacing or a larger polygon.");
    }

    for point in &extra_points {
        let id = session.append_manual(*point, altitude);
        if verbose {
            let seq = session.mission().and_then(|m| m.waypoint(id)).map(|w| w.seq);
            println!(
                "  Appended manual waypoint #{} at ({:.6}, {:.6})",
                seq.unwrap_or(0),
                point.lat,
                point.lon
            );
        }
    }

    if land_at_end {
        match session.last_waypoint_id() {
            Some(id) => {
                session.set_waypoint_properties(id, ActionType::Landing, altitude, 0.0);
                if verbose {
                    println!("  Final waypoint retyped as landing");
                }
            }
            None => println!("Nothing to land on - mission is empty."),
        }
    }

    let mission = session
        .mission()
        .context("No mission available to export")?;
    let segments = connections_of(mission).len();
    println!(
        "Mission: {} waypoints, {} path segments, {:.0}m total path",
        mission.len(),
        segments,
        path_length_m(mission)
    );

    let spinner = create_spinner("Writing mission XML...");
    write_mission_xml(&output_path, mission).context("Failed to write mission XML")?;
    spinner.finish_with_message(format!("Wrote {}", output_path.display()));

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

/// Parse a "lat,lon" pair from the command line.
fn parse_lat_lon(raw: &str) -> Result<GeoPoint> {
    let (lat, lon) = raw
        .split_once(',')
        .with_context(|| format!("Expected \"lat,lon\", got: {}", raw))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("Invalid latitude in: {}", raw))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .with_context(|| format!("Invalid longitude in: {}", raw))?;
    Ok(GeoPoint::new(lat, lon))
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
