use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use flightplan_geo::{GeoPoint, build_range_circle};
use std::fs;
use std::path::PathBuf;

/// Write an out-and-back range circle around an airfield as GeoJSON
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Cli {
    /// Airfield latitude in degrees
    #[arg(allow_negative_numbers = true)]
    lat: f64,

    /// Airfield longitude in degrees
    #[arg(allow_negative_numbers = true)]
    lon: f64,

    /// Airfield identifier, e.g. PAYA
    location: String,

    /// Platform name, e.g. DHC-6
    platform: String,

    /// Out-and-back range of the platform
    max_range: f64,

    /// Range unit: nmi or km
    #[arg(default_value = "km")]
    unit: String,

    /// Output directory
    #[arg(long, short, default_value = ".")]
    output_dir: PathBuf,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let origin = GeoPoint::lat_lon(cli.lat, cli.lon);
    let (circle, name) =
        build_range_circle(origin, &cli.location, &cli.platform, cli.max_range, &cli.unit)?;

    let path = cli.output_dir.join(name.with_extension("geojson"));
    let json = serde_json::to_string_pretty(&circle.to_geojson_feature_collection())?;
    fs::write(&path, json)?;

    log::info!("wrote {}", path.display());

    println!("\n\tAircraft  : {}", circle.platform);
    println!("\tRange [{}]: {:.0}", circle.range_unit, circle.max_range);
    println!("\tRadius    : {:.1} nmi / {:.1} km", circle.range_nmi, circle.range_km);
    println!("\tSaved file: {}", path.display());

    Ok(())
}
