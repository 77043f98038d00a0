use flightplan_geo::itrf_epoch_to_epsg;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <ITRF epoch> <m|deg>", args[0]);
        std::process::exit(1);
    }

    let epsg = itrf_epoch_to_epsg(&args[1], &args[2])?;
    println!("EPSG code for {} 3D CRS in '{}': {}", args[1], args[2], epsg);

    Ok(())
}
