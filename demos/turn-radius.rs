use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use flightplan_geo::turn_table;

/// Print turn radius and turn times over a range of true airspeeds
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Cli {
    /// Bank angle in degrees
    #[arg(long, default_value_t = 15.0)]
    bank: f64,

    /// Lowest true airspeed in knots
    #[arg(long, default_value_t = 200)]
    from: u32,

    /// Highest true airspeed in knots
    #[arg(long, default_value_t = 300)]
    to: u32,

    /// Airspeed increment in knots
    #[arg(long, default_value_t = 10)]
    step: usize,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let speeds = (cli.from..=cli.to).step_by(cli.step.max(1)).map(f64::from);
    let table = turn_table(speeds, cli.bank)?;

    println!("Bank angle: {}°", cli.bank);
    println!(
        "{:>6} {:>12} {:>16} {:>16} {:>16}",
        "[kts]", "radius [nm]", "180° turn [min]", "180° turn [nm]", "270° turn [min]"
    );
    for turn in &table {
        println!(
            "{:>6.0} {:>12.2} {:>16.2} {:>16.2} {:>16.2}",
            turn.true_airspeed_kts,
            turn.radius_nmi(),
            turn.half_turn_time_s() / 60.0,
            turn.half_turn_distance_m() / 1852.0,
            turn.three_quarter_turn_time_s() / 60.0,
        );
    }

    Ok(())
}
