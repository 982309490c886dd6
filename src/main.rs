use clap::Parser;
use planet_simulation::*;

/// Runs the Sun and the eight planets headless and prints the telemetry.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of ticks to simulate, one day each
    #[arg(default_value_t = DEFAULT_TICKS)]
    ticks: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let physics = PhysicsConfig::default();
    let mut simulation = SolarSystemFactory::create_solar_system(physics)?;
    let display = DisplayConfig::default();

    log::info!("{}", time_rate_label(physics.time_step()));

    let mut telemetry = Telemetry::new();
    let mut outcome = Ok(());
    for _ in 0..args.ticks {
        match simulation.step() {
            Ok(_) => telemetry.collect_data(&simulation),
            Err(e) => {
                println!("Error during simulation step: {}", e);
                outcome = Err(e);
                break;
            }
        }
    }

    telemetry.display_data();

    println!("\n--- Final Screen Positions ---");
    for body in simulation.bodies() {
        println!(
            "{} at {:.1} (radius {:.3e} px, trail {} points)",
            body.name(),
            display.body_position(body),
            display.body_radius(body),
            body.trail().len()
        );
    }

    outcome?;
    Ok(())
}
