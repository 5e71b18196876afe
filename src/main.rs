//! Fleet catalog CLI
//!
//! Builds a small fleet, lists it, sorts it by range and filters it by fuel
//! consumption.

use airfleet::{
    demo::{self, ConfiguredDemo, FuelWindow, PresetDemo},
    factory, report, shared, AircraftSpecs,
};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "airfleet")]
#[command(about = "In-memory airline fleet catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo with explicitly configured aircraft
    Demo {
        /// Lower bound of the fuel filter (inclusive)
        #[arg(long, default_value = "25")]
        min_fuel: f64,

        /// Upper bound of the fuel filter (inclusive)
        #[arg(long, default_value = "40")]
        max_fuel: f64,
    },

    /// Run the demo with preset aircraft in per-kind counts
    Preset {
        /// Number of passenger aircraft
        #[arg(long, default_value = "3", allow_negative_numbers = true)]
        passenger: i64,

        /// Number of cargo aircraft
        #[arg(long, default_value = "2", allow_negative_numbers = true)]
        cargo: i64,

        /// Number of private aircraft
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        private: i64,

        /// Lower bound of the fuel filter (inclusive)
        #[arg(long, default_value = "6")]
        min_fuel: f64,

        /// Upper bound of the fuel filter (inclusive)
        #[arg(long, default_value = "10")]
        max_fuel: f64,

        /// Also publish the built fleet to the process-wide shared fleet
        #[arg(long)]
        shared: bool,
    },

    /// Create and print a single aircraft
    Create {
        /// Aircraft kind (passenger, cargo, private; any case)
        kind: String,

        /// Capacity (seats or kg); requires --range and --fuel
        #[arg(long, requires_all = ["range", "fuel"])]
        capacity: Option<i64>,

        /// Range in km
        #[arg(long, requires_all = ["capacity", "fuel"])]
        range: Option<f64>,

        /// Fuel consumption per 100 km
        #[arg(long, requires_all = ["capacity", "range"])]
        fuel: Option<f64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Demo {
        min_fuel: 25.0,
        max_fuel: 40.0,
    }) {
        Commands::Demo { min_fuel, max_fuel } => {
            ConfiguredDemo::default()
                .with_fuel_window(FuelWindow::new(min_fuel, max_fuel))
                .run(&mut out)?;
        }

        Commands::Preset {
            passenger,
            cargo,
            private,
            min_fuel,
            max_fuel,
            shared,
        } => {
            let preset = PresetDemo {
                passenger,
                cargo,
                private,
                fuel_window: FuelWindow::new(min_fuel, max_fuel),
            };

            if shared {
                run_shared(&preset, &mut out)?;
            } else {
                preset.run(&mut out)?;
            }
        }

        Commands::Create {
            kind,
            capacity,
            range,
            fuel,
        } => {
            let specs = match (capacity, range, fuel) {
                (Some(capacity), Some(range), Some(fuel)) => {
                    Some(AircraftSpecs::new(capacity, range, fuel))
                }
                _ => None,
            };

            let aircraft = factory::create(&kind, specs)?;
            writeln!(out, "{}", aircraft)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Publish the preset fleet to the shared instance and run the demo steps on
/// a snapshot of it.
fn run_shared<W: Write>(
    preset: &PresetDemo,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let total = shared::publish(preset.builder().build());
    tracing::info!("Shared fleet holds {} aircraft", total);

    let snapshot = shared::fleet().lock().clone();
    let outcome = demo::run_steps(snapshot, preset.fuel_window, out)?;

    // Keep the shared instance in the sorted order the demo produced.
    *shared::fleet().lock() = outcome.fleet;

    report::write_total_capacity(out, shared::fleet().lock().total_capacity())?;
    Ok(())
}
