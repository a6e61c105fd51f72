use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use dvrsim::config::{self, Scenario};
use dvrsim::report::{self, TableReport};
use dvrsim::simulation::Simulation;

/// Distance Vector Routing protocol simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a scenario YAML file; the built-in example topology is used
    /// when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Override the number of rounds to run
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Stop as soon as a round produces no routing-table changes
    #[arg(long)]
    converge: bool,

    /// Write a JSON report of the final routing tables to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let scenario = match &args.scenario {
        Some(path) => config::load_scenario(path)?,
        None => {
            info!("No scenario file given, using the built-in example topology");
            Scenario::example()
        }
    };

    let iterations = args.iterations.unwrap_or_else(|| scenario.effective_iterations());
    info!(
        "Simulating scenario '{}' for up to {} round(s)",
        scenario.name.as_deref().unwrap_or("unnamed"),
        iterations
    );

    let mut sim = Simulation::new(scenario.build_network()?);
    if args.converge {
        sim.run_to_convergence(iterations);
    } else {
        sim.run(iterations);
    }

    print!("{}", report::render_tables(&sim));

    if let Some(path) = &args.json {
        let table_report = TableReport::from_simulation(&sim, scenario.name.clone());
        report::write_json(&table_report, path)?;
    }

    info!("Simulation completed after {} round(s)", sim.rounds_run());
    Ok(())
}
