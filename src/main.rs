use newsvendor_sim::io::chart::{render_profit_chart, ProfitSeries};
use newsvendor_sim::io::reporting;
use newsvendor_sim::logging;
use newsvendor_sim::random::sources::UniformSource;
use newsvendor_sim::simulation::config::{Invocation, SimulationConfig, USAGE};
use newsvendor_sim::simulation::engine;
use std::env;
use std::error::Error;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    logging::init();

    // 1. SETUP CONFIGURATION
    let config = match SimulationConfig::from_args(env::args().skip(1)) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    match simulate(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn simulate(config: &SimulationConfig) -> Result<(), Box<dyn Error>> {
    println!("=== Newsvendor Simulation ===");
    if let Some(seed) = config.seed {
        println!("Seed: {}", seed);
    }

    // 2. RUN SIMULATION
    let mut source = UniformSource::from_seed_option(config.seed);
    let run = engine::run(
        i64::from(config.order_quantity),
        i64::from(config.num_days),
        &mut source,
    )?;

    // 3. PRINT RESULTS
    println!();
    print!("{}", reporting::render_table(run.days()));
    println!();
    print!("{}", reporting::render_totals(run.totals()));
    println!();
    print!("{}", reporting::render_summary(&run));

    // 4. EXPORT
    if let Some(path) = &config.csv_path {
        reporting::write_simulation_log(path, run.days())?;
    }
    if let Some(path) = &config.chart_path {
        render_profit_chart(path, &ProfitSeries::from_run(&run))?;
    }

    Ok(())
}
