use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;

use scalar_estimate::config::{self, SimulationConfig};
use scalar_estimate::noise::RngGaussian;
use scalar_estimate::simulation::{LogObserver, SimulationDriver};

fn load_config() -> anyhow::Result<SimulationConfig> {
    match std::env::args_os().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Unable to read config {}", path.display()))?;
            config::parse(&text).with_context(|| format!("Unable to parse config {}", path.display()))
        }
        None => Ok(SimulationConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = load_config()?;
    log::debug!("Using {:#?}", config);

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut driver = SimulationDriver::new(&config.simulation, RngGaussian::new(rng))?;
    log::info!("initial sigma = {:.2}", driver.filter().uncertainty());

    let summary = if config.trace {
        driver.run_with(config.steps, LogObserver)?
    } else {
        driver.run(config.steps)?
    };

    log::info!(
        "after {} steps: measured error {:.2}, naive error {:.2}, Kalman filtered error {:.2}",
        summary.steps,
        summary.error_measurement,
        summary.error_naive,
        summary.error_kf
    );
    log::info!("final sigma = {:.10}", summary.uncertainty);

    Ok(())
}
