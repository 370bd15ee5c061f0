//! Simulation configuration.
//!
//! Parameters are read from TOML. Every field is optional, missing ones take the defaults below.
//! Unknown fields are rejected so a misspelt parameter is not silently replaced by its default.
//!
//! ```toml
//! steps = 1000
//! trace = true
//! seed = 42
//!
//! [simulation]
//! initial_position = 5.0
//! initial_uncertainty = 0.75
//! process_noise = 10.0
//! measurement_noise = 10.0
//! control = 3.0
//! ```

use serde::Deserialize;

/// The simulated system and the filter's view of it.
///
/// The noise magnitudes are the filter's noise variances and also the standard deviations of the noise
/// added to the ground truth and to the measurements.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationParams {
    /// Starting ground truth, also the starting filter and naive estimate
    pub initial_position: f64,
    pub initial_uncertainty: f64,
    pub process_noise: f64,
    pub measurement_noise: f64,
    /// Constant control input applied every step
    pub control: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        SimulationParams {
            initial_position: 5.0,
            initial_uncertainty: 0.75,
            process_noise: 10.0,
            measurement_noise: 10.0,
            control: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub steps: u64,
    /// Log every step report
    pub trace: bool,
    /// Seed for the noise generator, from entropy when absent
    pub seed: Option<u64>,
    pub simulation: SimulationParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            steps: 100_000,
            trace: false,
            seed: None,
            simulation: SimulationParams::default(),
        }
    }
}

pub fn parse(text: &str) -> Result<SimulationConfig, toml::de::Error> {
    toml::from_str(text)
}
