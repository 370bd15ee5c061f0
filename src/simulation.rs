//! Simulation of a car moving on a line.
//!
//! The car is told to move `control` forward each step, but wind disturbs the motion with Gaussian process
//! noise. A noisy sensor measures its position. Three estimates of the position are compared against the
//! ground truth:
//!  - the raw measurement,
//!  - naive dead reckoning, which only integrates the control,
//!  - a [`ScalarKalmanFilter`] predicting with the control and correcting with the measurement.
//!
//! The running average absolute error of each is tracked. Over many steps the filter's error falls below
//! both the measurement's and the dead reckoning's.

use crate::config::SimulationParams;
use crate::error::{EstimateError, EstimateResult};
use crate::estimators::naive::DeadReckoning;
use crate::estimators::scalar::ScalarKalmanFilter;
use crate::models::{ControlPredictor, Observer};
use crate::noise::GaussianSource;
use crate::stats::RunningMean;

/// Everything produced by one simulation step.
///
/// The errors are the running averages including this step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    /// Number of steps completed, including this one
    pub step: u64,
    pub ground_truth: f64,
    pub naive_estimate: f64,
    pub measurement: f64,
    pub filtered_estimate: f64,
    pub filtered_uncertainty: f64,
    pub error_measurement: f64,
    pub error_naive: f64,
    pub error_kf: f64,
}

/// The outcome of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    /// Steps completed by the driver so far
    pub steps: u64,
    /// An observer stopped the run early
    pub cancelled: bool,
    pub error_measurement: f64,
    pub error_naive: f64,
    pub error_kf: f64,
    pub estimate: f64,
    pub uncertainty: f64,
}

/// Whether a run should go on after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Receives each step of a run, e.g. to display it.
pub trait StepObserver {
    fn observe(&mut self, report: &StepReport) -> Flow;
}

impl<F: FnMut(&StepReport) -> Flow> StepObserver for F {
    fn observe(&mut self, report: &StepReport) -> Flow {
        self(report)
    }
}

/// Writes each step to the log at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl StepObserver for LogObserver {
    fn observe(&mut self, report: &StepReport) -> Flow {
        log::debug!(
            "step {}: truth {:.2} measured {:.2} naive {:.2} filtered {:.2} (uncertainty {:.10}) errors measured {:.2} naive {:.2} filtered {:.2}",
            report.step,
            report.ground_truth,
            report.measurement,
            report.naive_estimate,
            report.filtered_estimate,
            report.filtered_uncertainty,
            report.error_measurement,
            report.error_naive,
            report.error_kf
        );
        Flow::Continue
    }
}

pub struct SimulationDriver<G: GaussianSource> {
    filter: ScalarKalmanFilter<f64>,
    naive: DeadReckoning<f64>,
    ground_truth: f64,
    control: f64,
    process_noise: f64,
    measurement_noise: f64,
    noise: G,
    error_measurement: RunningMean,
    error_naive: RunningMean,
    error_kf: RunningMean,
    step_count: u64,
}

impl<G: GaussianSource> SimulationDriver<G> {
    pub fn new(params: &SimulationParams, noise: G) -> EstimateResult<SimulationDriver<G>> {
        let finite = [
            params.initial_position,
            params.initial_uncertainty,
            params.process_noise,
            params.measurement_noise,
            params.control,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(EstimateError::InvalidParameter("simulation parameter not finite"));
        }

        let filter = ScalarKalmanFilter::new(
            params.initial_position,
            params.initial_uncertainty,
            params.process_noise,
            params.measurement_noise,
        )?;

        Ok(SimulationDriver {
            filter,
            naive: DeadReckoning::new(params.initial_position),
            ground_truth: params.initial_position,
            control: params.control,
            process_noise: params.process_noise,
            measurement_noise: params.measurement_noise,
            noise,
            error_measurement: RunningMean::new(),
            error_naive: RunningMean::new(),
            error_kf: RunningMean::new(),
            step_count: 0,
        })
    }

    /// Advance the simulation by one step.
    ///
    /// On error nothing is updated, though the step's noise samples have been drawn.
    pub fn step(&mut self) -> EstimateResult<StepReport> {
        let u = self.control;

        let mut naive = self.naive.clone();
        naive.predict(u);

        let ground_truth = self.ground_truth + u + self.noise.sample(self.process_noise);
        let z = ground_truth + self.noise.sample(self.measurement_noise);

        let mut filter = self.filter.clone();
        filter.predict(u);
        filter.correct(z)?;

        let naive_estimate = naive.estimate();
        let filtered_estimate = filter.estimate();

        self.naive = naive;
        self.filter = filter;
        self.ground_truth = ground_truth;
        let error_measurement = self.error_measurement.push((z - ground_truth).abs());
        let error_naive = self.error_naive.push((naive_estimate - ground_truth).abs());
        let error_kf = self.error_kf.push((filtered_estimate - ground_truth).abs());
        self.step_count += 1;

        Ok(StepReport {
            step: self.step_count,
            ground_truth,
            naive_estimate,
            measurement: z,
            filtered_estimate,
            filtered_uncertainty: self.filter.uncertainty(),
            error_measurement,
            error_naive,
            error_kf,
        })
    }

    /// Run `steps` steps.
    pub fn run(&mut self, steps: u64) -> EstimateResult<RunSummary> {
        self.run_with(steps, |_: &StepReport| Flow::Continue)
    }

    /// Run up to `steps` steps, handing each to the `observer`. The run ends early when the observer stops it.
    pub fn run_with<O: StepObserver>(&mut self, steps: u64, mut observer: O) -> EstimateResult<RunSummary> {
        log::debug!("running {} steps from uncertainty {:.2}", steps, self.filter.uncertainty());

        let mut cancelled = false;
        let mut done = 0;
        while done < steps {
            let report = self.step()?;
            done += 1;
            if observer.observe(&report) == Flow::Stop {
                log::info!("simulation stopped after {} of {} steps", done, steps);
                cancelled = true;
                break;
            }
        }

        Ok(self.summary(cancelled))
    }

    fn summary(&self, cancelled: bool) -> RunSummary {
        RunSummary {
            steps: self.step_count,
            cancelled,
            error_measurement: self.error_measurement.mean(),
            error_naive: self.error_naive.mean(),
            error_kf: self.error_kf.mean(),
            estimate: self.filter.estimate(),
            uncertainty: self.filter.uncertainty(),
        }
    }

    pub fn filter(&self) -> &ScalarKalmanFilter<f64> {
        &self.filter
    }

    pub fn ground_truth(&self) -> f64 {
        self.ground_truth
    }

    pub fn naive_estimate(&self) -> f64 {
        self.naive.estimate()
    }

    pub fn running_error_measurement(&self) -> f64 {
        self.error_measurement.mean()
    }

    pub fn running_error_naive(&self) -> f64 {
        self.error_naive.mean()
    }

    pub fn running_error_kf(&self) -> f64 {
        self.error_kf.mean()
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}
