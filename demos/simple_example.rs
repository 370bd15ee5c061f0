//! Operation of a scalar Kalman filter in a simple example.
//!
//! A Kalman filter (estimator) with one state and constant noises.

use scalar_estimate::estimators::scalar::ScalarKalmanFilter;
use scalar_estimate::models::{ControlPredictor, KalmanEstimator, Observer};

fn main() {
    // Setup the initial state and variance, initialy at 10 with little uncertainty
    let mut estimate = ScalarKalmanFilter::new(10., 0.1, 1., 1.).unwrap();
    let state = estimate.kalman_state().unwrap();
    println!("Initial x{:.1} X{:.2}", state.x, state.X);

    // Make a state prediction, we moved 1 forward
    estimate.predict(1.);
    println!("Predict x{:.1} X{:.2}", estimate.estimate(), estimate.uncertainty());

    // Make an observation that we appear to be at 11.5
    estimate.correct(11.5).unwrap();
    println!("Observe x{:.1} X{:.2}", estimate.estimate(), estimate.uncertainty());
}
