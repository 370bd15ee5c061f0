#![allow(non_snake_case)]

//! Scalar estimation models.
//!
//! State representations are modeled as structs.
//! Common Bayesian discrete system estimation operations are defined as traits.

use na::{Matrix1, RealField, Vector1};
use nalgebra as na;

use crate::error::EstimateResult;

/// Kalman State.
///
/// Linear representation of a one dimensional system as a state vector and the state covariance matrix.
#[derive(PartialEq, Clone, Debug)]
pub struct KalmanState<N: RealField> {
    /// State vector
    pub x: Vector1<N>,
    /// State covariance matrix (non-negative)
    pub X: Matrix1<N>,
}

impl<N: RealField> KalmanState<N> {
    pub fn new(x: N, X: N) -> KalmanState<N> {
        KalmanState {
            x: Vector1::new(x),
            X: Matrix1::new(X),
        }
    }
}

/// A state estimator.
///
pub trait Estimator<N: RealField> {
    /// The estimator's estimate of the system's state.
    fn state(&self) -> EstimateResult<N>;
}

/// A Kalman filter (estimator).
///
/// The linear Kalman state representation x,X is used to represent the system.
pub trait KalmanEstimator<N: RealField>: Estimator<N> {
    /// The estimator's estimate of the system's KalmanState.
    fn kalman_state(&self) -> EstimateResult<KalmanState<N>>;
}

/// A control predictor.
///
/// The state is moved by a known additive control input `u`.
pub trait ControlPredictor<N: RealField> {
    fn predict(&mut self, u: N);
}

/// A direct observer.
///
/// The sensor observes the state itself with additive noise.
pub trait Observer<N: RealField> {
    /// Correct the state estimate with the observation `z`.
    fn correct(&mut self, z: N) -> EstimateResult<()>;
}
