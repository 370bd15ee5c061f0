#![allow(unused_variables)]

//! A 'null' implementation of a scalar estimator.
//!
//! No numerical computations are performed, the traits have implementations which do nothing.

use nalgebra as na;

use na::RealField;
use scalar_estimate::error::EstimateResult;
use scalar_estimate::models::{ControlPredictor, Estimator, KalmanEstimator, KalmanState, Observer};

pub struct NullState<N: RealField> {
    state: KalmanState<N>,
}

impl<N: RealField> NullState<N> {
    pub fn new(state: KalmanState<N>) -> NullState<N> {
        NullState { state }
    }
}

impl<N: RealField> Estimator<N> for NullState<N> {
    fn state(&self) -> EstimateResult<N> {
        Ok(self.state.x[0])
    }
}

impl<N: RealField> KalmanEstimator<N> for NullState<N> {
    fn kalman_state(&self) -> EstimateResult<KalmanState<N>> {
        Ok(self.state.clone())
    }
}

impl<N: RealField> ControlPredictor<N> for NullState<N> {
    fn predict(&mut self, u: N) {}
}

impl<N: RealField> Observer<N> for NullState<N> {
    fn correct(&mut self, z: N) -> EstimateResult<()> {
        Ok(())
    }
}
