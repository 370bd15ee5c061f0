//! Dead reckoning.
//!
//! A naive estimator which only integrates the control input and ignores all observations.
//! Used as a baseline to compare filters against.

use na::RealField;
use nalgebra as na;

use crate::error::EstimateResult;
use crate::models::{ControlPredictor, Estimator};

#[derive(PartialEq, Clone, Debug)]
pub struct DeadReckoning<N: RealField> {
    x: N,
}

impl<N: RealField> DeadReckoning<N> {
    pub fn new(x: N) -> DeadReckoning<N> {
        DeadReckoning { x }
    }

    pub fn estimate(&self) -> N {
        self.x
    }
}

impl<N: RealField> Estimator<N> for DeadReckoning<N> {
    fn state(&self) -> EstimateResult<N> {
        Ok(self.x)
    }
}

impl<N: RealField> ControlPredictor<N> for DeadReckoning<N> {
    fn predict(&mut self, u: N) {
        self.x = self.x + u;
    }
}
