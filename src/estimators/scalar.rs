#![allow(non_snake_case)]

//! Scalar Kalman state estimation.
//!
//! A discrete Bayesian estimator for a system with one state variable. The state is the x,X pair of the
//! position estimate and its variance.
//!
//! Prediction adds the control input to the estimate and the process noise to the variance.
//! Correction fuses an observation of the position with the prediction. The prediction is weighted by the
//! measurement noise and the observation by the predicted variance, so the result leans towards whichever is
//! more certain. The variances combine as a harmonic sum and the corrected variance never exceeds the
//! predicted one.

use na::RealField;
use nalgebra as na;

use crate::error::{EstimateError, EstimateResult};
use crate::models::{ControlPredictor, Estimator, KalmanEstimator, KalmanState, Observer};

/// A one dimensional Kalman filter with constant noises.
#[derive(PartialEq, Clone, Debug)]
pub struct ScalarKalmanFilter<N: RealField> {
    /// State estimate
    x: N,
    /// State variance
    X: N,
    /// Process noise variance, added by each prediction
    q: N,
    /// Measurement noise variance
    r: N,
}

impl<N: RealField> ScalarKalmanFilter<N> {
    /// Creates a filter from its initial state `x`,`X` and the noise variances `q` and `r`.
    ///
    /// All must be finite, `X` and `q` non-negative and `r` positive, otherwise [`EstimateError::InvalidParameter`].
    pub fn new(x: N, X: N, q: N, r: N) -> EstimateResult<ScalarKalmanFilter<N>> {
        if !(x.is_finite() && X.is_finite() && q.is_finite() && r.is_finite()) {
            return Err(EstimateError::InvalidParameter("parameter not finite"));
        }
        if !(X >= N::zero()) {
            return Err(EstimateError::InvalidParameter("initial uncertainty negative"));
        }
        if !(q >= N::zero()) {
            return Err(EstimateError::InvalidParameter("process noise negative"));
        }
        if !(r > N::zero()) {
            return Err(EstimateError::InvalidParameter("measurement noise not positive"));
        }
        Ok(ScalarKalmanFilter { x, X, q, r })
    }

    pub fn estimate(&self) -> N {
        self.x
    }

    pub fn uncertainty(&self) -> N {
        self.X
    }

    pub fn process_noise(&self) -> N {
        self.q
    }

    pub fn measurement_noise(&self) -> N {
        self.r
    }

    /// The Kalman gain a correction would apply to the innovation in the current state.
    pub fn gain(&self) -> N {
        self.X / (self.X + self.r)
    }
}

impl<N: RealField> Estimator<N> for ScalarKalmanFilter<N> {
    fn state(&self) -> EstimateResult<N> {
        Ok(self.x)
    }
}

impl<N: RealField> KalmanEstimator<N> for ScalarKalmanFilter<N> {
    fn kalman_state(&self) -> EstimateResult<KalmanState<N>> {
        Ok(KalmanState::new(self.x, self.X))
    }
}

impl<N: RealField> ControlPredictor<N> for ScalarKalmanFilter<N> {
    fn predict(&mut self, u: N) {
        self.x = self.x + u;
        self.X = self.X + self.q;
    }
}

impl<N: RealField> Observer<N> for ScalarKalmanFilter<N> {
    fn correct(&mut self, z: N) -> EstimateResult<()> {
        // Nothing is known of a zero variance prediction's weight against the observation
        if self.X == N::zero() {
            return Err(EstimateError::InvalidState("X zero in correct"));
        }
        let X = self.X;
        let r = self.r;

        self.x = (r * self.x + X * z) / (r + X);
        // Harmonic sum 1/(1/r + 1/X) as small/(1 + small/large), no overflow for tiny variances
        let (small, large) = if X < r { (X, r) } else { (r, X) };
        self.X = small / (N::one() + small / large);

        Ok(())
    }
}
