//! Estimation errors.
//!
//! Both kinds are precondition violations. They are reported to the caller immediately and never retried.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateError {
    /// A model parameter is outside its domain, e.g. a non positive measurement noise.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    /// The estimator state does not allow the requested operation, e.g. observing with zero uncertainty.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

pub type EstimateResult<T> = Result<T, EstimateError>;
