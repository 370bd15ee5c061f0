//! A collection of scalar state estimators.

pub mod naive;
pub mod scalar;
