//!
//! Scalar+Estimate, one dimensional Bayesian estimation.
//! Copyright (c) 2020 Michael Stevens
//!
//! A Kalman filter for a system with a single state variable, such as the position of a car on a line.
//! The state is propagated by a known control input with additive Gaussian process noise and observed directly
//! by a sensor with additive Gaussian measurement noise.
//!
//! Each step is a prediction followed by a correction. The correction is a precision weighted average of the
//! predicted and the measured position: whichever of the two is more certain gets the larger weight.
//!
//! A [`simulation`] driver generates a synthetic ground truth and noisy measurements for the filter and tracks the
//! average error of the raw measurements, of a naive dead reckoning estimate and of the filtered estimate.
//!
//! Estimation operations are defined as traits in [`models`], estimators implementing them are in [`estimators`].
//!
//! # Licensing
//!
//! All Bayes++ source code files are copyright with the license conditions as given here. The copyright notice is that of the MIT license.
//!  This in no way restricts any commercial use you may wish to make using our source code.
//!  As long as you respect the copyright and license conditions, Michael Stevens is happy to for you to use it in any way you wish.
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction,
//! including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software,
//! and to permit persons to whom the Software is furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NON INFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY,
//! WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

pub mod config;
pub mod error;
pub mod estimators;
pub mod models;
pub mod noise;
pub mod simulation;
pub mod stats;
