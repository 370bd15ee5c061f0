//! Running error statistics.

/// Cumulative moving average.
///
/// Each new sample updates the mean in place, `mean = (mean * n + sample) / (n + 1)`,
/// so no history is kept.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunningMean {
    mean: f64,
    count: u64,
}

impl RunningMean {
    pub fn new() -> RunningMean {
        RunningMean::default()
    }

    /// Add a sample and return the updated mean.
    pub fn push(&mut self, sample: f64) -> f64 {
        let n = self.count as f64;
        self.mean = (self.mean * n + sample) / (n + 1.);
        self.count += 1;
        self.mean
    }

    /// Mean of the samples so far, zero before the first.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}
