//! `StatsCollector`: the append-only sample log of one run.

use std::fmt;

use crate::{StatsError, StatsResult, WaitSample};

/// Mean transit time split into whole minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeanWait {
    pub minutes: u64,
    pub seconds: u64,
}

impl fmt::Display for MeanWait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes and {} seconds", self.minutes, self.seconds)
    }
}

/// Accumulates one [`WaitSample`] per completed entity, in completion order.
#[derive(Debug, Default)]
pub struct StatsCollector {
    samples: Vec<WaitSample>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample.  Samples are never removed or reordered.
    pub fn record(&mut self, sample: WaitSample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[WaitSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Arithmetic mean of all `total_elapsed` values, in minutes.
    pub fn mean_minutes(&self) -> StatsResult<f64> {
        if self.samples.is_empty() {
            return Err(StatsError::EmptyDataset);
        }
        let sum: f64 = self.samples.iter().map(|s| s.total_elapsed).sum();
        Ok(sum / self.samples.len() as f64)
    }

    /// The mean as `(minutes, seconds)`.
    ///
    /// Minutes is the mean rounded to the nearest whole minute; seconds is
    /// the fractional minute times 60, rounded to the nearest second.  A mean
    /// of 15.5 reports as 16 minutes and 30 seconds.
    pub fn mean(&self) -> StatsResult<MeanWait> {
        let mean = self.mean_minutes()?;
        Ok(MeanWait {
            minutes: mean.round() as u64,
            seconds: (mean.fract() * 60.0).round() as u64,
        })
    }

    /// Longest transit time seen so far.
    pub fn max(&self) -> Option<f64> {
        self.samples.iter().map(|s| s.total_elapsed).reduce(f64::max)
    }
}
