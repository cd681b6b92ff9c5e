use serde::{Deserialize, Serialize};

use super::score::MetricResult;

/// A single capture record. The reporter never looks inside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Electromyography channel readings.
    pub emg: Vec<f64>,
}

/// Container for one analysis run: raw samples in, computed results out.
///
/// Append-only. Both sequences keep insertion order and accept duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Packet {
    sample_set: Vec<Sample>,
    result_set: Vec<MetricResult>,
}

impl Packet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sample(&mut self, sample: Sample) {
        self.sample_set.push(sample);
    }

    pub fn add_result(&mut self, result: MetricResult) {
        self.result_set.push(result);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.sample_set
    }

    pub fn results(&self) -> &[MetricResult] {
        &self.result_set
    }

    pub fn is_empty(&self) -> bool {
        self.sample_set.is_empty() && self.result_set.is_empty()
    }
}
