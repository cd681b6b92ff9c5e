use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

use super::metric::Metric;
use super::packet::Packet;

/// A metric's percentage and raw value.
///
/// Serialized as a `[percentage, raw]` pair, the shape score tables are
/// written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct MetricScore {
    pub percentage: f64,
    pub raw: f64,
}

impl MetricScore {
    pub fn new(percentage: f64, raw: f64) -> Self {
        Self { percentage, raw }
    }

    /// Percentage as printed on the sheet, e.g. `87.5%`.
    pub fn percentage_text(&self) -> String {
        format!("{}%", decimal_text(self.percentage))
    }

    /// Raw value as printed on the sheet, e.g. `12.0`.
    pub fn raw_text(&self) -> String {
        decimal_text(self.raw)
    }
}

impl From<(f64, f64)> for MetricScore {
    fn from((percentage, raw): (f64, f64)) -> Self {
        Self { percentage, raw }
    }
}

impl From<MetricScore> for (f64, f64) {
    fn from(score: MetricScore) -> Self {
        (score.percentage, score.raw)
    }
}

/// Shortest round-trip decimal in positional form (`3.0`, not `3`) for
/// magnitudes in `[1e-4, 1e16)`; scientific with a signed two-digit exponent
/// (`1e-05`, `2.5e+16`) outside it.
fn decimal_text(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if value != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{value:e}");
        if let Some((mantissa, exponent)) = sci.split_once('e') {
            let exponent: i32 = exponent.parse().unwrap_or_default();
            let sign = if exponent < 0 { '-' } else { '+' };
            return format!("{mantissa}e{sign}{:02}", exponent.abs());
        }
    }

    let text = value.to_string();
    if text.contains('.') { text } else { format!("{text}.0") }
}

/// A computed result, as appended to a [`Packet`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    pub metric: Metric,
    pub score: MetricScore,
}

impl MetricResult {
    pub fn new(metric: Metric, percentage: f64, raw: f64) -> Self {
        Self {
            metric,
            score: MetricScore::new(percentage, raw),
        }
    }
}

/// The table a score sheet is rendered from.
///
/// Metrics absent from `scores` render as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientScore {
    pub name: String,
    #[serde(flatten)]
    pub scores: BTreeMap<Metric, MetricScore>,
}

impl PatientScore {
    /// Every metric at `[0.0, 0.0]`.
    pub fn blank(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scores: Metric::ALL
                .into_iter()
                .map(|m| (m, MetricScore::default()))
                .collect(),
        }
    }

    /// Build a table from a packet's results. Later results for the same
    /// metric replace earlier ones.
    pub fn from_packet(name: impl Into<String>, packet: &Packet) -> Self {
        let mut table = Self::blank(name);
        for result in packet.results() {
            table.set(result.metric, result.score);
        }
        table
    }

    /// Parse a table written as `{"name": .., "ftap": [pct, raw], ..}`.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn score(&self, metric: Metric) -> MetricScore {
        self.scores.get(&metric).copied().unwrap_or_default()
    }

    pub fn set(&mut self, metric: Metric, score: MetricScore) {
        self.scores.insert(metric, score);
    }

    /// All six metrics in sheet order, zero-filled.
    pub fn rows(&self) -> impl Iterator<Item = (Metric, MetricScore)> + '_ {
        Metric::ALL.into_iter().map(|m| (m, self.score(m)))
    }
}
