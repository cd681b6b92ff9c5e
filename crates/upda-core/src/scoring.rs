use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encoding::encode_winansi;
use crate::models::metric::Metric;
use crate::models::score::PatientScore;

pub const PERCENTAGE_MIN: f64 = 0.0;
pub const PERCENTAGE_MAX: f64 = 100.0;

/// A value in a score table that cannot be printed on a sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// `None` for table-level problems such as a missing name.
    pub metric: Option<Metric>,
    pub value: Option<f64>,
    pub message: String,
}

impl PatientScore {
    /// Check every metric; an empty result means the table is renderable.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError {
                metric: None,
                value: None,
                message: "patient name is empty".to_string(),
            });
        } else if let Err(c) = encode_winansi(&self.name) {
            errors.push(ValidationError {
                metric: None,
                value: None,
                message: format!("patient name contains unprintable character {c:?}"),
            });
        }

        for (metric, score) in self.rows() {
            let pct = score.percentage;
            if !pct.is_finite() || !(PERCENTAGE_MIN..=PERCENTAGE_MAX).contains(&pct) {
                errors.push(ValidationError {
                    metric: Some(metric),
                    value: Some(pct),
                    message: format!(
                        "{}: percentage {} is outside range [{}, {}]",
                        metric.label(),
                        pct,
                        PERCENTAGE_MIN,
                        PERCENTAGE_MAX,
                    ),
                });
            }
            if !score.raw.is_finite() || score.raw < 0.0 {
                errors.push(ValidationError {
                    metric: Some(metric),
                    value: Some(score.raw),
                    message: format!(
                        "{}: raw value {} must be finite and non-negative",
                        metric.label(),
                        score.raw,
                    ),
                });
            }
        }

        errors
    }
}
