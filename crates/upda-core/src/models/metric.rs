use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the six clinical metrics printed on the score sheet.
///
/// Variants are declared in sheet order, top row first; `Ord` follows that
/// order so a `BTreeMap<Metric, _>` iterates the way the sheet reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Finger tap.
    Ftap,
    /// Hand movement.
    Htap,
    /// Postural tremor.
    Ptrem,
    /// Kinetic tremor.
    Ktrem,
    /// Rest tremor.
    Rtrem,
    /// Consistency of rest.
    Crest,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Ftap,
        Metric::Htap,
        Metric::Ptrem,
        Metric::Ktrem,
        Metric::Rtrem,
        Metric::Crest,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Metric::Ftap => "ftap",
            Metric::Htap => "htap",
            Metric::Ptrem => "ptrem",
            Metric::Ktrem => "ktrem",
            Metric::Rtrem => "rtrem",
            Metric::Crest => "crest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Ftap => "Finger tap",
            Metric::Htap => "Hand movement",
            Metric::Ptrem => "Postural tremor",
            Metric::Ktrem => "Kinetic tremor",
            Metric::Rtrem => "Rest tremor",
            Metric::Crest => "Consistency of rest",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| CoreError::UnknownMetric(s.to_string()))
    }
}
