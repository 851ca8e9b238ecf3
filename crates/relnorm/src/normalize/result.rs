//! Normalization stages and the assembled pipeline result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RelnormError;
use crate::fd::{DependencyClassification, Fd};
use crate::relation::Table;

/// One of the four normalization stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "unf")]
    Unf,
    #[serde(rename = "1nf")]
    FirstNf,
    #[serde(rename = "2nf")]
    SecondNf,
    #[serde(rename = "3nf")]
    ThirdNf,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 4] = [Stage::Unf, Stage::FirstNf, Stage::SecondNf, Stage::ThirdNf];

    /// The stage's conventional short name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Unf => "unf",
            Stage::FirstNf => "1nf",
            Stage::SecondNf => "2nf",
            Stage::ThirdNf => "3nf",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = RelnormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unf" => Ok(Stage::Unf),
            "1nf" => Ok(Stage::FirstNf),
            "2nf" => Ok(Stage::SecondNf),
            "3nf" => Ok(Stage::ThirdNf),
            other => Err(RelnormError::UnknownStage(other.to_string())),
        }
    }
}

/// Everything one pipeline run produces: the four table sets, the mined
/// dependencies with their classification, the candidate keys, and any
/// non-fatal warnings accumulated along the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationResult {
    /// Unnormalized form: the dataset as one table.
    pub unf: Vec<Table>,
    /// First normal form (atomicity assumed, same table set as UNF).
    #[serde(rename = "1nf")]
    pub first_nf: Vec<Table>,
    /// Second normal form: partial dependencies decomposed out.
    #[serde(rename = "2nf")]
    pub second_nf: Vec<Table>,
    /// Third normal form: transitive dependencies decomposed out.
    #[serde(rename = "3nf")]
    pub third_nf: Vec<Table>,
    /// All mined functional dependencies, in discovery order.
    pub dependencies: Vec<Fd>,
    /// The mined dependencies partitioned against the candidate keys.
    pub classification: DependencyClassification,
    /// Minimal candidate keys of the smallest size found.
    pub candidate_keys: Vec<Vec<String>>,
    /// Non-fatal conditions encountered during the run.
    pub warnings: Vec<String>,
}

impl NormalizationResult {
    /// An all-empty result, used for degenerate input.
    pub fn empty() -> Self {
        Self {
            unf: Vec::new(),
            first_nf: Vec::new(),
            second_nf: Vec::new(),
            third_nf: Vec::new(),
            dependencies: Vec::new(),
            classification: DependencyClassification::default(),
            candidate_keys: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// The table set for a given stage.
    pub fn tables_for(&self, stage: Stage) -> &[Table] {
        match stage {
            Stage::Unf => &self.unf,
            Stage::FirstNf => &self.first_nf,
            Stage::SecondNf => &self.second_nf,
            Stage::ThirdNf => &self.third_nf,
        }
    }
}
