//! Main Relnorm struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fd::{KeyFinderConfig, MinerConfig};
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::normalize::{normalize, NormalizationResult, Stage};
use crate::relation::Row;
use crate::sql::{generate_sql, DEFAULT_INSERT_ROW_LIMIT};

/// Configuration for a normalization run. Every heuristic bound the engine
/// uses is exposed here rather than hard-coded.
#[derive(Debug, Clone)]
pub struct RelnormConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// FD mining bounds.
    pub miner: MinerConfig,
    /// Candidate key search bounds.
    pub keys: KeyFinderConfig,
    /// Rows rendered per table in SQL output.
    pub insert_row_limit: usize,
}

impl Default for RelnormConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            miner: MinerConfig::default(),
            keys: KeyFinderConfig::default(),
            insert_row_limit: DEFAULT_INSERT_ROW_LIMIT,
        }
    }
}

/// Result of analyzing a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// The full normalization result.
    pub result: NormalizationResult,
    /// Summary statistics.
    pub summary: AnalysisSummary,
}

/// Summary of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Number of data rows analyzed.
    pub total_rows: usize,
    /// Number of columns in the dataset.
    pub total_columns: usize,
    /// Total mined dependencies.
    pub dependency_count: usize,
    /// Dependencies classified as partial.
    pub partial_count: usize,
    /// Dependencies classified as transitive.
    pub transitive_count: usize,
    /// Candidate keys found.
    pub candidate_key_count: usize,
    /// Table count per stage, in pipeline order.
    pub tables_per_stage: Vec<(String, usize)>,
}

/// The main normalization engine.
///
/// Stateless across invocations: each analysis is a synchronous run over
/// its own input, so concurrent runs over different inputs need no locking.
pub struct Relnorm {
    config: RelnormConfig,
    parser: Parser,
}

impl Relnorm {
    /// Create a new engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(RelnormConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: RelnormConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self { config, parser }
    }

    /// Normalize an already-ingested row set. This is the transport-free
    /// boundary: callers that do their own parsing enter here.
    pub fn analyze_rows(&self, rows: &[Row], dataset_name: &str) -> NormalizationResult {
        normalize(rows, dataset_name, &self.config.miner, &self.config.keys)
    }

    /// Parse a CSV/TSV file and run the full pipeline over it. The dataset
    /// name defaults to the file stem.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<AnalysisReport> {
        let path = path.as_ref();
        let (table, source) = self.parser.parse_file(path)?;

        let dataset_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset".to_string());

        let rows = table.to_rows();
        let result = self.analyze_rows(&rows, &dataset_name);
        let summary = self.summarize(&source, &result);

        Ok(AnalysisReport {
            source,
            result,
            summary,
        })
    }

    /// Render SQL for one stage of a result using the configured row limit.
    pub fn export_sql(&self, result: &NormalizationResult, stage: Stage) -> String {
        generate_sql(result, stage, self.config.insert_row_limit)
    }

    fn summarize(&self, source: &SourceMetadata, result: &NormalizationResult) -> AnalysisSummary {
        AnalysisSummary {
            total_rows: source.row_count,
            total_columns: source.column_count,
            dependency_count: result.dependencies.len(),
            partial_count: result.classification.partial.len(),
            transitive_count: result.classification.transitive.len(),
            candidate_key_count: result.candidate_keys.len(),
            tables_per_stage: Stage::ALL
                .iter()
                .map(|s| (s.to_string(), result.tables_for(*s).len()))
                .collect(),
        }
    }
}

impl Default for Relnorm {
    fn default() -> Self {
        Self::new()
    }
}
