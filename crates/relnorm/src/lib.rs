//! Relnorm: FD-driven schema normalization for tabular datasets.
//!
//! Relnorm infers the relational structure latent in a flat dataset and
//! progressively decomposes it into normalized schemas (UNF → 1NF → 2NF →
//! 3NF), driven by functional dependencies mined from the data itself.
//!
//! # Core Principles
//!
//! - **Data-driven**: dependencies and keys come from the rows, not from
//!   a declared schema
//! - **Degrade, don't fail**: degenerate inputs produce warnings on the
//!   result instead of errors
//! - **Bounded heuristics**: mining and key search carry explicit,
//!   configurable limits instead of chasing completeness
//!
//! # Example
//!
//! ```no_run
//! use relnorm::{Relnorm, Stage};
//!
//! let engine = Relnorm::new();
//! let report = engine.analyze_file("shows.csv").unwrap();
//!
//! println!("Dependencies: {}", report.result.dependencies.len());
//! println!("{}", engine.export_sql(&report.result, Stage::ThirdNf));
//! ```

pub mod error;
pub mod fd;
pub mod input;
pub mod normalize;
pub mod relation;
pub mod sql;

mod relnorm;

pub use crate::relnorm::{AnalysisReport, AnalysisSummary, Relnorm, RelnormConfig};
pub use error::{RelnormError, Result};
pub use fd::{DependencyClassification, Fd, KeyFinderConfig, MinerConfig};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use normalize::{NormalizationResult, Stage};
pub use relation::{Row, Table};
pub use sql::generate_sql;
