//! Staged schema normalization: UNF through 3NF.

mod pipeline;
mod result;

pub use pipeline::normalize;
pub use result::{NormalizationResult, Stage};
