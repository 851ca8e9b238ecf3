//! A single ingested row: an ordered mapping from column name to optional value.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of tabular data.
///
/// Values are optional: a missing cell and an explicit null are the same
/// thing to the normalization engine. Column order is preserved so that
/// projections and SQL output stay in source order. Rows are immutable
/// once ingested; projection returns a fresh row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    values: IndexMap<String, Option<String>>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Set a cell value. `None` records an explicit null.
    pub fn insert(&mut self, column: impl Into<String>, value: Option<String>) {
        self.values.insert(column.into(), value);
    }

    /// Get a cell value. Returns `None` for both a null cell and a column
    /// this row never carried; rows with missing keys are tolerated by
    /// treating the gap as null.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).and_then(|v| v.as_deref())
    }

    /// Column names carried by this row, in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    /// Number of cells in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Project this row onto the given columns, in the given order.
    /// Columns the row does not carry become null.
    pub fn project(&self, columns: &[String]) -> Row {
        let mut row = Row::new();
        for col in columns {
            row.insert(col.clone(), self.get(col).map(|v| v.to_string()));
        }
        row
    }

    /// Identity key for row deduplication over the given columns.
    ///
    /// Nulls stringify to the empty string, and values are joined with a
    /// separator so that distinct rows rarely collide.
    pub fn dedup_key(&self, columns: &[String]) -> String {
        columns
            .iter()
            .map(|c| self.get(c).unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\u{1f}")
    }
}

impl FromIterator<(String, Option<String>)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
