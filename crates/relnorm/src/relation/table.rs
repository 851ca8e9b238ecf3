//! Table definition and relational projection.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::row::Row;

/// A named relation: an ordered set of unique column names plus its rows.
///
/// Invariant: every row carries exactly the table's column set, and no two
/// rows are identical under the table's column projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Ordered, unique column names.
    pub columns: Vec<String>,
    /// Deduplicated rows, each projected onto `columns`.
    pub rows: Vec<Row>,
}

impl Table {
    /// Build a table as the deduplicated projection of `source_rows` onto
    /// `columns`. Duplicate column names are collapsed, keeping first
    /// occurrence order.
    pub fn project(name: impl Into<String>, columns: &[String], source_rows: &[Row]) -> Self {
        let columns: Vec<String> = columns
            .iter()
            .cloned()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();
        let rows = dedup_rows(source_rows, &columns);
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// Whether the table carries the given column.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Return a copy of this table with one column dropped and rows
    /// re-projected (and re-deduplicated) onto the remaining columns.
    pub fn without_column(&self, column: &str) -> Self {
        let columns: Vec<String> = self
            .columns
            .iter()
            .filter(|c| c.as_str() != column)
            .cloned()
            .collect();
        let rows = dedup_rows(&self.rows, &columns);
        Self {
            name: self.name.clone(),
            columns,
            rows,
        }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Deduplicate rows by their stringified projection onto `columns`,
/// keeping the first-seen row for each identity key. Nulls compare equal
/// to empty strings under this key, matching the engine's dedup rule.
pub fn dedup_rows(rows: &[Row], columns: &[String]) -> Vec<Row> {
    let mut seen: IndexSet<String> = IndexSet::new();
    let mut out = Vec::new();
    for row in rows {
        let key = row.dedup_key(columns);
        if seen.insert(key) {
            out.push(row.project(columns));
        }
    }
    out
}
