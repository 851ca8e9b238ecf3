//! Relational data model: rows, tables, projection and deduplication.

mod row;
mod table;

pub use row::Row;
pub use table::{dedup_rows, Table};
