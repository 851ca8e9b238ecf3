//! SQL rendering of a normalization stage.

use crate::normalize::{NormalizationResult, Stage};
use crate::relation::Table;

/// How many rows of each table are rendered as INSERT statements.
pub const DEFAULT_INSERT_ROW_LIMIT: usize = 5;

/// Render every table of the chosen stage as CREATE TABLE plus INSERT
/// statements.
///
/// Columns are typed as a generic VARCHAR. The PRIMARY KEY is the first
/// candidate key whose attributes all survive in the table, falling back
/// to the table's first column when none does. At most `insert_row_limit`
/// rows are emitted per table, values escaped by doubling single quotes.
/// A stage with no tables renders a single comment line.
pub fn generate_sql(result: &NormalizationResult, stage: Stage, insert_row_limit: usize) -> String {
    let tables = result.tables_for(stage);
    if tables.is_empty() {
        return "-- No tables to export\n".to_string();
    }

    let mut sql = String::new();
    for table in tables {
        sql.push_str(&create_statement(table, &result.candidate_keys));
        for row_idx in 0..table.row_count().min(insert_row_limit) {
            sql.push_str(&insert_statement(table, row_idx));
        }
    }
    sql
}

fn create_statement(table: &Table, candidate_keys: &[Vec<String>]) -> String {
    let columns = table
        .columns
        .iter()
        .map(|c| format!("{c} VARCHAR"))
        .collect::<Vec<_>>()
        .join(", ");

    let primary_key: Vec<String> = candidate_keys
        .iter()
        .find(|key| key.iter().all(|a| table.has_column(a)))
        .cloned()
        .unwrap_or_else(|| table.columns.iter().take(1).cloned().collect());

    format!(
        "CREATE TABLE {} ({}, PRIMARY KEY ({}));\n",
        table.name,
        columns,
        primary_key.join(", ")
    )
}

fn insert_statement(table: &Table, row_idx: usize) -> String {
    let row = &table.rows[row_idx];
    let values = table
        .columns
        .iter()
        .map(|c| format!("'{}'", row.get(c).unwrap_or("").replace('\'', "''")))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES ({});\n",
        table.name,
        table.columns.join(", "),
        values
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::Row;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(c, v)| (c.to_string(), Some(v.to_string())))
            .collect()
    }

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn result_with_table(table: Table, candidate_keys: Vec<Vec<String>>) -> NormalizationResult {
        let mut result = NormalizationResult::empty();
        result.unf = vec![table];
        result.candidate_keys = candidate_keys;
        result
    }

    #[test]
    fn test_empty_stage_renders_comment() {
        let result = NormalizationResult::empty();
        assert_eq!(
            generate_sql(&result, Stage::ThirdNf, DEFAULT_INSERT_ROW_LIMIT),
            "-- No tables to export\n"
        );
    }

    #[test]
    fn test_create_uses_matching_candidate_key() {
        let table = Table::project("t", &cols(&["id", "name"]), &[row(&[("id", "1"), ("name", "x")])]);
        let result = result_with_table(table, vec![cols(&["id"])]);
        let sql = generate_sql(&result, Stage::Unf, DEFAULT_INSERT_ROW_LIMIT);
        assert!(sql.contains("CREATE TABLE t (id VARCHAR, name VARCHAR, PRIMARY KEY (id));"));
    }

    #[test]
    fn test_create_falls_back_to_first_column() {
        let table = Table::project("t", &cols(&["a", "b"]), &[row(&[("a", "1"), ("b", "2")])]);
        // The only candidate key names a column the table no longer has.
        let result = result_with_table(table, vec![cols(&["gone"])]);
        let sql = generate_sql(&result, Stage::Unf, DEFAULT_INSERT_ROW_LIMIT);
        assert!(sql.contains("PRIMARY KEY (a)"));
    }

    #[test]
    fn test_insert_escapes_quotes_and_limits_rows() {
        let rows: Vec<Row> = (0..8)
            .map(|i| row(&[("id", &i.to_string()[..]), ("name", "o'brien")]))
            .collect();
        let table = Table::project("t", &cols(&["id", "name"]), &rows);
        let result = result_with_table(table, vec![cols(&["id"])]);
        let sql = generate_sql(&result, Stage::Unf, DEFAULT_INSERT_ROW_LIMIT);
        assert_eq!(sql.matches("INSERT INTO").count(), 5);
        assert!(sql.contains("'o''brien'"));
    }

    #[test]
    fn test_null_renders_as_empty_string() {
        let mut r = Row::new();
        r.insert("a", Some("1".to_string()));
        r.insert("b", None);
        let table = Table::project("t", &cols(&["a", "b"]), &[r]);
        let result = result_with_table(table, vec![]);
        let sql = generate_sql(&result, Stage::Unf, DEFAULT_INSERT_ROW_LIMIT);
        assert!(sql.contains("VALUES ('1', '');"));
    }
}
