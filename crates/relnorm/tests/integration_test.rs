//! Integration tests for relnorm.

use std::io::Write;
use tempfile::NamedTempFile;

use relnorm::{Fd, Relnorm, Row, Stage};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(c, v)| (c.to_string(), Some(v.to_string())))
        .collect()
}

// =============================================================================
// End-to-End Scenario
// =============================================================================

fn tv_rows() -> Vec<Row> {
    vec![
        row(&[
            ("channel", "HBO"),
            ("show", "Game of Thrones"),
            ("genre", "Drama"),
            ("network", "HBO"),
            ("day", "Sunday"),
        ]),
        row(&[
            ("channel", "Netflix"),
            ("show", "Stranger Things"),
            ("genre", "Drama"),
            ("network", "Netflix"),
            ("day", "Friday"),
        ]),
    ]
}

#[test]
fn test_tv_dataset_unf_intact() {
    let engine = Relnorm::new();
    let result = engine.analyze_rows(&tv_rows(), "tv_dataset");

    assert_eq!(result.unf.len(), 1);
    let unf = &result.unf[0];
    assert_eq!(unf.name, "tv_dataset");
    assert_eq!(unf.column_count(), 5);
    assert_eq!(unf.row_count(), 2);
}

#[test]
fn test_tv_dataset_mines_channel_network() {
    let engine = Relnorm::new();
    let result = engine.analyze_rows(&tv_rows(), "tv_dataset");

    assert!(result.dependencies.contains(&Fd::new(["channel"], "network")));
}

#[test]
fn test_tv_dataset_unf_sql_shape() {
    let engine = Relnorm::new();
    let result = engine.analyze_rows(&tv_rows(), "tv_dataset");
    let sql = engine.export_sql(&result, Stage::Unf);

    assert_eq!(sql.matches("CREATE TABLE").count(), 1);
    assert_eq!(sql.matches("INSERT INTO").count(), 2);
    assert!(sql.contains("CREATE TABLE tv_dataset"));
}

// =============================================================================
// File-Based Analysis
// =============================================================================

#[test]
fn test_analyze_csv_file_end_to_end() {
    let content = "channel,show,genre,network,day\n\
                   HBO,Game of Thrones,Drama,HBO,Sunday\n\
                   Netflix,Stranger Things,Drama,Netflix,Friday\n";
    let file = create_test_file(content);

    let engine = Relnorm::new();
    let report = engine.analyze_file(file.path()).expect("Analysis failed");

    assert_eq!(report.source.format, "csv");
    assert_eq!(report.source.row_count, 2);
    assert_eq!(report.source.column_count, 5);
    assert!(report
        .result
        .dependencies
        .contains(&Fd::new(["channel"], "network")));
}

#[test]
fn test_analyze_tsv_auto_detect() {
    let content = "id\tname\tteam\n1\tann\tred\n2\tbob\tblue\n";
    let file = create_test_file(content);

    let engine = Relnorm::new();
    let report = engine.analyze_file(file.path()).expect("Analysis failed");

    assert_eq!(report.source.format, "tsv");
    assert_eq!(report.source.column_count, 3);
}

#[test]
fn test_header_only_file_degrades_to_warning() {
    let content = "a,b,c\n";
    let file = create_test_file(content);

    let engine = Relnorm::new();
    let report = engine.analyze_file(file.path()).expect("Analysis failed");

    assert!(report.result.unf.is_empty());
    assert!(report
        .result
        .warnings
        .iter()
        .any(|w| w.contains("empty dataset")));
    assert_eq!(
        engine.export_sql(&report.result, Stage::ThirdNf),
        "-- No tables to export\n"
    );
}

// =============================================================================
// Decomposition Invariants
// =============================================================================

#[test]
fn test_column_coverage_across_stages() {
    // order determines customer partially (key is {order, item}).
    let rows = vec![
        row(&[("order", "1"), ("item", "a"), ("customer", "ann")]),
        row(&[("order", "1"), ("item", "b"), ("customer", "ann")]),
        row(&[("order", "2"), ("item", "a"), ("customer", "bob")]),
        row(&[("order", "2"), ("item", "c"), ("customer", "bob")]),
    ];
    let engine = Relnorm::new();
    let result = engine.analyze_rows(&rows, "orders");

    for stage in [Stage::SecondNf, Stage::ThirdNf] {
        let covered: std::collections::BTreeSet<&str> = result
            .tables_for(stage)
            .iter()
            .flat_map(|t| t.columns.iter().map(|c| c.as_str()))
            .collect();
        for col in &result.unf[0].columns {
            assert!(
                covered.contains(col.as_str()),
                "column {col} lost in {stage}"
            );
        }
    }
}

#[test]
fn test_candidate_keys_are_minimal() {
    let rows = vec![
        row(&[("order", "1"), ("item", "a"), ("customer", "ann")]),
        row(&[("order", "1"), ("item", "b"), ("customer", "ann")]),
        row(&[("order", "2"), ("item", "a"), ("customer", "bob")]),
    ];
    let engine = Relnorm::new();
    let result = engine.analyze_rows(&rows, "orders");

    for key in &result.candidate_keys {
        for other in &result.candidate_keys {
            if key == other {
                continue;
            }
            let is_proper_subset =
                other.len() < key.len() && other.iter().all(|a| key.contains(a));
            assert!(!is_proper_subset, "{other:?} is a proper subset of {key:?}");
        }
    }
}

#[test]
fn test_classification_partitions_all_dependencies() {
    let rows = vec![
        row(&[("order", "1"), ("item", "a"), ("customer", "ann")]),
        row(&[("order", "1"), ("item", "b"), ("customer", "ann")]),
        row(&[("order", "2"), ("item", "a"), ("customer", "bob")]),
    ];
    let engine = Relnorm::new();
    let result = engine.analyze_rows(&rows, "orders");

    assert_eq!(result.classification.len(), result.dependencies.len());
}

// =============================================================================
// JSON Report
// =============================================================================

#[test]
fn test_result_serializes_with_stage_names() {
    let engine = Relnorm::new();
    let result = engine.analyze_rows(&tv_rows(), "tv_dataset");
    let json = serde_json::to_value(&result).unwrap();

    for stage in ["unf", "1nf", "2nf", "3nf"] {
        assert!(json.get(stage).is_some(), "missing stage key {stage}");
    }
    assert!(json.get("dependencies").is_some());
    assert!(json.get("candidate_keys").is_some());
}
