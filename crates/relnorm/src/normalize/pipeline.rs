//! The staged decomposition pipeline.
//!
//! One synchronous run takes ingested rows to UNF/1NF/2NF/3NF table sets.
//! Nothing here performs I/O or keeps cross-call state; degenerate inputs
//! degrade to warnings instead of errors.

use crate::fd::{
    classify_dependencies, find_candidate_keys, mine_fds, Fd, KeyFinderConfig, MinerConfig,
};
use crate::relation::{Row, Table};

use super::result::NormalizationResult;

/// Run the full pipeline: mine dependencies, find candidate keys, classify,
/// then decompose stage by stage.
///
/// The column set is taken from the first row; later rows with missing or
/// extra keys are tolerated, missing cells reading as null. An empty row
/// sequence short-circuits to an all-empty result with a warning.
pub fn normalize(
    rows: &[Row],
    dataset_name: &str,
    miner: &MinerConfig,
    keys: &KeyFinderConfig,
) -> NormalizationResult {
    if rows.is_empty() {
        let mut result = NormalizationResult::empty();
        result.warnings.push("empty dataset".to_string());
        return result;
    }

    let columns: Vec<String> = rows[0].columns().map(|c| c.to_string()).collect();
    let mut warnings = Vec::new();

    let dependencies = mine_fds(rows, &columns, miner);
    let candidate_keys = find_candidate_keys(&columns, &dependencies, Some(rows), keys);
    if candidate_keys.is_empty() {
        warnings.push(format!(
            "no candidate key found within size limit {}",
            keys.max_key_size
        ));
    }

    let classification = classify_dependencies(&dependencies, &candidate_keys);

    let unf = vec![Table::project(dataset_name, &columns, rows)];
    let first_nf = unf.clone();
    let second_nf = decompose_partial(rows, &columns, dataset_name, &classification.partial);
    let third_nf = decompose_transitive(&second_nf, rows, &classification.transitive);

    NormalizationResult {
        unf,
        first_nf,
        second_nf,
        third_nf,
        dependencies,
        classification,
        candidate_keys,
        warnings,
    }
}

/// 2NF decomposition: each partial dependency is carved out into its own
/// (LHS ∪ RHS) projection table and the determined attribute leaves the
/// main column set. The residual main table comes first in the result.
fn decompose_partial(
    rows: &[Row],
    columns: &[String],
    dataset_name: &str,
    partial: &[Fd],
) -> Vec<Table> {
    let mut carved = Vec::new();
    let mut main_columns: Vec<String> = columns.to_vec();

    for fd in partial {
        let mut table_columns = fd.lhs.clone();
        table_columns.push(fd.rhs.clone());
        carved.push(Table::project(
            format!("tbl_{}_partial", fd.lhs.join("_")),
            &table_columns,
            rows,
        ));
        main_columns.retain(|c| c != &fd.rhs);
    }

    let main = Table::project(format!("{dataset_name}_main"), &main_columns, rows);
    let mut tables = vec![main];
    tables.extend(carved);
    tables
}

/// 3NF decomposition as a fold over the transitive dependencies.
///
/// Each step strips the determined attribute from every table in the
/// accumulator still carrying it, then appends the (LHS ∪ RHS) projection
/// table. The accumulator is an explicit value threaded through the fold,
/// so the ordering dependency between steps is visible: a later step sees
/// the column removals of every earlier one. Must stay sequential.
pub(crate) fn decompose_transitive(
    second_nf: &[Table],
    rows: &[Row],
    transitive: &[Fd],
) -> Vec<Table> {
    transitive.iter().fold(second_nf.to_vec(), |acc, fd| {
        let mut tables: Vec<Table> = acc
            .into_iter()
            .map(|t| {
                if t.has_column(&fd.rhs) {
                    t.without_column(&fd.rhs)
                } else {
                    t
                }
            })
            .collect();

        let mut table_columns = fd.lhs.clone();
        table_columns.push(fd.rhs.clone());
        tables.push(Table::project(
            format!("tbl_{}_transitive", fd.lhs.join("_")),
            &table_columns,
            rows,
        ));
        tables
    })
}
