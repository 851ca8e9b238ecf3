//! Analyze command - run the normalization pipeline and report on it.

use std::path::PathBuf;

use colored::Colorize;
use relnorm::{KeyFinderConfig, MinerConfig, ParserConfig, Relnorm, RelnormConfig, Stage};

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: PathBuf,
    json: bool,
    max_key_size: usize,
    limit_pairs: usize,
    no_pairs: bool,
    max_rows: Option<usize>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let config = RelnormConfig {
        parser: ParserConfig {
            max_rows,
            ..ParserConfig::default()
        },
        miner: MinerConfig {
            try_pairs: !no_pairs,
            limit_pairs,
            ..MinerConfig::default()
        },
        keys: KeyFinderConfig { max_key_size },
        ..RelnormConfig::default()
    };
    let engine = Relnorm::with_config(config);

    let report = engine.analyze_file(&file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows, {} columns)",
        "Analyzed".cyan().bold(),
        report.source.file.white(),
        report.summary.total_rows,
        report.summary.total_columns
    );

    println!(
        "Mined {} dependencies ({} partial, {} transitive), {} candidate keys",
        report.summary.dependency_count.to_string().white().bold(),
        report.summary.partial_count.to_string().yellow(),
        report.summary.transitive_count.to_string().yellow(),
        report.summary.candidate_key_count.to_string().green()
    );

    for key in &report.result.candidate_keys {
        println!("  {} ({})", "key".green(), key.join(", "));
    }

    if verbose {
        println!();
        println!("{}", "Dependencies:".yellow().bold());
        for fd in &report.result.dependencies {
            println!("  {}", fd);
        }
    }

    println!();
    for stage in Stage::ALL {
        let tables = report.result.tables_for(stage);
        println!("{} {} table(s)", stage.to_string().cyan(), tables.len());
        for table in tables {
            println!(
                "  {:30} {} column(s), {} row(s)",
                table.name,
                table.column_count(),
                table.row_count()
            );
        }
    }

    for warning in &report.result.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    Ok(())
}
