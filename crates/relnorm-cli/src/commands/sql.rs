//! Sql command - export a normalization stage as SQL.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use relnorm::{generate_sql, Relnorm, Stage};

pub fn run(
    file: PathBuf,
    stage: Stage,
    output: Option<PathBuf>,
    insert_rows: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let engine = Relnorm::new();
    let report = engine.analyze_file(&file)?;
    let sql = generate_sql(&report.result, stage, insert_rows);

    match output {
        Some(path) => {
            fs::write(&path, &sql)?;
            eprintln!(
                "{} {} SQL for stage {} to {}",
                "Wrote".cyan().bold(),
                report.source.file,
                stage,
                path.display()
            );
        }
        None => print!("{sql}"),
    }

    Ok(())
}
