//! relnorm CLI - FD-driven schema normalization for tabular datasets.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            file,
            json,
            max_key_size,
            limit_pairs,
            no_pairs,
            max_rows,
        } => commands::analyze::run(
            file,
            json,
            max_key_size,
            limit_pairs,
            no_pairs,
            max_rows,
            cli.verbose,
        ),

        Commands::Sql {
            file,
            stage,
            output,
            insert_rows,
        } => commands::sql::run(file, stage, output, insert_rows),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
