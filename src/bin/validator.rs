use clap::Parser;
use std::{fs, path::PathBuf, process::ExitCode};
use treasure_search::search::{
    search_engines::SearchOutcome, validate, TreasureHunt, TreasureState,
};

#[derive(Parser)]
#[command(version)]
/// Check a JSON search report written by the planner against its map.
struct Cli {
    #[arg(help = "The TOML map file")]
    map: PathBuf,
    #[arg(help = "The JSON report to validate")]
    report: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let hunt = match TreasureHunt::from_path(&cli.map) {
        Ok(hunt) => hunt,
        Err(e) => {
            eprintln!("Failed to load map {}: {}", cli.map.display(), e);
            return ExitCode::FAILURE;
        }
    };
    let outcome: SearchOutcome<TreasureState> = match fs::read_to_string(&cli.report)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
    {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Failed to read report {}: {}", cli.report.display(), e);
            return ExitCode::FAILURE;
        }
    };

    match outcome {
        SearchOutcome::Success(solution) => {
            match validate(&solution.path, &hunt, solution.cost) {
                Ok(()) => {
                    println!("Path is valid, cost {}", solution.cost);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    println!("Path is invalid: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        SearchOutcome::Failure { expanded } => {
            println!(
                "Report records a failed search ({} nodes expanded), nothing to validate",
                expanded
            );
            ExitCode::SUCCESS
        }
    }
}
