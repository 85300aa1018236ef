use clap::{Parser, Subcommand};
use serde::Serialize;
use std::{num::NonZeroUsize, path::PathBuf, process::ExitCode, time::Duration};
use tracing::{error, info, warn};
use treasure_search::search::{
    search_engines::{SearchEngineName, SearchOutcome, TerminationCondition},
    validate, Comparison, TreasureHunt, TreasureState, Verbosity,
};

#[derive(Parser)]
#[command(version)]
/// Find the cheapest route that picks up the key, opens the chest and
/// reaches the goal on a terrain map.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(help = "The TOML map file")]
    map: PathBuf,
    #[arg(
        help = "Write a JSON report of the outcome to this file",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    output: Option<PathBuf>,
    #[arg(
        help = "Number of engine steps between progress checks",
        short = 'b',
        long = "batch",
        id = "BATCH",
        default_value = "64"
    )]
    batch: NonZeroUsize,
    #[arg(
        help = "Give up on a search after this long, e.g. 30s or 2m",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "Give up on a search once memory use exceeds this many MB",
        short = 'm',
        long = "memory-limit",
        id = "MEMORY_LIMIT"
    )]
    memory_limit_mb: Option<usize>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single search engine on the map.
    Search {
        #[arg(
            value_enum,
            help = "The search engine to use",
            short = 'e',
            long = "engine",
            id = "ENGINE",
            default_value_t = SearchEngineName::Astar
        )]
        engine: SearchEngineName,
    },
    /// Run uniform-cost search and then A* on the same map, and report how
    /// many expansions the heuristic saved.
    Compare,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let hunt = match TreasureHunt::from_path(&cli.map) {
        Ok(hunt) => hunt,
        Err(e) => {
            error!("failed to load map {}: {}", cli.map.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut termination = TerminationCondition::new(cli.time_limit, cli.memory_limit_mb);
    match cli.command {
        Commands::Search { engine } => {
            let result = engine
                .create(&hunt)
                .run_with_limits(cli.batch, &mut termination);
            termination.finalise();
            let outcome = match result {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(engine = engine.label(), "{}", e);
                    return ExitCode::FAILURE;
                }
            };
            let solved = report(&hunt, engine, &outcome);
            write_report(&cli, &outcome);
            if solved {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Compare => {
            let result = Comparison::run(&hunt, cli.batch, &mut termination);
            termination.finalise();
            let comparison = match result {
                Ok(comparison) => comparison,
                Err(e) => {
                    error!("{}", e);
                    return ExitCode::FAILURE;
                }
            };
            let ucs_solved = report(&hunt, SearchEngineName::Ucs, &comparison.ucs);
            let astar_solved = report(&hunt, SearchEngineName::Astar, &comparison.astar);

            if let Some(reduction) = comparison.expanded_reduction_percent() {
                println!("A* expanded {:.1}% fewer nodes than UCS", reduction);
            }
            if ucs_solved && astar_solved && !comparison.costs_agree() {
                warn!("engines disagree on the optimal cost");
            }
            write_report(&cli, &comparison);
            if ucs_solved && astar_solved {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Print the outcome of one engine. Returns whether a valid solution was
/// found.
fn report(
    hunt: &TreasureHunt,
    engine_name: SearchEngineName,
    outcome: &SearchOutcome<TreasureState>,
) -> bool {
    let label = engine_name.label();
    match outcome {
        SearchOutcome::Success(solution) => {
            info!("validating path");
            if let Err(e) = validate(&solution.path, hunt, solution.cost) {
                error!("{} returned an invalid path: {}", label, e);
                return false;
            }
            info!("path is valid");

            println!("{}: path found", label);
            for state in &solution.path {
                println!("  {}", state);
            }
            println!("  cost: {}", solution.cost);
            println!("  expanded: {}", solution.expanded);
            println!("  max frontier: {}", solution.max_frontier);
            true
        }
        SearchOutcome::Failure { expanded } => {
            info!("no path found");
            println!("{}: no path found after expanding {} nodes", label, expanded);
            false
        }
    }
}

fn write_report<T: Serialize>(cli: &Cli, report: &T) {
    let Some(path) = &cli.output else {
        return;
    };
    let written = serde_json::to_string_pretty(report)
        .map_err(|e| e.to_string())
        .and_then(|json| std::fs::write(path, json).map_err(|e| e.to_string()));
    match written {
        Ok(()) => info!("report written to {}", path.display()),
        Err(e) => error!("failed to write report to {}: {}", path.display(), e),
    }
}
