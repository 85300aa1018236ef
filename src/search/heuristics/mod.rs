mod heuristic;
mod treasure_heuristic;

pub use heuristic::Heuristic;
pub use treasure_heuristic::TreasureHeuristic;
