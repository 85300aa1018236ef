mod comparison;
mod grid;
pub mod heuristics;
mod position;
pub mod problem_formulations;
mod search_node;
mod search_space;
mod search_statistics;
pub mod search_engines;
mod state;
mod task;
mod terrain;
mod validate;
mod verbosity;

pub use comparison::Comparison;
pub use grid::TerrainGrid;
pub use heuristics::Heuristic;
pub use position::{Landmark, Position, MOVES};
pub use problem_formulations::SearchProblem;
pub use search_node::{NodeId, SearchNode, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use state::TreasureState;
pub use task::{MapConfig, MapError, ProblemConfigurationError, TreasureHunt};
pub use terrain::Terrain;
pub use validate::{validate, PathValidationError};
pub use verbosity::Verbosity;

/// Cost of a move or a path. Terrain costs are whole numbers, so priorities
/// compare exactly.
pub type Cost = u64;
