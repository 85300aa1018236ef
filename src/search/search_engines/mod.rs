mod best_first_search;
mod search_engine;
mod snapshot;
mod termination_condition;

pub use best_first_search::BestFirstSearch;
pub use search_engine::{SearchEngineName, SearchError};
pub use snapshot::{ExploredTable, Progress, SearchOutcome, SearchStatus, Snapshot, Solution};
pub use termination_condition::{Termination, TerminationCondition};
