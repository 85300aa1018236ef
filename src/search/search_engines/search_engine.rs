use crate::search::{
    search_engines::{BestFirstSearch, Termination},
    SearchProblem,
};
use clap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// `advance` was called after a terminal snapshot had been returned.
    #[error("the engine already reported success or failure and cannot advance")]
    EngineAlreadyTerminated,
    /// A driver stopped advancing the engine because a resource limit was hit.
    #[error("search stopped early: {0}")]
    Terminated(Termination),
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Uniform-cost search, ignores the heuristic.")]
    Ucs,
    #[clap(help = "A* search, guided by the admissible heuristic.")]
    Astar,
}

impl SearchEngineName {
    pub fn uses_heuristic(&self) -> bool {
        match self {
            SearchEngineName::Ucs => false,
            SearchEngineName::Astar => true,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchEngineName::Ucs => "UCS",
            SearchEngineName::Astar => "A*",
        }
    }

    pub fn create<'a, P: SearchProblem>(&self, problem: &'a P) -> BestFirstSearch<'a, P> {
        BestFirstSearch::new(problem, self.uses_heuristic())
    }
}
