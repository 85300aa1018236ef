use crate::search::{
    search_engines::{SearchEngineName, SearchError, SearchOutcome, TerminationCondition},
    SearchProblem,
};
use serde::Serialize;
use std::num::NonZeroUsize;
use tracing::info;

/// Outcomes of a uniform-cost run followed by an A* run on the same problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison<S> {
    pub ucs: SearchOutcome<S>,
    pub astar: SearchOutcome<S>,
}

impl<S> Comparison<S> {
    /// Run uniform-cost search to completion, then A*, advancing each engine
    /// `batch` steps at a time. The two engines never interleave, so each
    /// run's counters only reflect its own work. The limits in `termination`
    /// cover both runs together.
    pub fn run<P>(
        problem: &P,
        batch: NonZeroUsize,
        termination: &mut TerminationCondition,
    ) -> Result<Self, SearchError>
    where
        P: SearchProblem<State = S>,
    {
        let ucs = SearchEngineName::Ucs
            .create(problem)
            .run_with_limits(batch, termination)?;
        info!(expanded = ucs.expanded(), cost = ucs.cost(), "uniform-cost search done");
        let astar = SearchEngineName::Astar
            .create(problem)
            .run_with_limits(batch, termination)?;
        info!(expanded = astar.expanded(), cost = astar.cost(), "A* search done");
        Ok(Self { ucs, astar })
    }

    /// Whether both runs reached a goal at the same cost.
    pub fn costs_agree(&self) -> bool {
        match (self.ucs.cost(), self.astar.cost()) {
            (Some(ucs), Some(astar)) => ucs == astar,
            _ => false,
        }
    }

    /// Percentage of uniform-cost expansions that A* avoided. `None` unless
    /// both runs succeeded and uniform-cost search expanded anything.
    pub fn expanded_reduction_percent(&self) -> Option<f64> {
        if self.ucs.solution().is_none() || self.astar.solution().is_none() {
            return None;
        }
        let ucs = self.ucs.expanded();
        if ucs == 0 {
            return None;
        }
        let astar = self.astar.expanded();
        Some((ucs as f64 - astar as f64) / ucs as f64 * 100.)
    }
}
