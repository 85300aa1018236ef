use crate::search::{Cost, SearchNode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;
use strum_macros::Display;

/// Lifecycle of a search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SearchStatus {
    /// Constructed, frontier holds only the start node
    Ready,
    /// At least one step taken, no outcome yet
    Running,
    /// A goal state was popped
    Success,
    /// The frontier ran dry without reaching a goal
    Failure,
}

impl SearchStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchStatus::Success | SearchStatus::Failure)
    }
}

/// Best finalised cost per explored state. Shared between the engine and the
/// snapshots it hands out; the engine copies it before writing whenever a
/// snapshot still holds it, so a retained snapshot never changes.
pub type ExploredTable<S> = Rc<HashMap<S, Cost>>;

/// Progress of a search that has not finished yet.
#[derive(Debug, Clone)]
pub struct Progress<S> {
    /// Number of nodes in the frontier, stale duplicates included
    pub frontier_size: usize,
    /// Number of nodes expanded so far
    pub expanded: usize,
    /// The node at the top of the frontier, about to be popped by the next
    /// step
    pub current_node: SearchNode<S>,
    /// Explored table as of this snapshot
    pub explored: ExploredTable<S>,
}

/// A path to a goal together with the cost of following it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution<S> {
    /// States from the start state to the goal state, both included
    pub path: Vec<S>,
    /// Total cost of the path
    pub cost: Cost,
    /// Number of nodes expanded before the goal was popped
    pub expanded: usize,
    /// Largest frontier size observed during the search
    pub max_frontier: usize,
}

/// How a finished search ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchOutcome<S> {
    Success(Solution<S>),
    /// No goal state is reachable from the start state
    Failure { expanded: usize },
}

impl<S> SearchOutcome<S> {
    pub fn expanded(&self) -> usize {
        match self {
            SearchOutcome::Success(solution) => solution.expanded,
            SearchOutcome::Failure { expanded } => *expanded,
        }
    }

    pub fn solution(&self) -> Option<&Solution<S>> {
        match self {
            SearchOutcome::Success(solution) => Some(solution),
            SearchOutcome::Failure { .. } => None,
        }
    }

    pub fn cost(&self) -> Option<Cost> {
        self.solution().map(|solution| solution.cost)
    }
}

/// What an engine reports after each call to
/// [`advance`](crate::search::search_engines::BestFirstSearch::advance).
#[derive(Debug, Clone)]
pub enum Snapshot<S> {
    Running(Progress<S>),
    Success(Solution<S>),
    Failure { expanded: usize },
}

impl<S> Snapshot<S> {
    pub fn status(&self) -> SearchStatus {
        match self {
            Snapshot::Running(_) => SearchStatus::Running,
            Snapshot::Success(_) => SearchStatus::Success,
            Snapshot::Failure { .. } => SearchStatus::Failure,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    pub fn expanded(&self) -> usize {
        match self {
            Snapshot::Running(progress) => progress.expanded,
            Snapshot::Success(solution) => solution.expanded,
            Snapshot::Failure { expanded } => *expanded,
        }
    }

    /// The outcome carried by a terminal snapshot, `None` while running.
    pub fn into_outcome(self) -> Option<SearchOutcome<S>> {
        match self {
            Snapshot::Running(_) => None,
            Snapshot::Success(solution) => Some(SearchOutcome::Success(solution)),
            Snapshot::Failure { expanded } => Some(SearchOutcome::Failure { expanded }),
        }
    }
}
