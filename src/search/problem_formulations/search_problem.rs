use crate::search::Cost;
use std::fmt::Debug;
use std::hash::Hash;

/// A state space with a single start state, a goal test and weighted
/// successors. States are compared structurally and used as map keys, so
/// `Eq` and `Hash` must agree on every field.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Every state reachable from `state` in one move, paired with the
    /// non-negative cost of that move.
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, Cost)>;

    /// Lower bound on the remaining cost from `state`. Only informed engines
    /// ask for it; uniform-cost search treats every estimate as 0.
    fn heuristic(&self, state: &Self::State) -> Cost;
}
