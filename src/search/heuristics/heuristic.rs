use crate::search::Cost;
use std::fmt::Debug;

pub trait Heuristic<S>: Debug {
    /// Estimate the cost still needed to reach a goal from `state`. Must never
    /// overestimate it for A* to stay optimal.
    fn evaluate(&self, state: &S) -> Cost;
}
