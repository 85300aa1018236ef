//! Replays a solution path against the problem it claims to solve.

use crate::search::{Cost, SearchProblem, TreasureHunt, TreasureState};
use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathValidationError {
    #[error("the path is empty")]
    Empty,
    #[error("the path starts at {found}, expected {expected}")]
    WrongStart {
        expected: TreasureState,
        found: TreasureState,
    },
    #[error("step {step} from {from} to {to} is not a legal move")]
    IllegalMove {
        step: usize,
        from: TreasureState,
        to: TreasureState,
    },
    #[error("the path ends at {0}, which is not a goal state")]
    GoalNotReached(TreasureState),
    #[error("the path costs {actual}, but {reported} was reported")]
    CostMismatch { reported: Cost, actual: Cost },
}

/// Check that `path` is a legal walk from the start state to a goal state
/// costing exactly `reported_cost`. Every move must be one the problem would
/// generate, so adjacency, lava and the key-before-chest rule are all
/// enforced by the successor function itself.
pub fn validate(
    path: &[TreasureState],
    hunt: &TreasureHunt,
    reported_cost: Cost,
) -> Result<(), PathValidationError> {
    let first = path.first().ok_or(PathValidationError::Empty)?;
    if *first != hunt.start_state() {
        return Err(PathValidationError::WrongStart {
            expected: hunt.start_state(),
            found: *first,
        });
    }

    let mut actual = 0;
    for (step, (from, to)) in path.iter().tuple_windows().enumerate() {
        let (_, cost) = hunt
            .successors(from)
            .into_iter()
            .find(|(next, _)| next == to)
            .ok_or(PathValidationError::IllegalMove {
                step,
                from: *from,
                to: *to,
            })?;
        actual += cost;
    }

    let last = path.last().ok_or(PathValidationError::Empty)?;
    if !hunt.is_goal(last) {
        return Err(PathValidationError::GoalNotReached(*last));
    }
    if actual != reported_cost {
        return Err(PathValidationError::CostMismatch {
            reported: reported_cost,
            actual,
        });
    }

    Ok(())
}
