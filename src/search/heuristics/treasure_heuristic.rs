//! Lower bound for the ordered key, chest, goal trip.
//!
//! Each remaining leg of the trip is bounded below by the Manhattan distance
//! between its endpoints, since every passable cell costs at least 1 to
//! enter. Summing the legs that are still outstanding gives an admissible
//! estimate. A single move changes the estimate by at most 1, which is the
//! cheapest possible edge, so the estimate is also consistent.

use crate::search::{Cost, Heuristic, Position, TreasureState};

#[derive(Debug, Clone)]
pub struct TreasureHeuristic {
    key: Position,
    chest: Position,
    goal: Position,
    /// Distance of the chest-to-goal leg.
    chest_to_goal: Cost,
    /// Distance of the key-to-chest-to-goal legs.
    key_to_goal: Cost,
}

impl TreasureHeuristic {
    pub fn new(key: Position, chest: Position, goal: Position) -> Self {
        let chest_to_goal = distance(&chest, &goal);
        let key_to_goal = distance(&key, &chest) + chest_to_goal;
        Self {
            key,
            chest,
            goal,
            chest_to_goal,
            key_to_goal,
        }
    }
}

fn distance(from: &Position, to: &Position) -> Cost {
    from.manhattan_distance(to) as Cost
}

impl Heuristic<TreasureState> for TreasureHeuristic {
    fn evaluate(&self, state: &TreasureState) -> Cost {
        let position = &state.position;
        if state.has_treasure {
            distance(position, &self.goal)
        } else if state.has_key {
            distance(position, &self.chest) + self.chest_to_goal
        } else {
            distance(position, &self.key) + self.key_to_goal
        }
    }
}
