use crate::search::Position;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A point in the treasure hunt state space: where the searcher stands, and
/// which of the ordered sub-goals it has completed. Both flags only ever go
/// from `false` to `true` along a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreasureState {
    pub position: Position,
    pub has_key: bool,
    pub has_treasure: bool,
}

impl TreasureState {
    /// A state at `position` with nothing collected.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            has_key: false,
            has_treasure: false,
        }
    }

    /// The state reached by stepping onto `next`. The key is picked up when
    /// standing on its cell; the treasure only when standing on the chest
    /// while holding the key, which includes a key acquired on this very
    /// step.
    pub fn step_to(&self, next: Position, key: Position, chest: Position) -> Self {
        let has_key = self.has_key || next == key;
        let has_treasure = self.has_treasure || (next == chest && has_key);
        Self {
            position: next,
            has_key,
            has_treasure,
        }
    }
}

impl Display for TreasureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position)?;
        if self.has_key {
            write!(f, " key")?;
        }
        if self.has_treasure {
            write!(f, " treasure")?;
        }
        Ok(())
    }
}
