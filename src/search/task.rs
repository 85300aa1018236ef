use crate::search::{
    heuristics::TreasureHeuristic, Landmark, Position, Terrain, TerrainGrid, TreasureState,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use thiserror::Error;

/// The problem instance is malformed. Raised when the problem is built, never
/// during search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemConfigurationError {
    #[error("the terrain grid has no cells")]
    EmptyGrid,
    #[error("row {row} of the terrain grid has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("the {landmark} at {position} lies outside the {width}x{height} grid")]
    LandmarkOutOfBounds {
        landmark: Landmark,
        position: Position,
        width: usize,
        height: usize,
    },
}

/// Failure to load a treasure hunt from a map file.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse map file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown terrain symbol {symbol:?} at row {row}, column {column}")]
    UnknownTerrain {
        symbol: char,
        row: usize,
        column: usize,
    },
    #[error(transparent)]
    Configuration(#[from] ProblemConfigurationError),
}

/// The on-disk form of a treasure hunt. Positions are `[x, y]` pairs and each
/// terrain row is a string of terrain symbols.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapConfig {
    pub start: [usize; 2],
    pub key: [usize; 2],
    pub chest: [usize; 2],
    pub goal: [usize; 2],
    pub terrain: Vec<String>,
}

/// A treasure hunt: reach the key, then the chest, then the goal, over a
/// weighted terrain grid. Immutable once built.
#[derive(Debug, Clone)]
pub struct TreasureHunt {
    grid: TerrainGrid,
    start: Position,
    key: Position,
    chest: Position,
    goal: Position,
    heuristic: TreasureHeuristic,
}

impl TreasureHunt {
    pub fn new(
        grid: TerrainGrid,
        start: Position,
        key: Position,
        chest: Position,
        goal: Position,
    ) -> Result<Self, ProblemConfigurationError> {
        let hunt = Self {
            heuristic: TreasureHeuristic::new(key, chest, goal),
            grid,
            start,
            key,
            chest,
            goal,
        };
        for landmark in Landmark::iter() {
            let position = hunt.landmark(landmark);
            if !hunt.grid.contains(position) {
                return Err(ProblemConfigurationError::LandmarkOutOfBounds {
                    landmark,
                    position,
                    width: hunt.grid.width(),
                    height: hunt.grid.height(),
                });
            }
        }
        Ok(hunt)
    }

    pub fn from_path(path: &Path) -> Result<Self, MapError> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, MapError> {
        let config: MapConfig = toml::from_str(text)?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &MapConfig) -> Result<Self, MapError> {
        let rows = config
            .terrain
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(column, symbol)| {
                        Terrain::from_symbol(symbol).ok_or(MapError::UnknownTerrain {
                            symbol,
                            row,
                            column,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let grid = TerrainGrid::from_rows(rows)?;
        Ok(Self::new(
            grid,
            config.start.into(),
            config.key.into(),
            config.chest.into(),
            config.goal.into(),
        )?)
    }

    pub fn to_config(&self) -> MapConfig {
        let pair = |position: Position| [position.x, position.y];
        MapConfig {
            start: pair(self.start),
            key: pair(self.key),
            chest: pair(self.chest),
            goal: pair(self.goal),
            terrain: self.grid.to_rows(),
        }
    }

    pub fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    pub fn landmark(&self, landmark: Landmark) -> Position {
        match landmark {
            Landmark::Start => self.start,
            Landmark::Key => self.key,
            Landmark::Chest => self.chest,
            Landmark::Goal => self.goal,
        }
    }

    pub(crate) fn treasure_heuristic(&self) -> &TreasureHeuristic {
        &self.heuristic
    }

    pub fn start_state(&self) -> TreasureState {
        TreasureState::new(self.start)
    }

    /// Only the goal cell with the treasure in hand counts. Standing on the
    /// key or the chest is never enough by itself.
    pub fn is_goal(&self, state: &TreasureState) -> bool {
        state.has_treasure && state.position == self.goal
    }
}
