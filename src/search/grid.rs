use crate::search::{Position, ProblemConfigurationError, Terrain, MOVES};

/// A rectangular, immutable terrain map stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainGrid {
    width: usize,
    height: usize,
    cells: Vec<Terrain>,
}

impl TerrainGrid {
    /// Build a grid from its rows. Every row must have the same non-zero
    /// length, and there must be at least one row.
    pub fn from_rows(rows: Vec<Vec<Terrain>>) -> Result<Self, ProblemConfigurationError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(ProblemConfigurationError::EmptyGrid);
        }
        let height = rows.len();

        let mut cells = Vec::with_capacity(width * height);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ProblemConfigurationError::RaggedGrid {
                    row: row_index,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// A grid where every cell has the same terrain.
    pub fn filled(
        width: usize,
        height: usize,
        terrain: Terrain,
    ) -> Result<Self, ProblemConfigurationError> {
        if width == 0 || height == 0 {
            return Err(ProblemConfigurationError::EmptyGrid);
        }
        Ok(Self {
            width,
            height,
            cells: vec![terrain; width * height],
        })
    }

    /// Copy of this grid with one cell replaced.
    pub fn with_cell(mut self, position: Position, terrain: Terrain) -> Self {
        if self.contains(position) {
            let index = self.index(position);
            self.cells[index] = terrain;
        }
        self
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    pub fn get(&self, position: Position) -> Option<Terrain> {
        if self.contains(position) {
            Some(self.cells[self.index(position)])
        } else {
            None
        }
    }

    /// In-bounds axis-aligned neighbours of `position`, regardless of terrain.
    pub fn neighbours(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        MOVES
            .iter()
            .filter_map(move |&(dx, dy)| position.offset(dx, dy))
            .filter(|next| self.contains(*next))
    }

    /// Render the grid back into map file rows.
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|terrain| terrain.symbol()).collect())
            .collect()
    }

    #[inline(always)]
    fn index(&self, position: Position) -> usize {
        position.y * self.width + position.x
    }
}
