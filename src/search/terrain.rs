use crate::search::Cost;
use strum_macros::{Display, EnumIter};

/// The kind of ground covering a grid cell. Every kind except lava has a
/// fixed cost for moving onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Terrain {
    Sand,
    Jungle,
    Lake,
    Lava,
}

impl Terrain {
    /// Cost of stepping onto a cell of this terrain, `None` if the cell can
    /// never be entered.
    pub fn cost(self) -> Option<Cost> {
        match self {
            Terrain::Sand => Some(1),
            Terrain::Jungle => Some(5),
            Terrain::Lake => Some(10),
            Terrain::Lava => None,
        }
    }

    /// The character used for this terrain in map files.
    pub fn symbol(self) -> char {
        match self {
            Terrain::Sand => '.',
            Terrain::Jungle => 'J',
            Terrain::Lake => '~',
            Terrain::Lava => '#',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Terrain::Sand),
            'J' => Some(Terrain::Jungle),
            '~' => Some(Terrain::Lake),
            '#' => Some(Terrain::Lava),
            _ => None,
        }
    }
}
