use crate::error::Result;
use crate::grid::TileGrid;
use crate::tile::Tile;
use crate::visibility;
use grid_util::grid::Grid;
use grid_util::point::Point;

/// Symbol mapping shared by every grid seeded from a raw level.
pub(crate) fn level_tile(symbol: char) -> Option<Tile> {
    match symbol {
        '0' => Some(Tile::Empty),
        '1' => Some(Tile::Wall),
        _ => None,
    }
}

/// The raw level: every cell is either [Tile::Empty] or [Tile::Wall]. Line of sight is
/// always tested against this grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelGrid {
    pub grid: TileGrid,
}

impl LevelGrid {
    /// Classifies a column-major array of `'0'` (empty) and `'1'` (wall) symbols.
    pub fn from_columns<S: AsRef<[char]>>(columns: &[S]) -> Result<LevelGrid> {
        Ok(LevelGrid {
            grid: TileGrid::classify(columns, level_tile)?,
        })
    }

    /// Wraps a grid already classified into [Tile::Empty] and [Tile::Wall] cells.
    pub fn from_grid(grid: TileGrid) -> LevelGrid {
        LevelGrid { grid }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Out-of-bounds cells are not walls.
    pub fn is_wall(&self, point: Point) -> bool {
        self.grid.tile_at(point.x, point.y) == Some(Tile::Wall)
    }

    /// Empty cells in scan order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.grid
            .positions()
            .filter(move |p| self.grid.get_point(*p).is_empty())
    }

    /// See [visibility::is_clear_path].
    pub fn is_clear_path(&self, from: Point, to: Point) -> bool {
        visibility::is_clear_path(self, from, to)
    }
}
