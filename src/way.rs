use crate::error::Result;
use crate::grid::TileGrid;
use crate::level::level_tile;
use crate::tile::Tile;
use grid_util::grid::Grid;
use grid_util::point::Point;
use log::debug;

/// Overlay of the level holding at most one [Tile::Origin] and one [Tile::Target] mark.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WayGrid {
    pub grid: TileGrid,
    level: TileGrid,
    origin: Option<Point>,
    target: Option<Point>,
}

impl WayGrid {
    pub fn from_columns<S: AsRef<[char]>>(columns: &[S]) -> Result<WayGrid> {
        Ok(WayGrid::from_grid(TileGrid::classify(columns, level_tile)?))
    }

    /// Seeds the overlay from an already classified level grid, with no marks set.
    pub fn from_grid(grid: TileGrid) -> WayGrid {
        WayGrid {
            level: grid.clone(),
            grid,
            origin: None,
            target: None,
        }
    }

    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    pub fn target(&self) -> Option<Point> {
        self.target
    }

    pub fn set_origin(&mut self, point: Point) {
        let previous = self.origin.replace(point);
        self.mark(previous, point, Tile::Origin);
    }

    pub fn set_target(&mut self, point: Point) {
        let previous = self.target.replace(point);
        self.mark(previous, point, Tile::Target);
    }

    /// Clears the previous mark, then draws the new one. A cleared cell shows the other mark
    /// if it is still stored there, the level tile otherwise. Marks outside the grid are kept
    /// as positions but never drawn.
    fn mark(&mut self, previous: Option<Point>, point: Point, tile: Tile) {
        if let Some(previous) = previous {
            if self.grid.point_in_bounds(previous) && self.grid.get_point(previous) == tile {
                let restored = self
                    .stored_mark(previous)
                    .unwrap_or_else(|| self.level.get_point(previous));
                self.grid.set_point(previous, restored);
            }
        }
        if self.grid.point_in_bounds(point) {
            self.grid.set_point(point, tile);
        } else {
            debug!("{:?} mark at {} lies outside the grid", tile, point);
        }
    }

    fn stored_mark(&self, point: Point) -> Option<Tile> {
        if self.origin == Some(point) {
            Some(Tile::Origin)
        } else if self.target == Some(point) {
            Some(Tile::Target)
        } else {
            None
        }
    }
}
