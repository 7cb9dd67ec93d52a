use crate::error::{GridError, Result};
use crate::tile::Tile;
use core::fmt;
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;

/// Tile storage of a level. The first coordinate is the world x column, the second the world
/// y row, with y increasing upwards. The size is fixed at construction.
///
/// Cells are read and written through the [Grid] trait, whose accessors expect in-bounds
/// coordinates and panic otherwise. [tile_at](Self::tile_at) and the neighbour lookups
/// ([left](Self::left), [right](Self::right), [above](Self::above), [below](Self::below))
/// return [None] for any coordinate outside the grid instead.
#[derive(Clone, Debug)]
pub struct TileGrid {
    pub cells: SimpleGrid<Tile>,
}

impl Default for TileGrid {
    fn default() -> TileGrid {
        TileGrid {
            cells: SimpleGrid {
                width: 0,
                height: 0,
                values: Vec::new(),
            },
        }
    }
}

impl PartialEq for TileGrid {
    fn eq(&self, other: &TileGrid) -> bool {
        self.cells.width == other.cells.width
            && self.cells.height == other.cells.height
            && self.cells.values == other.cells.values
    }
}

impl Eq for TileGrid {}

impl Grid<Tile> for TileGrid {
    fn new(width: usize, height: usize, default_value: Tile) -> TileGrid {
        TileGrid {
            cells: SimpleGrid::new(width, height, default_value),
        }
    }

    fn get(&self, x: usize, y: usize) -> Tile {
        self.check_index(x, y);
        self.cells.get(x, y)
    }

    fn set(&mut self, x: usize, y: usize, value: Tile) {
        self.check_index(x, y);
        self.cells.set(x, y, value);
    }

    fn width(&self) -> usize {
        self.cells.width
    }

    fn height(&self) -> usize {
        self.cells.height
    }
}

impl TileGrid {
    /// Builds a grid from a column-major symbol array (`columns[x][y]`), mapping every symbol
    /// through `classify`. Fails if the array is empty, ragged or holds a symbol `classify`
    /// does not recognise.
    pub fn classify<S, F>(columns: &[S], classify: F) -> Result<TileGrid>
    where
        S: AsRef<[char]>,
        F: Fn(char) -> Option<Tile>,
    {
        let width = columns.len();
        let height = columns.first().map_or(0, |c| c.as_ref().len());
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        let mut grid = TileGrid::new(width, height, Tile::Empty);
        for (x, column) in columns.iter().enumerate() {
            let column = column.as_ref();
            if column.len() != height {
                return Err(GridError::Ragged {
                    column: x,
                    expected: height,
                    found: column.len(),
                });
            }
            for (y, &symbol) in column.iter().enumerate() {
                match classify(symbol) {
                    Some(tile) => grid.set(x, y, tile),
                    None => return Err(GridError::UnknownSymbol { x, y, symbol }),
                }
            }
        }
        Ok(grid)
    }

    fn check_index(&self, x: usize, y: usize) {
        assert!(
            self.index_in_bounds(x, y),
            "({}, {}) is outside a {}x{} grid",
            x,
            y,
            self.cells.width,
            self.cells.height
        );
    }

    /// Tests whether `(x, y)` lies inside the grid.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.point_in_bounds(Point::new(x, y))
    }

    /// The tile at `(x, y)`, or [None] outside the grid.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<Tile> {
        if self.in_bounds(x, y) {
            Some(self.get(x as usize, y as usize))
        } else {
            None
        }
    }

    /// The tile directly left of `(x, y)`, or [None] if there is none.
    pub fn left(&self, x: i32, y: i32) -> Option<Tile> {
        x.checked_sub(1).and_then(|x| self.tile_at(x, y))
    }

    pub fn right(&self, x: i32, y: i32) -> Option<Tile> {
        x.checked_add(1).and_then(|x| self.tile_at(x, y))
    }

    pub fn above(&self, x: i32, y: i32) -> Option<Tile> {
        y.checked_add(1).and_then(|y| self.tile_at(x, y))
    }

    pub fn below(&self, x: i32, y: i32) -> Option<Tile> {
        y.checked_sub(1).and_then(|y| self.tile_at(x, y))
    }

    /// All positions in scan order: column by column from x = 0, bottom to top within a
    /// column.
    pub fn positions(&self) -> impl Iterator<Item = Point> {
        let (w, h) = (self.cells.width as i32, self.cells.height as i32);
        (0..w).flat_map(move |x| (0..h).map(move |y| Point::new(x, y)))
    }
}

/// Computed in [i64] so that no pair of [i32] coordinates can overflow.
pub fn manhattan_distance(p1: &Point, p2: &Point) -> i64 {
    (i64::from(p1.x) - i64::from(p2.x)).abs() + (i64::from(p1.y) - i64::from(p2.y)).abs()
}

/// Turns a picture of a level, whose first line is the top row, into the column-major symbol
/// array used for ingestion. Leading and trailing whitespace of every line is ignored, as are
/// blank lines.
pub fn columns_from_rows(text: &str) -> Vec<Vec<char>> {
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect::<Vec<char>>())
        .collect::<Vec<_>>();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .map(|x| {
            rows.iter()
                .rev()
                .filter_map(|row| row.get(x).copied())
                .collect()
        })
        .collect()
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                write!(f, "{}", self.get(x, y))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
