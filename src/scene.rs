use crate::error::Result;
use crate::grid::TileGrid;
use crate::level::level_tile;
use crate::tile::Tile;
use grid_util::grid::Grid;
use grid_util::point::Point;

/// The classification passes of scene analysis. They run in the order of [SCENE_PASSES],
/// each one observing the reclassifications of the ones before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenePass {
    /// A wall with empty space directly above becomes [Tile::Floor].
    Floor,
    /// A floor with empty space directly left or right becomes [Tile::Corner].
    Corner,
    /// A wall with empty space directly left or right becomes [Tile::WallClimb].
    WallClimb,
}

pub const SCENE_PASSES: [ScenePass; 3] = [ScenePass::Floor, ScenePass::Corner, ScenePass::WallClimb];

/// A level grid annotated in place with floors, climbable walls, ledge corners and the
/// anchor nodes placed above every corner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneGrid {
    pub grid: TileGrid,
    anchors: Vec<Point>,
}

impl SceneGrid {
    /// Seeds the scene from the raw level symbols without analysing it.
    pub fn from_columns<S: AsRef<[char]>>(columns: &[S]) -> Result<SceneGrid> {
        Ok(SceneGrid::from_grid(TileGrid::classify(columns, level_tile)?))
    }

    /// Seeds the scene from an already classified level grid without analysing it.
    pub fn from_grid(grid: TileGrid) -> SceneGrid {
        SceneGrid {
            grid,
            anchors: Vec::new(),
        }
    }

    /// Runs every pass in order, then places the anchor nodes.
    pub fn analyze(&mut self) {
        for pass in SCENE_PASSES {
            self.run_pass(pass);
        }
        self.place_nodes();
    }

    pub fn run_pass(&mut self, pass: ScenePass) {
        match pass {
            ScenePass::Floor => self.mark_floors(),
            ScenePass::Corner => self.mark_corners(),
            ScenePass::WallClimb => self.mark_wall_climbs(),
        }
    }

    /// Rewrites every `from` cell for which `predicate` holds into `to`, in scan order.
    fn rewrite<F>(&mut self, from: Tile, to: Tile, predicate: F)
    where
        F: Fn(&TileGrid, Point) -> bool,
    {
        let matching = self
            .grid
            .positions()
            .filter(|p| self.grid.get_point(*p) == from)
            .collect::<Vec<_>>();
        for p in matching {
            if predicate(&self.grid, p) {
                self.grid.set_point(p, to);
            }
        }
    }

    pub fn mark_floors(&mut self) {
        self.rewrite(Tile::Wall, Tile::Floor, |grid, p| {
            grid.above(p.x, p.y) == Some(Tile::Empty)
        });
    }

    pub fn mark_corners(&mut self) {
        self.rewrite(Tile::Floor, Tile::Corner, open_side);
    }

    pub fn mark_wall_climbs(&mut self) {
        self.rewrite(Tile::Wall, Tile::WallClimb, open_side);
    }

    /// Places a [Tile::Node] one cell above every corner and records it as an anchor. A
    /// corner is a floor, so the cell above it always lies inside the grid.
    pub fn place_nodes(&mut self) {
        self.anchors = self
            .grid
            .positions()
            .filter(|p| self.grid.get_point(*p) == Tile::Corner)
            .map(|p| Point::new(p.x, p.y + 1))
            .collect();
        for anchor in &self.anchors {
            self.grid.set_point(*anchor, Tile::Node);
        }
    }

    /// Anchor positions in scan order of their corners.
    pub fn anchors(&self) -> &[Point] {
        &self.anchors
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.grid
            .positions()
            .filter(|p| self.grid.get_point(*p) == tile)
            .count()
    }
}

fn open_side(grid: &TileGrid, p: Point) -> bool {
    grid.left(p.x, p.y) == Some(Tile::Empty) || grid.right(p.x, p.y) == Some(Tile::Empty)
}
