use core::fmt;
use grid_util::point::Point;
use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::config::{SearchConfig, SearchStrategy};
use crate::error::Result;
use crate::grid::TileGrid;
use crate::level::{level_tile, LevelGrid};
use crate::observer::{NoopObserver, PathObserver};
use crate::scene::SceneGrid;
use crate::solver::greedy::GreedySolver;
use crate::solver::visibility_graph::VisibilityGraphSolver;
use crate::solver::{AnchorSolver, PathStatus, SearchSpace};
use crate::tile::Tile;
use crate::way::WayGrid;

/// One tagged point of a computed path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PathPoint {
    pub kind: Tile,
    pub x: i32,
    pub y: i32,
}

impl PathPoint {
    pub fn new(kind: Tile, point: Point) -> PathPoint {
        PathPoint {
            kind,
            x: point.x,
            y: point.y,
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl fmt::Display for PathPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}({}, {})", self.kind, self.x, self.y)
    }
}

/// Owns the grids of the current level and computes paths between the origin and target.
///
/// A path always starts with a [Tile::Origin] point, continues with the anchors chosen by the
/// configured solver (tagged [Tile::Up]) and ends with a [Tile::Target] point. When
/// [path_status](Self::path_status) is [PathStatus::Exhausted] the last segment, to the
/// target, was never verified.
pub struct PathEngine {
    level: LevelGrid,
    scene: SceneGrid,
    way: WayGrid,
    origin: Point,
    target: Point,
    config: SearchConfig,
    path_points: Vec<PathPoint>,
    path_status: PathStatus,
    observer: Box<dyn PathObserver>,
}

impl Default for PathEngine {
    fn default() -> PathEngine {
        PathEngine::with_config(SearchConfig::default())
    }
}

impl fmt::Debug for PathEngine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PathEngine")
            .field("origin", &self.origin)
            .field("target", &self.target)
            .field("config", &self.config)
            .field("anchors", &self.scene.anchors().len())
            .field("path_points", &self.path_points)
            .field("path_status", &self.path_status)
            .finish()
    }
}

impl PathEngine {
    pub fn new() -> PathEngine {
        PathEngine::default()
    }

    /// Origin and target start out at `(-1, -1)`, outside any level.
    pub fn with_config(config: SearchConfig) -> PathEngine {
        PathEngine {
            level: LevelGrid::default(),
            scene: SceneGrid::default(),
            way: WayGrid::default(),
            origin: Point::new(-1, -1),
            target: Point::new(-1, -1),
            config,
            path_points: Vec::new(),
            path_status: PathStatus::Exhausted,
            observer: Box::new(NoopObserver),
        }
    }

    pub fn with_observer<O: PathObserver + 'static>(mut self, observer: O) -> PathEngine {
        self.observer = Box::new(observer);
        self
    }

    /// Replaces the level with a column-major array of `'0'` (empty) and `'1'` (wall)
    /// symbols and analyses it. On error the previous level is kept untouched. Origin and
    /// target carry over to the new level; the previous path is kept until
    /// [update_path](Self::update_path) is called.
    pub fn ingest<S: AsRef<[char]>>(&mut self, columns: &[S]) -> Result<()> {
        let grid = TileGrid::classify(columns, level_tile)?;
        let level = LevelGrid::from_grid(grid.clone());
        let mut scene = SceneGrid::from_grid(grid.clone());
        let mut way = WayGrid::from_grid(grid);
        scene.analyze();
        way.set_origin(self.origin);
        way.set_target(self.target);
        debug!(
            "Ingested {}x{} level with {} anchors",
            level.width(),
            level.height(),
            scene.anchors().len()
        );
        self.level = level;
        self.scene = scene;
        self.way = way;
        self.observer.scene_analyzed(&self.scene);
        Ok(())
    }

    /// Any coordinate is accepted; points outside the level are never reachable.
    pub fn set_origin(&mut self, x: i32, y: i32) {
        self.origin = Point::new(x, y);
        self.way.set_origin(self.origin);
    }

    pub fn set_target(&mut self, x: i32, y: i32) {
        self.target = Point::new(x, y);
        self.way.set_target(self.target);
    }

    /// Moves the target to a uniformly chosen empty cell of the level. Returns the new
    /// target, or [None] if the level has no empty cell.
    pub fn set_random_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Point> {
        let point = self.level.empty_cells().choose(rng)?;
        self.set_target(point.x, point.y);
        Some(point)
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// Recomputes the path from the current origin, target and scene.
    pub fn update_path(&mut self) {
        let space = SearchSpace::new(
            &self.level,
            self.scene.anchors(),
            self.config.reach_distance,
        );
        let route = match self.config.strategy {
            SearchStrategy::Greedy => GreedySolver::new().solve(&space, self.origin, self.target),
            SearchStrategy::VisibilityGraph => {
                VisibilityGraphSolver::new().solve(&space, self.origin, self.target)
            }
        };
        let mut path_points = Vec::with_capacity(route.anchors.len() + 2);
        path_points.push(PathPoint::new(Tile::Origin, self.origin));
        path_points.extend(route.anchors.iter().map(|&a| PathPoint::new(Tile::Up, a)));
        path_points.push(PathPoint::new(Tile::Target, self.target));
        self.path_points = path_points;
        self.path_status = route.status;
        self.observer
            .path_updated(&self.path_points, self.path_status);
    }

    /// The path computed by the last [update_path](Self::update_path) call.
    pub fn path_points(&self) -> &[PathPoint] {
        &self.path_points
    }

    pub fn path_status(&self) -> PathStatus {
        self.path_status
    }

    /// Whether the last computed path was verified to reach the target.
    pub fn is_complete(&self) -> bool {
        !self.path_points.is_empty() && self.path_status == PathStatus::Reached
    }

    /// Anchors of the current scene in scan order.
    pub fn anchors(&self) -> &[Point] {
        self.scene.anchors()
    }

    /// Line of sight on the raw level from `(x1, y1)` to `(x2, y2)`.
    pub fn is_clear_path(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        self.level
            .is_clear_path(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn level(&self) -> &LevelGrid {
        &self.level
    }

    pub fn scene(&self) -> &SceneGrid {
        &self.scene
    }

    pub fn way(&self) -> &WayGrid {
        &self.way
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
