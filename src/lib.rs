//! # platform_pathfinding
//!
//! Route finding on the tile grid of a side-scrolling platform level. Reachability is not
//! plain walkability: a raw wall/empty grid is first analysed into floors, climbable walls
//! and ledge corners, a waypoint (anchor) is placed above every ledge corner, and routes are
//! threaded through those anchors under a line-of-sight and distance constraint.
//!
//! The default [solver::greedy::GreedySolver] is a bounded greedy heuristic with one step of
//! lookahead; it does not guarantee shortest routes and may give up before reaching the
//! target, which is reported through [PathStatus]. The
//! [solver::visibility_graph::VisibilityGraphSolver] instead runs A* over an explicit
//! visibility graph, after using
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid searching when the target cannot be reached.
//!
//! ```
//! use platform_pathfinding::{columns_from_rows, PathEngine, Tile};
//!
//! let level = columns_from_rows(
//!     "0000000\n\
//!      0000000\n\
//!      1111111",
//! );
//! let mut engine = PathEngine::new();
//! engine.ingest(&level).unwrap();
//! engine.set_origin(1, 1);
//! engine.set_target(5, 1);
//! engine.update_path();
//! let kinds: Vec<Tile> = engine.path_points().iter().map(|p| p.kind).collect();
//! assert_eq!(kinds, vec![Tile::Origin, Tile::Target]);
//! ```
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod level;
pub mod observer;
pub mod scene;
pub mod solver;
pub mod tile;
pub mod visibility;
pub mod way;

pub use config::{SearchConfig, SearchStrategy};
pub use engine::{PathEngine, PathPoint};
pub use error::{GridError, Result};
pub use grid::{columns_from_rows, manhattan_distance, TileGrid};
pub use level::LevelGrid;
pub use observer::{LogObserver, NoopObserver, PathObserver};
pub use scene::{ScenePass, SceneGrid, SCENE_PASSES};
pub use solver::{AnchorSolver, PathStatus, Route, SearchSpace};
pub use tile::{Tile, TileRepr};
pub use visibility::is_clear_path;
pub use way::WayGrid;

pub use grid_util::grid::Grid;
pub use grid_util::point::Point;

/// Manhattan distance below which a point counts as reachable from another one, given a
/// clear line of sight.
pub const REACH_DISTANCE: i32 = 10;
