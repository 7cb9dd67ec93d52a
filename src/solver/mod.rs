use crate::grid::manhattan_distance;
use crate::level::LevelGrid;
use crate::visibility::is_clear_path;
use grid_util::point::Point;

pub mod greedy;
pub mod visibility_graph;

/// Whether a route was verified to end within reach of its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathStatus {
    /// The target is within reach of the last anchor (or the origin if there is none).
    Reached,
    /// The search ran out of anchors; the final segment to the target is unverified.
    Exhausted,
}

/// The anchors a solver threads between origin and target, excluding both endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub anchors: Vec<Point>,
    pub status: PathStatus,
}

/// Everything a solver may consult: the raw level for line of sight, the anchors extracted
/// by scene analysis and the reach distance.
#[derive(Clone, Copy, Debug)]
pub struct SearchSpace<'a> {
    pub level: &'a LevelGrid,
    pub anchors: &'a [Point],
    pub reach_distance: i32,
}

impl<'a> SearchSpace<'a> {
    pub fn new(level: &'a LevelGrid, anchors: &'a [Point], reach_distance: i32) -> Self {
        SearchSpace {
            level,
            anchors,
            reach_distance,
        }
    }

    /// `to` lies within the reach distance of `from` and is visible from it. Not symmetric
    /// in general, since the ray only samples cells before its end.
    pub fn reachable(&self, from: &Point, to: &Point) -> bool {
        manhattan_distance(from, to) < i64::from(self.reach_distance)
            && is_clear_path(self.level, *from, *to)
    }

    /// Status of a route whose last point before the target is `last`.
    pub fn status(&self, last: &Point, target: &Point) -> PathStatus {
        if self.reachable(last, target) {
            PathStatus::Reached
        } else {
            PathStatus::Exhausted
        }
    }
}

pub trait AnchorSolver {
    /// Threads anchors from `origin` towards `target`. Always terminates and always returns a
    /// route, which may be [PathStatus::Exhausted].
    fn solve(&self, space: &SearchSpace, origin: Point, target: Point) -> Route;
}
