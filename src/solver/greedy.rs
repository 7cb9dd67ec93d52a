use grid_util::point::Point;
use log::{debug, info, warn};

use crate::grid::manhattan_distance;
use crate::solver::{AnchorSolver, Route, SearchSpace};

/// Greedy best-first threading of anchors with one step of lookahead.
///
/// From the current point, the accessible anchors are those not yet visited, within reach
/// and visible. Among the accessible anchors from which at least one other accessible anchor
/// is reachable, the one closest to the target (Manhattan distance) is taken; if none has such
/// a successor, the closest accessible anchor is taken. Ties go to the anchor that comes first
/// in scan order. The search stops once the target is within reach, or gives up when nothing
/// is accessible. Every anchor is visited at most once, so it takes at most
/// `anchors.len()` steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySolver;

impl GreedySolver {
    pub fn new() -> GreedySolver {
        GreedySolver
    }

    fn accessible(&self, space: &SearchSpace, current: &Point, visited: &[bool]) -> Vec<usize> {
        space
            .anchors
            .iter()
            .enumerate()
            .filter(|(ix, anchor)| !visited[*ix] && space.reachable(current, anchor))
            .map(|(ix, _)| ix)
            .collect()
    }

    fn select(&self, space: &SearchSpace, accessible: &[usize], target: &Point) -> Option<usize> {
        let anchors = space.anchors;
        let to_target = |ix: &usize| manhattan_distance(&anchors[*ix], target);
        let has_successor = |ix: usize| {
            accessible
                .iter()
                .any(|&other| other != ix && space.reachable(&anchors[ix], &anchors[other]))
        };
        accessible
            .iter()
            .copied()
            .filter(|&ix| has_successor(ix))
            .min_by_key(to_target)
            .or_else(|| accessible.iter().copied().min_by_key(to_target))
    }
}

impl AnchorSolver for GreedySolver {
    fn solve(&self, space: &SearchSpace, origin: Point, target: Point) -> Route {
        let mut current = origin;
        let mut visited = vec![false; space.anchors.len()];
        let mut route = Vec::new();
        while route.len() < space.anchors.len() {
            if space.reachable(&current, &target) {
                break;
            }
            let accessible = self.accessible(space, &current, &visited);
            match self.select(space, &accessible, &target) {
                Some(ix) => {
                    current = space.anchors[ix];
                    debug!(
                        "Selected anchor {} out of {} accessible",
                        current,
                        accessible.len()
                    );
                    visited[ix] = true;
                    route.push(current);
                }
                None => {
                    warn!("No accessible anchors left at {}", current);
                    break;
                }
            }
        }
        let status = space.status(&current, &target);
        info!(
            "Greedy search from {} to {} visited {} anchors: {:?}",
            origin,
            target,
            route.len(),
            status
        );
        Route {
            anchors: route,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::PathStatus;
    use crate::{columns_from_rows, LevelGrid};

    fn open_level(width: usize, height: usize) -> LevelGrid {
        let column = vec!['0'; height];
        LevelGrid::from_columns(&vec![column; width]).unwrap()
    }

    #[test]
    fn direct_reach_needs_no_anchors() {
        let level = open_level(12, 3);
        let anchors = [Point::new(5, 1)];
        let space = SearchSpace::new(&level, &anchors, 10);
        let route = GreedySolver::new().solve(&space, Point::new(0, 0), Point::new(8, 0));
        assert!(route.anchors.is_empty());
        assert_eq!(route.status, PathStatus::Reached);
    }

    /// A chain of anchors 6 apart leads to a target 24 away.
    #[test]
    fn follows_anchor_chain() {
        let level = open_level(30, 2);
        let anchors = [Point::new(6, 0), Point::new(12, 0), Point::new(18, 0)];
        let space = SearchSpace::new(&level, &anchors, 10);
        let route = GreedySolver::new().solve(&space, Point::new(0, 0), Point::new(24, 0));
        assert_eq!(route.anchors, anchors.to_vec());
        assert_eq!(route.status, PathStatus::Reached);
    }

    /// The anchor closest to the target is a dead end, so one that continues the chain is
    /// preferred.
    #[test]
    fn lookahead_avoids_dead_end() {
        // From the origin (10, 10) all three anchors are accessible. (14, 14) is closest to
        // the target, but neither other anchor is in reach from it.
        let level = open_level(32, 16);
        let anchors = [Point::new(3, 10), Point::new(6, 10), Point::new(14, 14)];
        let space = SearchSpace::new(&level, &anchors, 10);
        let route = GreedySolver::new().solve(&space, Point::new(10, 10), Point::new(30, 14));
        assert_eq!(route.anchors[0], Point::new(6, 10));
        assert!(!route.anchors.contains(&Point::new(14, 14)));
    }

    /// A wall splits the level; the route stops at the last anchor before it.
    #[test]
    fn exhaustion_is_reported() {
        // |000000001000000000|
        // |000000001000000000|
        let level = LevelGrid::from_columns(&columns_from_rows(
            "000000001000000000
             000000001000000000",
        ))
        .unwrap();
        let anchors = [Point::new(4, 0), Point::new(12, 0)];
        let space = SearchSpace::new(&level, &anchors, 10);
        let route = GreedySolver::new().solve(&space, Point::new(0, 0), Point::new(16, 0));
        assert_eq!(route.anchors, vec![Point::new(4, 0)]);
        assert_eq!(route.status, PathStatus::Exhausted);
    }

    #[test]
    fn ties_break_by_scan_order() {
        let level = open_level(20, 9);
        // Both anchors are accessible from the origin and 11 away from the target.
        let anchors = [Point::new(5, 4), Point::new(5, 8)];
        let space = SearchSpace::new(&level, &anchors, 10);
        let route = GreedySolver::new().solve(&space, Point::new(0, 4), Point::new(14, 6));
        assert_eq!(route.anchors[0], Point::new(5, 4));
    }
}
