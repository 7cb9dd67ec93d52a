use grid_util::point::Point;
use log::{debug, info, warn};
use petgraph::algo::astar;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

use crate::grid::manhattan_distance;
use crate::solver::{AnchorSolver, PathStatus, Route, SearchSpace};

/// Directed graph whose nodes are the origin, every anchor and the target, with an edge from
/// one node to another if the second is reachable from the first, weighted by their Manhattan
/// distance.
pub type VisibilityGraph = DiGraph<Point, i64>;

/// Shortest anchor route over an explicit [VisibilityGraph].
///
/// Connected components of the graph are computed first to avoid searching when the target
/// cannot be reached, after which A* runs with the Manhattan distance to the target as
/// heuristic. Unlike [GreedySolver](super::greedy::GreedySolver) it never returns a partial
/// route: either the route reaches the target or no anchors are returned at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityGraphSolver;

impl VisibilityGraphSolver {
    pub fn new() -> VisibilityGraphSolver {
        VisibilityGraphSolver
    }

    /// Builds the graph and returns it with the origin and target nodes. No edge leads back
    /// into the origin.
    pub fn build_graph(
        space: &SearchSpace,
        origin: Point,
        target: Point,
    ) -> (VisibilityGraph, NodeIndex, NodeIndex) {
        let mut graph = VisibilityGraph::with_capacity(space.anchors.len() + 2, 0);
        let start = graph.add_node(origin);
        for &anchor in space.anchors {
            graph.add_node(anchor);
        }
        let goal = graph.add_node(target);
        for from in graph.node_indices() {
            for to in graph.node_indices() {
                if to == start || to == from {
                    continue;
                }
                let (a, b) = (graph[from], graph[to]);
                if space.reachable(&a, &b) {
                    graph.add_edge(from, to, manhattan_distance(&a, &b));
                }
            }
        }
        (graph, start, goal)
    }

    /// Links nodes joined by an edge in either direction.
    fn components(graph: &VisibilityGraph) -> UnionFind<usize> {
        let mut components = UnionFind::new(graph.node_count());
        for edge in graph.edge_references() {
            components.union(edge.source().index(), edge.target().index());
        }
        components
    }
}

impl AnchorSolver for VisibilityGraphSolver {
    fn solve(&self, space: &SearchSpace, origin: Point, target: Point) -> Route {
        let exhausted = Route {
            anchors: Vec::new(),
            status: PathStatus::Exhausted,
        };
        let (graph, start, goal) = Self::build_graph(space, origin, target);
        debug!(
            "Visibility graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        if !Self::components(&graph).equiv(start.index(), goal.index()) {
            info!("{} is not reachable from {}", target, origin);
            return exhausted;
        }
        let result = astar(
            &graph,
            start,
            |node| node == goal,
            |edge| *edge.weight(),
            |node| manhattan_distance(&graph[node], &target),
        );
        match result {
            Some((cost, path)) => {
                info!(
                    "{} is reachable from {} through {} anchors, cost {}",
                    target,
                    origin,
                    path.len() - 2,
                    cost
                );
                Route {
                    anchors: path[1..path.len() - 1]
                        .iter()
                        .map(|&node| graph[node])
                        .collect(),
                    status: PathStatus::Reached,
                }
            }
            None => {
                warn!(
                    "{} shares a component with {} but no directed route exists",
                    target, origin
                );
                exhausted
            }
        }
    }
}
