use crate::REACH_DISTANCE;

/// Which solver [PathEngine::update_path](crate::PathEngine::update_path) runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// [GreedySolver](crate::solver::greedy::GreedySolver).
    #[default]
    Greedy,
    /// [VisibilityGraphSolver](crate::solver::visibility_graph::VisibilityGraphSolver).
    VisibilityGraph,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Points closer than this (Manhattan distance) with a clear line of sight are directly
    /// reachable from each other.
    pub reach_distance: i32,
    pub strategy: SearchStrategy,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            reach_distance: REACH_DISTANCE,
            strategy: SearchStrategy::Greedy,
        }
    }
}
