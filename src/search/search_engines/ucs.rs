//! Uniform-cost search. Every move costs one, so this expands states in the
//! same order as breadth-first search; it differs only in using a priority
//! queue on the path cost.

use crate::search::{
    search_engines::{graph_search, PriorityFrontier, SearchEngine},
    PuzzleState, RunStatistics, ZeroHeuristic, GOAL_BOARD,
};
use std::time::Instant;

#[derive(Debug, Default)]
pub struct UCS {}

impl UCS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for UCS {
    fn search(&mut self, start: PuzzleState, started_at: Instant) -> RunStatistics {
        let mut frontier = PriorityFrontier::new(Box::new(ZeroHeuristic::new()), GOAL_BOARD);
        graph_search(&mut frontier, start, started_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn ucs_start_board() {
        let statistics = UCS::new().search(start_state(), Instant::now());
        assert!(statistics.succeeded);
        assert_eq!(statistics.nodes_visited, 60);
    }
}
