//! Breadth first search

use crate::search::{
    search_engines::{graph_search, QueueFrontier, SearchEngine},
    PuzzleState, RunStatistics,
};
use std::time::Instant;

#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for BFS {
    fn search(&mut self, start: PuzzleState, started_at: Instant) -> RunStatistics {
        graph_search(&mut QueueFrontier::new(), start, started_at)
    }
}
