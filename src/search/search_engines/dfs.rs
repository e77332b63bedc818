//! Depth-first search

use crate::search::{
    search_engines::{graph_search, SearchEngine, StackFrontier},
    PuzzleState, RunStatistics,
};
use std::time::Instant;

#[derive(Debug, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for DFS {
    fn search(&mut self, start: PuzzleState, started_at: Instant) -> RunStatistics {
        graph_search(&mut StackFrontier::new(), start, started_at)
    }
}
