use crate::search::{
    search_engines::{AStar, BFS, DFS, UCS},
    HeuristicName, PuzzleState, RunStatistics,
};
use serde::Deserialize;
use std::{fmt::Debug, time::Instant};

pub trait SearchEngine: Debug {
    /// Search from `start` to the goal. Timings in the returned statistics
    /// are measured from `started_at`.
    fn search(&mut self, start: PuzzleState, started_at: Instant) -> RunStatistics;
}

/// The available search engines, declared in the order the harness runs
/// them. The display form is the name printed in reports.
#[derive(
    clap::ValueEnum,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Depth-first search.")]
    #[strum(serialize = "DFS")]
    Dfs,
    #[clap(help = "Uniform-cost search.")]
    #[strum(serialize = "UCS")]
    Ucs,
    #[clap(help = "Breadth-first search.")]
    #[strum(serialize = "BFS")]
    Bfs,
    #[clap(help = "A* search, guided by the chosen heuristic.", alias = "astar")]
    #[serde(alias = "astar")]
    #[strum(serialize = "A*")]
    AStar,
}

impl SearchEngineName {
    /// Create the engine. `heuristic` is only used by engines that are
    /// guided by one.
    pub fn create(&self, heuristic: HeuristicName) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::Dfs => Box::new(DFS::new()),
            SearchEngineName::Ucs => Box::new(UCS::new()),
            SearchEngineName::Bfs => Box::new(BFS::new()),
            SearchEngineName::AStar => Box::new(AStar::new(heuristic)),
        }
    }
}
