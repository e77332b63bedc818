mod astar;
mod bfs;
mod dfs;
mod frontier;
mod graph_search;
mod search_engine;
mod ucs;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
pub use graph_search::{graph_search, graph_search_with_observer};
pub use search_engine::{SearchEngine, SearchEngineName};
pub use ucs::UCS;
