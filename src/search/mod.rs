//! The state space of the 3x3 sliding-tile puzzle and the search engines that
//! explore it.

pub mod board;
pub mod heuristics;
mod puzzle_state;
mod run_statistics;
pub mod search_engines;
mod search_statistics;
mod visited_set;

pub use board::{Board, BoardError, PackedBoard, BLANK, GOAL_BOARD};
pub use heuristics::{
    Heuristic, HeuristicName, HeuristicValue, ManhattanDistance, MisplacedTiles, ZeroHeuristic,
};
pub use puzzle_state::{BlankMove, PuzzleState, Successors};
pub use run_statistics::RunStatistics;
pub use search_engines::{SearchEngine, SearchEngineName};
pub use search_statistics::SearchStatistics;
pub use visited_set::VisitedSet;
