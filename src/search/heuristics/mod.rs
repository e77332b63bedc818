mod heuristic;
mod manhattan_distance;
mod misplaced_tiles;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan_distance::ManhattanDistance;
pub use misplaced_tiles::MisplacedTiles;
pub use zero_heuristic::ZeroHeuristic;
