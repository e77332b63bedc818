use crate::{
    harness::REFERENCE_START_BOARD,
    search::{Board, PuzzleState},
};

/// The start configuration the reference run uses.
pub const START_BOARD: Board = REFERENCE_START_BOARD;

/// The goal with tiles 1 and 2 exchanged, which flips the permutation parity
/// and cuts it off from the goal's component.
pub const UNSOLVABLE_BOARD: Board = Board::new_unchecked([2, 1, 3, 8, 0, 4, 7, 6, 5]);

/// Blank in the top-left corner.
pub const CORNER_BLANK_BOARD: Board = Board::new_unchecked([0, 1, 3, 8, 2, 4, 7, 6, 5]);

/// Blank on the top edge.
pub const EDGE_BLANK_BOARD: Board = Board::new_unchecked([1, 0, 3, 8, 2, 4, 7, 6, 5]);

/// Blank in the centre; this is the goal itself.
pub const CENTRE_BLANK_BOARD: Board = Board::new_unchecked([1, 2, 3, 8, 0, 4, 7, 6, 5]);

/// Number of configurations reachable from any board, i.e. half of all
/// permutations of nine cells.
pub const COMPONENT_SIZE: usize = 181_440;

pub fn start_state() -> PuzzleState {
    PuzzleState::new(START_BOARD)
}
