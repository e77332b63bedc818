//! Search states of the sliding-tile puzzle and the transitions between them.

use crate::search::{
    board::{to_coordinates, to_index, WIDTH},
    Board, PackedBoard, GOAL_BOARD,
};
use smallvec::SmallVec;

/// The blank has at most four neighbours.
pub const MAX_SUCCESSORS: usize = 4;

pub type Successors = SmallVec<[PuzzleState; MAX_SUCCESSORS]>;

/// A move of the blank cell, named after the direction the blank travels in
/// the `(x, y)` frame of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankMove {
    Right,
    Down,
    Left,
    Up,
}

impl BlankMove {
    /// The order in which successors are generated. Depth-first search
    /// explores in the reverse of this order, since the last pushed successor
    /// is popped first.
    pub const ALL: [BlankMove; 4] = [
        BlankMove::Right,
        BlankMove::Down,
        BlankMove::Left,
        BlankMove::Up,
    ];

    /// The `(dx, dy)` offset applied to the blank's coordinates.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            BlankMove::Right => (1, 0),
            BlankMove::Down => (0, 1),
            BlankMove::Left => (-1, 0),
            BlankMove::Up => (0, -1),
        }
    }
}

/// A board together with the number of moves taken to reach it. States are
/// plain values; successors are fresh states and never alias their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    board: Board,
    /// Length of the path along which this state was reached, which is not
    /// necessarily the shortest one.
    cost: u32,
}

impl PuzzleState {
    /// Create a start state, which has cost 0.
    pub fn new(board: Board) -> Self {
        Self { board, cost: 0 }
    }

    pub fn with_cost(board: Board, cost: u32) -> Self {
        Self { board, cost }
    }

    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline(always)]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    #[inline(always)]
    pub fn pack(&self) -> PackedBoard {
        self.board.pack()
    }

    pub fn is_goal(&self) -> bool {
        self.board == GOAL_BOARD
    }

    /// The state reached by moving the blank, or `None` if the move would
    /// push the blank off the board.
    pub fn successor(&self, blank_move: BlankMove) -> Option<PuzzleState> {
        let blank = self.board.blank_index();
        let (x, y) = to_coordinates(blank);
        let (dx, dy) = blank_move.as_offset();

        let new_x = x.checked_add_signed(dx).filter(|&v| v < WIDTH)?;
        let new_y = y.checked_add_signed(dy).filter(|&v| v < WIDTH)?;

        Some(Self {
            board: self.board.swapped(blank, to_index(new_x, new_y)),
            cost: self.cost + 1,
        })
    }

    /// All states one move away, in [`BlankMove::ALL`] order. There are two
    /// when the blank sits in a corner, three on an edge and four in the
    /// centre.
    pub fn successors(&self) -> Successors {
        BlankMove::ALL
            .iter()
            .filter_map(|&blank_move| self.successor(blank_move))
            .collect()
    }
}
