use crate::search::{
    board::{to_coordinates, NUM_CELLS},
    heuristics::{Heuristic, HeuristicValue},
    Board, PuzzleState, BLANK,
};

/// Sum over all tiles (not the blank) of the horizontal plus vertical
/// distance between the tile's cell and its cell in the goal. Every move
/// shifts one tile by one cell, so this never overestimates.
#[derive(Clone, Debug, Default)]
pub struct ManhattanDistance {}

impl ManhattanDistance {
    pub fn new() -> Self {
        ManhattanDistance {}
    }
}

impl Heuristic for ManhattanDistance {
    fn evaluate(&self, state: &PuzzleState, goal: &Board) -> HeuristicValue {
        let mut goal_index = [0; NUM_CELLS];
        for (index, &tile) in goal.cells().iter().enumerate() {
            goal_index[usize::from(tile)] = index;
        }

        let mut distance = 0;
        for (index, &tile) in state.board().cells().iter().enumerate() {
            if tile == BLANK {
                continue;
            }
            let (x, y) = to_coordinates(index);
            let (goal_x, goal_y) = to_coordinates(goal_index[usize::from(tile)]);
            distance += x.abs_diff(goal_x) + y.abs_diff(goal_y);
        }
        distance as HeuristicValue
    }
}
