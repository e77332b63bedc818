use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    Board, PuzzleState,
};

/// Counts the cells whose content differs from the goal. The blank is
/// counted like any other tile, so a board whose only fault is a displaced
/// blank still scores 2.
#[derive(Clone, Debug, Default)]
pub struct MisplacedTiles {}

impl MisplacedTiles {
    pub fn new() -> Self {
        MisplacedTiles {}
    }
}

impl Heuristic for MisplacedTiles {
    fn evaluate(&self, state: &PuzzleState, goal: &Board) -> HeuristicValue {
        state
            .board()
            .cells()
            .iter()
            .zip(goal.cells().iter())
            .filter(|(tile, goal_tile)| tile != goal_tile)
            .count() as HeuristicValue
    }
}
