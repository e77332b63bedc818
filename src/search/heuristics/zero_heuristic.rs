use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    Board, PuzzleState,
};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&self, _state: &PuzzleState, _goal: &Board) -> HeuristicValue {
        0
    }
}
