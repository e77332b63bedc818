use crate::search::{
    heuristics::{ManhattanDistance, MisplacedTiles, ZeroHeuristic},
    Board, PuzzleState,
};
use serde::Deserialize;
use std::fmt::Debug;

pub type HeuristicValue = u32;

pub trait Heuristic: Debug {
    /// Estimate the number of moves needed to turn the state's board into
    /// `goal`.
    fn evaluate(&self, state: &PuzzleState, goal: &Board) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[default]
    #[clap(help = "Number of cells that differ from the goal, blank included.")]
    MisplacedTiles,
    #[clap(help = "Sum of the grid distances of each tile to its goal cell.")]
    Manhattan,
    #[clap(name = "zero", help = "The zero heuristic.")]
    #[serde(rename = "zero")]
    ZeroHeuristic,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::MisplacedTiles => Box::new(MisplacedTiles::new()),
            HeuristicName::Manhattan => Box::new(ManhattanDistance::new()),
            HeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{search::GOAL_BOARD, test_utils::*};

    #[test]
    fn every_heuristic_is_zero_at_the_goal() {
        let goal = PuzzleState::new(GOAL_BOARD);
        for name in [
            HeuristicName::MisplacedTiles,
            HeuristicName::Manhattan,
            HeuristicName::ZeroHeuristic,
        ] {
            assert_eq!(name.create().evaluate(&goal, &GOAL_BOARD), 0);
        }
    }

    #[test]
    fn create_picks_the_named_heuristic() {
        let start = start_state();
        let scores: Vec<HeuristicValue> = [
            HeuristicName::MisplacedTiles,
            HeuristicName::Manhattan,
            HeuristicName::ZeroHeuristic,
        ]
        .iter()
        .map(|name| name.create().evaluate(&start, &GOAL_BOARD))
        .collect();
        assert_eq!(scores, vec![5, 5, 0]);
    }
}
