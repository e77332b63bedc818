//! Frontiers hold the states that have been discovered but not yet expanded.
//! The order in which a frontier hands states back is the only thing that
//! distinguishes the search engines from one another.

use crate::search::{Board, Heuristic, HeuristicValue, PuzzleState};
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::VecDeque, fmt::Debug};

pub trait Frontier: Debug {
    fn push(&mut self, state: PuzzleState);

    fn pop(&mut self) -> Option<PuzzleState>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct StackFrontier {
    stack: Vec<PuzzleState>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn push(&mut self, state: PuzzleState) {
        self.stack.push(state);
    }

    fn pop(&mut self) -> Option<PuzzleState> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    queue: VecDeque<PuzzleState>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn push(&mut self, state: PuzzleState) {
        self.queue.push_back(state);
    }

    fn pop(&mut self) -> Option<PuzzleState> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Priority of a state in a [`PriorityFrontier`]: the f-value first, then
/// the insertion number so that equal f-values come out in insertion order.
type Priority = Reverse<(HeuristicValue, u64)>;

/// Hands back the state with the smallest `cost + h(state)`. With the zero
/// heuristic this is uniform-cost search, with an informative heuristic it is
/// A*.
///
/// States are keyed by value in the underlying queue, so the same state must
/// not be pushed twice; the visited set of the search guarantees this.
#[derive(Debug)]
pub struct PriorityFrontier {
    queue: PriorityQueue<PuzzleState, Priority>,
    heuristic: Box<dyn Heuristic>,
    goal: Board,
    insertions: u64,
}

impl PriorityFrontier {
    pub fn new(heuristic: Box<dyn Heuristic>, goal: Board) -> Self {
        Self {
            queue: PriorityQueue::new(),
            heuristic,
            goal,
            insertions: 0,
        }
    }

    fn f_value(&self, state: &PuzzleState) -> HeuristicValue {
        state.cost() + self.heuristic.evaluate(state, &self.goal)
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, state: PuzzleState) {
        let priority = Reverse((self.f_value(&state), self.insertions));
        self.insertions += 1;
        let previous = self.queue.push(state, priority);
        debug_assert!(previous.is_none(), "State pushed twice: {:?}", state);
    }

    fn pop(&mut self) -> Option<PuzzleState> {
        self.queue.pop().map(|(state, _)| state)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
