use crate::algorithms::common::SearchStrategy;
use crate::direction::Direction;
use crate::state::State;

/// Recursive depth-first search. Departed cells are marked visited in each
/// copy, so no extra visited set is kept.
#[derive(Default)]
pub struct Backtracking;

impl Backtracking {
    pub fn new() -> Self {
        Backtracking
    }
}

impl SearchStrategy for Backtracking {
    fn name(&self) -> &'static str {
        "backtracking"
    }

    fn solve(&mut self, initial: State) -> Option<State> {
        solve_backtracking(initial)
    }
}

/// Tries each direction in fixed order and returns the first branch that
/// reaches the end. Recursion depth is bounded by the number of free cells.
pub fn solve_backtracking(state: State) -> Option<State> {
    if state.is_final() {
        return Some(state.finish_path());
    }

    Direction::ALL
        .iter()
        .filter(|direction| state.can_move(**direction, false))
        .filter_map(|direction| state.moved(*direction, false))
        .find_map(solve_backtracking)
}
