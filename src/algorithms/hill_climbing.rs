use crate::algorithms::common::SearchStrategy;
use crate::state::State;
use log::debug;

/// Greedy descent on Manhattan distance with no restarts.
#[derive(Default)]
pub struct HillClimber;

impl HillClimber {
    pub fn new() -> Self {
        HillClimber
    }
}

impl SearchStrategy for HillClimber {
    fn name(&self) -> &'static str {
        "hill_climbing"
    }

    fn solve(&mut self, initial: State) -> Option<State> {
        solve_hill_climber(initial)
    }
}

/// Repeatedly takes the first neighbor that does not increase the distance to
/// the end. Stops with `None` at a local optimum.
pub fn solve_hill_climber(initial: State) -> Option<State> {
    let mut state = initial;
    let mut steps = 0usize;

    loop {
        if state.is_final() {
            debug!("hill climbing: reached end after {} steps", steps);
            return Some(state.finish_path());
        }
        match state.first_better_neighbor() {
            Some(next) => {
                state = next;
                steps += 1;
            }
            None => {
                debug!(
                    "hill climbing: stuck at {} (score {}) after {} steps",
                    state.current(),
                    state.score(),
                    steps
                );
                return None;
            }
        }
    }
}
