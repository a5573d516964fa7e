use crate::algorithms::common::SearchStrategy;
use crate::state::State;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_STEP_LIMIT: usize = 1000;

/// Simulated-annealing style random walk with a fixed step budget.
pub struct Annealing {
    rng: StdRng,
    step_limit: usize,
}

impl Annealing {
    pub fn new(seed: Option<u64>, step_limit: usize) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Annealing { rng, step_limit }
    }
}

impl SearchStrategy for Annealing {
    fn name(&self) -> &'static str {
        "annealing"
    }

    fn solve(&mut self, initial: State) -> Option<State> {
        solve_annealing_with(initial, &mut self.rng, self.step_limit)
    }
}

/// Random walk with an entropy-seeded generator and the default budget.
pub fn solve_annealing(initial: State) -> Option<State> {
    let mut rng = StdRng::from_entropy();
    solve_annealing_with(initial, &mut rng, DEFAULT_STEP_LIMIT)
}

/// Draws `random_neighbor` proposals until the end is reached or
/// `step_limit` draws have been made. Rejected draws count as steps.
///
/// May report `None` on a solvable maze when the budget runs out.
pub fn solve_annealing_with<R: Rng + ?Sized>(
    initial: State,
    rng: &mut R,
    step_limit: usize,
) -> Option<State> {
    let mut state = initial;
    let mut accepted = 0usize;

    for step in 0..step_limit {
        if state.is_final() {
            debug!("annealing: reached end at step {} ({} accepted)", step, accepted);
            return Some(state.finish_path());
        }
        if let Some(next) = state.random_neighbor(rng) {
            state = next;
            accepted += 1;
        }
    }

    if state.is_final() {
        return Some(state.finish_path());
    }
    warn!(
        "annealing: step budget of {} exhausted at {} ({} accepted)",
        step_limit,
        state.current(),
        accepted
    );
    None
}
