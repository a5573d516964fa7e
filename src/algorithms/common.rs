use crate::state::State;

/// A maze search that turns an initial state into a finished one, or `None`
/// when it gives up or no path exists.
pub trait SearchStrategy {
    fn name(&self) -> &'static str;

    fn solve(&mut self, initial: State) -> Option<State>;
}
