pub mod annealing;
pub mod backtracking;
pub mod bfs;
pub mod common;
pub mod hill_climbing;

pub use annealing::{solve_annealing, solve_annealing_with, Annealing, DEFAULT_STEP_LIMIT};
pub use backtracking::{solve_backtracking, Backtracking};
pub use bfs::{solve_bfs, Bfs};
pub use common::SearchStrategy;
pub use hill_climbing::{solve_hill_climber, HillClimber};
