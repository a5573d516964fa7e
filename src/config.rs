use crate::algorithms::DEFAULT_STEP_LIMIT;
use crate::error::MazeError;
use clap::Parser;
use std::fmt;
use std::str::FromStr;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Search a grid maze with one of several strategies", long_about = None)]
pub struct Config {
    /// bfs, backtracking, hill_climbing, annealing or all
    #[arg(long, default_value = "bfs")]
    pub algorithm: String,

    #[arg(long, default_value = "default")]
    pub maze: String,

    /// Seed for the annealing random walk
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = DEFAULT_STEP_LIMIT)]
    pub step_limit: usize,

    /// Only print the resulting grid or the failure message
    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    #[arg(long, default_value_t = false)]
    pub list_mazes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Backtracking,
    HillClimbing,
    Annealing,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Backtracking,
        Algorithm::HillClimbing,
        Algorithm::Annealing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Backtracking => "backtracking",
            Algorithm::HillClimbing => "hill_climbing",
            Algorithm::Annealing => "annealing",
        }
    }
}

impl FromStr for Algorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| MazeError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
