use crate::grid::Position;
use thiserror::Error;

/// Errors raised while building a maze or resolving command-line choices.
///
/// Searching itself never fails: an unreachable end is reported as `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze grid has no rows or no columns")]
    EmptyGrid,
    #[error("maze row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("maze cell ({row}, {col}) holds {value}, only 0 (free) and 1 (wall) are allowed")]
    InvalidCell { row: usize, col: usize, value: u8 },
    #[error("{label} position {position} is outside the {height}x{width} grid")]
    OutOfBounds {
        label: &'static str,
        position: Position,
        height: usize,
        width: usize,
    },
    #[error("{label} position {position} is on a wall")]
    BlockedEndpoint {
        label: &'static str,
        position: Position,
    },
    #[error("unknown algorithm '{0}' (expected bfs, backtracking, hill_climbing, annealing or all)")]
    UnknownAlgorithm(String),
    #[error("unknown maze '{0}' (use --list-mazes to see the built-in ones)")]
    UnknownMaze(String),
}
