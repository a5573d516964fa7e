//! Built-in literal mazes selectable from the command line.

use crate::error::MazeError;
use crate::grid::{Grid, Position};
use crate::state::State;

pub struct MazeDefinition {
    pub name: &'static str,
    pub description: &'static str,
    rows: &'static [&'static [u8]],
    start: (usize, usize),
    end: (usize, usize),
}

impl MazeDefinition {
    /// Builds the initial search state for this maze.
    pub fn initial_state(&self) -> Result<State, MazeError> {
        let rows = self.rows.iter().map(|row| row.to_vec()).collect();
        let grid = Grid::from_rows(rows)?;
        State::new(
            grid,
            Position::new(self.start.0, self.start.1),
            Position::new(self.end.0, self.end.1),
        )
    }
}

pub const MAZES: &[MazeDefinition] = &[
    MazeDefinition {
        name: "default",
        description: "3x3 maze with one wall in the middle",
        rows: &[&[0, 0, 0], &[0, 1, 0], &[0, 0, 1]],
        start: (0, 1),
        end: (2, 1),
    },
    MazeDefinition {
        name: "corridor",
        description: "open 5x5 room with no traps",
        rows: &[
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ],
        start: (0, 0),
        end: (4, 4),
    },
    MazeDefinition {
        name: "u_trap",
        description: "U-shaped wall that traps greedy descent",
        rows: &[
            &[0, 0, 0, 0, 0],
            &[0, 1, 1, 1, 0],
            &[0, 0, 0, 1, 0],
            &[1, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0],
        ],
        start: (2, 2),
        end: (4, 2),
    },
    MazeDefinition {
        name: "walled_off",
        description: "end sealed behind a full wall",
        rows: &[&[0, 0, 0], &[1, 1, 1], &[0, 0, 0]],
        start: (0, 0),
        end: (2, 2),
    },
    MazeDefinition {
        name: "spiral",
        description: "7x7 spiral leading to the centre",
        rows: &[
            &[0, 0, 0, 0, 0, 0, 0],
            &[1, 1, 1, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0, 1, 0],
            &[0, 1, 1, 1, 0, 1, 0],
            &[0, 1, 0, 0, 0, 1, 0],
            &[0, 1, 1, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0, 0, 0],
        ],
        start: (0, 0),
        end: (4, 2),
    },
];

pub fn find(name: &str) -> Result<&'static MazeDefinition, MazeError> {
    MAZES
        .iter()
        .find(|maze| maze.name == name)
        .ok_or_else(|| MazeError::UnknownMaze(name.to_string()))
}
