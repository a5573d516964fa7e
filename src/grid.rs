use crate::error::MazeError;
use pathfinding::prelude::bfs;
use rustc_hash::FxHashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Manhattan distance between two positions.
    pub fn manhattan(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Free,
    Wall,
    Visited,
}

impl Cell {
    pub fn from_value(value: u8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Free),
            1 => Some(Cell::Wall),
            2 => Some(Cell::Visited),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        match self {
            Cell::Free => 0,
            Cell::Wall => 1,
            Cell::Visited => 2,
        }
    }
}

/// Rectangular occupancy grid. Cloning it gives a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub height: usize,
    pub width: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Builds a grid from literal rows of `0` (free) and `1` (wall).
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if height == 0 || width == 0 {
            return Err(MazeError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(MazeError::RaggedGrid {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            let line = values
                .into_iter()
                .enumerate()
                .map(|(col, value)| match Cell::from_value(value) {
                    Some(cell @ (Cell::Free | Cell::Wall)) => Ok(cell),
                    _ => Err(MazeError::InvalidCell { row, col, value }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            cells.push(line);
        }

        Ok(Grid {
            height,
            width,
            cells,
        })
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Applies a signed offset to `pos`, returning `None` when it leaves the grid.
    pub fn offset(&self, pos: Position, delta: (isize, isize)) -> Option<Position> {
        let row = pos.row.checked_add_signed(delta.0)?;
        let col = pos.col.checked_add_signed(delta.1)?;
        let next = Position { row, col };
        self.in_bounds(next).then_some(next)
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    /// All cells currently marked as visited.
    pub fn visited_cells(&self) -> FxHashSet<Position> {
        let mut visited = FxHashSet::default();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                if *cell == Cell::Visited {
                    visited.insert(Position { row, col });
                }
            }
        }
        visited
    }

    /// Non-wall orthogonal neighbors of `pos`.
    pub fn get_neighbors(&self, pos: &Position) -> Vec<Position> {
        [(0, 1), (0, -1), (1, 0), (-1, 0)]
            .into_iter()
            .filter_map(|delta| self.offset(*pos, delta))
            .filter(|next| self.get(*next) != Cell::Wall)
            .collect()
    }

    /// Shortest move count from `start` to `end` through non-wall cells.
    pub fn shortest_path_length(&self, start: Position, end: Position) -> Option<usize> {
        bfs(&start, |p| self.get_neighbors(p), |p| *p == end).map(|path| path.len() - 1)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            let values: Vec<String> = line.iter().map(|cell| cell.value().to_string()).collect();
            writeln!(f, "[{}]", values.join(", "))?;
        }
        Ok(())
    }
}
