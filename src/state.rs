use crate::direction::Direction;
use crate::error::MazeError;
use crate::grid::{Cell, Grid, Position};
use rand::Rng;
use std::fmt;

/// A snapshot of the search: its own copy of the grid plus the start, end and
/// current positions.
///
/// Every successor owns a fresh copy of the grid with its predecessor's cell
/// marked visited, so sibling branches never see each other's marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    grid: Grid,
    start: Position,
    end: Position,
    current: Position,
    moves: usize,
}

impl State {
    /// Creates the initial state of a search, positioned on `start`.
    pub fn new(grid: Grid, start: Position, end: Position) -> Result<Self, MazeError> {
        for (label, position) in [("start", start), ("end", end)] {
            if !grid.in_bounds(position) {
                return Err(MazeError::OutOfBounds {
                    label,
                    position,
                    height: grid.height,
                    width: grid.width,
                });
            }
            if grid.get(position) == Cell::Wall {
                return Err(MazeError::BlockedEndpoint { label, position });
            }
        }

        Ok(State {
            grid,
            start,
            end,
            current: start,
            moves: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn current(&self) -> Position {
        self.current
    }

    /// Moves taken since the initial state, revisits included.
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn is_final(&self) -> bool {
        self.current == self.end
    }

    fn target(&self, direction: Direction) -> Option<Position> {
        self.grid.offset(self.current, direction.delta())
    }

    /// Whether a step in `direction` lands on an allowed cell.
    ///
    /// Without `allow_revisit` only free cells are allowed; with it, anything
    /// except a wall is.
    pub fn can_move(&self, direction: Direction, allow_revisit: bool) -> bool {
        match self.target(direction) {
            Some(next) => match self.grid.get(next) {
                Cell::Free => true,
                Cell::Visited => allow_revisit,
                Cell::Wall => false,
            },
            None => false,
        }
    }

    /// The successor reached by stepping in `direction`, or `None` if the move
    /// is illegal. The departed cell is marked visited in the copy.
    pub fn moved(&self, direction: Direction, allow_revisit: bool) -> Option<State> {
        if !self.can_move(direction, allow_revisit) {
            return None;
        }
        let next = self.target(direction)?;
        let mut grid = self.grid.clone();
        grid.set(self.current, Cell::Visited);

        Some(State {
            grid,
            start: self.start,
            end: self.end,
            current: next,
            moves: self.moves + 1,
        })
    }

    /// Marks the current cell visited so the rendered grid shows the full path.
    /// Consumes the state: this ends a search rather than extending it.
    pub fn finish_path(mut self) -> State {
        self.grid.set(self.current, Cell::Visited);
        self
    }

    /// Legal successors in `Direction::ALL` order.
    pub fn all_neighbors(&self, allow_revisit: bool) -> Vec<State> {
        Direction::ALL
            .iter()
            .filter_map(|direction| self.moved(*direction, allow_revisit))
            .collect()
    }

    /// Manhattan distance from the current position to the end.
    pub fn score(&self) -> usize {
        self.current.manhattan(&self.end)
    }

    /// First non-revisiting neighbor whose score is no worse than ours.
    /// A single step always moves the score by one, so in practice this is
    /// the first strictly closer neighbor.
    pub fn first_better_neighbor(&self) -> Option<State> {
        let score = self.score();
        Direction::ALL
            .iter()
            .filter_map(|direction| self.moved(*direction, false))
            .find(|neighbor| neighbor.score() <= score)
    }

    /// One random-walk proposal.
    ///
    /// A uniformly chosen neighbor (visited cells allowed) is returned when it
    /// strictly improves the score. Otherwise it is accepted with probability
    /// `neighbor.score() / distance(start, end)`, and `None` means rejected.
    ///
    /// # Panics
    ///
    /// Panics if the current position has no non-wall neighbor at all.
    pub fn random_neighbor<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<State> {
        let mut neighbors = self.all_neighbors(true);
        let index = match neighbors.len() {
            0 => panic!(
                "random walk stuck at {}: no open neighbor in the maze",
                self.current
            ),
            len => rng.gen_range(0..len),
        };
        let neighbor = neighbors.swap_remove(index);

        if neighbor.score() < self.score() {
            return Some(neighbor);
        }

        let base = self.start.manhattan(&self.end).max(1);
        let heat = neighbor.score() as f64 / base as f64;
        if rng.gen::<f64>() < heat {
            Some(neighbor)
        } else {
            None
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
