use crate::algorithms::common::SearchStrategy;
use crate::state::State;
use log::debug;

/// Level-order breadth-first search over successor states.
#[derive(Default)]
pub struct Bfs;

impl Bfs {
    pub fn new() -> Self {
        Bfs
    }
}

impl SearchStrategy for Bfs {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn solve(&mut self, initial: State) -> Option<State> {
        solve_bfs(initial)
    }
}

/// Expands the frontier one level at a time and returns the first final
/// neighbor found, in frontier order then direction order.
///
/// Every frontier entry carries its own grid copy, so memory grows with
/// frontier size times grid size.
pub fn solve_bfs(initial: State) -> Option<State> {
    if initial.is_final() {
        return Some(initial.finish_path());
    }

    let mut frontier = vec![initial];
    let mut depth = 0;

    while !frontier.is_empty() {
        depth += 1;
        debug!("bfs: expanding {} states into depth {}", frontier.len(), depth);

        let mut next_frontier = Vec::new();
        for state in &frontier {
            for neighbor in state.all_neighbors(false) {
                if neighbor.is_final() {
                    debug!("bfs: reached end at depth {}", depth);
                    return Some(neighbor.finish_path());
                }
                next_frontier.push(neighbor);
            }
        }
        frontier = next_frontier;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, Position};

    fn state(rows: Vec<Vec<u8>>, start: (usize, usize), end: (usize, usize)) -> State {
        let grid = Grid::from_rows(rows).unwrap();
        State::new(
            grid,
            Position::new(start.0, start.1),
            Position::new(end.0, end.1),
        )
        .unwrap()
    }

    #[test]
    fn finds_shortest_path_in_scenario_maze() {
        let initial = state(vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 1]], (0, 1), (2, 1));
        let solved = solve_bfs(initial).expect("maze is solvable");
        assert_eq!(solved.current(), Position::new(2, 1));
        assert_eq!(solved.grid().to_string(), "[2, 2, 0]\n[2, 1, 0]\n[2, 2, 1]\n");
    }

    #[test]
    fn path_length_matches_reference_search() {
        let rows = vec![
            vec![0, 0, 0, 0, 0],
            vec![1, 1, 0, 1, 0],
            vec![0, 0, 0, 1, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0],
        ];
        let initial = state(rows, (0, 0), (2, 0));
        let expected = initial
            .grid()
            .shortest_path_length(initial.start(), initial.end())
            .unwrap();
        let solved = solve_bfs(initial).unwrap();
        // Visited cells are the path plus its start.
        assert_eq!(solved.grid().visited_cells().len(), expected + 1);
    }

    #[test]
    fn reports_no_solution_when_end_is_walled_off() {
        let initial = state(vec![vec![0, 1, 0]], (0, 0), (0, 2));
        assert!(solve_bfs(initial).is_none());
    }

    #[test]
    fn start_on_end_finishes_immediately() {
        let initial = state(vec![vec![0, 0]], (0, 1), (0, 1));
        let solved = solve_bfs(initial).unwrap();
        assert_eq!(solved.grid().visited_cells().len(), 1);
    }
}
