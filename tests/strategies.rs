use maze_search::algorithms::{
    solve_annealing_with, solve_backtracking, solve_bfs, solve_hill_climber, Annealing,
    SearchStrategy,
};
use maze_search::grid::{Cell, Grid, Position};
use maze_search::mazes;
use maze_search::state::State;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scenario() -> State {
    mazes::find("default").unwrap().initial_state().unwrap()
}

/// Every 3x3 wall layout with the corners (0, 0) and (2, 2) left open.
fn all_small_mazes() -> Vec<State> {
    (0u16..512)
        .filter(|bits| bits & 1 == 0 && bits & (1 << 8) == 0)
        .map(|bits| {
            let rows = (0..3)
                .map(|row| (0..3).map(|col| ((bits >> (row * 3 + col)) & 1) as u8).collect())
                .collect();
            let grid = Grid::from_rows(rows).unwrap();
            State::new(grid, Position::new(0, 0), Position::new(2, 2)).unwrap()
        })
        .collect()
}

#[test]
fn bfs_and_backtracking_solve_the_default_maze() {
    for solved in [solve_bfs(scenario()), solve_backtracking(scenario())] {
        let solved = solved.expect("default maze is solvable");
        assert_eq!(solved.current(), Position::new(2, 1));
        assert_eq!(solved.grid().get(Position::new(1, 1)), Cell::Wall);
        assert_eq!(solved.grid().get(Position::new(2, 2)), Cell::Wall);
    }
}

#[test]
fn bfs_path_is_shortest_on_every_small_maze() {
    for initial in all_small_mazes() {
        let reference = initial
            .grid()
            .shortest_path_length(initial.start(), initial.end());
        let layout = initial.grid().to_string();
        match (solve_bfs(initial), reference) {
            (Some(solved), Some(length)) => {
                assert_eq!(solved.grid().visited_cells().len(), length + 1, "{}", layout)
            }
            (None, None) => {}
            (got, expected) => panic!(
                "bfs gave {:?} but reference gave {:?} on\n{}",
                got.map(|s| s.current()),
                expected,
                layout
            ),
        }
    }
}

#[test]
fn backtracking_succeeds_exactly_when_end_is_reachable() {
    for initial in all_small_mazes() {
        let reachable = initial
            .grid()
            .shortest_path_length(initial.start(), initial.end())
            .is_some();
        let end = initial.end();
        match solve_backtracking(initial) {
            Some(solved) => {
                assert!(reachable);
                assert_eq!(solved.current(), end);
            }
            None => assert!(!reachable),
        }
    }
}

#[test]
fn backtracking_is_deterministic() {
    let maze = mazes::find("spiral").unwrap();
    let first = solve_backtracking(maze.initial_state().unwrap());
    let second = solve_backtracking(maze.initial_state().unwrap());
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn hill_climbing_depends_on_traps() {
    let corridor = mazes::find("corridor").unwrap().initial_state().unwrap();
    let end = corridor.end();
    assert_eq!(solve_hill_climber(corridor).map(|s| s.current()), Some(end));

    let trap = mazes::find("u_trap").unwrap().initial_state().unwrap();
    assert!(solve_hill_climber(trap).is_none());
}

#[test]
fn start_on_end_needs_no_moves() {
    let grid = Grid::from_rows(vec![vec![0, 0], vec![0, 1]]).unwrap();
    let initial = State::new(grid, Position::new(1, 0), Position::new(1, 0)).unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    let results = [
        solve_bfs(initial.clone()),
        solve_backtracking(initial.clone()),
        solve_hill_climber(initial.clone()),
        solve_annealing_with(initial.clone(), &mut rng, 0),
    ];
    for solved in results {
        let solved = solved.unwrap();
        assert_eq!(solved.current(), Position::new(1, 0));
        let visited = solved.grid().visited_cells();
        assert_eq!(visited.len(), 1);
        assert!(visited.contains(&Position::new(1, 0)));
    }
}

#[test]
fn unsolvable_maze_yields_no_solution_everywhere() {
    let maze = mazes::find("walled_off").unwrap();
    assert!(solve_bfs(maze.initial_state().unwrap()).is_none());
    assert!(solve_backtracking(maze.initial_state().unwrap()).is_none());
    assert!(solve_hill_climber(maze.initial_state().unwrap()).is_none());
    let mut annealing = Annealing::new(Some(1), 500);
    assert!(annealing.solve(maze.initial_state().unwrap()).is_none());
}

#[test]
fn annealing_solution_ends_on_end() {
    let corridor = mazes::find("corridor").unwrap().initial_state().unwrap();
    let end = corridor.end();
    let mut rng = StdRng::seed_from_u64(2024);
    let solved = solve_annealing_with(corridor, &mut rng, 100_000).expect("open room is solvable");
    assert_eq!(solved.current(), end);
    assert_eq!(solved.grid().get(end), Cell::Visited);
}
