use crate::algorithms::{Annealing, Backtracking, Bfs, HillClimber, SearchStrategy};
use crate::config::{Algorithm, Config};
use crate::error::MazeError;
use crate::mazes::{self, MAZES};
use crate::state::State;
use crate::statistics::SearchReport;
use log::info;
use std::time::Instant;

pub const NO_SOLUTION: &str = "No solution found.";

/// Builds the strategy for `algorithm`, wiring the annealing seed and budget
/// from the configuration.
pub fn create_strategy(algorithm: Algorithm, config: &Config) -> Box<dyn SearchStrategy> {
    match algorithm {
        Algorithm::Bfs => Box::new(Bfs::new()),
        Algorithm::Backtracking => Box::new(Backtracking::new()),
        Algorithm::HillClimbing => Box::new(HillClimber::new()),
        Algorithm::Annealing => Box::new(Annealing::new(config.seed, config.step_limit)),
    }
}

/// Runs one strategy on a copy of `initial` and times it.
pub fn run_strategy(
    strategy: &mut dyn SearchStrategy,
    initial: &State,
) -> (Option<State>, SearchReport) {
    let optimal_length = initial
        .grid()
        .shortest_path_length(initial.start(), initial.end());

    info!(
        "running {} from {} to {}",
        strategy.name(),
        initial.start(),
        initial.end()
    );
    let started = Instant::now();
    let result = strategy.solve(initial.clone());
    let elapsed = started.elapsed();

    let report = SearchReport::new(strategy.name(), result.as_ref(), optimal_length, elapsed);
    (result, report)
}

/// The textual dump: the finished grid, or the fixed failure line.
pub fn render_outcome(result: Option<&State>) -> String {
    match result {
        Some(state) => state.to_string(),
        None => format!("{}\n", NO_SOLUTION),
    }
}

pub fn run(config: Config) -> Result<(), MazeError> {
    if config.list_mazes {
        for maze in MAZES {
            println!("{:<12} {}", maze.name, maze.description);
        }
        return Ok(());
    }

    let maze = mazes::find(&config.maze)?;
    let initial = maze.initial_state()?;

    if config.algorithm == "all" {
        let reports = run_all_algorithms(&config, &initial);
        if !config.quiet {
            print_comparison_results(&reports);
        }
        return Ok(());
    }

    let algorithm: Algorithm = config.algorithm.parse()?;
    let mut strategy = create_strategy(algorithm, &config);
    let (result, report) = run_strategy(strategy.as_mut(), &initial);

    print!("{}", render_outcome(result.as_ref()));
    if !config.quiet {
        println!();
        println!("{}", report);
    }
    Ok(())
}

/// Runs every strategy on the same maze, printing each outcome.
pub fn run_all_algorithms(config: &Config, initial: &State) -> Vec<SearchReport> {
    let mut reports = Vec::new();

    for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
        if !config.quiet {
            println!(
                "Running algorithm {} of {}: {}",
                i + 1,
                Algorithm::ALL.len(),
                algorithm
            );
        }
        let mut strategy = create_strategy(*algorithm, config);
        let (result, report) = run_strategy(strategy.as_mut(), initial);
        print!("{}", render_outcome(result.as_ref()));
        if !config.quiet {
            println!();
        }
        reports.push(report);
    }

    reports
}

pub fn print_comparison_results(reports: &[SearchReport]) {
    println!("=== ALGORITHM COMPARISON RESULTS ===");
    println!();
    println!(
        "{:<15} {:<8} {:<8} {:<8} {:<12} {:<12}",
        "Algorithm", "Success", "Moves", "Optimal", "Efficiency", "Time"
    );
    println!("{}", "-".repeat(68));

    for report in reports {
        let success_str = if report.solved { "yes" } else { "no" };
        let moves_str = if report.solved {
            report.moves.to_string()
        } else {
            "-".to_string()
        };
        let optimal_str = report
            .optimal_length
            .map_or_else(|| "-".to_string(), |optimal| optimal.to_string());
        let efficiency_str = report
            .route_efficiency()
            .map_or_else(|| "-".to_string(), |efficiency| format!("{:.3}", efficiency));

        println!(
            "{:<15} {:<8} {:<8} {:<8} {:<12} {:<12}",
            report.algorithm,
            success_str,
            moves_str,
            optimal_str,
            efficiency_str,
            format!("{:.2?}", report.elapsed)
        );
    }
}
