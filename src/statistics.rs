use crate::state::State;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SearchReport {
    pub algorithm: String,
    pub solved: bool,
    pub moves: usize,
    pub path_cells: usize,
    pub optimal_length: Option<usize>,
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn new(
        algorithm: &str,
        result: Option<&State>,
        optimal_length: Option<usize>,
        elapsed: Duration,
    ) -> Self {
        SearchReport {
            algorithm: algorithm.to_string(),
            solved: result.is_some(),
            moves: result.map_or(0, State::moves),
            path_cells: result.map_or(0, |state| state.grid().visited_cells().len()),
            optimal_length,
            elapsed,
        }
    }

    /// Moves actually taken relative to the shortest possible path (1.0 is optimal).
    pub fn route_efficiency(&self) -> Option<f64> {
        match self.optimal_length {
            Some(optimal) if self.solved && optimal > 0 => {
                Some(self.moves as f64 / optimal as f64)
            }
            _ => None,
        }
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Solved: {}", if self.solved { "yes" } else { "no" })?;
        if self.solved {
            writeln!(f, "Moves Taken: {}", self.moves)?;
            writeln!(f, "Cells On Path: {}", self.path_cells)?;
        }
        match self.optimal_length {
            Some(optimal) => writeln!(f, "Optimal Path Length: {}", optimal)?,
            None => writeln!(f, "Optimal Path Length: unreachable")?,
        }
        if let Some(efficiency) = self.route_efficiency() {
            writeln!(f, "Route Efficiency: {:.3}", efficiency)?;
        }
        writeln!(f, "Search Time: {:.2?}", self.elapsed)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn efficiency_only_for_solved_runs() {
        let mut report = SearchReport {
            algorithm: "bfs".to_string(),
            solved: true,
            moves: 4,
            path_cells: 5,
            optimal_length: Some(4),
            elapsed: Duration::ZERO,
        };
        assert_eq!(report.route_efficiency(), Some(1.0));

        // A random walk that doubled back reports its real move count.
        report.moves = 10;
        assert_eq!(report.route_efficiency(), Some(2.5));
        assert!(report.to_string().contains("Moves Taken: 10"));

        report.solved = false;
        assert_eq!(report.route_efficiency(), None);
        assert!(report.to_string().contains("Solved: no"));
    }
}
