pub mod renderer;

use std::{
    io::Write,
    time::{Duration, Instant},
};

use crossterm::style::Color;
use thiserror::Error;

use crate::{
    error::MazeError,
    generators::{generate, get_rng},
    maze::{Coord, Layout},
    solvers::{Solution, Solver, solve_maze},
};
use renderer::Renderer;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error("terminal output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Run settings for a single generate-and-solve session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of logical maze rows
    pub rows: usize,
    /// Number of logical maze columns
    pub cols: usize,
    /// Seed for maze generation; a fresh OS seed is used when unset
    pub seed: Option<u64>,
    /// Solvers to run, in order
    pub solvers: Vec<Solver>,
    /// Route start in layout coordinates, defaults to the top-left floor cell
    pub start: Option<Coord>,
    /// Route end in layout coordinates, defaults to the bottom-right floor cell
    pub end: Option<Coord>,
    /// Draw the maze with each route, or only print the summaries
    pub draw: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            seed: None,
            solvers: Solver::ALL.to_vec(),
            start: None,
            end: None,
            draw: true,
        }
    }
}

/// Timing of one solver over repeated runs on the same maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileReport {
    pub solver: Solver,
    pub iterations: usize,
    pub total: Duration,
    pub steps: usize,
    pub expanded: usize,
}

impl ProfileReport {
    pub fn mean(&self) -> Duration {
        self.total / u32::try_from(self.iterations.max(1)).unwrap_or(u32::MAX)
    }
}

#[derive(Default)]
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate a maze, solve it with every configured solver and report each route.
    /// Returns the solutions in solver order.
    pub fn run<W: Write>(&self, out: W) -> Result<Vec<(Solver, Solution)>, AppError> {
        self.run_with(Renderer::new(out))
    }

    /// Same as [`App::run`] with an explicitly configured renderer.
    pub fn run_with<W: Write>(
        &self,
        mut renderer: Renderer<W>,
    ) -> Result<Vec<(Solver, Solution)>, AppError> {
        let Config {
            rows, cols, seed, ..
        } = self.config;
        tracing::info!(
            "[app] generating {}x{} maze with seed {:?}",
            rows,
            cols,
            seed
        );
        let layout = generate(rows, cols, &mut get_rng(seed))?;

        let mut solutions = Vec::with_capacity(self.config.solvers.len());
        for &solver in &self.config.solvers {
            let solution = solve_maze(&layout, solver, self.config.start, self.config.end)?;
            tracing::info!(
                "[app] {} reached {} in {} steps",
                solver,
                solution.end,
                solution.steps()
            );

            if self.config.draw {
                let canvas = layout.paint(solution.start, solution.end, solution.route());
                renderer.draw(&solver.to_string(), &canvas)?;
            }
            renderer.line(&summary(solver, &solution), Color::Cyan)?;
            solutions.push((solver, solution));
        }

        if let Some(note) = compare(&solutions) {
            renderer.line(&note, Color::Green)?;
        }
        Ok(solutions)
    }

    /// Time each solver over `iterations` runs on one freshly generated maze.
    pub fn profile(
        &self,
        rows: usize,
        cols: usize,
        iterations: usize,
    ) -> Result<Vec<ProfileReport>, AppError> {
        let started = Instant::now();
        let layout: Layout = generate(rows, cols, &mut get_rng(self.config.seed))?;
        tracing::info!(
            "[profile] generated {}x{} maze in {:?}",
            rows,
            cols,
            started.elapsed()
        );

        self.config
            .solvers
            .iter()
            .map(|&solver| -> Result<ProfileReport, AppError> {
                let mut total = Duration::ZERO;
                let mut last = None;
                for _ in 0..iterations.max(1) {
                    let started = Instant::now();
                    let solution =
                        solve_maze(&layout, solver, self.config.start, self.config.end)?;
                    total += started.elapsed();
                    last = Some(solution);
                }
                let (steps, expanded) = last.map_or((0, 0), |s| (s.steps(), s.expanded));
                let report = ProfileReport {
                    solver,
                    iterations: iterations.max(1),
                    total,
                    steps,
                    expanded,
                };
                tracing::info!(
                    "[profile] {}: {} runs, mean {:?}",
                    solver,
                    report.iterations,
                    report.mean()
                );
                Ok(report)
            })
            .collect()
    }
}

fn summary(solver: Solver, solution: &Solution) -> String {
    let cost = solution
        .cost
        .map_or_else(|| "n/a".to_string(), |c| c.to_string());
    format!(
        "{}: {} steps from {} to {}, cost {}, {} cells expanded",
        solver,
        solution.steps(),
        solution.start,
        solution.end,
        cost,
        solution.expanded
    )
}

/// One-line comparison of the A* and greedy routes, when both ran.
fn compare(solutions: &[(Solver, Solution)]) -> Option<String> {
    let find = |wanted: Solver| {
        solutions
            .iter()
            .find(|(solver, _)| *solver == wanted)
            .map(|(_, solution)| solution)
    };
    let astar = find(Solver::AStar)?;
    let greedy = find(Solver::Greedy)?;
    if astar.steps() > greedy.steps() {
        tracing::warn!(
            "[app] A* route ({}) is longer than greedy ({})",
            astar.steps(),
            greedy.steps()
        );
    }
    Some(format!(
        "A* route is {} steps, greedy route is {} steps ({} more), greedy expanded {} cells to A*'s {}",
        astar.steps(),
        greedy.steps(),
        greedy.steps().saturating_sub(astar.steps()),
        greedy.expanded,
        astar.expanded
    ))
}
