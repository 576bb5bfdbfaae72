mod astar;
mod greedy;
mod grid;
mod path;

use std::str::FromStr;

use crate::error::{MazeError, Result};
use crate::maze::{Coord, Layout};

pub use astar::{AStarScore, solve_astar};
pub use greedy::{GreedyScore, solve_greedy};
pub use grid::SearchGrid;
pub use path::{Path, Walk};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    AStar,
    Greedy,
}

impl Solver {
    pub const ALL: [Solver; 2] = [Solver::AStar, Solver::Greedy];
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::AStar => write!(f, "A* Search"),
            Solver::Greedy => write!(f, "Greedy Best-First Search"),
        }
    }
}

impl FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Solver::AStar),
            "greedy" | "best-first" => Ok(Solver::Greedy),
            _ => Err(MazeError::UnknownSolver(s.to_string())),
        }
    }
}

/// A solved route together with search statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub start: Coord,
    pub end: Coord,
    pub path: Path,
    /// Accumulated cost at the goal, for solvers that track one.
    pub cost: Option<usize>,
    /// Number of cells expanded before the goal was dequeued.
    pub expanded: usize,
}

impl Solution {
    /// Number of single-cell moves from start to end.
    pub fn steps(&self) -> usize {
        self.path.len()
    }

    /// Every cell on the route, from start to end inclusive.
    pub fn route(&self) -> Walk<'_> {
        self.path.walk(self.start)
    }
}

/// Solve `layout` between `start` and `end` with the selected solver.
///
/// Missing endpoints default to the floor cells just inside the top-left and bottom-right
/// corners.
pub fn solve_maze(
    layout: &Layout,
    solver: Solver,
    start: Option<Coord>,
    end: Option<Coord>,
) -> Result<Solution> {
    match solver {
        Solver::AStar => solve_astar(layout, start, end),
        Solver::Greedy => solve_greedy(layout, start, end),
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{TestResult, quickcheck};

    use super::*;
    use crate::generators::generate_maze;
    use crate::maze::manhattan;

    /// A 3x3 maze carved as one snaking corridor.
    const SERPENTINE: &str = "\
#######
#.....#
#####.#
#.....#
#.#####
#.....#
#######
";

    /// Checks that the route only steps between adjacent floor cells and ends at the goal.
    fn is_valid_route(layout: &Layout, solution: &Solution) -> bool {
        let route = solution.route().collect::<Vec<_>>();
        route.len() == solution.steps() + 1
            && route.last() == Some(&solution.end)
            && route.iter().all(|&c| layout.is_floor(c))
            && route.windows(2).all(|w| manhattan(w[0], w[1]) == 1)
    }

    #[test]
    fn test_solver_parse_and_display() {
        assert_eq!("astar".parse::<Solver>(), Ok(Solver::AStar));
        assert_eq!("A*".parse::<Solver>(), Ok(Solver::AStar));
        assert_eq!(" Greedy ".parse::<Solver>(), Ok(Solver::Greedy));
        assert_eq!(
            "dijkstra".parse::<Solver>(),
            Err(MazeError::UnknownSolver("dijkstra".to_string()))
        );
        assert_eq!(Solver::AStar.to_string(), "A* Search");
    }

    #[test]
    fn test_two_by_two_maze() {
        let layout = generate_maze(2, 2, Some(8)).unwrap();
        for solver in Solver::ALL {
            let solution = solve_maze(&layout, solver, None, None).unwrap();
            assert_eq!(solution.start, Coord::new(1, 1));
            assert_eq!(solution.end, Coord::new(3, 3));
            assert!(!solution.path.is_empty());
            assert!(is_valid_route(&layout, &solution), "{solver}");
        }
    }

    #[test]
    fn test_single_corridor_gives_identical_routes() {
        let layout: Layout = SERPENTINE.parse().unwrap();
        let astar = solve_maze(&layout, Solver::AStar, None, None).unwrap();
        let greedy = solve_maze(&layout, Solver::Greedy, None, None).unwrap();
        assert_eq!(astar.path, greedy.path);
        assert_eq!(astar.steps(), 16);
        assert_eq!(astar.cost, Some(16));
    }

    #[test]
    fn test_explicit_endpoints() {
        let layout: Layout = SERPENTINE.parse().unwrap();
        let start = Coord::new(3, 5);
        let end = Coord::new(5, 1);
        for solver in Solver::ALL {
            let solution = solve_maze(&layout, solver, Some(start), Some(end)).unwrap();
            assert_eq!(
                solution.route().collect::<Vec<_>>(),
                vec![
                    Coord::new(3, 5),
                    Coord::new(3, 4),
                    Coord::new(3, 3),
                    Coord::new(3, 2),
                    Coord::new(3, 1),
                    Coord::new(4, 1),
                    Coord::new(5, 1),
                ]
            );
        }
    }

    #[test]
    fn test_empty_layout() {
        let layout = Layout::from_rows(Vec::new()).unwrap();
        for solver in Solver::ALL {
            assert_eq!(
                solve_maze(&layout, solver, None, None),
                Err(MazeError::EmptyLayout)
            );
        }
    }

    #[test]
    fn test_same_solver_same_route() {
        let layout = generate_maze(10, 10, Some(77)).unwrap();
        for solver in Solver::ALL {
            let a = solve_maze(&layout, solver, None, None).unwrap();
            let b = solve_maze(&layout, solver, None, None).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn prop_astar_never_longer_than_greedy() {
        fn prop(rows: u8, cols: u8, seed: u64) -> TestResult {
            let (rows, cols) = (rows as usize % 20 + 1, cols as usize % 20 + 1);
            let layout = generate_maze(rows, cols, Some(seed)).unwrap();
            let astar = solve_maze(&layout, Solver::AStar, None, None).unwrap();
            let greedy = solve_maze(&layout, Solver::Greedy, None, None).unwrap();
            TestResult::from_bool(astar.steps() <= greedy.steps())
        }
        quickcheck(prop as fn(u8, u8, u64) -> TestResult);
    }

    #[test]
    fn prop_routes_are_valid() {
        fn prop(rows: u8, cols: u8, seed: u64) -> TestResult {
            let (rows, cols) = (rows as usize % 20 + 1, cols as usize % 20 + 1);
            let layout = generate_maze(rows, cols, Some(seed)).unwrap();
            let valid = Solver::ALL.into_iter().all(|solver| {
                solve_maze(&layout, solver, None, None)
                    .is_ok_and(|solution| is_valid_route(&layout, &solution))
            });
            TestResult::from_bool(valid)
        }
        quickcheck(prop as fn(u8, u8, u64) -> TestResult);
    }

    #[test]
    fn prop_astar_cost_matches_route_length() {
        fn prop(rows: u8, cols: u8, seed: u64) -> TestResult {
            let (rows, cols) = (rows as usize % 20 + 1, cols as usize % 20 + 1);
            let layout = generate_maze(rows, cols, Some(seed)).unwrap();
            let solution = solve_astar(&layout, None, None).unwrap();
            TestResult::from_bool(solution.cost == Some(solution.steps()))
        }
        quickcheck(prop as fn(u8, u8, u64) -> TestResult);
    }

    #[test]
    fn prop_perfect_maze_routes_agree() {
        // With exactly one simple path between any two cells, both solvers must find it
        fn prop(rows: u8, cols: u8, seed: u64) -> TestResult {
            let (rows, cols) = (rows as usize % 20 + 1, cols as usize % 20 + 1);
            let layout = generate_maze(rows, cols, Some(seed)).unwrap();
            let astar = solve_astar(&layout, None, None).unwrap();
            let greedy = solve_greedy(&layout, None, None).unwrap();
            TestResult::from_bool(astar.path == greedy.path)
        }
        quickcheck(prop as fn(u8, u8, u64) -> TestResult);
    }
}
