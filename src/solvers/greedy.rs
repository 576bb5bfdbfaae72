use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use super::{Solution, grid::SearchGrid, path::Path};
use crate::error::{MazeError, Result};
use crate::maze::{Coord, Layout, manhattan};

/// Per-cell greedy score: the heuristic alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyScore {
    pub h: usize,
}

impl GreedyScore {
    /// Score of a cell that has not been enqueued yet.
    pub const UNSEEN: GreedyScore = GreedyScore { h: usize::MAX };

    pub fn is_seen(self) -> bool {
        self != Self::UNSEEN
    }
}

/// Finds a route with greedy best-first search, always expanding the open cell nearest the
/// goal by Manhattan distance.
///
/// Each cell is enqueued at most once and never reconsidered, so the route is not
/// necessarily the shortest.
pub fn solve_greedy(
    layout: &Layout,
    start: Option<Coord>,
    end: Option<Coord>,
) -> Result<Solution> {
    let mut grid = SearchGrid::new(layout, GreedyScore::UNSEEN)?;
    let (start, end) = grid.endpoints(start, end)?;

    grid[start] = GreedyScore {
        h: manhattan(start, end),
    };

    let mut open = BinaryHeap::new();
    open.push(Reverse((grid[start].h, start)));
    let mut parents = HashMap::new();
    let mut expanded = 0;
    let mut reached = false;

    while let Some(Reverse((_, current))) = open.pop() {
        if current == end {
            reached = true;
            break;
        }
        expanded += 1;

        for neighbor in grid.neighbors(current) {
            // a scored cell is already enqueued and never reconsidered
            if grid[neighbor].is_seen() {
                continue;
            }
            grid[neighbor] = GreedyScore {
                h: manhattan(neighbor, end),
            };
            parents.insert(neighbor, current);
            open.push(Reverse((grid[neighbor].h, neighbor)));
        }
    }

    if !reached {
        return Err(MazeError::NoPath { start, end });
    }

    let path = Path::reconstruct(&parents, start, end)?;
    tracing::debug!(
        "[solve] greedy found {} steps from {} to {} after expanding {} cells",
        path.len(),
        start,
        end,
        expanded
    );

    Ok(Solution {
        start,
        end,
        path,
        cost: None,
        expanded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::solve_astar;

    #[test]
    fn test_misleading_heuristic_gives_longer_route() {
        // Greedy runs east along the top row and down through the gap at (2, 6) before
        // doubling back west to the only way down; A* goes straight down the left side.
        let layout: Layout = "\
#########
#.......#
#....#.##
#.......#
#..######
#.......#
#########
"
        .parse()
        .unwrap();
        let greedy = solve_greedy(&layout, None, None).unwrap();
        let astar = solve_astar(&layout, None, None).unwrap();
        assert_eq!(greedy.end, Coord::new(5, 7));
        assert_eq!(astar.steps(), 10);
        assert_eq!(greedy.steps(), 18);
        assert_eq!(greedy.cost, None);
    }

    #[test]
    fn test_each_cell_expanded_at_most_once() {
        // open room: every floor cell is reachable along many routes
        let layout: Layout = "\
#######
#.....#
#.....#
#.....#
#######
"
        .parse()
        .unwrap();
        let floors = layout.grid().iter().filter(|(_, t)| t.is_floor()).count();
        let greedy = solve_greedy(&layout, Some(Coord::new(3, 5)), Some(Coord::new(1, 1)))
            .unwrap();
        assert!(greedy.expanded < floors);
        assert_eq!(greedy.steps(), 6);
        assert!(!GreedyScore::UNSEEN.is_seen());
    }

    #[test]
    fn test_disconnected_goal() {
        let layout: Layout = "#####\n#.#.#\n#####\n".parse().unwrap();
        assert!(matches!(
            solve_greedy(&layout, None, None),
            Err(MazeError::NoPath { .. })
        ));
    }

    #[test]
    fn test_rejects_wall_start() {
        let layout: Layout = "#####\n#...#\n#####\n".parse().unwrap();
        assert_eq!(
            solve_greedy(&layout, Some(Coord::new(0, 1)), None),
            Err(MazeError::WallEndpoint(Coord::new(0, 1)))
        );
    }
}
