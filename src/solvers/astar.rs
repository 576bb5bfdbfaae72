use std::{cmp::Reverse, collections::BinaryHeap, collections::HashMap};

use super::{Solution, grid::SearchGrid, path::Path};
use crate::error::{MazeError, Result};
use crate::maze::{Coord, Layout, manhattan};

/// Per-cell A* scores. Unreached cells hold `usize::MAX` in both fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AStarScore {
    /// Best known cost from the start.
    pub g: usize,
    /// Manhattan distance to the goal.
    pub h: usize,
}

impl AStarScore {
    pub const UNREACHED: AStarScore = AStarScore {
        g: usize::MAX,
        h: usize::MAX,
    };

    pub fn f(&self) -> usize {
        self.g.saturating_add(self.h)
    }
}

/// Open-set entry. Derived ordering compares `f`, then `h`, then the cell, so ties go to
/// cells closer to the goal and then to the smaller coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct OpenEntry {
    f: usize,
    h: usize,
    coord: Coord,
}

/// Finds a shortest route with A* over a Manhattan heuristic and unit step cost.
pub fn solve_astar(layout: &Layout, start: Option<Coord>, end: Option<Coord>) -> Result<Solution> {
    let mut grid = SearchGrid::new(layout, AStarScore::UNREACHED)?;
    let (start, end) = grid.endpoints(start, end)?;

    let h = manhattan(start, end);
    grid[start] = AStarScore { g: 0, h };

    // Using Reverse to turn the max-heap into a min-heap
    let mut open = BinaryHeap::new();
    open.push(Reverse(OpenEntry { f: h, h, coord: start }));
    let mut parents = HashMap::new();
    let mut expanded = 0;
    let mut reached = false;

    while let Some(Reverse(entry)) = open.pop() {
        let current = grid[entry.coord];
        // Skip entries superseded by a cheaper route to the same cell
        if entry.f > current.f() {
            continue;
        }
        if entry.coord == end {
            reached = true;
            break;
        }
        expanded += 1;

        let g = current.g + 1;
        for neighbor in grid.neighbors(entry.coord) {
            let h = manhattan(neighbor, end);
            let f = g + h;
            if f < grid[neighbor].f() {
                grid[neighbor] = AStarScore { g, h };
                parents.insert(neighbor, entry.coord);
                open.push(Reverse(OpenEntry {
                    f,
                    h,
                    coord: neighbor,
                }));
            }
        }
    }

    if !reached {
        return Err(MazeError::NoPath { start, end });
    }

    let path = Path::reconstruct(&parents, start, end)?;
    let cost = grid[end].g;
    tracing::debug!(
        "[solve] A* found {} steps from {} to {} after expanding {} cells",
        path.len(),
        start,
        end,
        expanded
    );

    Ok(Solution {
        start,
        end,
        path,
        cost: Some(cost),
        expanded,
    })
}
