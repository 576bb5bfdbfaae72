use std::collections::HashMap;

use crate::error::{MazeError, Result};
use crate::maze::Coord;

/// Forward route: maps every cell on the route to the next one towards the goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    next: HashMap<Coord, Coord>,
}

impl Path {
    /// Reverses a backward parent map (child -> parent) into a forward route from `start`
    /// to `end`.
    ///
    /// Fails with [`MazeError::BrokenPath`] if the parent chain from `end` does not reach
    /// `start`, including when it runs in a cycle.
    pub fn reconstruct(
        parents: &HashMap<Coord, Coord>,
        start: Coord,
        end: Coord,
    ) -> Result<Path> {
        let mut next = HashMap::new();
        let mut cell = end;

        while cell != start {
            let broken = MazeError::BrokenPath {
                start,
                end,
                at: cell,
            };
            let Some(&parent) = parents.get(&cell) else {
                return Err(broken);
            };
            if next.insert(parent, cell).is_some() || next.len() > parents.len() {
                return Err(broken);
            }
            cell = parent;
        }

        Ok(Path { next })
    }

    /// The cell following `coord`, or `None` at the goal or off the route.
    pub fn next(&self, coord: Coord) -> Option<Coord> {
        self.next.get(&coord).copied()
    }

    /// Number of steps on the route.
    pub fn len(&self) -> usize {
        self.next.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }

    /// Whether `coord` lies on the route, as a step origin.
    pub fn contains(&self, coord: Coord) -> bool {
        self.next.contains_key(&coord)
    }

    /// Walks the route from `from`, yielding `from` and every following cell.
    pub fn walk(&self, from: Coord) -> Walk<'_> {
        Walk {
            path: self,
            current: Some(from),
            remaining: self.len() + 1,
        }
    }
}

/// Iterator returned by [`Path::walk`].
pub struct Walk<'a> {
    path: &'a Path,
    current: Option<Coord>,
    remaining: usize,
}

impl Iterator for Walk<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        // a route visits each of its cells once, so this bounds any walk
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.current?;
        self.current = self.path.next(current);
        Some(current)
    }
}
