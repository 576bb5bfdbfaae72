use rand::Rng;

use crate::maze::{Coord, Direction, Grid};

/// A logical maze cell while passages are being carved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationCell {
    pub visited: bool,
    /// One flag per [`Direction`]; `true` while the wall on that side is still standing.
    pub walls: [bool; 4],
}

impl Default for GenerationCell {
    fn default() -> Self {
        GenerationCell {
            visited: false,
            walls: [true; 4],
        }
    }
}

impl GenerationCell {
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }
}

/// The in-bounds logical neighbor of `cell` in `direction`.
fn neighbor(cells: &Grid<GenerationCell>, cell: Coord, direction: Direction) -> Option<Coord> {
    cell.step(direction).filter(|&c| cells.contains(c))
}

/// Carves a spanning tree over a `rows` x `cols` grid with iterative randomized backtracking.
///
/// Only cells with more than one unvisited neighbor are pushed as branch points, so the
/// stack never holds more than `rows * cols` entries. Returns the carved grid and the
/// number of passages, which is always `rows * cols - 1`.
pub fn recursive_backtrack<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> (Grid<GenerationCell>, usize) {
    let mut cells = Grid::new(rows, cols, GenerationCell::default());
    let size = rows * cols;

    let start = rng.random_range(0..size);
    let mut position = Coord::new(start / cols, start % cols);
    cells[position].visited = true;
    tracing::debug!("[generate] carving {}x{} from {}", rows, cols, position);

    let mut stack = Vec::new();
    let mut carved = 0;

    while carved < size - 1 {
        let candidates = Direction::ALL
            .into_iter()
            .filter_map(|d| neighbor(&cells, position, d).map(|n| (d, n)))
            .filter(|&(_, n)| !cells[n].visited)
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            // Dead end: resume from the most recent branch point
            match stack.pop() {
                Some(branch) => {
                    position = branch;
                    continue;
                }
                None => break,
            }
        }

        if candidates.len() > 1 {
            stack.push(position);
        }

        let (direction, next) = candidates[rng.random_range(0..candidates.len())];

        cells[position].walls[direction.index()] = false;
        cells[next].walls[direction.opposite().index()] = false;
        cells[next].visited = true;
        position = next;
        carved += 1;
    }

    tracing::debug!(
        "[generate] carved {} passages, {} branch points left on the stack",
        carved,
        stack.len()
    );
    (cells, carved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_default_cell_is_closed() {
        let cell = GenerationCell::default();
        assert!(!cell.visited);
        assert!(Direction::ALL.into_iter().all(|d| cell.has_wall(d)));
    }

    #[test]
    fn test_every_cell_is_visited() {
        let mut rng = StdRng::seed_from_u64(7);
        let (cells, carved) = recursive_backtrack(6, 9, &mut rng);
        assert_eq!(carved, 6 * 9 - 1);
        assert!(cells.iter().all(|(_, cell)| cell.visited));
    }

    #[test]
    fn test_walls_are_cleared_in_pairs() {
        let mut rng = StdRng::seed_from_u64(11);
        let (cells, carved) = recursive_backtrack(5, 5, &mut rng);

        let mut open_sides = 0;
        for (coord, cell) in cells.iter() {
            for dir in Direction::ALL {
                if cell.has_wall(dir) {
                    continue;
                }
                open_sides += 1;
                let next = neighbor(&cells, coord, dir).unwrap();
                assert!(!cells[next].has_wall(dir.opposite()));
            }
        }
        // each passage opens one side on both of its cells
        assert_eq!(open_sides, carved * 2);
    }

    #[test]
    fn test_border_walls_stay_closed() {
        let mut rng = StdRng::seed_from_u64(3);
        let (cells, _) = recursive_backtrack(4, 7, &mut rng);
        for (coord, cell) in cells.iter() {
            for dir in Direction::ALL {
                if neighbor(&cells, coord, dir).is_none() {
                    assert!(cell.has_wall(dir), "{coord} opened towards {dir:?}");
                }
            }
        }
    }

    #[test]
    fn test_single_cell() {
        let mut rng = StdRng::seed_from_u64(0);
        let (cells, carved) = recursive_backtrack(1, 1, &mut rng);
        assert_eq!(carved, 0);
        assert!(cells[Coord::new(0, 0)].visited);
    }
}
