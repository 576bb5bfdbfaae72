mod blocks;
pub mod cell;
mod direction;
pub mod grid;

use std::{fmt, str::FromStr};

use crate::error::{MazeError, Result};

pub use blocks::Block;
pub use cell::{Paint, Tile};
pub use direction::Direction;
pub use grid::{Coord, Grid, manhattan};

/// The expanded wall/floor grid of a maze.
///
/// A generated layout for `rows x cols` logical cells is `(2 * rows + 1) x (2 * cols + 1)`
/// markers: logical cells sit at odd coordinates, passages between them at mixed parity,
/// and the outer border is entirely wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    grid: Grid<Tile>,
}

impl Layout {
    pub fn from_grid(grid: Grid<Tile>) -> Self {
        Layout { grid }
    }

    /// Builds a layout from rows of tiles. All rows must be the same length.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self> {
        Ok(Layout {
            grid: Grid::from_rows(rows)?,
        })
    }

    pub fn grid(&self) -> &Grid<Tile> {
        &self.grid
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// The tile at `coord`, or `None` if it lies outside the layout.
    pub fn tile(&self, coord: Coord) -> Option<Tile> {
        self.grid.get(coord).copied()
    }

    pub fn is_floor(&self, coord: Coord) -> bool {
        self.tile(coord).is_some_and(Tile::is_floor)
    }

    /// The floor cells just inside the top-left and bottom-right corners.
    pub fn default_endpoints(&self) -> (Coord, Coord) {
        (
            Coord::new(1, 1),
            Coord::new(
                self.height().saturating_sub(2),
                self.width().saturating_sub(2),
            ),
        )
    }

    /// Classifies every cell for drawing or export: the route is laid over the floor,
    /// then the start and goal markers over the route.
    pub fn paint(
        &self,
        start: Coord,
        end: Coord,
        route: impl IntoIterator<Item = Coord>,
    ) -> Grid<Paint> {
        let mut canvas = Grid::new(self.height(), self.width(), Paint::Wall);
        for (coord, &tile) in self.grid.iter() {
            canvas[coord] = tile.into();
        }
        for coord in route {
            if self.is_floor(coord) {
                canvas[coord] = Paint::Route;
            }
        }
        for (coord, marker) in [(start, Paint::Start), (end, Paint::Goal)] {
            if self.grid.contains(coord) {
                canvas[coord] = marker;
            }
        }
        canvas
    }
}

impl std::ops::Index<Coord> for Layout {
    type Output = Tile;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for tile in row {
                write!(f, "{}", tile.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Layout {
    type Err = MazeError;

    /// Parses one row per non-empty line, `#` for walls and `.` or a space for floor.
    /// A line of spaces is a row of floor, not a separator.
    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| Tile::from_symbol(c).ok_or(MazeError::InvalidTile(c)))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Layout::from_rows(rows)
    }
}
