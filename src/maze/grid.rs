use std::{fmt, str::FromStr};

use crate::error::{MazeError, Result};
use crate::maze::Direction;

/// A cell position, addressed by row then column.
///
/// Equality and ordering depend only on the coordinates, with rows compared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// The adjacent coordinate in `direction`, or `None` if it would leave the
    /// non-negative quadrant. Upper bounds are checked by the grid.
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (dr, dc) = direction.offset();
        Some(Coord {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

impl FromStr for Coord {
    type Err = MazeError;

    /// Parses `row,col`, surrounding whitespace allowed.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || MazeError::InvalidCoord(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Coord { row, col })
    }
}

/// Manhattan distance between two coordinates.
pub fn manhattan(a: Coord, b: Coord) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/// Dense row-major 2D storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Box<[T]>,
    width: usize,
    height: usize,
}

impl<T: Clone> Grid<T> {
    pub fn new(height: usize, width: usize, cell: T) -> Self {
        let data = vec![cell; width * height].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Builds a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(MazeError::RaggedLayout {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            data.extend(cells);
        }
        Ok(Grid {
            data: data.into_boxed_slice(),
            width,
            height,
        })
    }

    /// Upscales the grid so every cell becomes a `factor` x `factor` block.
    pub fn scaled(&self, factor: usize) -> Grid<T> {
        let width = self.width * factor;
        let height = self.height * factor;
        let data = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row / factor, col / factor)))
            .map(|(row, col)| self.data[self.ravel_index(Coord { row, col })].clone())
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }
}

impl<T> Grid<T> {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    pub fn is_boundary(&self, coord: Coord) -> bool {
        coord.row == 0
            || coord.col == 0
            || coord.row + 1 == self.height
            || coord.col + 1 == self.width
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.row * self.width + coord.col
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.contains(coord) {
            Some(&self.data[self.ravel_index(coord)])
        } else {
            None
        }
    }

    /// Iterates over the rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() rejects a zero size
        self.data.chunks(self.width.max(1))
    }

    /// Iterates over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<T> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Coord { row, col }))
    }

    /// Iterates over every cell together with its coordinate, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.coords().zip(self.data.iter())
    }
}

impl<T> std::ops::Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl<T> std::ops::IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}
