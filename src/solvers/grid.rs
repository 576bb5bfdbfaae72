use crate::error::{MazeError, Result};
use crate::maze::{Coord, Direction, Grid, Layout};

/// Floor adjacency over a layout, plus a score table private to one search.
///
/// Built fresh for every solve so no score ever leaks between searches or solvers.
pub struct SearchGrid<S> {
    floor: Grid<bool>,
    scores: Grid<S>,
    defaults: (Coord, Coord),
}

impl<S: Clone> SearchGrid<S> {
    /// Classifies every layout cell and fills the score table with `initial`.
    pub fn new(layout: &Layout, initial: S) -> Result<Self> {
        if layout.is_empty() {
            return Err(MazeError::EmptyLayout);
        }
        let mut floor = Grid::new(layout.height(), layout.width(), false);
        for (coord, tile) in layout.grid().iter() {
            floor[coord] = tile.is_floor();
        }
        Ok(SearchGrid {
            scores: Grid::new(layout.height(), layout.width(), initial),
            floor,
            defaults: layout.default_endpoints(),
        })
    }
}

impl<S> SearchGrid<S> {
    pub fn height(&self) -> usize {
        self.floor.height()
    }

    pub fn width(&self) -> usize {
        self.floor.width()
    }

    pub fn is_floor(&self, coord: Coord) -> bool {
        self.floor.get(coord).copied().unwrap_or(false)
    }

    /// In-bounds floor neighbors of `coord`, in up, down, left, right order.
    pub fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| coord.step(d))
            .filter(|&c| self.is_floor(c))
            .collect()
    }

    /// Resolves optional endpoints, defaulting to the cells just inside the top-left and
    /// bottom-right corners. Both must be in-bounds floor cells.
    pub fn endpoints(&self, start: Option<Coord>, end: Option<Coord>) -> Result<(Coord, Coord)> {
        let start = start.unwrap_or(self.defaults.0);
        let end = end.unwrap_or(self.defaults.1);
        Ok((self.validate(start)?, self.validate(end)?))
    }

    fn validate(&self, coord: Coord) -> Result<Coord> {
        if !self.floor.contains(coord) {
            return Err(MazeError::OutOfBounds {
                coord,
                height: self.height(),
                width: self.width(),
            });
        }
        if !self.is_floor(coord) {
            return Err(MazeError::WallEndpoint(coord));
        }
        Ok(coord)
    }
}

impl<S> std::ops::Index<Coord> for SearchGrid<S> {
    type Output = S;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.scores[index]
    }
}

impl<S> std::ops::IndexMut<Coord> for SearchGrid<S> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        &mut self.scores[index]
    }
}
