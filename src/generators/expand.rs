use crate::generators::backtrack::GenerationCell;
use crate::maze::{Coord, Direction, Grid, Layout, Tile};

use Tile::{Floor, Wall};

/// Expands a carved logical grid into its `(2 * rows + 1) x (2 * cols + 1)` wall/floor layout.
///
/// Every logical row produces two layout rows: the upper one holds the passage north of
/// each cell, the lower one the cell itself and the passage to its east. The leading wall
/// column and the closing wall row are left as the initial fill.
pub fn expand_layout(cells: &Grid<GenerationCell>) -> Layout {
    let mut grid = Grid::new(cells.height() * 2 + 1, cells.width() * 2 + 1, Wall);

    for coord in cells.coords() {
        let (upper, lower) = expand_cell(cells, coord);
        let (row, col) = (coord.row * 2, coord.col * 2 + 1);
        for (offset, tile) in upper.into_iter().enumerate() {
            grid[Coord::new(row, col + offset)] = tile;
        }
        for (offset, tile) in lower.into_iter().enumerate() {
            grid[Coord::new(row + 1, col + offset)] = tile;
        }
    }

    Layout::from_grid(grid)
}

/// The two layout columns contributed by one logical cell, for the upper and lower rows.
///
/// The upper-right slot sits on a corner between four logical cells. It is only opened when
/// neither the cell above has a wall to its east nor the next cell in reading order has a
/// wall to its north; otherwise the floor there would touch another floor only diagonally
/// and let a walker cut through a logical wall.
fn expand_cell(cells: &Grid<GenerationCell>, coord: Coord) -> ([Tile; 2], [Tile; 2]) {
    let cell = cells[coord];

    if cell.has_wall(Direction::North) {
        let lower = if cell.has_wall(Direction::East) {
            [Floor, Wall]
        } else {
            [Floor, Floor]
        };
        return ([Wall, Wall], lower);
    }

    if cell.has_wall(Direction::East) {
        return ([Floor, Wall], [Floor, Wall]);
    }

    let above_blocks = coord
        .step(Direction::North)
        .and_then(|above| cells.get(above))
        .is_some_and(|above| above.has_wall(Direction::East));
    let next_blocks =
        next_in_reading_order(cells, coord).is_some_and(|next| next.has_wall(Direction::North));

    if above_blocks || next_blocks {
        ([Floor, Wall], [Floor, Floor])
    } else {
        ([Floor, Floor], [Floor, Floor])
    }
}

/// The cell after `coord` in row-major order, wrapping onto the next row.
fn next_in_reading_order(cells: &Grid<GenerationCell>, coord: Coord) -> Option<&GenerationCell> {
    if coord.col + 1 < cells.width() {
        cells.get(Coord::new(coord.row, coord.col + 1))
    } else {
        cells.get(Coord::new(coord.row + 1, 0))
    }
}
