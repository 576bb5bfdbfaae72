use crate::maze::{Coord, Layout, Tile};

/// Axis-aligned square covering one layout cell in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

impl Block {
    /// The block drawn for `coord` when every cell is `size` pixels wide.
    pub fn for_cell(coord: Coord, size: u32) -> Self {
        Block {
            x: coord.col as u32 * size,
            y: coord.row as u32 * size,
            size,
        }
    }

    /// Whether two blocks overlap. Touching edges do not count.
    pub fn intersects(&self, other: &Block) -> bool {
        self.x < other.x + other.size
            && other.x < self.x + self.size
            && self.y < other.y + other.size
            && other.y < self.y + self.size
    }
}

impl Layout {
    /// Every wall cell as a pixel block, in row-major order.
    pub fn wall_blocks(&self, size: u32) -> impl Iterator<Item = Block> + '_ {
        self.grid()
            .iter()
            .filter(|&(_, &tile)| tile == Tile::Wall)
            .map(move |(coord, _)| Block::for_cell(coord, size))
    }

    /// Wall blocks in the 3x3 cell neighbourhood around the pixel position `(x, y)`.
    ///
    /// A `size` x `size` box anchored anywhere in that cell can only touch these walls.
    pub fn walls_near(&self, x: u32, y: u32, size: u32) -> Vec<Block> {
        if size == 0 {
            return Vec::new();
        }
        let center = Coord::new((y / size) as usize, (x / size) as usize);
        let rows = center.row.saturating_sub(1)..=center.row + 1;
        rows.flat_map(|row| {
            (center.col.saturating_sub(1)..=center.col + 1).map(move |col| Coord::new(row, col))
        })
        .filter(|&coord| self.tile(coord) == Some(Tile::Wall))
        .map(|coord| Block::for_cell(coord, size))
        .collect()
    }
}
