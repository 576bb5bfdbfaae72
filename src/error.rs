use thiserror::Error;

use crate::maze::Coord;

/// Errors raised by maze generation, layout construction and solving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("layout is empty, generate a maze before solving it")]
    EmptyLayout,

    #[error("layout row {row} has {found} cells, expected {expected}")]
    RaggedLayout {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown layout character {0:?}")]
    InvalidTile(char),

    #[error("{coord} is outside the {height}x{width} layout")]
    OutOfBounds {
        coord: Coord,
        height: usize,
        width: usize,
    },

    #[error("{0} is a wall, routes must start and end on floor cells")]
    WallEndpoint(Coord),

    #[error("no route from {start} to {end}")]
    NoPath { start: Coord, end: Coord },

    /// The parent chain recorded during a search does not lead back to the start.
    /// A correctly terminated search never produces this.
    #[error("parent chain from {end} broke at {at} before reaching {start}")]
    BrokenPath { start: Coord, end: Coord, at: Coord },

    #[error("unknown solver {0:?}, expected one of: astar, greedy")]
    UnknownSolver(String),

    #[error("invalid coordinate {0:?}, expected `row,col`")]
    InvalidCoord(String),
}

pub type Result<T> = std::result::Result<T, MazeError>;
