use crossterm::style::{Color, Stylize};

use std::fmt;

/// A single marker in the expanded maze layout.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Wall,
    Floor,
}

impl Tile {
    pub fn is_floor(self) -> bool {
        self == Tile::Floor
    }

    /// The character used by the text layout format.
    pub fn symbol(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
        }
    }

    pub fn from_symbol(c: char) -> Option<Tile> {
        match c {
            '#' => Some(Tile::Wall),
            '.' | ' ' => Some(Tile::Floor),
            _ => None,
        }
    }
}

/// Display class of a layout cell once a route is overlaid on it.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    #[default]
    Wall,
    Floor,
    /// Part of the solver's route between start and goal.
    Route,
    Start,
    Goal,
}

impl Paint {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// RGB color of this class for raster export.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Paint::Wall => [0, 0, 0],
            Paint::Floor => [255, 255, 255],
            Paint::Route => [255, 255, 0],
            Paint::Start => [0, 255, 0],
            Paint::Goal => [255, 0, 0],
        }
    }
}

impl From<Tile> for Paint {
    fn from(tile: Tile) -> Self {
        match tile {
            Tile::Wall => Paint::Wall,
            Tile::Floor => Paint::Floor,
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Paint::Wall => "⬜".with(Color::White),
            Paint::Floor => "  ".with(Color::Reset),
            Paint::Route => "🟨".with(Color::Yellow),
            Paint::Start => "🟩".with(Color::Green),
            Paint::Goal => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Paint::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
