use crate::grid::tile::{DisplayWidth, ToRgb};
use crossterm::style::{Color, StyledContent, Stylize};

/// State of a single grid cell.
///
/// `Wall` and `Visited` are both closed to future moves, but a wall is part of
/// the input layout while a visited cell records where the walker has been.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
#[derive(Default)]
pub enum Cell {
    #[display("x")]
    #[default]
    Unvisited,
    #[display("1")]
    Wall,
    #[display("0")]
    Visited,
}

impl Cell {
    /// `true` for cells the walker may still move into.
    #[inline]
    pub fn is_free(self) -> bool {
        self == Cell::Unvisited
    }

    /// `true` for every cell which is not a wall.
    #[inline]
    pub fn is_open(self) -> bool {
        self != Cell::Wall
    }

    /// `true` if a cell holding `self` may be overwritten with `value`.
    ///
    /// The only change allowed is `Unvisited` to `Visited`; writing the value a
    /// cell already holds is a no-op.
    #[inline]
    pub fn can_become(self, value: Cell) -> bool {
        self == value || (self == Cell::Unvisited && value == Cell::Visited)
    }

    /// Foreground color of this cell's glyph on a terminal.
    pub fn terminal_color(self) -> Color {
        match self {
            Cell::Unvisited => Color::Cyan,
            Cell::Wall => Color::Red,
            Cell::Visited => Color::Blue,
        }
    }

    /// This cell's glyph, colored for a terminal.
    pub fn colored(self) -> StyledContent<String> {
        self.to_string().with(self.terminal_color())
    }
}

impl DisplayWidth for Cell {
    const DISPLAY_WIDTH: usize = 1;
}

impl ToRgb for Cell {
    fn to_rgb(&self) -> [u8; 3] {
        match self {
            Cell::Unvisited => [0, 0, 0],
            Cell::Wall => [255, 255, 255],
            Cell::Visited => [128, 128, 128],
        }
    }
}

impl From<bool> for Cell {
    /// `true` is a wall.
    fn from(wall: bool) -> Cell {
        if wall {
            Cell::Wall
        } else {
            Cell::Unvisited
        }
    }
}
