use super::{Cell, Coord};

/// A coordinate together with the state its cell had when it was recorded.
///
/// Positions are values: the backtracking stack holds these, and a popped
/// position still carries the cell state from the moment it was pushed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, parse_display::Display)]
#[display("{coord}: {cell}")]
pub struct Position {
    pub coord: Coord,
    pub cell: Cell,
}

impl Position {
    #[inline]
    pub const fn new(coord: Coord, cell: Cell) -> Position {
        Position { coord, cell }
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.coord.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.coord.col
    }
}
