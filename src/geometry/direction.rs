/// One of the four orthogonal directions on a grid.
///
/// Rows grow downward, so `Top` decreases the row index.
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
#[display(style = "snake_case")]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// Iterate through all `Direction`s, clockwise from `Top`.
    ///
    /// This order is the walker's tie-break when several moves are possible.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::Top), |direction| {
            use Direction::*;

            match direction {
                Top => Some(Right),
                Right => Some(Bottom),
                Bottom => Some(Left),
                Left => None,
            }
        })
    }

    /// `(d_row, d_col)` of a single step in this direction.
    pub fn deltas(self) -> (i32, i32) {
        match self {
            Direction::Top => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Bottom => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// The next direction clockwise.
    pub fn turn_right(self) -> Direction {
        match self {
            Direction::Top => Direction::Right,
            Direction::Right => Direction::Bottom,
            Direction::Bottom => Direction::Left,
            Direction::Left => Direction::Top,
        }
    }
}
