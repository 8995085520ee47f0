use super::Direction;
use std::{
    convert::TryFrom,
    num::TryFromIntError,
    ops::{Add, AddAssign},
};

/// A `(row, col)` coordinate on a grid.
///
/// The origin is the top left corner. Coordinates are signed so that a request
/// for `(-1, 0)` can be expressed, and rejected, instead of wrapping around.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("({row}, {col})")]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Coord {
        Coord { row, col }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Coord { row, col }
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = TryFromIntError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Ok(Coord {
            row: i32::try_from(row)?,
            col: i32::try_from(col)?,
        })
    }
}

impl Add<Direction> for Coord {
    type Output = Coord;

    fn add(self, direction: Direction) -> Coord {
        let (d_row, d_col) = direction.deltas();
        Coord::new(self.row + d_row, self.col + d_col)
    }
}

impl AddAssign<Direction> for Coord {
    fn add_assign(&mut self, direction: Direction) {
        *self = *self + direction;
    }
}
