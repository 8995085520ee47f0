use crate::geometry::{Cell, Coord};

/// Failures of grid and traversal operations.
///
/// Every check happens before any mutation, so an operation which returns
/// one of these leaves the grid and the walker untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("layout is not {rows} x {cols}: {detail}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        detail: String,
    },
    #[error("a {rows} x {cols} grid does not fit in i32 coordinates")]
    TooLarge { rows: usize, cols: usize },
    #[error("position {coord} does not exist in a {rows} x {cols} grid")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },
    #[error("cannot mark {coord} as {to}: it is {from}")]
    InvalidMark { coord: Coord, from: Cell, to: Cell },
    #[error("cannot start at ({}, {}): {reason}", axis(.row), axis(.col))]
    InvalidStart {
        row: Option<i32>,
        col: Option<i32>,
        reason: &'static str,
    },
    #[error("no active position; set a start or provide coordinates")]
    NoActivePosition,
    #[error("both or neither of row and column are required; got ({}, {})", axis(.row), axis(.col))]
    AmbiguousCoordinate { row: Option<i32>, col: Option<i32> },
}

fn axis(value: &Option<i32>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "_".into(),
    }
}
