use crate::geometry::{Coord, Direction};

/// Iterator over the coordinates on the outer ring of a [`Grid`][super::Grid].
///
/// Created by [`Grid::boundary`][super::Grid::boundary]. The ring is walked
/// clockwise from the top left corner, and each coordinate is produced exactly
/// once, including for grids a single row or column wide.
pub struct Boundary {
    pub(crate) next: Option<Coord>,
    pub(crate) direction: Direction,
    pub(crate) remaining: usize,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl Boundary {
    pub(crate) fn new(rows: usize, cols: usize) -> Boundary {
        let remaining = match (rows, cols) {
            (0, _) | (_, 0) => 0,
            (1, cols) => cols,
            (rows, 1) => rows,
            (rows, cols) => 2 * (rows + cols) - 4,
        };

        Boundary {
            next: (remaining > 0).then_some(Coord::new(0, 0)),
            direction: Direction::Right,
            remaining,
            rows,
            cols,
        }
    }

    fn in_bounds(&self, coord: Coord) -> bool {
        let fits = |value: i32, extent: usize| {
            usize::try_from(value).map_or(false, |value| value < extent)
        };
        fits(coord.row, self.rows) && fits(coord.col, self.cols)
    }
}

impl Iterator for Boundary {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.remaining -= 1;

        if self.remaining > 0 {
            // turn clockwise at each corner
            while !self.in_bounds(current + self.direction) {
                self.direction = self.direction.turn_right();
            }
            self.next = Some(current + self.direction);
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl std::iter::ExactSizeIterator for Boundary {}

impl std::iter::FusedIterator for Boundary {}
