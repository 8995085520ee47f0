use super::Grid;
use crate::{
    error::Error,
    geometry::{Coord, Direction, Position},
};

/// The in-bounds cells orthogonally adjacent to one coordinate.
///
/// Each slot holds a [`Position`] recording the neighbor's state when the
/// neighborhood was computed. Directions which would leave the grid are `None`;
/// they are absent, not walls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    pub top: Option<Position>,
    pub right: Option<Position>,
    pub bottom: Option<Position>,
    pub left: Option<Position>,
}

impl Neighborhood {
    /// Compute the neighborhood of a coordinate.
    pub fn of(grid: &Grid, coord: Coord) -> Result<Neighborhood, Error> {
        if !grid.in_bounds(coord) {
            return Err(grid.out_of_bounds(coord));
        }
        Ok(Self::around(grid, coord))
    }

    /// Compute the neighborhood of a coordinate already known to be in bounds.
    pub(crate) fn around(grid: &Grid, coord: Coord) -> Neighborhood {
        let mut neighborhood = Neighborhood::default();
        for direction in Direction::iter() {
            let adjacent = coord + direction;
            *neighborhood.slot_mut(direction) = grid
                .cell(adjacent)
                .map(|cell| Position::new(adjacent, cell));
        }
        neighborhood
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut Option<Position> {
        match direction {
            Direction::Top => &mut self.top,
            Direction::Right => &mut self.right,
            Direction::Bottom => &mut self.bottom,
            Direction::Left => &mut self.left,
        }
    }

    /// The neighbor in a given direction, if it exists.
    pub fn get(&self, direction: Direction) -> Option<Position> {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    /// Iterate over the existing neighbors, clockwise from the top.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (Direction, Position)> {
        Direction::iter().filter_map(move |direction| {
            self.get(direction).map(|position| (direction, position))
        })
    }

    /// Iterate over the neighbors which are still unvisited, clockwise from the top.
    pub fn free(&self) -> impl '_ + Iterator<Item = Position> {
        self.iter()
            .map(|(_, position)| position)
            .filter(|position| position.cell.is_free())
    }

    /// The first free neighbor in clockwise order, starting from the top.
    pub fn next_free(&self) -> Option<Position> {
        self.free().next()
    }

    /// Number of free neighbors.
    pub fn count(&self) -> usize {
        self.free().count()
    }

    /// `true` when no neighbor is free: there is no move forward from here.
    pub fn is_empty(&self) -> bool {
        self.next_free().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Cell;
    use std::convert::TryFrom;

    fn parse(layout: &str) -> Grid {
        Grid::try_from(layout).unwrap()
    }

    #[test]
    fn test_interior_has_all_four_clockwise() {
        let grid = parse("x 1 x\n0 x x\nx x 1");
        let neighborhood = Neighborhood::of(&grid, Coord::new(1, 1)).unwrap();
        let found: Vec<_> = neighborhood
            .iter()
            .map(|(direction, position)| (direction, position.coord, position.cell))
            .collect();
        assert_eq!(
            found,
            vec![
                (Direction::Top, Coord::new(0, 1), Cell::Wall),
                (Direction::Right, Coord::new(1, 2), Cell::Unvisited),
                (Direction::Bottom, Coord::new(2, 1), Cell::Unvisited),
                (Direction::Left, Coord::new(1, 0), Cell::Visited),
            ]
        );
        assert_eq!(neighborhood.count(), 2);
        assert_eq!(
            neighborhood.next_free().map(|position| position.coord),
            Some(Coord::new(1, 2))
        );
    }

    #[test]
    fn test_corner_omits_off_grid_directions() {
        let grid = parse("x x\nx x");
        let neighborhood = Neighborhood::of(&grid, Coord::new(0, 0)).unwrap();
        assert_eq!(neighborhood.top, None);
        assert_eq!(neighborhood.left, None);
        let directions: Vec<_> = neighborhood.iter().map(|(direction, _)| direction).collect();
        assert_eq!(directions, vec![Direction::Right, Direction::Bottom]);

        let neighborhood = Neighborhood::of(&grid, Coord::new(1, 1)).unwrap();
        let directions: Vec<_> = neighborhood.iter().map(|(direction, _)| direction).collect();
        assert_eq!(directions, vec![Direction::Top, Direction::Left]);
    }

    #[test]
    fn test_single_cell_has_no_neighbors() {
        let grid = parse("x");
        let neighborhood = Neighborhood::of(&grid, Coord::new(0, 0)).unwrap();
        assert_eq!(neighborhood, Neighborhood::default());
        assert!(neighborhood.is_empty());
        assert_eq!(neighborhood.count(), 0);
    }

    #[test]
    fn test_clockwise_priority() {
        // left and bottom are free; bottom wins
        let grid = parse("1 1 1\nx x 1\nx x x");
        let neighborhood = Neighborhood::of(&grid, Coord::new(1, 1)).unwrap();
        assert_eq!(
            neighborhood.next_free().map(|position| position.coord),
            Some(Coord::new(2, 1))
        );

        // right and left are free; right wins
        let grid = parse("1 1 1\nx x x\n1 1 1");
        let neighborhood = Neighborhood::of(&grid, Coord::new(1, 1)).unwrap();
        assert_eq!(
            neighborhood.next_free().map(|position| position.coord),
            Some(Coord::new(1, 2))
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = parse("x x x\nx x x");
        for coord in [
            Coord::new(-1, 0),
            Coord::new(2, 0),
            Coord::new(0, -1),
            Coord::new(0, 3),
        ] {
            assert_eq!(
                Neighborhood::of(&grid, coord),
                Err(Error::OutOfBounds {
                    coord,
                    rows: 2,
                    cols: 3
                })
            );
        }
    }
}
