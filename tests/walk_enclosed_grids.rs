//! Run with: `cargo test --test walk_enclosed_grids`

use grid_dfs::{Cell, Coord, Grid, Simulator, State};
use std::convert::TryFrom;

const W: Cell = Cell::Wall;
const U: Cell = Cell::Unvisited;

#[test]
fn test_walled_unit_grid() {
    let mut simulator = Simulator::seeded(Grid::new(1, 1, &[[W]]).unwrap(), 0);
    assert!(simulator.complete());
    assert_eq!(simulator.simulate(Some(2)).unwrap().count(), 0);
    assert_eq!(simulator.simulate(None).unwrap().count(), 0);

    let mut out = Vec::new();
    assert_eq!(simulator.show_simulation(Some(2), &mut out).unwrap(), 0);
    assert!(out.is_empty());
}

#[test]
fn test_walled_two_by_two() {
    let mut simulator = Simulator::seeded(Grid::new(2, 2, &[[W, W], [W, W]]).unwrap(), 0);
    assert_eq!(simulator.state(), State::Complete);
    assert_eq!(simulator.simulate(Some(2)).unwrap().count(), 0);
}

#[test]
fn test_island_interior_is_ignored() {
    let grid = Grid::try_from(
        "
        1 1 1 1
        1 x x 1
        1 x x 1
        1 1 1 1
        ",
    )
    .unwrap();
    assert!(!grid.has_boundary_opening());
    assert_eq!(grid.reachable_from(Coord::new(1, 1)), Ok(4));

    let mut simulator = Simulator::seeded(grid, 0);
    assert!(simulator.complete());
    simulator.set_start(None, None).unwrap();
    assert_eq!(simulator.position(), None);
    assert_eq!(simulator.simulate(None).unwrap().count(), 0);
    assert_eq!(simulator.grid().count(Cell::Visited), 0);
}

#[test]
fn test_single_open_boundary_cell() {
    let mut simulator = Simulator::seeded(
        Grid::new(3, 3, &[[W, W, W], [W, U, U], [W, W, W]]).unwrap(),
        0,
    );
    assert!(!simulator.complete());
    let snapshots: Vec<_> = simulator.simulate(None).unwrap().collect();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(simulator.grid().count(Cell::Visited), 2);
    assert!(simulator.complete());
}
