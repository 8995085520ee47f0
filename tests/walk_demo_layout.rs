//! Run with: `cargo test --test walk_demo_layout`

use grid_dfs::{Cell, Coord, Grid, Simulator, Snapshot};
use std::convert::TryFrom;

/// `(0, 4)` and `(1, 3)` are sealed off by walls.
const DEMO: &str = r"
x x x 1 x 1
x x 1 x 1 1
x x x 1 x x
x x x x x x
";

fn walk_from(row: i32, col: i32) -> (Simulator, Vec<Snapshot>) {
    let grid = Grid::try_from(DEMO.trim()).unwrap();
    let mut simulator = Simulator::seeded(grid, 1);
    simulator.set_start(Some(row), Some(col)).unwrap();
    let snapshots = simulator.simulate(None).unwrap().collect();
    (simulator, snapshots)
}

#[test]
fn test_visits_every_reachable_cell() {
    let (simulator, snapshots) = walk_from(0, 0);
    let grid = simulator.grid();

    assert!(simulator.complete());
    assert_eq!(grid.reachable_from(Coord::new(0, 0)), Ok(16));
    assert_eq!(grid.count(Cell::Visited), 16);
    assert_eq!(grid[Coord::new(0, 4)], Cell::Unvisited);
    assert_eq!(grid[Coord::new(1, 3)], Cell::Unvisited);
    assert_eq!(snapshots.len(), simulator.steps_taken() + 1);
}

#[test]
fn test_each_cell_entered_once() {
    let (_, snapshots) = walk_from(3, 5);

    for pair in snapshots.windows(2) {
        let (before, after) = (&pair[0], &pair[1]);
        let newly_visited =
            after.grid.count(Cell::Visited) - before.grid.count(Cell::Visited);
        let to = after.coord().unwrap();
        match newly_visited {
            // a forward move lands on a cell which was free a moment ago
            1 => assert_eq!(before.grid[to], Cell::Unvisited),
            // a backtrack returns to a cell already visited
            0 => {
                assert_eq!(before.grid[to], Cell::Visited);
                assert_eq!(after.depth + 1, before.depth);
            }
            n => panic!("a single step visited {} cells", n),
        }
    }
}

#[test]
fn test_walk_ends_at_empty_stack_with_no_free_neighbor() {
    for (row, col) in [(0, 0), (3, 0), (2, 5), (1, 1)] {
        let (simulator, snapshots) = walk_from(row, col);
        let last = snapshots.last().unwrap();
        assert_eq!(last.depth, 0);
        assert!(simulator.stack().is_empty());
        assert!(simulator.neighbors(None, None).unwrap().is_empty());
        assert_eq!(simulator.grid().count(Cell::Visited), 16);
    }
}

#[test]
fn test_sealed_cell_walk_is_already_complete() {
    let (simulator, snapshots) = walk_from(1, 3);
    assert!(snapshots.is_empty());
    assert_eq!(simulator.grid().count(Cell::Visited), 1);
    assert_eq!(simulator.steps_taken(), 0);
}
