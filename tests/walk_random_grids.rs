//! Run with: `cargo test --test walk_random_grids`

use grid_dfs::{Cell, Grid, Simulator, State};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_random_walks_cover_their_component() {
    for seed in 0..32 {
        let mut simulator = Simulator::random_seeded(12, 9, seed).unwrap();
        if simulator.complete() {
            // no boundary opening; nothing to walk
            assert!(!simulator.grid().has_boundary_opening());
            continue;
        }

        let snapshots: Vec<_> = simulator.simulate(None).unwrap().collect();
        let start = snapshots[0].coord().unwrap();

        assert_eq!(simulator.state(), State::Complete);
        assert_eq!(
            simulator.grid().count(Cell::Visited),
            simulator.grid().reachable_from(start).unwrap(),
            "seed {}",
            seed
        );
        assert_eq!(snapshots.len(), simulator.steps_taken() + 1);
    }
}

#[test]
fn test_same_seed_same_walk() {
    let walk = |seed| {
        let mut simulator = Simulator::random_seeded(10, 10, seed).unwrap();
        let coords: Vec<_> = simulator
            .simulate(None)
            .map(|simulation| simulation.map(|snapshot| snapshot.coord()).collect())
            .unwrap_or_default();
        coords
    };
    for seed in [3, 5, 8] {
        assert_eq!(walk(seed), walk(seed));
    }
}

#[test]
fn test_open_grid_visits_every_cell_once() {
    let grid = Grid::procedural(7, 5, |_| Cell::Unvisited).unwrap();
    let mut simulator = Simulator::with_rng(grid, StdRng::seed_from_u64(99));
    let snapshots: Vec<_> = simulator.simulate(None).unwrap().collect();

    assert_eq!(simulator.grid().count(Cell::Visited), 35);
    let forward_moves = snapshots
        .windows(2)
        .filter(|pair| pair[1].grid.count(Cell::Visited) > pair[0].grid.count(Cell::Visited))
        .count();
    assert_eq!(forward_moves, 34);
}

#[test]
fn test_bounded_run_yields_limit_plus_one() {
    let grid = Grid::procedural(4, 4, |_| Cell::Unvisited).unwrap();
    let mut simulator = Simulator::seeded(grid, 4);
    assert_eq!(simulator.simulate(Some(100)).unwrap().count(), 101);
    assert!(simulator.complete());
}
