use super::Simulator;
use crate::{
    geometry::{Coord, Position},
    grid::Grid,
};
use rand::Rng;
use std::{fmt, iter::FusedIterator};

/// The state of a walk at one moment.
///
/// Displays as a position header over the grid; `{:#}` colors the glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub position: Option<Position>,
    /// Length of the backtracking stack.
    pub depth: usize,
}

impl Snapshot {
    #[inline]
    pub fn coord(&self) -> Option<Coord> {
        self.position.map(|position| position.coord)
    }
}

pub(super) fn write_state(
    f: &mut fmt::Formatter<'_>,
    grid: &Grid,
    position: Option<Position>,
) -> fmt::Result {
    match position {
        Some(position) => writeln!(f, "Position:\t{}", position.coord)?,
        None => writeln!(f, "Position:\tNone")?,
    }
    if f.alternate() {
        write!(f, "{:#}", grid)
    } else {
        write!(f, "{}", grid)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_state(f, &self.grid, self.position)
    }
}

/// Lazy iterator over the snapshots of a walk.
///
/// Created by [`Simulator::simulate`]. Each call to `next` performs the step
/// deferred by the previous one before capturing a snapshot, so dropping the
/// iterator early leaves the walker exactly at the last state observed.
pub struct Simulation<'a, R> {
    simulator: &'a mut Simulator<R>,
    limit: Option<usize>,
    yielded: usize,
    pending_step: bool,
    done: bool,
}

impl<'a, R: Rng> Simulation<'a, R> {
    pub(super) fn new(simulator: &'a mut Simulator<R>, limit: Option<usize>) -> Self {
        Simulation {
            simulator,
            limit,
            yielded: 0,
            pending_step: false,
            done: false,
        }
    }

    pub(super) fn exhausted(simulator: &'a mut Simulator<R>) -> Self {
        Simulation {
            done: true,
            ..Self::new(simulator, None)
        }
    }
}

impl<R: Rng> Iterator for Simulation<'_, R> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.pending_step {
            self.simulator.step();
            self.pending_step = false;
        }

        let more = match self.limit {
            Some(limit) => self.yielded < limit,
            None => !self.simulator.complete(),
        };
        if more {
            self.yielded += 1;
            self.pending_step = true;
        } else {
            self.done = true;
        }

        Some(self.simulator.snapshot())
    }
}

impl<R: Rng> FusedIterator for Simulation<'_, R> {}

#[cfg(test)]
mod tests {
    use crate::{
        error::Error,
        geometry::{Cell, Coord},
        grid::Grid,
        simulator::{Simulator, State},
    };
    use std::convert::TryFrom;

    fn simulator(layout: &str) -> Simulator {
        Simulator::seeded(Grid::try_from(layout).unwrap(), 0)
    }

    fn coords(simulator: &mut Simulator, steps: Option<usize>) -> Vec<Option<(i32, i32)>> {
        simulator
            .simulate(steps)
            .unwrap()
            .map(|snapshot| snapshot.coord().map(|coord| (coord.row, coord.col)))
            .collect()
    }

    #[test]
    fn test_walled_single_cell_yields_nothing() {
        let mut simulator = simulator("1");
        assert!(simulator.complete());
        assert_eq!(simulator.simulate(None).unwrap().count(), 0);
        assert_eq!(simulator.simulate(Some(2)).unwrap().count(), 0);
    }

    #[test]
    fn test_unbounded_yields_steps_plus_one() {
        let mut simulator = simulator("1 x\nx x");
        simulator.set_start(Some(0), Some(1)).unwrap();
        assert_eq!(
            coords(&mut simulator, None),
            vec![Some((0, 1)), Some((1, 1)), Some((1, 0))]
        );
        assert_eq!(simulator.steps_taken(), 2);
        assert_eq!(simulator.state(), State::Complete);
    }

    #[test]
    fn test_bounded_steps_past_completion() {
        let mut simulator = simulator("1 x\nx x");
        simulator.set_start(Some(0), Some(1)).unwrap();
        let snapshots: Vec<_> = simulator.simulate(Some(5)).unwrap().collect();
        assert_eq!(snapshots.len(), 6);
        assert!(snapshots[3..]
            .iter()
            .all(|snapshot| snapshot.coord() == Some(Coord::new(1, 0))));
        assert_eq!(simulator.steps_taken(), 2);
    }

    #[test]
    fn test_bounded_stops_early() {
        let mut simulator = simulator("x x x x");
        simulator.set_start(Some(0), Some(0)).unwrap();
        assert_eq!(
            coords(&mut simulator, Some(1)),
            vec![Some((0, 0)), Some((0, 1))]
        );
        assert!(!simulator.complete());
        assert_eq!(simulator.grid().count(Cell::Unvisited), 2);
    }

    #[test]
    fn test_zero_steps_yields_final_state_only() {
        let mut simulator = simulator("x x");
        simulator.set_start(Some(0), Some(1)).unwrap();
        assert_eq!(coords(&mut simulator, Some(0)), vec![Some((0, 1))]);
        assert_eq!(simulator.steps_taken(), 0);
    }

    #[test]
    fn test_random_start_when_not_started() {
        let mut simulator = simulator("x x\nx x");
        assert_eq!(simulator.state(), State::NotStarted);
        // from any corner of a 2x2 grid: three moves forward, one backtrack
        let snapshots: Vec<_> = simulator.simulate(None).unwrap().collect();
        assert_eq!(snapshots.len(), 5);
        assert_eq!(snapshots[0].coord(), snapshots[4].coord());
        assert!(snapshots[0].position.is_some());
        assert_eq!(simulator.grid().count(Cell::Visited), 4);
    }

    #[test]
    fn test_random_start_failure_propagates() {
        let mut simulator = simulator("x 1");
        simulator.mark(Some(0), Some(0), Cell::Visited).unwrap();
        assert!(matches!(
            simulator.simulate(None),
            Err(Error::InvalidStart { .. })
        ));
    }

    #[test]
    fn test_snapshot_display() {
        let mut simulator = simulator("1 x\nx x");
        assert_eq!(simulator.to_string(), "Position:\tNone\n1 x\nx x\n");
        simulator.set_start(Some(1), Some(0)).unwrap();
        let first = simulator.simulate(None).unwrap().next().unwrap();
        assert_eq!(first.to_string(), "Position:\t(1, 0)\n1 x\n0 x\n");
        assert_eq!(
            format!("{:#}", first),
            format!("Position:\t(1, 0)\n{:#}", first.grid)
        );
    }

    #[test]
    fn test_dropping_early_leaves_last_observed_state() {
        let mut simulator = simulator("x x x");
        simulator.set_start(Some(0), Some(0)).unwrap();
        let first = simulator.simulate(None).unwrap().next().unwrap();
        assert_eq!(first.coord(), Some(Coord::new(0, 0)));
        assert_eq!(simulator.position().map(|p| p.coord), Some(Coord::new(0, 0)));
    }
}
