//! The depth-first walker.
//!
//! A [`Simulator`] owns a [`Grid`] and walks it one cell per [`Simulator::step`],
//! always preferring the first free neighbor clockwise from the top. Whenever it
//! leaves a cell which still has another free neighbor, it pushes that cell onto
//! its backtracking stack; at a dead end it pops the most recent one.

mod simulation;

pub use simulation::{Simulation, Snapshot};

use crate::{
    error::Error,
    geometry::{Cell, Coord, Position},
    grid::{Grid, Neighborhood},
};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::fmt;
use tracing::{debug, trace};

/// Where a walk is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, parse_display::Display)]
#[display(style = "snake_case")]
pub enum State {
    /// No start has been chosen yet.
    NotStarted,
    /// The walker has a position and something left to explore.
    Active,
    /// Nothing is left to explore, or the grid has no boundary opening.
    Complete,
}

/// Depth-first walker over a [`Grid`].
///
/// The random source is injected so that random starts are reproducible; see
/// [`Simulator::seeded`].
#[derive(Debug, Clone)]
pub struct Simulator<R = StdRng> {
    grid: Grid,
    position: Option<Position>,
    stack: Vec<Position>,
    steps_taken: usize,
    rng: R,
}

impl Simulator<StdRng> {
    /// Walk `grid`, choosing random starts from entropy.
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    /// Walk `grid`, choosing random starts deterministically from `seed`.
    pub fn seeded(grid: Grid, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    /// Walk a random `rows x cols` layout; the same `seed` produces the same
    /// layout and the same random starts.
    pub fn random_seeded(rows: usize, cols: usize, seed: u64) -> Result<Self, Error> {
        Self::with_random_grid(rows, cols, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulator<R> {
    pub fn with_rng(grid: Grid, rng: R) -> Self {
        Simulator {
            grid,
            position: None,
            stack: Vec::new(),
            steps_taken: 0,
            rng,
        }
    }

    /// Sample a random `rows x cols` layout from `rng`, then walk it with the same source.
    pub fn with_random_grid(rows: usize, cols: usize, mut rng: R) -> Result<Self, Error> {
        let grid = Grid::random(rows, cols, &mut rng)?;
        Ok(Self::with_rng(grid, rng))
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The walker's current position, if it has one.
    #[inline]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// The backtracking stack; the last element is the next one popped.
    #[inline]
    pub fn stack(&self) -> &[Position] {
        &self.stack
    }

    /// Number of steps which moved the walker, forward or back.
    #[inline]
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn state(&self) -> State {
        if self.complete() {
            State::Complete
        } else if self.position.is_none() {
            State::NotStarted
        } else {
            State::Active
        }
    }

    /// `true` when no moves remain, or when the grid is an enclosed island.
    ///
    /// A walk which has not started is never complete unless the grid has no
    /// boundary opening: there is always somewhere to start.
    pub fn complete(&self) -> bool {
        if !self.grid.has_boundary_opening() {
            return true;
        }
        match self.position {
            None => false,
            Some(position) => {
                self.stack.is_empty() && Neighborhood::around(&self.grid, position.coord).is_empty()
            }
        }
    }

    /// Set a starting position.
    ///
    /// With both coordinates, the start must be in bounds and must not be a wall.
    /// If either coordinate is omitted, or if the grid has no boundary opening,
    /// this defers to [`Simulator::random_start`].
    pub fn set_start(&mut self, row: Option<i32>, col: Option<i32>) -> Result<(), Error> {
        let (Some(row), Some(col)) = (row, col) else {
            return self.random_start(row, col);
        };
        let invalid = |reason| Error::InvalidStart {
            row: Some(row),
            col: Some(col),
            reason,
        };

        let coord = Coord::new(row, col);
        let cell = self.grid.cell(coord).ok_or_else(|| invalid("out of bounds"))?;
        if !self.grid.has_boundary_opening() {
            return self.random_start(Some(row), Some(col));
        }
        if cell == Cell::Wall {
            return Err(invalid("cell is a wall"));
        }

        self.start_at(coord);
        Ok(())
    }

    /// Start at a random unvisited cell.
    ///
    /// A supplied row or column pins that axis; the other is sampled uniformly.
    /// On a grid with no boundary opening this clears the position and succeeds:
    /// such a walk is already complete.
    pub fn random_start(&mut self, row: Option<i32>, col: Option<i32>) -> Result<(), Error> {
        let invalid = |reason| Error::InvalidStart { row, col, reason };
        if row.map_or(false, |row| row < 0 || row as usize >= self.grid.rows()) {
            return Err(invalid("row out of bounds"));
        }
        if col.map_or(false, |col| col < 0 || col as usize >= self.grid.cols()) {
            return Err(invalid("column out of bounds"));
        }

        if !self.grid.has_boundary_opening() {
            debug!("grid has no boundary opening; nothing to walk");
            self.position = None;
            return Ok(());
        }

        // Sampling among the matching unvisited cells has the same distribution as
        // re-sampling coordinates until an unvisited one turns up, but terminates.
        let candidates: Vec<Coord> = self
            .grid
            .iter()
            .filter(|(coord, cell)| {
                cell.is_free()
                    && row.map_or(true, |row| row == coord.row)
                    && col.map_or(true, |col| col == coord.col)
            })
            .map(|(coord, _)| coord)
            .collect();
        let coord = *candidates
            .choose(&mut self.rng)
            .ok_or_else(|| invalid("no unvisited cell"))?;

        self.start_at(coord);
        Ok(())
    }

    fn start_at(&mut self, coord: Coord) {
        if let Some(cell) = self.grid.cell_mut(coord) {
            *cell = Cell::Visited;
        }
        self.position = Some(Position::new(coord, Cell::Visited));
        debug!(%coord, "walk started");
    }

    /// Advance the walk by one move.
    ///
    /// Moves to the first free neighbor clockwise from the top, remembering the
    /// current cell if it has other free neighbors. With no free neighbor, backtracks
    /// to the most recently remembered cell. With neither, does nothing; observe
    /// [`Simulator::complete`] to know when to stop.
    pub fn step(&mut self) {
        let Some(current) = self.position else {
            trace!("step without a position");
            return;
        };
        let neighborhood = Neighborhood::around(&self.grid, current.coord);

        if neighborhood.count() > 1 {
            self.stack.push(current);
        }

        if let Some(next) = neighborhood.next_free() {
            if let Some(cell) = self.grid.cell_mut(next.coord) {
                *cell = Cell::Visited;
            }
            self.position = Some(Position::new(next.coord, Cell::Visited));
            self.steps_taken += 1;
            trace!(from = %current.coord, to = %next.coord, "step");
        } else if let Some(previous) = self.stack.pop() {
            self.position = Some(previous);
            self.steps_taken += 1;
            debug!(to = %previous.coord, depth = self.stack.len(), "backtrack");
        }
    }

    /// Resolve optional coordinates, defaulting each omitted axis to the current position.
    fn resolve(&self, row: Option<i32>, col: Option<i32>) -> Result<Coord, Error> {
        match (row, col, self.position) {
            (Some(row), Some(col), _) => Ok(Coord::new(row, col)),
            (row, col, Some(position)) => Ok(Coord::new(
                row.unwrap_or(position.row()),
                col.unwrap_or(position.col()),
            )),
            _ => Err(Error::NoActivePosition),
        }
    }

    /// Set a cell; each omitted coordinate defaults to the current position.
    ///
    /// As with [`Grid::mark`], only an `Unvisited` cell may become `Visited`.
    pub fn mark(&mut self, row: Option<i32>, col: Option<i32>, value: Cell) -> Result<(), Error> {
        let coord = self.resolve(row, col)?;
        self.grid.mark(coord, value)
    }

    /// The neighborhood of the given cell, or of the current position if both
    /// coordinates are omitted.
    ///
    /// A single coordinate is ambiguous, but an out of bounds one is reported first;
    /// the omitted axis counts as `0` for that check.
    pub fn neighbors(&self, row: Option<i32>, col: Option<i32>) -> Result<Neighborhood, Error> {
        match (row, col) {
            (Some(row), Some(col)) => Neighborhood::of(&self.grid, Coord::new(row, col)),
            (None, None) => self
                .position
                .map(|position| Neighborhood::around(&self.grid, position.coord))
                .ok_or(Error::NoActivePosition),
            (row, col) => {
                let coord = Coord::new(row.unwrap_or_default(), col.unwrap_or_default());
                if !self.grid.in_bounds(coord) {
                    return Err(self.grid.out_of_bounds(coord));
                }
                Err(Error::AmbiguousCoordinate { row, col })
            }
        }
    }

    /// Restore the grid to its original layout.
    ///
    /// The position and backtracking stack are left as they are; use
    /// [`Simulator::restart`] to clear them too.
    pub fn reset(&mut self) {
        self.grid.reset();
    }

    /// Restore the grid and forget the walk, returning to [`State::NotStarted`].
    pub fn restart(&mut self) {
        self.grid.reset();
        self.position = None;
        self.stack.clear();
        self.steps_taken = 0;
    }

    /// Capture the current grid and position.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            position: self.position,
            depth: self.stack.len(),
        }
    }

    /// Lazily walk the grid, yielding a snapshot before every step and once at the end.
    ///
    /// If the walk is already complete, nothing is yielded. Otherwise, a random
    /// start is chosen first if none has been set.
    ///
    /// Without a step limit, this runs until [`Simulator::complete`], yielding
    /// one more snapshot than the number of steps taken. With a limit of `k`, it
    /// yields exactly `k + 1` snapshots, stepping past completion if need be.
    pub fn simulate(&mut self, steps: Option<usize>) -> Result<Simulation<'_, R>, Error> {
        if self.complete() {
            return Ok(Simulation::exhausted(self));
        }
        if self.position.is_none() {
            self.random_start(None, None)?;
        }
        Ok(Simulation::new(self, steps))
    }

    /// Write every snapshot of a simulation to `out`, separated by blank lines.
    ///
    /// Returns the number of snapshots written.
    pub fn show_simulation<W: std::io::Write>(
        &mut self,
        steps: Option<usize>,
        mut out: W,
    ) -> Result<usize, ShowError> {
        let mut shown = 0;
        for snapshot in self.simulate(steps)? {
            writeln!(out, "{}", snapshot)?;
            shown += 1;
        }
        Ok(shown)
    }

    /// Render a simulation as a looping gif, one frame per snapshot.
    ///
    /// _Depends on the `render` feature._
    ///
    /// Returns the number of frames written. A walk which is already complete
    /// yields no snapshots; its gif holds a single frame of the current grid.
    #[cfg(feature = "render")]
    pub fn gif(
        &mut self,
        output: &std::path::Path,
        steps: Option<usize>,
        frame_duration: std::time::Duration,
        style: crate::grid::Style,
    ) -> Result<usize, crate::grid::RenderError> {
        let mut animation = self
            .grid
            .prepare_animation(output, frame_duration, style)?;
        for snapshot in self.simulate(steps)? {
            animation.write_frame(&snapshot.grid, snapshot.coord())?;
        }
        if animation.frames() == 0 {
            animation.write_frame(&self.grid, self.position.map(|position| position.coord))?;
        }
        Ok(animation.frames())
    }
}

impl<R> fmt::Display for Simulator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        simulation::write_state(f, &self.grid, self.position)
    }
}

/// An error which can arise while printing a simulation.
#[derive(Debug, thiserror::Error)]
pub enum ShowError {
    #[error(transparent)]
    Simulation(#[from] Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
