pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod simulator;

pub use error::Error;
pub use geometry::{Cell, Coord, Direction, Position};
pub use grid::{Grid, Neighborhood};
pub use simulator::{Simulation, Simulator, Snapshot, State};
