pub mod cell;
pub mod coord;
pub mod direction;
pub mod position;

pub use cell::Cell;
pub use coord::Coord;
pub use direction::Direction;
pub use position::Position;
