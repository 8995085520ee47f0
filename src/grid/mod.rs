mod boundary;
// This interior module is private; we reexport its contents.
#[allow(clippy::module_inception)]
mod grid;
mod neighborhood;
#[cfg(feature = "render")]
mod render;
mod style;

pub mod tile;

pub use boundary::Boundary;
pub use grid::{Grid, LayoutConversionErr};
pub use neighborhood::Neighborhood;
#[cfg(feature = "render")]
pub use render::{Animation, RenderError, POSITION_RGB};
pub use style::Style;
