pub mod coordinate;
pub mod grid_cell;
pub mod polygon;

pub use coordinate::Coordinate;
pub use grid_cell::GridCell;
pub use polygon::{LatLngBounds, Polygon};
