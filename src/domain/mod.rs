mod cell;
mod coord;
mod error;
mod grid;
pub mod rule_engine;

pub use cell::Cell;
pub use coord::CellCoord;
pub use error::GridError;
pub use grid::Grid;
pub use rule_engine::next_generation;
