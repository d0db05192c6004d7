// Domain layer - grid, cells and the generation rule
pub mod domain;

// Application layer - simulation state machine and tick scheduling
pub mod application;

pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellCoord, Grid, GridError, next_generation};
pub use application::{Mode, PresentationAdapter, SimulationClock, TickRate, TickTimer};
pub use config::{ConfigError, Settings};
