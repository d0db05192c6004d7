mod presenter;
mod scheduler;
mod simulation;

pub use presenter::PresentationAdapter;
pub use scheduler::TickTimer;
pub use simulation::{Mode, SimulationClock, TickRate};
