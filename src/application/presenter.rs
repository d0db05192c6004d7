use crate::domain::{CellCoord, Grid};
use super::Mode;

/// Boundary between the simulation and whatever draws it.
///
/// The simulation calls the `on_*` hooks after it changes state and asks
/// `is_overlay_visible` before accepting edit clicks.
pub trait PresentationAdapter {
    /// One cell changed; redraw just that cell
    fn on_cell_changed(&mut self, coord: CellCoord, alive: bool);

    /// The whole grid was swapped; redraw everything
    fn on_grid_replaced(&mut self, grid: &Grid);

    /// Mode changed; button labels and edit affordances may need updating
    fn on_mode_changed(&mut self, _mode: Mode) {}

    /// True while a menu or other blocking overlay covers the board
    fn is_overlay_visible(&self) -> bool {
        false
    }
}
