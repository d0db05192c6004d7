mod button;
mod menu;

pub use button::Button;
pub use menu::{MENU_CLOSE, MENU_QUIT, MENU_SPEED, Menu};

use macroquad::prelude::Rect;

use crate::application::{Mode, TickRate};
use crate::config::Settings;
use crate::domain::CellCoord;

pub const BUTTON_HEIGHT: f32 = 40.0;

/// Index of each entry in [`create_buttons`]
pub const BUTTON_START_STOP: usize = 0;
pub const BUTTON_EDIT: usize = 1;
pub const BUTTON_CLEAR: usize = 2;
pub const BUTTON_RANDOM: usize = 3;
pub const BUTTON_MENU: usize = 4;

/// Screen geometry: the board on the left, the control panel on the right
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub cell_size: f32,
    pub board_width: f32,
    pub board_height: f32,
    pub panel_width: f32,
}

impl Layout {
    /// Board area is sized to whole cells so every pixel in it maps to a cell
    pub fn from_settings(settings: &Settings) -> Self {
        let (cols, rows) = settings.grid_dimensions();
        let cell_size = settings.cell_size as f32;
        Self {
            cell_size,
            board_width: cols as f32 * cell_size,
            board_height: rows as f32 * cell_size,
            panel_width: settings.panel_width as f32,
        }
    }

    pub fn panel_x(&self) -> f32 {
        self.board_width
    }

    pub fn in_board(&self, mouse_pos: (f32, f32)) -> bool {
        (0.0..self.board_width).contains(&mouse_pos.0)
            && (0.0..self.board_height).contains(&mouse_pos.1)
    }

    /// Floor-divide a pixel position by the cell size
    pub fn pixel_to_cell(&self, px: f32, py: f32) -> Option<CellCoord> {
        CellCoord::from_pixel(px, py, self.cell_size)
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, coord: CellCoord) -> (f32, f32) {
        (coord.x as f32 * self.cell_size, coord.y as f32 * self.cell_size)
    }
}

pub fn start_stop_label(mode: Mode) -> &'static str {
    if mode.is_running() { "Stop" } else { "Start" }
}

pub fn edit_label(mode: Mode) -> &'static str {
    if mode.is_editing() { "Stop Editing" } else { "Edit" }
}

pub fn speed_label(rate: TickRate) -> &'static str {
    if rate.is_fast() { "Speed: Fast" } else { "Speed: Slow" }
}

/// Panel buttons for the current mode, in `BUTTON_*` index order
pub fn create_buttons(layout: &Layout, mode: Mode) -> Vec<Button> {
    let width = layout.panel_width - 20.0;
    let slot = |i: usize| {
        Rect::new(
            layout.panel_x() + 10.0,
            20.0 + i as f32 * (BUTTON_HEIGHT + 10.0),
            width,
            BUTTON_HEIGHT,
        )
    };

    vec![
        Button::with_latch(slot(BUTTON_START_STOP), start_stop_label(mode), mode.is_running()),
        Button::with_latch(slot(BUTTON_EDIT), edit_label(mode), mode.is_editing()),
        Button::new(slot(BUTTON_CLEAR), "Clear"),
        Button::new(slot(BUTTON_RANDOM), "Random"),
        Button::new(slot(BUTTON_MENU), "Menu"),
    ]
}
