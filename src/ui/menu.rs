use macroquad::prelude::*;

use crate::application::TickRate;
use super::{BUTTON_HEIGHT, Button, speed_label};

const MENU_WIDTH: f32 = 240.0;
const MENU_PADDING: f32 = 20.0;

/// Index of each entry in [`Menu::buttons`]
pub const MENU_SPEED: usize = 0;
pub const MENU_QUIT: usize = 1;
pub const MENU_CLOSE: usize = 2;

/// Modal menu drawn over the board. While open it blocks cell edits.
#[derive(Clone, Debug, Default)]
pub struct Menu {
    is_open: bool,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Top-left corner and height of the menu box, centered on the board
    fn frame(board_width: f32, board_height: f32) -> (f32, f32, f32) {
        let height = 3.0 * BUTTON_HEIGHT + 4.0 * MENU_PADDING;
        let x = (board_width - MENU_WIDTH) / 2.0;
        let y = (board_height - height) / 2.0;
        (x, y, height)
    }

    /// Entries in index order: speed toggle, quit, close
    pub fn buttons(&self, board_width: f32, board_height: f32, rate: TickRate) -> Vec<Button> {
        let (x, y, _) = Self::frame(board_width, board_height);
        let slot = |i: usize| {
            Rect::new(
                x + MENU_PADDING,
                y + MENU_PADDING + i as f32 * (BUTTON_HEIGHT + MENU_PADDING),
                MENU_WIDTH - 2.0 * MENU_PADDING,
                BUTTON_HEIGHT,
            )
        };

        vec![
            Button::with_latch(slot(MENU_SPEED), speed_label(rate), rate.is_fast()),
            Button::new(slot(MENU_QUIT), "Quit"),
            Button::new(slot(MENU_CLOSE), "Close"),
        ]
    }

    /// True when `mouse_pos` lands inside the menu box
    pub fn contains(&self, board_width: f32, board_height: f32, mouse_pos: (f32, f32)) -> bool {
        let (x, y, height) = Self::frame(board_width, board_height);
        mouse_pos.0 >= x
            && mouse_pos.0 <= x + MENU_WIDTH
            && mouse_pos.1 >= y
            && mouse_pos.1 <= y + height
    }

    pub fn draw(&self, board_width: f32, board_height: f32, rate: TickRate, mouse_pos: (f32, f32)) {
        if !self.is_open {
            return;
        }

        // Dim the board underneath
        draw_rectangle(0.0, 0.0, board_width, board_height, Color::from_rgba(0, 0, 0, 160));

        let (x, y, height) = Self::frame(board_width, board_height);
        draw_rectangle(x, y, MENU_WIDTH, height, Color::from_rgba(30, 30, 30, 255));
        draw_rectangle_lines(x, y, MENU_WIDTH, height, 2.0, WHITE);

        self.buttons(board_width, board_height, rate)
            .iter()
            .for_each(|btn| btn.draw(mouse_pos));
    }
}
