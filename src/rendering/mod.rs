use macroquad::prelude::*;

use crate::application::{Mode, PresentationAdapter, SimulationClock};
use crate::domain::{CellCoord, Grid};
use crate::ui::{Button, Layout, Menu, speed_label};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Tile buffer the screen is drawn from, kept in sync through the
/// simulation's change hooks. Also owns the menu so it can answer
/// overlay queries.
pub struct BoardView {
    width: usize,
    height: usize,
    tiles: Vec<bool>,
    mode: Mode,
    pub menu: Menu,
}

impl BoardView {
    pub fn new(grid: &Grid) -> Self {
        let (width, height) = grid.dimensions();
        let mut view = Self {
            width,
            height,
            tiles: vec![false; width * height],
            mode: Mode::default(),
            menu: Menu::new(),
        };
        view.on_grid_replaced(grid);
        view
    }

    pub fn is_alive(&self, coord: CellCoord) -> bool {
        coord.x < self.width && coord.y < self.height && self.tiles[coord.y * self.width + coord.x]
    }

    /// Last mode reported by the simulation
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

impl PresentationAdapter for BoardView {
    fn on_cell_changed(&mut self, coord: CellCoord, alive: bool) {
        if coord.x < self.width && coord.y < self.height {
            self.tiles[coord.y * self.width + coord.x] = alive;
        }
    }

    fn on_grid_replaced(&mut self, grid: &Grid) {
        for (coord, cell) in grid.iter_cells() {
            self.on_cell_changed(coord, cell.is_alive());
        }
    }

    fn on_mode_changed(&mut self, mode: Mode) {
        self.mode = mode;
        if mode.is_running() {
            self.menu.close();
        }
    }

    fn is_overlay_visible(&self) -> bool {
        self.menu.is_open()
    }
}

/// Draw every tile; grid lines and the hover marker only show while editing
pub fn draw_board(view: &BoardView, layout: &Layout, mouse_pos: (f32, f32)) {
    let size = layout.cell_size;
    let editing = view.mode.is_editing();

    for y in 0..view.height {
        for x in 0..view.width {
            let coord = CellCoord::new(x, y);
            let (sx, sy) = layout.cell_origin(coord);
            let color = if view.is_alive(coord) { ALIVE_COLOR } else { DEAD_COLOR };
            draw_rectangle(sx, sy, size, size, color);

            if editing {
                draw_rectangle_lines(sx, sy, size, size, 1.0, GRID_LINE_COLOR);
            }
        }
    }

    if editing && !view.menu.is_open() && layout.in_board(mouse_pos) {
        if let Some(coord) = layout.pixel_to_cell(mouse_pos.0, mouse_pos.1) {
            let (sx, sy) = layout.cell_origin(coord);
            draw_rectangle_lines(sx, sy, size, size, 2.0, YELLOW);
        }
    }
}

/// Draw the control panel with buttons and status
pub fn draw_controls(
    clock: &SimulationClock,
    layout: &Layout,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    let px = layout.panel_x();
    draw_rectangle(
        px,
        0.0,
        layout.panel_width,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let mode = clock.mode();
    let (status, status_color) = match mode {
        Mode::Running => ("Running", Color::from_rgba(0, 255, 0, 255)),
        Mode::Edit => ("Editing", Color::from_rgba(255, 255, 0, 255)),
        Mode::Stopped => ("Stopped", Color::from_rgba(255, 165, 0, 255)),
    };
    let (gw, gh) = clock.grid().dimensions();
    let text_x = px + 10.0;
    let generation = clock.generation().to_string();
    let alive = format!("Alive: {}", clock.grid().population());
    let dims = format!("Grid: {}x{}", gw, gh);

    let labels: [(&str, f32, f32, Color); 11] = [
        ("Status:", 310.0, 16.0, WHITE),
        (status, 330.0, 16.0, status_color),
        (speed_label(clock.rate()), 360.0, 14.0, Color::from_rgba(180, 180, 180, 255)),
        ("Generation:", 390.0, 16.0, WHITE),
        (generation.as_str(), 410.0, 20.0, ALIVE_COLOR),
        (alive.as_str(), 440.0, 14.0, GRAY),
        (dims.as_str(), 460.0, 14.0, GRAY),
        ("Space: Start/Stop", 500.0, 12.0, GRAY),
        ("E: Edit  C: Clear", 515.0, 12.0, GRAY),
        ("R: Random  F: Speed", 530.0, 12.0, GRAY),
        ("Esc: Menu", 545.0, 12.0, GRAY),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, text_x, *y, *size, *color);
    });
}
