use std::ops::ControlFlow;

use log::{info, warn};
use macroquad::prelude::{KeyCode, MouseButton, is_key_pressed, is_mouse_button_pressed};
use rand::Rng;

use crate::application::SimulationClock;
use crate::domain::CellCoord;
use crate::rendering::BoardView;
use crate::ui::{
    BUTTON_CLEAR, BUTTON_EDIT, BUTTON_MENU, BUTTON_RANDOM, BUTTON_START_STOP, Button, Layout,
    MENU_CLOSE, MENU_QUIT, MENU_SPEED,
};

/// User intent decoded from one frame of device input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    StartStop,
    ToggleEdit,
    Clear,
    Randomize,
    ToggleMenu,
    SetSpeed(bool),
    CellClick(CellCoord),
    Quit,
}

/// Read keyboard, buttons, menu and board clicks for this frame
pub fn collect_commands(
    clock: &SimulationClock,
    view: &BoardView,
    layout: &Layout,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> Vec<Command> {
    let fast = clock.rate().is_fast();
    let keys = [
        (KeyCode::Space, Command::StartStop),
        (KeyCode::E, Command::ToggleEdit),
        (KeyCode::C, Command::Clear),
        (KeyCode::R, Command::Randomize),
        (KeyCode::F, Command::SetSpeed(!fast)),
        (KeyCode::Escape, Command::ToggleMenu),
    ];

    let mut commands: Vec<Command> = keys
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, command)| command)
        .collect();

    if view.menu.is_open() {
        commands.extend(menu_clicks(view, layout, clock, mouse_pos));
    } else {
        commands.extend(button_clicks(buttons, mouse_pos));
        if let Some(coord) = board_click(layout, mouse_pos) {
            commands.push(Command::CellClick(coord));
        }
    }

    commands
}

fn button_clicks(buttons: &[Button], mouse_pos: (f32, f32)) -> Option<Command> {
    buttons
        .iter()
        .position(|btn| btn.is_clicked(mouse_pos))
        .and_then(|idx| match idx {
            BUTTON_START_STOP => Some(Command::StartStop),
            BUTTON_EDIT => Some(Command::ToggleEdit),
            BUTTON_CLEAR => Some(Command::Clear),
            BUTTON_RANDOM => Some(Command::Randomize),
            BUTTON_MENU => Some(Command::ToggleMenu),
            _ => None,
        })
}

fn menu_clicks(
    view: &BoardView,
    layout: &Layout,
    clock: &SimulationClock,
    mouse_pos: (f32, f32),
) -> Option<Command> {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return None;
    }
    if !view.menu.contains(layout.board_width, layout.board_height, mouse_pos) {
        return Some(Command::ToggleMenu);
    }

    let rate = clock.rate();
    view.menu
        .buttons(layout.board_width, layout.board_height, rate)
        .iter()
        .position(|btn| btn.is_hovered(mouse_pos))
        .and_then(|idx| match idx {
            MENU_SPEED => Some(Command::SetSpeed(!rate.is_fast())),
            MENU_QUIT => Some(Command::Quit),
            MENU_CLOSE => Some(Command::ToggleMenu),
            _ => None,
        })
}

fn board_click(layout: &Layout, mouse_pos: (f32, f32)) -> Option<CellCoord> {
    if !is_mouse_button_pressed(MouseButton::Left) || !layout.in_board(mouse_pos) {
        return None;
    }
    layout.pixel_to_cell(mouse_pos.0, mouse_pos.1)
}

/// Apply one command to the simulation. `Break` means the user asked to quit.
pub fn apply<R: Rng + ?Sized>(
    command: Command,
    clock: &mut SimulationClock,
    view: &mut BoardView,
    rng: &mut R,
    density: f64,
) -> ControlFlow<()> {
    match command {
        Command::StartStop if clock.mode().is_running() => clock.stop(view),
        Command::StartStop => clock.start(view),
        Command::ToggleEdit => clock.toggle_edit(view),
        Command::Clear => clock.clear(view),
        Command::Randomize => clock.randomize(rng, density, view),
        Command::ToggleMenu => view.menu.toggle(),
        Command::SetSpeed(fast) => clock.set_rate(fast),
        Command::CellClick(coord) => {
            if let Err(err) = clock.toggle_cell_at(coord, view) {
                warn!("ignoring click: {err}");
            }
        }
        Command::Quit => {
            info!("quit requested");
            return ControlFlow::Break(());
        }
    }
    ControlFlow::Continue(())
}

/// Apply commands in order, stopping at the first quit
pub fn apply_all<R: Rng + ?Sized>(
    commands: &[Command],
    clock: &mut SimulationClock,
    view: &mut BoardView,
    rng: &mut R,
    density: f64,
) -> ControlFlow<()> {
    commands
        .iter()
        .try_for_each(|&command| apply(command, clock, view, rng, density))
}
