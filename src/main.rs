use std::ops::ControlFlow;

use log::{error, info};
use macroquad::prelude::*;

use life_board::{
    Grid, Settings, SimulationClock,
    input, rendering::{self, BoardView}, ui::{self, Layout},
};

fn window_conf() -> Conf {
    let settings = Settings::default();
    Conf {
        window_title: settings.title.clone(),
        window_width: settings.window_width() as i32,
        window_height: settings.viewport_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::default();
    if let Err(err) = settings.validate() {
        error!("invalid settings: {err}");
        std::process::exit(1);
    }

    let layout = Layout::from_settings(&settings);
    let (width, height) = settings.grid_dimensions();
    let grid = match Grid::try_new(width, height) {
        Ok(grid) => grid,
        Err(err) => {
            error!("cannot build board: {err}");
            std::process::exit(1);
        }
    };
    let mut view = BoardView::new(&grid);
    let mut clock = SimulationClock::new(grid);
    let mut rng = ::rand::rng();
    info!("board ready: {width}x{height} cells of {}px", settings.cell_size);

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(&layout, clock.mode());

        let commands = input::collect_commands(&clock, &view, &layout, &buttons, mouse_pos);
        let flow = input::apply_all(
            &commands,
            &mut clock,
            &mut view,
            &mut rng,
            settings.random_density,
        );
        if let ControlFlow::Break(()) = flow {
            break;
        }

        clock.update(get_frame_time(), &mut view);

        clear_background(BLACK);
        rendering::draw_board(&view, &layout, mouse_pos);
        rendering::draw_controls(&clock, &layout, &buttons, mouse_pos);
        view.menu.draw(layout.board_width, layout.board_height, clock.rate(), mouse_pos);

        next_frame().await;
    }

    info!("exiting after {} generations", clock.generation());
}
