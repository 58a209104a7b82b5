use std::time::Duration;

use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;
use life_board::{Cli, Config, rendering, input, ui::{self, BoardLayout}};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 900,
        window_height: 620,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut sim = match Config::load(cli.config.as_deref())
        .map(|config| config.apply_cli(&cli))
        .and_then(|config| config.build_simulation())
    {
        Ok(sim) => sim,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };
    info!("ready: {} live cells", sim.grid().live_count());

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();
        let layout = BoardLayout::current(sim.dimensions());

        sim = input::process_button_clicks(sim, &buttons, mouse_pos);
        sim = input::process_keyboard_input(sim);
        input::handle_mouse_paint(&mut sim, &layout, mouse_pos);

        sim = sim.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_grid(sim.grid(), &layout);
        rendering::draw_controls(&sim, &buttons, mouse_pos);

        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        next_frame().await;
    }

    sim.stop();
    info!("exiting at generation {}", sim.generation());
}
