use macroquad::prelude::*;

use crate::application::{IntervalPolicy, Simulation};
use crate::domain::Grid;
use crate::ui::{BoardLayout, Button, PANEL_WIDTH, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Draw every cell of the board, alive in green, dead in near-black
pub fn draw_grid(grid: &Grid, layout: &BoardLayout) {
    let size = layout.cell_size;
    let draw_lines = size >= 4.0;

    for (x, y, cell) in grid.iter_cells() {
        let (sx, sy) = layout.cell_to_screen(x, y);
        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        draw_rectangle(sx, sy, size, size, color);
        if draw_lines {
            draw_rectangle_lines(sx, sy, size, size, 1.0, GRID_LINE_COLOR);
        }
    }
}

fn describe_interval(policy: &IntervalPolicy, current_ms: u128) -> String {
    match policy {
        IntervalPolicy::Fixed(_) => format!("{current_ms} ms"),
        IntervalPolicy::Adaptive { .. } => format!("{current_ms} ms (auto)"),
    }
}

/// Draw the control panel: buttons, then generation, status, speed and population
pub fn draw_controls(sim: &Simulation, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let running = sim.is_running();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos, running));

    let top = buttons.last().map_or(0.0, Button::bottom) + 40.0;
    let tx = px + 10.0;
    let label = Color::from_rgba(180, 180, 180, 255);

    let (w, h) = sim.dimensions();
    let interval_ms = sim.current_interval().as_millis();
    let live = sim.grid().live_count();

    let labels = [
        ("Generation:".to_string(), 16.0, WHITE),
        (format!("{}", sim.generation()), 22.0, ALIVE_COLOR),
        ("Status:".to_string(), 16.0, WHITE),
        (
            (if running { "Running" } else { "Stopped" }).to_string(),
            16.0,
            if running { GREEN } else { ORANGE },
        ),
        ("Tick interval:".to_string(), 16.0, WHITE),
        (describe_interval(&sim.interval, interval_ms), 14.0, label),
        ("Population:".to_string(), 16.0, WHITE),
        (format!("{live} / {}", w * h), 14.0, label),
        (format!("Board {w}x{h}"), 12.0, GRAY),
        (format!("{} {}", sim.rule.name(), sim.rule.description()), 12.0, GRAY),
        (format!("Step: {:.2} ms", sim.last_step_time_ms), 12.0, GRAY),
    ];
    labels.iter().enumerate().for_each(|(i, (text, size, color))| {
        draw_text(text, tx, top + i as f32 * 22.0, *size, *color);
    });

    let help = [
        "Space: start/stop",
        "R: reset  M: mutate",
        "S: step  C: clear",
        "Up/Down: speed",
        "LMB/RMB: paint (paused)",
    ];
    let help_top = screen_height() - help.len() as f32 * 14.0 - 10.0;
    help.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, tx, help_top + i as f32 * 14.0, 12.0, GRAY);
    });
}
