use macroquad::prelude::*;

use crate::application::{Action, Simulation};
use crate::ui::{BoardLayout, Button, panel_x};

/// Keyboard bindings for the controls
pub const KEY_BINDINGS: [(KeyCode, Action); 7] = [
    (KeyCode::Space, Action::ToggleRun),
    (KeyCode::R, Action::Reset),
    (KeyCode::M, Action::Mutate),
    (KeyCode::S, Action::Step),
    (KeyCode::C, Action::Clear),
    (KeyCode::Up, Action::Faster),
    (KeyCode::Down, Action::Slower),
];

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation) -> Simulation {
    KEY_BINDINGS.iter().fold(sim, |s, &(key, action)| {
        if is_key_pressed(key) { action.apply(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(sim: Simulation, buttons: &[Button], mouse_pos: (f32, f32)) -> Simulation {
    buttons.iter().fold(sim, |s, btn| {
        if btn.is_clicked(mouse_pos) { btn.action.apply(s) } else { s }
    })
}

/// Paint with the left button, erase with the right, only while stopped
pub fn handle_mouse_paint(sim: &mut Simulation, layout: &BoardLayout, mouse_pos: (f32, f32)) {
    if sim.is_running() || mouse_pos.0 >= panel_x() {
        return;
    }
    let Some((x, y)) = layout.screen_to_cell(mouse_pos, sim.dimensions()) else {
        return;
    };
    if is_mouse_button_down(MouseButton::Left) {
        sim.paint(x, y, true);
    } else if is_mouse_button_down(MouseButton::Right) {
        sim.paint(x, y, false);
    }
}
