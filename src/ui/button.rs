use macroquad::prelude::*;

use crate::application::Action;

/// Panel button bound to one control action
#[derive(Clone, Debug)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    pub action: Action,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, action: Action) -> Self {
        Self { x, y, width, height, action }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button with hover effect; `running` picks the Start/Stop caption
    pub fn draw(&self, mouse_pos: (f32, f32), running: bool) {
        let color = match (self.action, running, self.is_hovered(mouse_pos)) {
            (Action::ToggleRun, true, false) => Color::from_rgba(178, 34, 34, 255),
            (Action::ToggleRun, true, true) => Color::from_rgba(220, 60, 60, 255),
            (_, _, true) => Color::from_rgba(100, 149, 237, 255),
            _ => Color::from_rgba(70, 130, 180, 255),
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text = self.action.label(running);
        let text_size = measure_text(text, None, 20, 1.0);
        draw_text(
            text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_bounds_are_inclusive() {
        let button = Button::new(10.0, 20.0, 100.0, 40.0, Action::Reset);
        assert!(button.is_hovered((10.0, 20.0)));
        assert!(button.is_hovered((110.0, 60.0)));
        assert!(!button.is_hovered((9.9, 30.0)));
        assert!(!button.is_hovered((50.0, 60.1)));
    }
}
