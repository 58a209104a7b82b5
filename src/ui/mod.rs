mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

use crate::application::Action;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_GAP: f32 = 10.0;
pub const BOARD_MARGIN: f32 = 10.0;

/// Panel buttons, top to bottom
pub const PANEL_ACTIONS: [Action; 5] = [
    Action::ToggleRun,
    Action::Reset,
    Action::Mutate,
    Action::Step,
    Action::Clear,
];

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    PANEL_ACTIONS
        .iter()
        .enumerate()
        .map(|(i, &action)| {
            let y = 20.0 + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            Button::new(px + 10.0, y, PANEL_WIDTH - 20.0, BUTTON_HEIGHT, action)
        })
        .collect()
}

/// Where the board sits on screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    /// Board area left of the panel; cells drawn past it are clipped
    pub area_width: f32,
    pub area_height: f32,
}

impl BoardLayout {
    /// Largest square cell that fits `grid` into the area left of the panel, centered
    pub fn fit(area_width: f32, area_height: f32, grid: (usize, usize)) -> Self {
        let (cols, rows) = (grid.0.max(1) as f32, grid.1.max(1) as f32);
        let usable_w = (area_width - 2.0 * BOARD_MARGIN).max(0.0);
        let usable_h = (area_height - 2.0 * BOARD_MARGIN).max(0.0);
        let cell_size = (usable_w / cols).min(usable_h / rows).floor().max(1.0);
        Self {
            origin_x: ((area_width - cell_size * cols) / 2.0).max(0.0),
            origin_y: ((area_height - cell_size * rows) / 2.0).max(0.0),
            cell_size,
            area_width,
            area_height,
        }
    }

    /// Layout for the current window
    pub fn current(grid: (usize, usize)) -> Self {
        Self::fit(screen_width() - PANEL_WIDTH, screen_height(), grid)
    }

    pub fn cell_to_screen(&self, x: usize, y: usize) -> (f32, f32) {
        (
            self.origin_x + x as f32 * self.cell_size,
            self.origin_y + y as f32 * self.cell_size,
        )
    }

    /// Board cell under a screen point, if any. Points outside the board
    /// area (over the panel, say) never map to a cell.
    pub fn screen_to_cell(&self, pos: (f32, f32), grid: (usize, usize)) -> Option<(usize, usize)> {
        if pos.0 < 0.0 || pos.1 < 0.0 || pos.0 >= self.area_width || pos.1 >= self.area_height {
            return None;
        }
        let fx = (pos.0 - self.origin_x) / self.cell_size;
        let fy = (pos.1 - self.origin_y) / self.cell_size;
        if fx < 0.0 || fy < 0.0 {
            return None;
        }
        let (x, y) = (fx as usize, fy as usize);
        (x < grid.0 && y < grid.1).then_some((x, y))
    }
}
