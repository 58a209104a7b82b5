//! Initial board construction: fixed pattern placements plus random noise.

use rand::Rng;

use super::{Grid, Pattern, presets};

/// A pattern stamped at a fixed top-left position
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub pattern: Pattern,
    pub x: isize,
    pub y: isize,
}

impl Placement {
    pub fn new(pattern: Pattern, x: isize, y: isize) -> Self {
        Self { pattern, x, y }
    }
}

/// Everything needed to (re)build a starting board
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedPlan {
    pub placements: Vec<Placement>,
    /// Number of uniformly random cells switched on after the patterns
    pub noise: usize,
}

pub const DEFAULT_NOISE: usize = 100;

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            placements: vec![
                Placement::new(presets::glider(), 1, 1),
                Placement::new(presets::blinker(), 10, 10),
                Placement::new(presets::toad(), 20, 20),
                Placement::new(presets::block(), 30, 5),
            ],
            noise: DEFAULT_NOISE,
        }
    }
}

impl SeedPlan {
    /// Patterns only, no noise. Handy for reproducible boards.
    pub fn patterns_only(placements: Vec<Placement>) -> Self {
        Self { placements, noise: 0 }
    }

    /// Build a fresh `width` x `height` board. Every call draws new noise from `rng`.
    pub fn seed<R: Rng>(&self, width: usize, height: usize, rng: &mut R) -> Grid {
        let mut grid = Grid::new(width, height);
        for placement in &self.placements {
            placement.pattern.place_on(&mut grid, placement.x, placement.y);
        }
        grid.scatter(self.noise, rng);
        grid
    }
}
