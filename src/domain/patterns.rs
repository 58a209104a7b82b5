use super::{Cell, Grid};

/// A named shape given as live-cell offsets from its top-left corner
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x + 1).max().unwrap_or(0);
        let height = cells.iter().map(|(_, y)| *y + 1).max().unwrap_or(0);
        Self { name, description, width, height, cells }
    }

    /// Stamp the pattern with its top-left corner at `(x, y)`.
    /// Cells that fall off the board are dropped.
    pub fn place_on(&self, grid: &mut Grid, x: isize, y: isize) {
        for &(dx, dy) in &self.cells {
            grid.set_signed(x + dx as isize, y + dy as isize, Cell::Alive);
        }
    }

    /// Absolute board positions the pattern covers at `(x, y)`, bounds not checked
    pub fn cells_at(&self, x: isize, y: isize) -> impl Iterator<Item = (isize, isize)> + '_ {
        self.cells.iter().map(move |&(dx, dy)| (x + dx as isize, y + dy as isize))
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (1, 0), (2, 0)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// R-pentomino - stabilizes after 1103 generations on an unbounded plane
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah",
            vec![
                (1, 0),
                (3, 1),
                (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
            ],
        )
    }

    pub fn pulsar() -> Pattern {
        let mut cells = Vec::with_capacity(48);
        for &a in &[0usize, 5, 7, 12] {
            for &b in &[2usize, 3, 4, 8, 9, 10] {
                cells.push((b, a));
                cells.push((a, b));
            }
        }
        cells.sort_by_key(|&(x, y)| (y, x));
        Pattern::new("Pulsar", "Oscillator (period 3)", cells)
    }

    /// Gosper Glider Gun - emits a glider every 30 generations
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Gun (period 30)",
            vec![
                (0, 4), (0, 5), (1, 4), (1, 5),
                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),
                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),
                (34, 2), (34, 3), (35, 2), (35, 3),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            lwss(),
            r_pentomino(),
            acorn(),
            pulsar(),
            glider_gun(),
        ]
    }

    /// Find a pattern by name, case-insensitive; "gosper" and "gun" also
    /// resolve to the glider gun
    pub fn by_name(name: &str) -> Option<Pattern> {
        let wanted: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if matches!(wanted.as_str(), "gosper" | "gun" | "glidergun") {
            return Some(glider_gun());
        }
        all_patterns().into_iter().find(|p| {
            p.name
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_lowercase())
                .eq(wanted.chars())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LifeLikeRule;

    #[test]
    fn test_pattern_bounding_box() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        let gun = presets::glider_gun();
        assert_eq!((gun.width, gun.height), (36, 9));
        let pulsar = presets::pulsar();
        assert_eq!(pulsar.cells.len(), 48);
        assert_eq!((pulsar.width, pulsar.height), (13, 13));
    }

    #[test]
    fn test_place_on_clips_to_board() {
        let mut grid = Grid::new(4, 4);
        presets::block().place_on(&mut grid, 3, 3);
        assert_eq!(grid.live_count(), 1);
        assert!(grid.is_alive(3, 3));

        let mut grid = Grid::new(4, 4);
        presets::block().place_on(&mut grid, -1, -1);
        assert_eq!(grid.live_count(), 1);
        assert!(grid.is_alive(0, 0));
    }

    #[test]
    fn test_pulsar_has_period_three() {
        let rule = LifeLikeRule::conway();
        let mut grid = Grid::new(19, 19);
        presets::pulsar().place_on(&mut grid, 3, 3);
        let start = grid.clone();
        grid = grid.evolve(&rule);
        assert_ne!(grid, start);
        grid = grid.evolve(&rule).evolve(&rule);
        assert_eq!(grid, start);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(presets::by_name("glider"), Some(presets::glider()));
        assert_eq!(presets::by_name("R-Pentomino"), Some(presets::r_pentomino()));
        assert_eq!(presets::by_name("lwss"), Some(presets::lwss()));
        assert_eq!(presets::by_name("gosper"), Some(presets::glider_gun()));
        assert_eq!(presets::by_name("Gosper Glider Gun"), Some(presets::glider_gun()));
        assert!(presets::by_name("spaceship").is_none());
    }

    #[test]
    fn test_every_preset_is_described() {
        for pattern in presets::all_patterns() {
            assert!(!pattern.description.is_empty(), "{} has no description", pattern.name);
        }
    }
}
