/// Cell represents one position on the board.
/// Each cell is either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip between alive and dead (used by mutate and step noise)
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    pub const fn from_bool(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Cell::from_bool(alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state() {
        assert_eq!(Cell::Alive.toggle(), Cell::Dead);
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
    }

    #[test]
    fn test_default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
        assert!(!Cell::default().is_alive());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
    }
}
