use super::{Cell, rules::Rule};
use rand::Rng;
use rayon::prelude::*;

/// Grid is the bounded 2D board.
/// Dimensions are fixed at construction; evolution always produces a new grid,
/// so neighbor counting only ever reads the previous generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Build a grid with the given `(x, y)` cells alive; out-of-range ones are skipped
    pub fn with_alive(width: usize, height: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(width, height);
        alive.iter().for_each(|&(x, y)| grid.set(x, y, Cell::Alive));
        grid
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at column `x`, row `y` (None outside the board)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// True only for in-bounds live cells
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Set cell at position; writes outside the board are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Same as `set` but takes signed coordinates, for pattern offsets that may
    /// land left of or above the board
    pub fn set_signed(&mut self, x: isize, y: isize, cell: Cell) {
        if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
            self.set(x, y, cell);
        }
    }

    /// Count live Moore neighbors. The board does not wrap: neighbors
    /// past an edge count as dead.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                self.get(nx, ny)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_cell(&self, rule: &dyn Rule, x: usize, y: usize) -> Cell {
        let current = self.cells[self.get_index(x, y)];
        rule.evolve(current, self.count_live_neighbors(x, y))
    }

    /// Pure evolution - returns the next generation (serial)
    pub fn evolve(&self, rule: &dyn Rule) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.next_cell(rule, x, y))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Row-parallel evolution using rayon; same result as `evolve`
    pub fn evolve_parallel(&self, rule: &dyn Rule) -> Self {
        let cells: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map_iter(|y| (0..self.width).map(move |x| self.next_cell(rule, x, y)))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Flip every cell independently with probability `probability`.
    /// 0.0 (or NaN) leaves the grid untouched, 1.0 inverts it.
    pub fn mutate<R: Rng>(&mut self, probability: f64, rng: &mut R) {
        if probability.is_nan() || probability <= 0.0 {
            return;
        }
        let p = probability.min(1.0);
        self.cells.iter_mut().for_each(|cell| {
            if rng.random_bool(p) {
                *cell = cell.toggle();
            }
        });
    }

    /// Scatter `count` live cells at uniformly random positions.
    /// Positions may repeat, so fewer than `count` cells can end up alive.
    pub fn scatter<R: Rng>(&mut self, count: usize, rng: &mut R) {
        if self.is_empty() {
            return;
        }
        for _ in 0..count {
            let x = rng.random_range(0..self.width);
            let y = rng.random_range(0..self.height);
            self.set(x, y, Cell::Alive);
        }
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Fraction of live cells in [0, 1]; an empty board reports 0
    pub fn live_ratio(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.live_count() as f64 / self.len() as f64
        }
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i % self.width, i / self.width, cell))
    }
}
