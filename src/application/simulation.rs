use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;

use super::{IntervalPolicy, Ticker};
use crate::domain::{Cell, Grid, Rule, SeedPlan, default_rule};

/// Probability used by the mutate control unless configured otherwise
pub const DEFAULT_MUTATE_PROBABILITY: f64 = 0.1;

/// Boards with at least this many cells are stepped with rayon
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100 * 100;

/// Simulation owns the board and everything that drives it:
/// grid, generation counter, run state and tick timer.
/// Controls take `self` by value so key and button handlers can fold over them.
pub struct Simulation {
    grid: Grid,
    generation: u64,
    is_running: bool,
    ticker: Ticker,
    rng: StdRng,
    seed_plan: SeedPlan,
    pub rule: Box<dyn Rule>,
    pub interval: IntervalPolicy,
    pub mutate_probability: f64,
    /// Chance of flipping each cell after every step; 0 keeps plain Life
    pub step_noise: f64,
    pub parallel_threshold: usize,
    pub last_step_time_ms: f32,
}

impl Simulation {
    /// Seed a `width` x `height` board from `seed_plan`, stopped at generation 0
    pub fn new(width: usize, height: usize, seed_plan: SeedPlan, mut rng: StdRng) -> Self {
        let grid = seed_plan.seed(width, height, &mut rng);
        Self {
            grid,
            generation: 0,
            is_running: false,
            ticker: Ticker::new(),
            rng,
            seed_plan,
            rule: default_rule(),
            interval: IntervalPolicy::default(),
            mutate_probability: DEFAULT_MUTATE_PROBABILITY,
            step_noise: 0.0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            last_step_time_ms: 0.0,
        }
    }

    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_interval(mut self, interval: IntervalPolicy) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_mutate_probability(mut self, probability: f64) -> Self {
        self.mutate_probability = probability;
        self
    }

    pub fn with_step_noise(mut self, probability: f64) -> Self {
        self.step_noise = probability;
        self
    }

    pub fn with_parallel_threshold(mut self, cells: usize) -> Self {
        self.parallel_threshold = cells;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Interval until the next step, given the current board
    pub fn current_interval(&self) -> Duration {
        self.interval.interval(self.grid.live_ratio())
    }

    /// Arm the step timer
    pub fn start(&mut self) {
        if !self.is_running {
            self.is_running = true;
            self.ticker.arm();
            info!("simulation started at generation {}", self.generation);
        }
    }

    /// Cancel the step timer
    pub fn stop(&mut self) {
        if self.is_running {
            self.is_running = false;
            self.ticker.disarm();
            info!("simulation stopped at generation {}", self.generation);
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        if self.is_running {
            self.stop();
        } else {
            self.start();
        }
        self
    }

    /// Stop, zero the generation counter and re-seed with fresh noise
    pub fn reset(mut self) -> Self {
        self.stop();
        let (width, height) = self.grid.dimensions();
        self.grid = self.seed_plan.seed(width, height, &mut self.rng);
        self.generation = 0;
        info!("board reset: {} live cells", self.grid.live_count());
        self
    }

    /// Flip each cell with `mutate_probability`; run state and generation untouched
    pub fn mutate(mut self) -> Self {
        self.grid.mutate(self.mutate_probability, &mut self.rng);
        info!(
            "board mutated (p = {}): {} live cells",
            self.mutate_probability,
            self.grid.live_count()
        );
        self
    }

    /// Kill every cell, zero the generation counter and stop
    pub fn clear(mut self) -> Self {
        self.stop();
        self.grid.clear();
        self.generation = 0;
        info!("board cleared");
        self
    }

    /// Advance one generation by hand; ignored while running
    pub fn single_step(mut self) -> Self {
        if !self.is_running {
            self.step();
        }
        self
    }

    /// Adjust simulation speed; positive `delta_ms` means slower
    pub fn adjust_speed(mut self, delta_ms: i64) -> Self {
        self.interval = self.interval.adjust(delta_ms);
        debug!("tick interval now {:?}", self.interval);
        self
    }

    /// Paint or erase a cell while paused. Painting a running board is ignored.
    pub fn paint(&mut self, x: usize, y: usize, alive: bool) {
        if !self.is_running {
            self.grid.set(x, y, Cell::from_bool(alive));
        }
    }

    /// Feed frame time to the step timer; steps at most once per call
    pub fn tick(mut self, delta_time: Duration) -> Self {
        let interval = self.current_interval();
        if self.ticker.advance(delta_time, interval) {
            self.step();
        }
        self
    }

    /// Replace the board with its successor and bump the generation counter
    pub fn step(&mut self) {
        let start = Instant::now();

        let mut next = if self.grid.len() >= self.parallel_threshold {
            self.grid.evolve_parallel(self.rule.as_ref())
        } else {
            self.grid.evolve(self.rule.as_ref())
        };
        if self.step_noise > 0.0 {
            next.mutate(self.step_noise, &mut self.rng);
        }
        self.grid = next;
        self.generation += 1;

        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        debug!(
            "generation {}: {} live, {:.2}ms, next tick in {:?}",
            self.generation,
            self.grid.live_count(),
            self.last_step_time_ms,
            self.current_interval()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LifeLikeRule, Placement, presets};
    use rand::SeedableRng;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn sim(seed: u64) -> Simulation {
        Simulation::new(60, 40, SeedPlan::default(), StdRng::seed_from_u64(seed))
    }

    fn block_sim() -> Simulation {
        let plan = SeedPlan::patterns_only(vec![Placement::new(presets::block(), 3, 3)]);
        Simulation::new(10, 10, plan, StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_new_is_stopped_at_generation_zero() {
        let s = sim(1);
        assert_eq!(s.generation(), 0);
        assert!(!s.is_running());
        assert_eq!(s.dimensions(), (60, 40));
    }

    #[test]
    fn test_toggle_running() {
        let s = sim(1).toggle_running();
        assert!(s.is_running());
        let s = s.toggle_running();
        assert!(!s.is_running());
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut s = sim(2).toggle_running();
        for _ in 0..5 {
            s = s.tick(ms(100));
        }
        assert_eq!(s.generation(), 5);
        let s = s.reset();
        assert_eq!(s.generation(), 0);
        assert!(!s.is_running());
        assert_eq!(s.dimensions(), (60, 40));

        let s = s.reset();
        assert_eq!(s.generation(), 0);
        assert!(!s.is_running());
    }

    #[test]
    fn test_reset_draws_fresh_noise() {
        let s = sim(3);
        let before = s.grid().clone();
        let s = s.reset();
        assert_ne!(s.grid(), &before);
        for (x, y) in presets::glider().cells_at(1, 1) {
            assert!(s.grid().is_alive(x as usize, y as usize));
        }
    }

    #[test]
    fn test_stopped_simulation_never_steps() {
        let s = sim(4).tick(ms(10_000)).tick(ms(10_000));
        assert_eq!(s.generation(), 0);
    }

    #[test]
    fn test_running_steps_once_per_interval() {
        let s = sim(5).with_interval(IntervalPolicy::Fixed(ms(100))).toggle_running();
        let s = s.tick(ms(50));
        assert_eq!(s.generation(), 0);
        let s = s.tick(ms(50));
        assert_eq!(s.generation(), 1);
        let s = s.tick(ms(500));
        assert_eq!(s.generation(), 2);

        let s = s.toggle_running().tick(ms(1000));
        assert_eq!(s.generation(), 2);
        let s = s.toggle_running().tick(ms(99));
        assert_eq!(s.generation(), 2);
    }

    #[test]
    fn test_step_replaces_grid() {
        let mut s = sim(6);
        let expected = s.grid().evolve(&LifeLikeRule::conway());
        s.step();
        assert_eq!(s.grid(), &expected);
        assert_eq!(s.generation(), 1);
    }

    #[test]
    fn test_parallel_path_matches_serial() {
        let mut serial = sim(7).with_parallel_threshold(usize::MAX);
        let mut parallel = sim(7).with_parallel_threshold(0);
        for _ in 0..5 {
            serial.step();
            parallel.step();
        }
        assert_eq!(serial.grid(), parallel.grid());
    }

    #[test]
    fn test_mutate_keeps_run_state_and_generation() {
        let mut s = sim(8).with_mutate_probability(1.0).toggle_running();
        s.step();
        let before = s.grid().clone();
        let s = s.mutate();
        assert!(s.is_running());
        assert_eq!(s.generation(), 1);
        assert_eq!(s.grid().live_count(), before.len() - before.live_count());
    }

    #[test]
    fn test_nan_probabilities_do_nothing() {
        let mut s = block_sim().with_mutate_probability(f64::NAN).with_step_noise(f64::NAN);
        let start = s.grid().clone();
        s.step();
        let s = s.mutate();
        assert_eq!(s.grid(), &start);
        assert_eq!(s.generation(), 1);
    }

    #[test]
    fn test_mutate_with_zero_probability() {
        let s = sim(9).with_mutate_probability(0.0);
        let before = s.grid().clone();
        assert_eq!(s.mutate().grid(), &before);
    }

    #[test]
    fn test_block_survives_ticks() {
        let mut s = block_sim().toggle_running();
        let start = s.grid().clone();
        for _ in 0..10 {
            s = s.tick(ms(100));
        }
        assert_eq!(s.generation(), 10);
        assert_eq!(s.grid(), &start);
    }

    #[test]
    fn test_step_noise_perturbs_still_life() {
        let mut s = block_sim().with_step_noise(1.0);
        let start = s.grid().clone();
        s.step();
        assert_eq!(s.grid().live_count(), start.len() - start.live_count());
    }

    #[test]
    fn test_clear_and_single_step() {
        let s = sim(10).toggle_running().clear();
        assert!(!s.is_running());
        assert_eq!(s.grid().live_count(), 0);
        let s = s.single_step();
        assert_eq!(s.generation(), 1);
        let s = s.toggle_running().single_step();
        assert_eq!(s.generation(), 1);
    }

    #[test]
    fn test_paint_only_while_paused() {
        let mut s = block_sim();
        s.paint(0, 0, true);
        assert!(s.grid().is_alive(0, 0));
        s.paint(0, 0, false);
        assert!(!s.grid().is_alive(0, 0));

        let mut s = s.toggle_running();
        s.paint(9, 9, true);
        assert!(!s.grid().is_alive(9, 9));
    }

    #[test]
    fn test_adaptive_interval_uses_board() {
        let s = block_sim().with_interval(IntervalPolicy::Adaptive { min: ms(100), max: ms(200) });
        // 4 of 100 cells alive
        assert_eq!(s.current_interval(), ms(104));
        let s = s.clear();
        assert_eq!(s.current_interval(), ms(100));
    }

    #[test]
    fn test_adjust_speed() {
        let s = sim(11).with_interval(IntervalPolicy::Fixed(ms(100))).adjust_speed(-20);
        assert_eq!(s.current_interval(), ms(80));
    }
}
