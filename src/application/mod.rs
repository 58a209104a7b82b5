mod action;
mod simulation;
mod ticker;

pub use action::{Action, SPEED_STEP_MS};
pub use simulation::{Simulation, DEFAULT_MUTATE_PROBABILITY, DEFAULT_PARALLEL_THRESHOLD};
pub use ticker::{IntervalPolicy, Ticker, MIN_INTERVAL_MS, MAX_INTERVAL_MS};
