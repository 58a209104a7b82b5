// Domain layer - board, rules, patterns, seeding
pub mod domain;

// Application layer - simulation engine, timer, controls
pub mod application;

// Configuration - TOML file and command-line flags
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, SeedPlan, presets};
pub use application::{Action, IntervalPolicy, Simulation};
pub use config::{Cli, Config, ConfigError};
