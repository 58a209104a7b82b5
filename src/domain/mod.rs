mod cell;
mod grid;
mod rules;
mod patterns;
mod seed;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::{Rule, LifeLikeRule, all_rules, default_rule, rule_by_name};
pub use patterns::{Pattern, presets};
pub use seed::{Placement, SeedPlan, DEFAULT_NOISE};
