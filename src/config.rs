//! Configuration loader for the life board.
//!
//! * Looks for `life_board.toml` in the cwd unless overridden by `--config`.
//! * Every field has a default, so the file is optional.
//! * Command-line flags override file values.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;

use crate::application::{
    DEFAULT_MUTATE_PROBABILITY, DEFAULT_PARALLEL_THRESHOLD, IntervalPolicy, MAX_INTERVAL_MS,
    MIN_INTERVAL_MS, Simulation,
};
use crate::domain::{DEFAULT_NOISE, Placement, SeedPlan, presets, rule_by_name};

pub const DEFAULT_CONFIG_PATH: &str = "life_board.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),
    #[error("unknown rule '{0}'")]
    UnknownRule(String),
}

/// Command-line flags
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "life_board", version, about = "Conway's Game of Life on a fixed board")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Board width in cells
    #[arg(long)]
    pub width: Option<usize>,
    /// Board height in cells
    #[arg(long)]
    pub height: Option<usize>,
    /// RNG seed for reproducible noise
    #[arg(long)]
    pub seed: Option<u64>,
    /// Fixed tick interval in milliseconds (turns adaptive timing off)
    #[arg(long)]
    pub interval_ms: Option<u64>,
    /// Rule name: conway, highlife, seeds, day-and-night
    #[arg(long)]
    pub rule: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub interval_ms: u64,
    /// Derive the interval from the live-cell ratio instead of `interval_ms`
    pub adaptive: bool,
    pub min_interval_ms: u64,
    pub max_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            adaptive: false,
            min_interval_ms: 50,
            max_interval_ms: 400,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PatternConfig {
    pub name: String,
    pub x: isize,
    pub y: isize,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SeedConfig {
    pub noise: usize,
    pub patterns: Vec<PatternConfig>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        let patterns = SeedPlan::default()
            .placements
            .into_iter()
            .map(|p| PatternConfig { name: p.pattern.name.to_string(), x: p.x, y: p.y })
            .collect();
        Self { noise: DEFAULT_NOISE, patterns }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Board size in cells
    pub width: usize,
    pub height: usize,
    /// RNG seed (optional); OS entropy otherwise
    pub rng_seed: Option<u64>,
    pub rule: String,
    pub mutate_probability: f64,
    pub step_noise: f64,
    /// Cell count from which steps run on the rayon pool
    pub parallel_threshold: usize,
    pub timing: TimingConfig,
    pub seed: SeedConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 60,
            height: 40,
            rng_seed: None,
            rule: "conway".to_string(),
            mutate_probability: DEFAULT_MUTATE_PROBABILITY,
            step_noise: 0.0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            timing: TimingConfig::default(),
            seed: SeedConfig::default(),
        }
    }
}

fn check_probability(name: &str, p: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be within [0, 1], got {p}")))
    }
}

fn check_interval(name: &str, ms: u64) -> Result<(), ConfigError> {
    if (MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&ms) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be within [{MIN_INTERVAL_MS}, {MAX_INTERVAL_MS}] ms, got {ms}"
        )))
    }
}

impl Config {
    /// Load from `path`, or from `life_board.toml` when no path is given.
    /// A missing default file yields defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };
        match fs::read_to_string(&path) {
            Ok(text) => {
                info!("loading config from {}", path.display());
                Self::from_toml_str(&text)
            }
            Err(err) if !explicit && err.kind() == io::ErrorKind::NotFound => {
                debug!("no {} found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Command-line flags win over file values
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(width) = cli.width {
            self.width = width;
        }
        if let Some(height) = cli.height {
            self.height = height;
        }
        if let Some(seed) = cli.seed {
            self.rng_seed = Some(seed);
        }
        if let Some(ms) = cli.interval_ms {
            self.timing.interval_ms = ms;
            self.timing.adaptive = false;
        }
        if let Some(rule) = &cli.rule {
            self.rule = rule.clone();
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "board must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        check_probability("mutate_probability", self.mutate_probability)?;
        check_probability("step_noise", self.step_noise)?;
        if self.timing.adaptive {
            check_interval("timing.min_interval_ms", self.timing.min_interval_ms)?;
            check_interval("timing.max_interval_ms", self.timing.max_interval_ms)?;
            if self.timing.min_interval_ms > self.timing.max_interval_ms {
                return Err(ConfigError::Invalid(
                    "timing.min_interval_ms exceeds timing.max_interval_ms".to_string(),
                ));
            }
        } else {
            check_interval("timing.interval_ms", self.timing.interval_ms)?;
        }
        Ok(())
    }

    pub fn interval_policy(&self) -> IntervalPolicy {
        if self.timing.adaptive {
            IntervalPolicy::Adaptive {
                min: Duration::from_millis(self.timing.min_interval_ms),
                max: Duration::from_millis(self.timing.max_interval_ms),
            }
        } else {
            IntervalPolicy::Fixed(Duration::from_millis(self.timing.interval_ms))
        }
    }

    /// Resolve pattern names into placements
    pub fn seed_plan(&self) -> Result<SeedPlan, ConfigError> {
        let placements = self
            .seed
            .patterns
            .iter()
            .map(|p| {
                presets::by_name(&p.name)
                    .map(|pattern| Placement::new(pattern, p.x, p.y))
                    .ok_or_else(|| ConfigError::UnknownPattern(p.name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SeedPlan { placements, noise: self.seed.noise })
    }

    /// Validate and turn the config into a stopped simulation at generation 0
    pub fn build_simulation(&self) -> Result<Simulation, ConfigError> {
        self.validate()?;
        let rule = rule_by_name(&self.rule).ok_or_else(|| ConfigError::UnknownRule(self.rule.clone()))?;
        let seed_plan = self.seed_plan()?;
        let rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!(
            "board {}x{}, rule {}, {} patterns + {} noise cells",
            self.width,
            self.height,
            self.rule,
            seed_plan.placements.len(),
            seed_plan.noise
        );
        for placement in &seed_plan.placements {
            let pattern = &placement.pattern;
            debug!("{} at ({}, {}): {}", pattern.name, placement.x, placement.y, pattern.description);
        }
        Ok(Simulation::new(self.width, self.height, seed_plan, rng)
            .with_rule(Box::new(rule))
            .with_interval(self.interval_policy())
            .with_mutate_probability(self.mutate_probability)
            .with_step_noise(self.step_noise)
            .with_parallel_threshold(self.parallel_threshold))
    }
}
