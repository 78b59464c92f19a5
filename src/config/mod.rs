//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files
//! - Environment variables (`PREBUNK_*`)
//! - CLI arguments (applied by the binary on top of the above)
//!
//! Every parameter has a default matching the reference model run
//! (100 agents, 5 friends, 20 ticks, burst attack at tick 5).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::agent::attack::{AttackKind, AttackSchedule};
use crate::agent::{SharePolicy, Susceptibility};
use crate::error::{Result, SimError};
use crate::network;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "PREBUNK_";

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the run's random source
    pub seed: u64,

    /// Number of ticks to simulate
    pub ticks: usize,

    /// Network construction parameters
    pub network: NetworkConfig,

    /// Agent belief parameters
    pub behavior: BehaviorConfig,

    /// Dark-agent attack schedule
    pub attack: AttackSchedule,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ticks: 20,
            network: NetworkConfig::default(),
            behavior: BehaviorConfig::default(),
            attack: AttackSchedule::default(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| SimError::Config(format!("Failed to read config file: {e}")))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SimError::Config(format!("Failed to parse config: {e}")))
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Defaults overridden by environment variables
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// Override fields from `PREBUNK_*` environment variables.
    ///
    /// Unparseable values are ignored.
    pub fn apply_env(self) -> Self {
        self.apply_lookup(|key| std::env::var(key).ok())
    }

    fn apply_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(Ok(seed)) = var("SEED").map(|v| v.parse()) {
            self.seed = seed;
        }
        if let Some(Ok(ticks)) = var("TICKS").map(|v| v.parse()) {
            self.ticks = ticks;
        }
        if let Some(Ok(population)) = var("POPULATION").map(|v| v.parse()) {
            self.network.population = population;
        }
        if let Some(Ok(max_friends)) = var("MAX_FRIENDS").map(|v| v.parse()) {
            self.network.max_friends = max_friends;
        }
        if let Some(Ok(kind)) = var("ATTACK_KIND").map(|v| v.parse::<AttackKind>()) {
            self.attack.kind = kind;
        }
        if let Some(Ok(start)) = var("ATTACK_START").map(|v| v.parse()) {
            self.attack.start = start;
        }

        self
    }

    /// Reject configurations that would stall or corrupt a run.
    ///
    /// Called before any simulation work begins.
    pub fn validate(&self) -> Result<()> {
        self.network.validate()?;
        self.behavior.validate()?;
        self.attack.validate()
    }
}

/// Network construction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Number of agents
    pub population: usize,

    /// Out-degree every agent ends up with
    pub max_friends: usize,

    /// Extra pool insertions per accepted friend (preferential attachment weight)
    pub reinforcement: usize,

    /// Popularity quantile the dark originator is drawn from, in (0, 1)
    pub dark_quantile: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            population: 100,
            max_friends: 5,
            reinforcement: 5,
            dark_quantile: 0.75,
        }
    }
}

impl NetworkConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.population < 2 {
            return Err(SimError::Config(format!(
                "population must be at least 2 (got {})",
                self.population
            )));
        }
        if self.max_friends >= self.population {
            return Err(SimError::Config(format!(
                "max_friends ({}) must be smaller than population ({})",
                self.max_friends, self.population
            )));
        }
        if !(self.dark_quantile > 0.0 && self.dark_quantile < 1.0) {
            return Err(SimError::Config(format!(
                "dark_quantile must lie strictly between 0 and 1 (got {})",
                self.dark_quantile
            )));
        }

        // At the last index the quantile is the maximum count, which the
        // light originator may hold alone. Empty and complete networks tie
        // every agent.
        let last = self.population - 1;
        let uniform = self.max_friends == 0 || self.max_friends == last;
        if !uniform && network::nearest_index(self.population, self.dark_quantile) == last {
            return Err(SimError::Config(format!(
                "dark_quantile {} selects the most popular agent among {} agents; \
                 no distinct dark originator is guaranteed",
                self.dark_quantile, self.population
            )));
        }
        Ok(())
    }
}

/// Agent belief parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Disinformation share of exposure that must be exceeded to infect
    pub disinformation_threshold: f64,

    /// Chance that fact-check exposure makes an agent resistant
    pub prebunk_probability: f64,

    /// Chance that a newly resistant agent also rebroadcasts fact-checks
    pub immunization_probability: f64,

    /// Share probability by held opinion
    pub share: SharePolicy,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            disinformation_threshold: 0.5,
            prebunk_probability: 1.0,
            immunization_probability: 0.0,
            share: SharePolicy::default(),
        }
    }
}

impl BehaviorConfig {
    /// Per-agent thresholds derived from this config
    pub fn susceptibility(&self) -> Susceptibility {
        Susceptibility {
            disinformation_threshold: self.disinformation_threshold,
            prebunk_probability: self.prebunk_probability,
            immunization_probability: self.immunization_probability,
        }
    }

    fn validate(&self) -> Result<()> {
        let checks = [
            ("disinformation_threshold", self.disinformation_threshold),
            ("prebunk_probability", self.prebunk_probability),
            ("immunization_probability", self.immunization_probability),
            ("share.none", self.share.none),
            ("share.disinformation", self.share.disinformation),
            ("share.fact_check", self.share.fact_check),
        ];
        for (name, value) in checks {
            check_probability(name, value)?;
        }
        Ok(())
    }
}

/// Fail unless `value` is a finite number in `[0, 1]`
pub(crate) fn check_probability(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::Config(format!(
            "{name} must be within [0, 1] (got {value})"
        )))
    }
}
