//! Parameter sweep over prebunking and immunization probabilities.
//!
//! Every grid point is run `repetitions` times; repetition `r` uses seed
//! `base.seed + r`, so the same repetition index sees the same network at
//! every grid point.

use serde::{Deserialize, Serialize};

use crate::config::{check_probability, SimulationConfig};
use crate::engine::Simulation;
use crate::error::{Result, SimError};
use crate::report::FinalCounts;

/// Result of all repetitions at one grid point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Prebunk conversion probability
    pub prebunk_probability: f64,
    /// Immunization probability
    pub immunization_probability: f64,
    /// Final counts of each repetition, in seed order
    pub runs: Vec<FinalCounts>,
}

impl SweepPoint {
    /// Mean susceptible count
    pub fn mean_susceptible(&self) -> f64 {
        self.mean(|c| c.susceptible)
    }

    /// Mean infected count
    pub fn mean_infected(&self) -> f64 {
        self.mean(|c| c.infected)
    }

    /// Mean resistant count
    pub fn mean_resistant(&self) -> f64 {
        self.mean(|c| c.resistant)
    }

    fn mean(&self, field: impl Fn(&FinalCounts) -> usize) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(field).sum::<usize>() as f64 / self.runs.len() as f64
    }
}

/// Grid definition
#[derive(Debug, Clone)]
pub struct Sweep {
    base: SimulationConfig,
    prebunk: Vec<f64>,
    immunization: Vec<f64>,
    repetitions: usize,
}

impl Sweep {
    /// Single-point grid at the base config's probabilities
    pub fn new(base: SimulationConfig) -> Self {
        Self {
            prebunk: vec![base.behavior.prebunk_probability],
            immunization: vec![base.behavior.immunization_probability],
            repetitions: 1,
            base,
        }
    }

    /// Prebunk probabilities to try
    pub fn with_prebunk(mut self, values: Vec<f64>) -> Self {
        self.prebunk = values;
        self
    }

    /// Immunization probabilities to try
    pub fn with_immunization(mut self, values: Vec<f64>) -> Self {
        self.immunization = values;
        self
    }

    /// Runs per grid point
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Number of grid points
    pub fn len(&self) -> usize {
        self.prebunk.len() * self.immunization.len()
    }

    /// Whether the grid has no points
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reject an empty grid, bad probabilities, or a bad base config
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(SimError::Config("sweep grid is empty".to_string()));
        }
        if self.repetitions == 0 {
            return Err(SimError::Config("sweep needs at least one repetition".to_string()));
        }
        for &p in &self.prebunk {
            check_probability("prebunk_probability", p)?;
        }
        for &p in &self.immunization {
            check_probability("immunization_probability", p)?;
        }
        self.base.validate()
    }

    /// Run the grid, prebunk-major
    pub fn run(&self) -> Result<Vec<SweepPoint>> {
        self.validate()?;

        let mut points = Vec::with_capacity(self.len());
        for &prebunk in &self.prebunk {
            for &immunization in &self.immunization {
                let mut runs = Vec::with_capacity(self.repetitions);
                for r in 0..self.repetitions {
                    let mut config = self.base.clone();
                    config.seed = self.base.seed.wrapping_add(r as u64);
                    config.behavior.prebunk_probability = prebunk;
                    config.behavior.immunization_probability = immunization;
                    runs.push(Simulation::new(config)?.run().final_counts);
                }

                let point = SweepPoint {
                    prebunk_probability: prebunk,
                    immunization_probability: immunization,
                    runs,
                };
                tracing::info!(
                    "Sweep point prebunk={} immunization={}: mean S={:.1} I={:.1} R={:.1}",
                    prebunk,
                    immunization,
                    point.mean_susceptible(),
                    point.mean_infected(),
                    point.mean_resistant()
                );
                points.push(point);
            }
        }
        Ok(points)
    }
}
