//! Tick loop.
//!
//! A run is a fixed number of synchronous ticks over one population. Every
//! tick first snapshots the aggregates left by the previous tick, then runs
//! the emit, perceive and commit phases across the whole population, each
//! phase completing for every agent before the next one starts.

use rand::Rng;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::network::{NetworkBuilder, Population};
use crate::random::{self, RandomSource};
use crate::report::{FinalCounts, NetworkSnapshot, SimulationReport, TickSeries, TickStats};

/// One simulation run
#[derive(Debug)]
pub struct Simulation<R = RandomSource> {
    config: SimulationConfig,
    population: Population,
    initial_network: NetworkSnapshot,
    rng: R,
    tick: usize,
    series: TickSeries,
}

impl Simulation<RandomSource> {
    /// Validate `config` and build the network from a generator seeded with
    /// `config.seed`
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let rng = random::seeded(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Simulation<R> {
    /// Validate `config` and build the network from an explicit generator.
    ///
    /// The same generator then drives every roll of the run.
    pub fn with_rng(config: SimulationConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let population = NetworkBuilder::from_config(&config).build(&mut rng)?;
        let initial_network = NetworkSnapshot::capture(&population);
        let series = TickSeries::with_capacity(config.ticks);

        Ok(Self {
            config,
            population,
            initial_network,
            rng,
            tick: 0,
            series,
        })
    }

    /// Effective configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current population
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Ticks executed so far
    pub fn tick(&self) -> usize {
        self.tick
    }

    /// Aggregates recorded so far
    pub fn series(&self) -> &TickSeries {
        &self.series
    }

    /// Network as it was right after construction
    pub fn initial_network(&self) -> &NetworkSnapshot {
        &self.initial_network
    }

    /// Current collapsed status counts
    pub fn final_counts(&self) -> FinalCounts {
        FinalCounts::from_agents(self.population.agents())
    }

    /// Whether every configured tick has run
    pub fn is_finished(&self) -> bool {
        self.tick >= self.config.ticks
    }

    /// Run one tick and return the snapshot recorded at its start.
    ///
    /// Returns `None` without touching the population once the configured
    /// tick count is reached.
    pub fn step(&mut self) -> Option<TickStats> {
        if self.is_finished() {
            return None;
        }
        let tick = self.tick;

        // Aggregate the previous tick before anything moves. Taking the
        // engagement buffers clears them.
        let mut stats = TickStats::default();
        for agent in self.population.agents_mut() {
            stats.record_status(agent.status());
            stats.record_volume(&agent.take_engagement());
        }
        self.series.push(&stats);

        for agent in self.population.agents_mut() {
            agent.emit(tick, &mut self.rng);
        }

        let exposures = self.population.exposures();
        for (agent, exposure) in self.population.agents_mut().iter_mut().zip(&exposures) {
            agent.perceive(exposure, &mut self.rng);
        }

        let policy = self.config.behavior.share;
        for agent in self.population.agents_mut() {
            agent.commit(&policy);
        }

        self.tick += 1;
        tracing::debug!(
            "tick {}: S={} I={} uI={} R={} aR={} volume none={} dis={} fc={}",
            tick,
            stats.susceptible,
            stats.infected,
            stats.unresistant_infected,
            stats.resistant,
            stats.active_resistant,
            stats.volume_none,
            stats.volume_disinformation,
            stats.volume_fact_check
        );

        Some(stats)
    }

    /// Run every remaining configured tick and produce the report
    pub fn run(mut self) -> SimulationReport {
        while self.step().is_some() {}

        let final_counts = self.final_counts();
        tracing::info!(
            "Run finished after {} ticks: susceptible={} infected={} resistant={}",
            self.tick,
            final_counts.susceptible,
            final_counts.infected,
            final_counts.resistant
        );

        SimulationReport {
            final_network: NetworkSnapshot::capture(&self.population),
            ticks: self.tick,
            series: self.series,
            final_counts,
            initial_network: self.initial_network,
            config: self.config,
        }
    }
}
