//! # Prebunk - Disinformation and Prebunking Spread Simulation
//!
//! Agent-based model of a single disinformation campaign competing with
//! fact-checking ("prebunking") content on a preferential-attachment social
//! network.
//!
//! ## Features
//!
//! - **Preferential-attachment network**: popular agents attract more friends
//! - **Two originators**: the most popular agent spreads fact-checks, an agent
//!   at a configurable popularity quantile spreads disinformation
//! - **Scripted attacks**: burst, escalating and decaying volume schedules
//! - **Reproducible runs**: one explicitly seeded generator drives every roll
//! - **Reports**: per-tick series, collapsed final counts, network snapshots
//!   with Graphviz DOT rendering, and parameter sweeps
//!
//! ## Model Overview
//!
//! ```text
//!   tick t
//!     |
//!     |-- snapshot: status counts, volume emitted in tick t-1
//!     |-- emit:     every agent fills its engagement buffer
//!     |-- perceive: every agent reads its friends' buffers
//!     |-- commit:   every agent applies its staged opinion
//!     v
//!   tick t+1
//! ```
//!
//! ### Statuses
//!
//! | Code | Status              | Opinion        | Who                          |
//! |------|---------------------|----------------|------------------------------|
//! | `S`  | Susceptible         | none           | everyone at start            |
//! | `I`  | Infected            | disinformation | converted by exposure        |
//! | `uI` | UnresistantInfected | disinformation | dark originator              |
//! | `R`  | Resistant           | none           | converted by fact-checks     |
//! | `aR` | ActiveResistant     | fact-check     | immunized, light originator  |
//!
//! Every status except `S` is terminal.
//!
//! ## Quick Start
//!
//! ```rust
//! use prebunk::{Simulation, SimulationConfig};
//!
//! let mut config = SimulationConfig::default();
//! config.ticks = 10;
//! config.network.population = 50;
//!
//! let report = Simulation::new(config)?.run();
//! assert_eq!(report.series.len(), 10);
//! assert_eq!(report.final_counts.total(), 50);
//! # Ok::<(), prebunk::SimError>(())
//! ```
//!
//! ## Modules
//!
//! - [`agent`]: Agent state machine and attack schedules
//! - [`network`]: Population arena and network construction
//! - [`engine`]: Tick loop
//! - [`report`]: Output value objects and DOT rendering
//! - [`sweep`]: Parameter sweeps
//! - [`random`]: Seedable random source
//! - [`config`]: Configuration management
//! - [`error`]: Error types and result aliases

pub mod agent;
pub mod config;
pub mod engine;
pub mod error;
pub mod network;
pub mod random;
pub mod report;
pub mod sweep;

// Re-exports for convenience
pub use agent::attack::{AttackKind, AttackSchedule};
pub use agent::{
    Agent, AgentId, Exposure, Opinion, Originator, Role, SharePolicy, Status, Susceptibility,
};
pub use config::{BehaviorConfig, NetworkConfig, SimulationConfig};
pub use engine::Simulation;
pub use error::{Result, SimError};
pub use network::{NetworkBuilder, Population};
pub use random::RandomSource;
pub use report::{FinalCounts, NetworkSnapshot, SimulationReport, TickSeries, TickStats};
pub use sweep::{Sweep, SweepPoint};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
