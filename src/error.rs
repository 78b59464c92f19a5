//! Simulation error types.
//!
//! # Error Classification
//!
//! Every operation in the engine is deterministic given its random draws, so
//! nothing here is transient and nothing is retried:
//!
//! - **Configuration**: rejected parameters, reported by
//!   [`SimulationConfig::validate`](crate::config::SimulationConfig::validate)
//!   before the first random draw.
//! - **Boundary parsing**: opinion or status values arriving from outside the
//!   closed enums (CLI arguments, stored snapshots).
//! - **Role assignment**: network construction could not promote two distinct
//!   originators.
//! - **I/O and JSON**: report persistence done by callers.

use thiserror::Error;

/// Simulation errors.
#[derive(Error, Debug)]
pub enum SimError {
    /// Configuration rejected by validation or failed to load.
    #[error("Config error: {0}")]
    Config(String),

    /// Value outside {none, disinformation, fact-check}.
    #[error("Invalid opinion value: {0}")]
    InvalidOpinion(String),

    /// Value outside the five status codes.
    #[error("Invalid status value: {0}")]
    InvalidStatus(String),

    /// No valid dark originator could be selected.
    #[error("Role assignment failed: {0}")]
    RoleAssignment(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for simulation operations
pub type Result<T> = std::result::Result<T, SimError>;

impl From<toml::de::Error> for SimError {
    fn from(err: toml::de::Error) -> Self {
        SimError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SimError {
    fn from(err: toml::ser::Error) -> Self {
        SimError::Config(format!("Failed to serialize config: {err}"))
    }
}
