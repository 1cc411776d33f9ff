//! Artificial request latency simulation
//!
//! Every facade operation resolves through the simulator: the caller yields
//! for a fixed delay characteristic of the operation's weight, then exactly
//! one of success or failure fires. Calls are terminal in both outcomes;
//! there is no internal retry, cancellation, or progress reporting.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::api::error::ApiResult;
use crate::types::ServiceConfig;

/// Latency class of a simulated operation
///
/// Heavier operations use larger delays; report generation sits at the top
/// of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestWeight {
    /// Single-entity lookups
    Lookup,
    /// Filtered list queries
    Query,
    /// Settings reads
    Settings,
    /// Dashboard assembly
    Dashboard,
    /// Analytics assembly
    Analytics,
    /// Authentication and echo-style updates
    Auth,
    /// Entity creation
    Mutation,
    /// Attendance marking
    Marking,
    /// Biometric capture and per-course report assembly
    Heavy,
    /// Institution-wide report generation
    Report,
}

impl RequestWeight {
    /// Artificial delay for this weight, in milliseconds
    pub fn delay_millis(&self) -> u64 {
        match self {
            RequestWeight::Lookup => 500,
            RequestWeight::Query => 600,
            RequestWeight::Settings => 700,
            RequestWeight::Dashboard => 800,
            RequestWeight::Analytics => 900,
            RequestWeight::Auth => 1000,
            RequestWeight::Mutation => 1200,
            RequestWeight::Marking => 1500,
            RequestWeight::Heavy => 2000,
            RequestWeight::Report => 2500,
        }
    }

    /// Artificial delay for this weight
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_millis())
    }
}

impl fmt::Display for RequestWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestWeight::Lookup => "lookup",
            RequestWeight::Query => "query",
            RequestWeight::Settings => "settings",
            RequestWeight::Dashboard => "dashboard",
            RequestWeight::Analytics => "analytics",
            RequestWeight::Auth => "auth",
            RequestWeight::Mutation => "mutation",
            RequestWeight::Marking => "marking",
            RequestWeight::Heavy => "heavy",
            RequestWeight::Report => "report",
        };
        write!(f, "{}", label)
    }
}

/// Wraps operation outcomes in artificially delayed futures
#[derive(Debug, Clone, Copy)]
pub struct RequestSimulator {
    enabled: bool,
}

impl RequestSimulator {
    /// Create a simulator that sleeps for each operation's delay
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a simulator honoring the configured latency switch
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self { enabled: config.simulate_latency }
    }

    /// Whether artificial latency is applied
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Resolve `outcome` after the artificial delay for `weight`
    pub async fn run<T>(&self, weight: RequestWeight, outcome: ApiResult<T>) -> ApiResult<T> {
        if self.enabled {
            tokio::time::sleep(weight.delay()).await;
        }

        match &outcome {
            Ok(_) => debug!(%weight, "request resolved"),
            Err(error) => debug!(%weight, %error, "request rejected"),
        }
        outcome
    }
}

impl Default for RequestSimulator {
    fn default() -> Self {
        Self::new()
    }
}
