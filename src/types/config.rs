//! Configuration for the attendance mock service
//!
//! The service configuration controls the synthetic history window, the
//! biometric acceptance threshold, artificial request latency, and the
//! optional random seed used to pin every random draw for reproducible runs.
//!
//! Configuration can come from three sources, highest priority first:
//! command line arguments, a JSON configuration file, and built-in defaults.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::Role;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    /// A numeric field is outside its allowed range
    #[error("Invalid value for {field}: {message}")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable constraint description
        message: String,
    },

    /// The configuration file could not be read
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        /// Path that was attempted
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be parsed
    #[error("Failed to parse configuration file {path}: {source}")]
    FileParse {
        /// Path that was attempted
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Service configuration with validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// Number of days of synthetic attendance history to derive, counted
    /// backwards from the reference date
    pub history_window_days: u32,

    /// First day offset at which synthetic records start; earlier offsets
    /// are reserved for the curated seed records
    pub history_start_offset: u32,

    /// Number of records returned in the student dashboard recency view
    pub recent_dashboard_window: usize,

    /// Number of records considered for per-course last-attendance views
    pub recent_course_window: usize,

    /// Minimum face recognition confidence accepted when marking attendance
    pub face_confidence_threshold: f64,

    /// Minutes a generated attendance QR code stays valid
    pub qr_expiry_minutes: i64,

    /// Whether facade operations sleep for their artificial latency
    pub simulate_latency: bool,

    /// Seed pinning every random draw; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            history_window_days: 30,
            history_start_offset: 5,
            recent_dashboard_window: 10,
            recent_course_window: 5,
            face_confidence_threshold: 85.0,
            qr_expiry_minutes: 30,
            simulate_latency: true,
            seed: None,
        }
    }
}

impl ServiceConfig {
    /// Validate field ranges and cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.history_window_days == 0 {
            return Err(ConfigValidationError::OutOfRange {
                field: "history_window_days",
                message: "must be greater than 0".to_string(),
            });
        }

        if self.history_start_offset > self.history_window_days {
            return Err(ConfigValidationError::OutOfRange {
                field: "history_start_offset",
                message: format!(
                    "must not exceed history_window_days ({})",
                    self.history_window_days
                ),
            });
        }

        if self.recent_dashboard_window == 0 || self.recent_course_window == 0 {
            return Err(ConfigValidationError::OutOfRange {
                field: "recent_dashboard_window",
                message: "recency windows must be greater than 0".to_string(),
            });
        }

        if !(0.0..=100.0).contains(&self.face_confidence_threshold) {
            return Err(ConfigValidationError::OutOfRange {
                field: "face_confidence_threshold",
                message: "must be within 0.0..=100.0".to_string(),
            });
        }

        if self.qr_expiry_minutes <= 0 {
            return Err(ConfigValidationError::OutOfRange {
                field: "qr_expiry_minutes",
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Build a random source honoring the configured seed
    ///
    /// Seeded configurations hand out identically-seeded generators on every
    /// call, so each facade invocation re-derives the same sample; unseeded
    /// configurations draw fresh entropy per call.
    pub fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::thread_rng()),
        }
    }

    /// Load configuration from a JSON file, leaving unset fields at defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigValidationError> {
        let path_str = path.as_ref().display().to_string();
        let contents = fs::read_to_string(&path).map_err(|source| {
            ConfigValidationError::FileRead { path: path_str.clone(), source }
        })?;
        let file: ConfigFile = serde_json::from_str(&contents)
            .map_err(|source| ConfigValidationError::FileParse { path: path_str, source })?;
        Ok(file.merged_into(Self::default()))
    }

    /// Resolve configuration from CLI arguments plus optional config file
    pub fn from_cli_args(args: &CliArgs) -> Result<Self, ConfigValidationError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(seed) = args.seed {
            config.seed = Some(seed);
        }
        if args.no_latency {
            config.simulate_latency = false;
        }

        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as pretty-printed JSON
    pub fn print_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of days of synthetic attendance history
    pub history_window_days: Option<u32>,
    /// First synthetic day offset
    pub history_start_offset: Option<u32>,
    /// Dashboard recency window size
    pub recent_dashboard_window: Option<usize>,
    /// Per-course recency window size
    pub recent_course_window: Option<usize>,
    /// Face recognition acceptance threshold
    pub face_confidence_threshold: Option<f64>,
    /// QR code validity in minutes
    pub qr_expiry_minutes: Option<i64>,
    /// Whether to simulate request latency
    pub simulate_latency: Option<bool>,
    /// Random seed
    pub seed: Option<u64>,
}

impl ConfigFile {
    fn merged_into(self, mut base: ServiceConfig) -> ServiceConfig {
        if let Some(v) = self.history_window_days {
            base.history_window_days = v;
        }
        if let Some(v) = self.history_start_offset {
            base.history_start_offset = v;
        }
        if let Some(v) = self.recent_dashboard_window {
            base.recent_dashboard_window = v;
        }
        if let Some(v) = self.recent_course_window {
            base.recent_course_window = v;
        }
        if let Some(v) = self.face_confidence_threshold {
            base.face_confidence_threshold = v;
        }
        if let Some(v) = self.qr_expiry_minutes {
            base.qr_expiry_minutes = v;
        }
        if let Some(v) = self.simulate_latency {
            base.simulate_latency = v;
        }
        if let Some(v) = self.seed {
            base.seed = Some(v);
        }
        base
    }
}

/// Command line arguments for the demo binary
#[derive(Debug, Clone, Parser)]
#[command(
    name = "attendance-mock-service",
    version,
    about = "Attendance mock service - role-based dashboard data without a backend",
    long_about = "Serves simulated attendance data through the same request/response \
contract a real backend would expose: role-scoped dashboards, synthetic attendance \
history, statistics rollups, and artificially delayed responses.

EXAMPLES:
    # Fetch the demo student dashboard
    attendance-mock-service --role student

    # Reproducible output
    attendance-mock-service --role admin --seed 42

    # Skip artificial latency
    attendance-mock-service --role faculty --no-latency

    # Generate a configuration template
    attendance-mock-service --print-config > my-config.json"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(short, long, help = "Configuration file path (JSON format)")]
    pub config: Option<String>,

    /// Role whose demo dashboard to fetch
    #[arg(long, default_value = "student", help = "Role to log in as (student, faculty, admin)")]
    pub role: Role,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Disable artificial request latency
    #[arg(long, help = "Skip artificial request delays")]
    pub no_latency: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Validate configuration without issuing requests
    #[arg(long, help = "Validate configuration without issuing requests")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

impl clap::builder::ValueParserFactory for Role {
    type Parser = RoleValueParser;

    fn value_parser() -> Self::Parser {
        RoleValueParser
    }
}

/// Clap value parser for [`Role`]
#[derive(Debug, Clone, Copy)]
pub struct RoleValueParser;

impl clap::builder::TypedValueParser for RoleValueParser {
    type Value = Role;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        _arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let s = value.to_string_lossy();
        s.parse::<Role>().map_err(|message| {
            clap::Error::raw(clap::error::ErrorKind::InvalidValue, format!("{message}\n"))
                .with_cmd(cmd)
        })
    }
}
