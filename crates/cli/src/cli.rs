use crate::tracing::{LogLevel, TracingFormat};
use clap::{Parser, ValueEnum};
use sloan_ordering::{DEFAULT_DEGREE_WEIGHT, DEFAULT_DISTANCE_WEIGHT, SloanWeights};
use std::path::PathBuf;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

/// Reorder graph vertices with the Sloan algorithm to reduce bandwidth and profile
#[derive(Parser, Debug)]
#[command(name = "sloan")]
#[command(version)]
pub struct Cli {
    /// Edge list to reorder; the built-in pgRouting sample network when omitted
    #[arg(value_name = "EDGES")]
    pub edges: Option<PathBuf>,

    /// Weight of the distance-to-end term (W1)
    #[arg(long, env = "SLOAN_DISTANCE_WEIGHT", default_value_t = DEFAULT_DISTANCE_WEIGHT)]
    pub distance_weight: u32,

    /// Weight of the current-degree term (W2)
    #[arg(long, env = "SLOAN_DEGREE_WEIGHT", default_value_t = DEFAULT_DEGREE_WEIGHT)]
    pub degree_weight: u32,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Set logging level
    #[arg(short = 'L', long, global = true, default_value = "warn", value_enum)]
    pub level: LogLevel,

    /// Diagnostic output format
    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: TracingFormat,
}

impl Cli {
    /// Weights assembled from the flags.
    #[must_use]
    pub const fn weights(&self) -> SloanWeights {
        SloanWeights::new(self.distance_weight, self.degree_weight)
    }
}
