//! Configuration for enumeration and reporting.
//!
//! Plain structs with defaults. Nothing is read from files or the
//! environment; the command line fills in a [`RunConfig`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HeronError, Result};

/// Default upper bound on side length.
pub const DEFAULT_MAX_SIDE: u32 = 200;

/// Largest accepted upper bound. Keeps `16 * area^2` well inside 128 bits.
pub const MAX_SIDE_LIMIT: u32 = 1 << 20;

/// Default number of triangles listed in a report.
pub const DEFAULT_LIMIT: usize = 10;

/// Master configuration for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Search configuration.
    pub enumeration: EnumerationConfig,
    /// What the report contains.
    pub report: ReportConfig,
    /// How the report is rendered.
    pub format: OutputFormat,
    /// How diagnostics on stderr are rendered.
    #[serde(default)]
    pub log_format: LogFormat,
}

/// How candidate triples are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Loops bounded by `a <= b <= c < a + b`.
    #[default]
    Canonical,
    /// Full `[1, max_side]^3` cube, filtered afterwards. Slow; kept as a
    /// reference for cross-checking.
    CartesianProduct,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::Canonical => f.write_str("canonical"),
            SearchStrategy::CartesianProduct => f.write_str("cartesian_product"),
        }
    }
}

/// Enumeration configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumerationConfig {
    /// Every side lies in `[1, max_side]`.
    pub max_side: u32,
    /// Candidate generation strategy.
    pub strategy: SearchStrategy,
    /// Whether to split the outer loop across the rayon pool.
    pub parallel: bool,
    /// Bounds below this run sequentially even when `parallel` is set.
    pub par_threshold: u32,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            max_side: DEFAULT_MAX_SIDE,
            strategy: SearchStrategy::Canonical,
            parallel: true,
            par_threshold: 64,
        }
    }
}

impl EnumerationConfig {
    /// Default configuration with the given bound.
    pub fn new(max_side: u32) -> Self {
        Self {
            max_side,
            ..Self::default()
        }
    }

    /// Checks the bound before any work starts.
    pub fn validate(&self) -> Result<()> {
        if self.max_side < 1 {
            return Err(HeronError::invalid(format!(
                "max side must be at least 1, got {}",
                self.max_side
            )));
        }
        if self.max_side > MAX_SIDE_LIMIT {
            return Err(HeronError::invalid(format!(
                "max side must be at most {}, got {}",
                MAX_SIDE_LIMIT, self.max_side
            )));
        }
        Ok(())
    }

    /// True when this configuration takes the rayon path.
    pub fn runs_parallel(&self) -> bool {
        self.parallel && self.max_side >= self.par_threshold
    }
}

/// Report contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of triangles listed after the count.
    pub limit: usize,
    /// When set, also list every triangle with exactly this area.
    pub area: Option<u64>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            area: None,
        }
    }
}

/// Report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Diagnostic log rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}
