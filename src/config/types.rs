//! Configuration types for activity classification.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the built-in
//! defaults used when no configuration directory is supplied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minimum trimmed report length, in characters, for a report to count.
pub const DEFAULT_REPORT_MIN_CHARS: usize = 40;

/// Status keywords that mark a record as project track.
pub const DEFAULT_PROJECT_KEYWORDS: [&str; 3] = ["project", "part-project", "part project"];

/// A rate threshold and the daily target it grants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateBucket {
    /// Lowest rate (inclusive) that falls in this bucket.
    pub min_rate: Decimal,
    /// Daily hours required for this bucket.
    pub target_hours: Decimal,
}

/// A per-employee target that overrides the rate buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedTarget {
    /// Employee name, matched exactly after trimming.
    pub name: String,
    /// Daily hours required.
    pub target_hours: Decimal,
}

/// Rate configuration from rates.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Named overrides, checked before the buckets.
    #[serde(default)]
    pub named_overrides: Vec<NamedTarget>,
    /// Rate buckets; evaluated from the highest `min_rate` down.
    pub buckets: Vec<RateBucket>,
    /// Target for a missing or unrecognized rate. `None` means no requirement.
    #[serde(default)]
    pub fallback_hours: Option<Decimal>,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            named_overrides: vec![NamedTarget {
                name: "Iuliia K".to_string(),
                target_hours: Decimal::from(4),
            }],
            buckets: vec![
                RateBucket {
                    min_rate: Decimal::new(125, 2),
                    target_hours: Decimal::from(10),
                },
                RateBucket {
                    min_rate: Decimal::new(100, 2),
                    target_hours: Decimal::from(8),
                },
                RateBucket {
                    min_rate: Decimal::new(75, 2),
                    target_hours: Decimal::from(6),
                },
                RateBucket {
                    min_rate: Decimal::new(50, 2),
                    target_hours: Decimal::from(4),
                },
            ],
            fallback_hours: None,
        }
    }
}

/// Report heuristic settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportThresholds {
    /// Minimum trimmed length in characters.
    pub min_chars: usize,
}

/// Project-track detection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMatching {
    /// Substrings that mark a status text as project track.
    pub keywords: Vec<String>,
}

/// Threshold configuration from thresholds.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    /// Report heuristic settings.
    pub report: ReportThresholds,
    /// Project-track detection settings.
    pub project: ProjectMatching,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            report: ReportThresholds {
                min_chars: DEFAULT_REPORT_MIN_CHARS,
            },
            project: ProjectMatching {
                keywords: DEFAULT_PROJECT_KEYWORDS
                    .iter()
                    .map(|k| k.to_string())
                    .collect(),
            },
        }
    }
}

/// The complete engine configuration.
///
/// Buckets are kept sorted by descending `min_rate` and keywords are
/// lowercased, so lookups can walk them in order.
///
/// # Example
///
/// ```
/// use activity_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.report_min_chars(), 40);
/// assert_eq!(config.rates().buckets.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    rates: RatesConfig,
    thresholds: ThresholdsConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(rates: RatesConfig, thresholds: ThresholdsConfig) -> Self {
        let mut rates = rates;
        rates
            .buckets
            .sort_by(|a, b| b.min_rate.cmp(&a.min_rate));

        let mut thresholds = thresholds;
        thresholds.project.keywords = thresholds
            .project
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Self { rates, thresholds }
    }

    /// Returns the rate configuration.
    pub fn rates(&self) -> &RatesConfig {
        &self.rates
    }

    /// Returns the threshold configuration.
    pub fn thresholds(&self) -> &ThresholdsConfig {
        &self.thresholds
    }

    /// Returns the minimum report length in characters.
    pub fn report_min_chars(&self) -> usize {
        self.thresholds.report.min_chars
    }

    /// Returns the lowercase project keywords.
    pub fn project_keywords(&self) -> &[String] {
        &self.thresholds.project.keywords
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(RatesConfig::default(), ThresholdsConfig::default())
    }
}
