//! Configuration loading and management for the Activity Engine.
//!
//! This module provides functionality to load classification thresholds from
//! YAML files: rate buckets, named target overrides, the fallback target, the
//! report length heuristic and project-track keywords.
//!
//! # Example
//!
//! ```no_run
//! use activity_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Buckets: {}", config.config().rates().buckets.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_PROJECT_KEYWORDS, DEFAULT_REPORT_MIN_CHARS, EngineConfig, NamedTarget,
    ProjectMatching, RateBucket, RatesConfig, ReportThresholds, ThresholdsConfig,
};
