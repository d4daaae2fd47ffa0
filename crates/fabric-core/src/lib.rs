//! Fabric Core
//!
//! Shared utilities for the Fabric shadow tree crates: logging setup,
//! profiling scopes, hash collections, configuration and geometry.

pub mod alloc;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

pub use config::{Config, ProfilingMode};

/// Apply a [`Config`]: install the log subscriber and start profiling if requested.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init(config: &Config) {
    logging::init_with_filter(&config.log_filter);
    profiling::init_profiling(config.profiling);
}
