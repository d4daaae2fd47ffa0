use crate::logging::DEFAULT_FILTER;

/// Process-wide configuration for the Fabric crates.
#[derive(Debug, Clone)]
pub struct Config {
    pub profiling: ProfilingMode,
    /// `tracing` filter directive, overridden by `RUST_LOG` when set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            profiling: ProfilingMode::Off,
            log_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling scopes are compiled in but not recorded
    #[default]
    Off,
    /// Scopes are recorded in-process
    On,
    /// Scopes are recorded and served to `puffin_viewer` over HTTP
    WithWebServer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_disables_profiling() {
        let config = Config::default();
        assert_eq!(config.profiling, ProfilingMode::Off);
        assert_eq!(config.log_filter, DEFAULT_FILTER);
    }
}
