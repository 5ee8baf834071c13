/// Default port cAdvisor listens on.
pub const DEFAULT_PORT: &str = "8080";
/// Default cAdvisor REST API version.
pub const DEFAULT_VERSION: &str = "v1.3";

const PORT_ENV: &str = "CADVISOR_PORT";
const VERSION_ENV: &str = "CADVISOR_VERSION";

/// Port and API version used to reach cAdvisor.
///
/// # Examples
///
/// ```
/// # use cadvisor_client::Config;
/// let config = Config::default().with_port("4194");
/// assert_eq!(config.port(), "4194");
/// assert_eq!(config.version(), "v1.3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    port: String,
    version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_owned(),
            version: DEFAULT_VERSION.to_owned(),
        }
    }
}

impl Config {
    pub fn new(port: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            version: version.into(),
        }
    }

    /// Reads `CADVISOR_PORT` and `CADVISOR_VERSION` from the environment.
    ///
    /// Unset or empty variables fall back to [`DEFAULT_PORT`] and [`DEFAULT_VERSION`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };
        let config = Self {
            port: read(PORT_ENV, DEFAULT_PORT),
            version: read(VERSION_ENV, DEFAULT_VERSION),
        };
        log::debug!(
            "cAdvisor config: port={}, version={}",
            config.port,
            config.version
        );
        config
    }

    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port(), "8080");
        assert_eq!(config.version(), "v1.3");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let env = HashMap::from([(PORT_ENV, "4194"), (VERSION_ENV, "v2.0")]);
        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config, Config::new("4194", "v2.0"));
    }

    #[test]
    fn test_from_lookup_falls_back_on_missing_or_empty() {
        let env = HashMap::from([(PORT_ENV, "")]);
        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_builder_setters() {
        let config = Config::default().with_port("9000").with_version("v2.1");
        assert_eq!(config.port(), "9000");
        assert_eq!(config.version(), "v2.1");
    }
}
