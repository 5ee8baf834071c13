use std::fmt;

use crate::Config;

/// The resolved `{host}:{port}/{version}` prefix shared by every request of one client.
///
/// The host is taken verbatim, so it must carry its scheme (e.g. `http://`).
///
/// # Examples
///
/// ```
/// # use cadvisor_client::Endpoint;
/// let endpoint = Endpoint::new("http://10.0.0.5", "8080", "v1.3");
/// assert_eq!(endpoint.as_str(), "http://10.0.0.5:8080/v1.3");
/// assert_eq!(endpoint.url_for("/machine"), "http://10.0.0.5:8080/v1.3/machine");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(host: &str, port: &str, version: &str) -> Self {
        Self(format!("{host}:{port}/{version}"))
    }

    pub fn from_config(host: &str, config: &Config) -> Self {
        Self::new(host, config.port(), config.version())
    }

    /// Appends `path` to the base URL without inserting or removing separators.
    pub fn url_for(&self, path: &str) -> String {
        let mut url = String::with_capacity(self.0.len() + path.len());
        url.push_str(&self.0);
        url.push_str(path);
        url
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
