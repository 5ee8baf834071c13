//! The cAdvisor client facade and its per-resource sub-clients.
mod machine;
mod spec;
mod stats;

pub use machine::MachineApi;
pub use spec::ContainerSpecApi;
pub use stats::ContainerStatsApi;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::transport::{HttpTransport, Transport};
use crate::{Config, Endpoint, Resource};

/// Client for one cAdvisor instance.
///
/// The client holds only the resolved [`Endpoint`] and its transport. It can be shared
/// between tasks whenever the transport is `Send + Sync`, which holds for
/// [`HttpTransport`].
///
/// # Examples
///
/// ```no_run
/// # use cadvisor_client::{Client, Config};
/// # async fn run() -> cadvisor_client::Result<()> {
/// let client = Client::new("http://127.0.0.1", &Config::default());
/// let machine = client.machine().get_machine_info().await?;
/// let stats = client.container_stats().get_container_stats("abc123").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    endpoint: Endpoint,
    transport: T,
}

impl Client<HttpTransport> {
    /// Creates a client for `endpoint_url` (including its scheme) using port and version
    /// from `config`.
    pub fn new(endpoint_url: &str, config: &Config) -> Self {
        Self::with_transport(endpoint_url, config, HttpTransport::new())
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(endpoint_url: &str, config: &Config, transport: T) -> Self {
        let endpoint = Endpoint::from_config(endpoint_url, config);
        log::debug!("Created cAdvisor client for {}", endpoint);
        Self {
            endpoint,
            transport,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn machine(&self) -> MachineApi<'_, T> {
        MachineApi::new(self)
    }

    pub fn container_spec(&self) -> ContainerSpecApi<'_, T> {
        ContainerSpecApi::new(self)
    }

    pub fn container_stats(&self) -> ContainerStatsApi<'_, T> {
        ContainerStatsApi::new(self)
    }

    /// Requests `path` relative to the endpoint and decodes the JSON answer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ApiFailed`] for non-2xx answers, [`crate::Error::Decode`] for
    /// bodies that are not JSON, and transport errors unchanged.
    pub async fn request(&self, path: &str) -> Result<serde_json::Value> {
        self.request_as(path).await
    }

    /// Like [`Client::request`], but decodes into `D`.
    pub async fn request_as<D: DeserializeOwned>(&self, path: &str) -> Result<D> {
        let url = self.endpoint.url_for(path);
        self.transport.get(&url).await?.json()
    }

    /// Requests `resource`, substituting `container_id` as described in [`Resource::path`].
    pub async fn request_resource(
        &self,
        resource: Resource,
        container_id: Option<&str>,
    ) -> Result<serde_json::Value> {
        self.request(&resource.path(container_id)).await
    }
}
