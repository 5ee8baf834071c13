use crate::Resource;
use crate::client::Client;
use crate::error::Result;
use crate::transport::Transport;

/// Accessor for `/stats/{container_id}`.
#[derive(Debug)]
pub struct ContainerStatsApi<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> ContainerStatsApi<'a, T> {
    pub(super) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Fetches resource usage of one container.
    pub async fn get_container_stats(&self, container_id: &str) -> Result<serde_json::Value> {
        self.client
            .request_resource(Resource::ContainerStats, Some(container_id))
            .await
    }

    /// Fetches resource usage of all containers via `/stats/`.
    pub async fn get_all_stats(&self) -> Result<serde_json::Value> {
        self.client
            .request_resource(Resource::ContainerStats, None)
            .await
    }
}
