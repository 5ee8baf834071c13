use crate::Resource;
use crate::client::Client;
use crate::error::Result;
use crate::transport::Transport;

/// Accessor for `/spec/{container_id}`.
#[derive(Debug)]
pub struct ContainerSpecApi<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> ContainerSpecApi<'a, T> {
    pub(super) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Fetches the specification of one container.
    ///
    /// The identifier is inserted as-is; cAdvisor container names such as
    /// `docker/<id>` are passed through unchanged.
    pub async fn get_container_spec(&self, container_id: &str) -> Result<serde_json::Value> {
        self.client
            .request_resource(Resource::ContainerSpec, Some(container_id))
            .await
    }
}
