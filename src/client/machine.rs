use crate::Resource;
use crate::client::Client;
use crate::error::Result;
use crate::transport::Transport;

/// Accessor for `/machine`.
#[derive(Debug)]
pub struct MachineApi<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> MachineApi<'a, T> {
    pub(super) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Fetches hardware and OS information of the monitored machine.
    pub async fn get_machine_info(&self) -> Result<serde_json::Value> {
        self.client.request_resource(Resource::Machine, None).await
    }
}
