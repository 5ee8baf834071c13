//! cAdvisor client: a thin binding for the cAdvisor container-monitoring REST API.
//!
//! A [`Client`] resolves a base URL of the form `{host}:{port}/{version}` and exposes three
//! sub-clients, one per cAdvisor resource group:
//!
//! - [`Client::machine`] for `/machine`
//! - [`Client::container_spec`] for `/spec/{container_id}`
//! - [`Client::container_stats`] for `/stats/{container_id}` and `/stats/`
//!
//! Every accessor issues a single GET and returns the decoded JSON, or an [`Error`] telling
//! a non-2xx answer ([`Error::ApiFailed`]) apart from an undecodable body ([`Error::Decode`]).
//! There is no caching, retry, or timeout.
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod resource;
pub mod transport;

pub use client::{Client, ContainerSpecApi, ContainerStatsApi, MachineApi};
pub use config::Config;
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use resource::Resource;
pub use transport::{HttpTransport, Response, Transport};

/// Runs the command line entry point with the given arguments (without the program name).
///
/// Usage: `<endpoint> [machine | spec <container_id> | stats [<container_id>]]`.
/// Port and version come from [`Config::from_env`]. Without arguments, the usage text is
/// printed and nothing is requested.
///
/// # Errors
///
/// Returns an error for unknown commands, missing arguments, and any request failure.
pub async fn run(args: Vec<String>) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut args = args.into_iter();
    let Some(endpoint_url) = args.next() else {
        println!("{}", USAGE);
        return Ok(());
    };
    let command = args.next().unwrap_or_else(|| "machine".to_owned());
    let container_id = args.next();

    let client = Client::new(&endpoint_url, &Config::from_env());
    let value = match (command.as_str(), container_id) {
        ("machine", _) => client.machine().get_machine_info().await?,
        ("spec", Some(id)) => client.container_spec().get_container_spec(&id).await?,
        ("spec", None) => return Err(format!("missing container id\n{USAGE}").into()),
        ("stats", Some(id)) => client.container_stats().get_container_stats(&id).await?,
        ("stats", None) => client.container_stats().get_all_stats().await?,
        (other, _) => return Err(format!("unknown command `{other}`\n{USAGE}").into()),
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

const USAGE: &str =
    "usage: cadvisor-client <endpoint> [machine | spec <container_id> | stats [<container_id>]]";
