/// Entry point for the cAdvisor client.
///
/// Queries one cAdvisor instance and prints the decoded JSON answer.
///
/// # Errors
///
/// Returns an error if the command line is invalid or the request fails.
///
/// # Examples
///
/// ```bash
/// CADVISOR_PORT=8080 RUST_LOG=debug cargo run -- http://127.0.0.1 stats docker/abc123
/// ```
#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    cadvisor_client::run(std::env::args().skip(1).collect()).await
}
