use super::{Response, Transport};
use crate::error::{Error, Result};

/// HTTP transport backed by [`reqwest::Client`].
///
/// Accepts any URL reqwest accepts (`http://` and `https://`), percent-encodes unsafe path
/// characters and follows redirects. No timeout is applied unless the wrapped client was
/// built with one: a call against an unresponsive server waits until the returned future
/// is dropped.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a preconfigured client, e.g. one with timeouts or extra root certificates.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Response> {
        let http_err = |source| Error::Http {
            url: url.to_owned(),
            source,
        };

        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(http_err)?;
        let status = response.status();
        let body = response.bytes().await.map_err(http_err)?;
        let response = Response::new(status, body.to_vec());

        if status.is_success() {
            log::trace!(
                "GET {} -> {} ({} bytes)",
                url,
                status.as_u16(),
                response.body().len()
            );
        } else {
            log::warn!("GET {} -> {} {}", url, status.as_u16(), response.reason());
        }

        Ok(response)
    }
}
