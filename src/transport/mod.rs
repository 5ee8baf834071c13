//! HTTP transport used by [`crate::Client`].
//!
//! A [`Transport`] performs exactly one GET per call and hands back the raw
//! [`Response`]. Status checking and JSON decoding happen in [`Response::json`], so every
//! transport shares the same failure semantics.
mod http;
#[cfg(test)]
pub(crate) mod testing;

pub use http::HttpTransport;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Performs a single GET against a fully qualified URL.
pub trait Transport {
    fn get(&self, url: &str) -> impl std::future::Future<Output = Result<Response>> + Send;
}

/// A response envelope that lives for one request/response cycle.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    reason: String,
    body: Vec<u8>,
}

impl Response {
    /// Creates a response whose reason phrase is the canonical one for `status`.
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            reason: status.canonical_reason().unwrap_or_default().to_owned(),
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ApiFailed`] if the status is outside `200..=299` and
    /// [`Error::Decode`] if the body of a successful response is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        if !self.status.is_success() {
            return Err(Error::ApiFailed {
                status: self.status.as_u16(),
                reason: self.reason.clone(),
            });
        }
        serde_json::from_slice(&self.body).map_err(Error::Decode)
    }
}
