/// Errors returned by the cAdvisor client.
///
/// A non-2xx answer from cAdvisor ([`Error::ApiFailed`]) and an unreadable body on a
/// successful answer ([`Error::Decode`]) are kept apart so callers can tell a rejected
/// request from a payload they could not understand.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cAdvisor API request failed with status {status}: {reason}")]
    ApiFailed { status: u16, reason: String },
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("HTTP request to `{url}` failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl Error {
    /// Returns `true` if cAdvisor answered with a non-2xx status.
    pub fn is_api_failure(&self) -> bool {
        matches!(self, Error::ApiFailed { .. })
    }

    /// Returns the HTTP status code of an [`Error::ApiFailed`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::ApiFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
