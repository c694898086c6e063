//! Remote phishing classifier client.
//!
//! Uses the curl crate (libcurl) to `POST {"url": ...}` as JSON to the
//! configured endpoint and decode the `is_phishing` verdict. Any HTTP status
//! is accepted as long as the body decodes; no retry and no timeout beyond
//! libcurl's defaults.

mod error;
mod parse;

pub use error::ClassifierUnavailable;

use anyhow::{Context, Result};
use url::Url;

use crate::protocol::{CheckRequest, CheckResponse};

/// Anything that can answer a phishing check.
pub trait Classifier: Send + Sync {
    fn classify(&self, request: &CheckRequest) -> Result<CheckResponse, ClassifierUnavailable>;
}

/// Classifier reached over HTTP at a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    endpoint: Url,
}

impl HttpClassifier {
    /// Validates `endpoint` once so that per-call failures are only network/parse ones.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint =
            Url::parse(endpoint).with_context(|| format!("invalid classifier endpoint {endpoint:?}"))?;
        match endpoint.scheme() {
            "http" | "https" => Ok(Self { endpoint }),
            other => anyhow::bail!("classifier endpoint must be http or https, got {other}"),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

impl Classifier for HttpClassifier {
    /// Runs in the current thread; call from `spawn_blocking` if used from async code.
    fn classify(&self, request: &CheckRequest) -> Result<CheckResponse, ClassifierUnavailable> {
        let body = serde_json::to_vec(request)?;
        let mut response: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(self.endpoint.as_str())?;
        easy.post(true)?;
        easy.post_fields_copy(&body)?;

        let mut list = curl::easy::List::new();
        list.append("Content-Type: application/json")?;
        // No 100-continue round trip for a one-line body.
        list.append("Expect:")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                response.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(
            endpoint = %self.endpoint,
            status,
            bytes = response.len(),
            "classifier responded"
        );

        parse::parse_response(status, &response)
    }
}
