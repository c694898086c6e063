//! Failure of a single classifier round trip.

/// The classifier could not produce a usable verdict. Every variant is handled
/// the same way by the guard: logged, then resolved by the failure policy.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierUnavailable {
    /// Curl reported an error (connection refused, DNS, TLS, etc.).
    #[error("classifier request failed: {0}")]
    Transport(#[from] curl::Error),
    /// Body is not JSON or does not match the response schema.
    #[error("classifier response is not a verdict: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Classifier answered with an `error` field instead of a verdict.
    #[error("classifier rejected the request (HTTP {status}): {message}")]
    Rejected { status: u32, message: String },
    /// The blocking call never completed (task panicked or was cancelled).
    #[error("classifier call did not complete: {0}")]
    Aborted(#[from] tokio::task::JoinError),
}
