//! Decode a classifier response body.

use serde_json::Value;

use super::ClassifierUnavailable;
use crate::protocol::CheckResponse;

/// Decode `body` regardless of `status`; `status` only annotates rejections.
///
/// An `error` field only matters when there is no verdict next to it.
pub(crate) fn parse_response(
    status: u32,
    body: &[u8],
) -> Result<CheckResponse, ClassifierUnavailable> {
    let response: CheckResponse = serde_json::from_slice(body)?;
    if response.is_phishing.is_none() {
        if let Some(error) = &response.error {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Err(ClassifierUnavailable::Rejected { status, message });
        }
    }
    Ok(response)
}
