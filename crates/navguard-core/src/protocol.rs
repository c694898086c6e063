//! Wire types for the phishing-check round trip and the decision handed back
//! to the navigation host.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Body of `POST <endpoint>`: the navigation target, sent exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub url: String,
}

impl CheckRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Classifier answer. Only `is_phishing` drives the decision; the rest is
/// diagnostics and never fails decoding, whatever its JSON type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CheckResponse {
    #[serde(default)]
    pub is_phishing: Option<bool>,
    /// Human-readable verdict ("This is a Legitimate Website."); `None` unless a string.
    #[serde(default, deserialize_with = "string_or_none")]
    pub message: Option<String>,
    /// Set by the classifier instead of a verdict when it refuses the request.
    #[serde(default)]
    pub error: Option<Value>,
}

fn string_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Classification outcome extracted from a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Phishing,
    Legitimate,
    /// Response parsed but carried no `is_phishing` field.
    Unknown,
}

impl CheckResponse {
    pub fn verdict(&self) -> Verdict {
        match self.is_phishing {
            Some(true) => Verdict::Phishing,
            Some(false) => Verdict::Legitimate,
            None => Verdict::Unknown,
        }
    }
}

/// What the navigation host should do with the pending page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the navigation proceed unmodified.
    Allow,
    /// Send the tab to the given locator instead.
    Redirect(String),
}

impl NavigationDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, NavigationDecision::Redirect(_))
    }

    pub fn redirect_url(&self) -> Option<&str> {
        match self {
            NavigationDecision::Redirect(url) => Some(url),
            NavigationDecision::Allow => None,
        }
    }
}

/// Serializes in the browser's blocking-response shape:
/// `{"cancel": false}` or `{"redirectUrl": "..."}`.
impl Serialize for NavigationDecision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NavigationDecision::Allow => {
                let mut s = serializer.serialize_struct("NavigationDecision", 1)?;
                s.serialize_field("cancel", &false)?;
                s.end()
            }
            NavigationDecision::Redirect(url) => {
                let mut s = serializer.serialize_struct("NavigationDecision", 1)?;
                s.serialize_field("redirectUrl", url)?;
                s.end()
            }
        }
    }
}
