//! Navigation guard: one classifier round trip per navigation, turned into a
//! decision for the host.
//!
//! The guard holds no mutable state. Each check issues its own request, so
//! concurrent navigations need no coordination and identical URLs are never
//! memoized.
//!
//! A classifier failure never reaches the caller. It is logged once at WARN
//! and resolved by the configured [`FailurePolicy`]. The default, `Allow`,
//! is fail-open: when the classifier is down the user is not protected.

use anyhow::Result;
use std::sync::Arc;

use crate::classifier::{Classifier, ClassifierUnavailable, HttpClassifier};
use crate::config::GuardConfig;
pub use crate::config::FailurePolicy;
use crate::protocol::{CheckRequest, NavigationDecision, Verdict};
use crate::warning_page::WarningPage;

/// Decision plus what the classifier actually said, for callers that need to
/// tell "safe" from "could not ask".
#[derive(Debug)]
pub struct CheckOutcome {
    pub decision: NavigationDecision,
    pub verdict: Result<Verdict, ClassifierUnavailable>,
}

pub struct NavigationGuard {
    classifier: Box<dyn Classifier>,
    warning_page: WarningPage,
    policy: FailurePolicy,
}

impl NavigationGuard {
    pub fn new(
        classifier: Box<dyn Classifier>,
        warning_page: WarningPage,
        policy: FailurePolicy,
    ) -> Self {
        Self {
            classifier,
            warning_page,
            policy,
        }
    }

    /// Builds an HTTP-backed guard; endpoint and warning page are validated here.
    pub fn from_config(cfg: &GuardConfig) -> Result<Self> {
        let classifier = HttpClassifier::new(&cfg.endpoint)?;
        let warning_page = WarningPage::from_config(&cfg.warning_page)?;
        tracing::debug!(
            endpoint = classifier.endpoint(),
            warning_page = warning_page.locator(),
            policy = ?cfg.on_error,
            "navigation guard ready"
        );
        Ok(Self::new(Box::new(classifier), warning_page, cfg.on_error))
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn warning_page(&self) -> &WarningPage {
        &self.warning_page
    }

    /// Decide what to do with a navigation to `url`. Blocks on the classifier call.
    pub fn check(&self, url: &str) -> NavigationDecision {
        self.evaluate(url).decision
    }

    /// Like [`check`](Self::check) but keeps the classifier's verdict or failure.
    pub fn evaluate(&self, url: &str) -> CheckOutcome {
        let request = CheckRequest::new(url);
        let verdict = self
            .classifier
            .classify(&request)
            .map(|response| response.verdict());
        self.conclude(url, verdict)
    }

    /// Runs the blocking check on tokio's blocking pool.
    pub async fn check_async(self: Arc<Self>, url: String) -> NavigationDecision {
        self.evaluate_async(url).await.decision
    }

    pub async fn evaluate_async(self: Arc<Self>, url: String) -> CheckOutcome {
        let guard = Arc::clone(&self);
        let task_url = url.clone();
        match tokio::task::spawn_blocking(move || guard.evaluate(&task_url)).await {
            Ok(outcome) => outcome,
            Err(err) => self.conclude(&url, Err(err.into())),
        }
    }

    fn conclude(&self, url: &str, verdict: Result<Verdict, ClassifierUnavailable>) -> CheckOutcome {
        let decision = match &verdict {
            Ok(Verdict::Phishing) => {
                tracing::info!(url, "classifier flagged navigation as phishing");
                self.redirect()
            }
            Ok(Verdict::Legitimate) => NavigationDecision::Allow,
            Ok(Verdict::Unknown) => {
                tracing::debug!(url, "classifier response carried no verdict; allowing");
                NavigationDecision::Allow
            }
            Err(err) => {
                tracing::warn!(url, policy = ?self.policy, "classifier unavailable: {err}");
                match self.policy {
                    FailurePolicy::Allow => NavigationDecision::Allow,
                    FailurePolicy::Warn => self.redirect(),
                }
            }
        };
        CheckOutcome { decision, verdict }
    }

    fn redirect(&self) -> NavigationDecision {
        NavigationDecision::Redirect(self.warning_page.locator().to_string())
    }
}
