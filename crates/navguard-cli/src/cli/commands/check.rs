//! `navguard check <url>...` – run the guard on each URL.

use anyhow::Result;
use navguard_core::config::GuardConfig;
use navguard_core::guard::{CheckOutcome, NavigationGuard};
use navguard_core::protocol::Verdict;
use std::io::{self, Write};
use std::sync::Arc;

pub async fn run_check(cfg: &GuardConfig, urls: Vec<String>, verbose: bool) -> Result<()> {
    let guard = Arc::new(NavigationGuard::from_config(cfg)?);
    let outcomes = check_all(guard, urls).await?;

    if verbose {
        for (url, outcome) in &outcomes {
            eprintln!("{url:?}: {}", describe(outcome));
        }
    }
    let stdout = io::stdout();
    write_decisions(&mut stdout.lock(), &outcomes)?;
    Ok(())
}

/// Checks all URLs concurrently (one independent request each); results come
/// back in input order whatever order the requests finish in.
async fn check_all(
    guard: Arc<NavigationGuard>,
    urls: Vec<String>,
) -> Result<Vec<(String, CheckOutcome)>> {
    let tasks: Vec<_> = urls
        .into_iter()
        .map(|url| {
            let guard = Arc::clone(&guard);
            let shown = url.clone();
            (shown, tokio::spawn(guard.evaluate_async(url)))
        })
        .collect();

    let mut outcomes = Vec::with_capacity(tasks.len());
    for (url, task) in tasks {
        outcomes.push((url, task.await?));
    }
    Ok(outcomes)
}

/// One JSON decision per line.
fn write_decisions<W: Write>(out: &mut W, outcomes: &[(String, CheckOutcome)]) -> Result<()> {
    for (_, outcome) in outcomes {
        serde_json::to_writer(&mut *out, &outcome.decision)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn describe(outcome: &CheckOutcome) -> String {
    match &outcome.verdict {
        Ok(Verdict::Phishing) => "classifier says phishing".to_string(),
        Ok(Verdict::Legitimate) => "classifier says legitimate".to_string(),
        Ok(Verdict::Unknown) => "classifier gave no verdict".to_string(),
        Err(err) => format!("classifier unavailable ({err})"),
    }
}
