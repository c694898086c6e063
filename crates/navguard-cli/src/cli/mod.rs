//! CLI for the navguard phishing navigation guard.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use navguard_core::config::{self, FailurePolicy, GuardConfig};

use commands::{run_check, run_show_config};

/// Top-level CLI for navguard.
#[derive(Debug, Parser)]
#[command(name = "navguard")]
#[command(about = "navguard: ask a phishing classifier before letting a navigation through", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Failure policy as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnError {
    /// Let the navigation through (fail open).
    Allow,
    /// Redirect to the warning page (fail closed).
    Warn,
}

impl From<OnError> for FailurePolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Allow => FailurePolicy::Allow,
            OnError::Warn => FailurePolicy::Warn,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check navigation targets and print one decision per line (JSON, input order).
    Check {
        /// URLs to check; sent to the classifier exactly as given.
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,
        /// Classifier endpoint (overrides `endpoint` in config.toml).
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
        /// What to do when the classifier is unavailable (overrides `on_error`).
        #[arg(long, value_enum)]
        on_error: Option<OnError>,
        /// Also report on stderr whether each decision came from a verdict or a failure.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the config file path and the effective configuration.
    Config,
}

/// Apply command-line overrides on top of the loaded config.
fn with_overrides(
    mut cfg: GuardConfig,
    endpoint: Option<String>,
    on_error: Option<OnError>,
) -> GuardConfig {
    if let Some(endpoint) = endpoint {
        cfg.endpoint = endpoint;
    }
    if let Some(on_error) = on_error {
        cfg.on_error = on_error.into();
    }
    cfg
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check {
                urls,
                endpoint,
                on_error,
                verbose,
            } => {
                let cfg = with_overrides(cfg, endpoint, on_error);
                run_check(&cfg, urls, verbose).await?;
            }
            CliCommand::Config => run_show_config(&cfg)?,
        }

        Ok(())
    }
}
