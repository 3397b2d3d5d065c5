//! Sequential run pipeline and per-stage outcomes
//!
//! One run executes fetch -> update -> publish in order. No stage's outcome
//! gates a later stage: a degraded fetch still feeds its sentinel string to
//! the updater, and the publisher commits whatever the file holds. Failures
//! are recorded as values in the [`RunReport`] instead of propagating.

use tracing::{error, info};

use crate::keywords::KeywordFetcher;
use crate::meta::MetaUpdater;
use crate::publish::Publisher;

/// Outcome of one pipeline stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// Stage completed with real output
    Success,

    /// Stage completed with placeholder output (e.g. a sentinel string)
    Degraded { reason: String },

    /// Stage had no usable effect
    Failed { reason: String },

    /// Stage was not run (dry-run)
    Skipped,
}

impl StageOutcome {
    pub fn degraded(reason: impl Into<String>) -> Self {
        Self::Degraded { reason: reason.into() }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed { reason: reason.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StageOutcome::Success)
    }
}

impl std::fmt::Display for StageOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageOutcome::Success => write!(f, "success"),
            StageOutcome::Degraded { reason } => write!(f, "degraded: {}", reason),
            StageOutcome::Failed { reason } => write!(f, "failed: {}", reason),
            StageOutcome::Skipped => write!(f, "skipped"),
        }
    }
}

/// Per-stage outcomes of one pipeline run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Keyword string the run operated on (may be a sentinel)
    pub keywords: String,

    pub fetch: StageOutcome,
    pub update: StageOutcome,
    pub publish: StageOutcome,
}

impl RunReport {
    /// True when every stage produced real output (skipped publish counts)
    pub fn succeeded(&self) -> bool {
        self.fetch.is_success()
            && self.update.is_success()
            && matches!(self.publish, StageOutcome::Success | StageOutcome::Skipped)
    }
}

/// The fetch -> update -> publish pipeline
pub struct Pipeline {
    fetcher: KeywordFetcher,
    updater: MetaUpdater,
    publisher: Option<Publisher>,
    topic: String,
}

impl Pipeline {
    /// Assemble a pipeline from its three stages
    ///
    /// `publisher: None` skips the publish stage (dry-run).
    pub fn new(fetcher: KeywordFetcher, updater: MetaUpdater, publisher: Option<Publisher>, topic: String) -> Self {
        Self {
            fetcher,
            updater,
            publisher,
            topic,
        }
    }

    /// Run all three stages in order, never propagating stage failures
    pub async fn run(&self) -> RunReport {
        info!(topic = %self.topic, "Starting SEO update run");

        let (keywords, fetch) = self.fetcher.fetch(&self.topic).await;
        match &fetch {
            StageOutcome::Success => info!(%keywords, "Fetched keywords"),
            other => error!("Keyword fetch {}", other),
        }

        let update = match self.updater.update(&keywords).await {
            Ok(()) => {
                info!(path = %self.updater.path().display(), "Updated keywords meta tag");
                StageOutcome::Success
            }
            Err(e) => {
                error!(error = %e, "HTML update failed");
                StageOutcome::failed(e.to_string())
            }
        };

        let publish = match &self.publisher {
            None => {
                info!("Publish stage skipped");
                StageOutcome::Skipped
            }
            Some(publisher) => match publisher.publish(self.updater.path()).await {
                Ok(()) => {
                    info!("Pushed changes to remote");
                    StageOutcome::Success
                }
                Err(e) => {
                    let reason = publisher.redact(&e.to_string());
                    error!(error = %reason, "Publish failed");
                    StageOutcome::failed(reason)
                }
            },
        };

        RunReport {
            keywords,
            fetch,
            update,
            publish,
        }
    }
}
