//! Keyword fetch stage
//!
//! Asks the LLM for trending SEO keywords on a topic. Never fails the run:
//! missing text or a client error degrades to a fixed sentinel string that
//! downstream stages consume like any other keyword string.

use std::sync::Arc;

use tracing::{debug, error};

use crate::llm::LlmClient;
use crate::pipeline::StageOutcome;

/// Returned when the service replied but carried no usable text
pub const NO_KEYWORDS_SENTINEL: &str = "No keywords generated";

/// Returned when the service call itself failed
pub const FETCH_ERROR_SENTINEL: &str = "Error fetching keywords";

/// Keyword fetch stage over an injected LLM client
pub struct KeywordFetcher {
    llm: Arc<dyn LlmClient>,
}

impl KeywordFetcher {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Prompt sent to the service for a topic
    pub fn build_prompt(topic: &str) -> String {
        format!("List 10 trending SEO keywords related to {} in comma-separated format.", topic)
    }

    /// Fetch keywords for a topic
    ///
    /// Always returns a usable string: the trimmed reply text on success, or
    /// one of the sentinels with a [`StageOutcome::Degraded`] marker.
    pub async fn fetch(&self, topic: &str) -> (String, StageOutcome) {
        debug!(%topic, "fetch: called");
        let prompt = Self::build_prompt(topic);

        match self.llm.generate(&prompt).await {
            Ok(reply) => match reply.first_text() {
                Some(text) => {
                    debug!(keyword_len = text.len(), "fetch: got keywords");
                    (text, StageOutcome::Success)
                }
                None => {
                    debug!("fetch: reply had no text");
                    (
                        NO_KEYWORDS_SENTINEL.to_string(),
                        StageOutcome::degraded("reply contained no text"),
                    )
                }
            },
            Err(e) => {
                error!(error = %e, "fetch: LLM call failed");
                (FETCH_ERROR_SENTINEL.to_string(), StageOutcome::degraded(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::MockLlmClient;
    use crate::llm::{GenerateReply, LlmError};

    #[test]
    fn test_build_prompt() {
        let prompt = KeywordFetcher::build_prompt("E-commerce SEO trends");
        assert_eq!(
            prompt,
            "List 10 trending SEO keywords related to E-commerce SEO trends in comma-separated format."
        );
    }

    #[tokio::test]
    async fn test_fetch_returns_trimmed_text() {
        let llm = Arc::new(MockLlmClient::with_text("  shopping cart, checkout flow, free shipping  "));
        let fetcher = KeywordFetcher::new(llm.clone());

        let (keywords, outcome) = fetcher.fetch("E-commerce SEO trends").await;

        assert_eq!(keywords, "shopping cart, checkout flow, free shipping");
        assert_eq!(outcome, StageOutcome::Success);
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_empty_reply_degrades() {
        let llm = Arc::new(MockLlmClient::new(vec![Ok(GenerateReply::default())]));
        let fetcher = KeywordFetcher::new(llm);

        let (keywords, outcome) = fetcher.fetch("anything").await;

        assert_eq!(keywords, NO_KEYWORDS_SENTINEL);
        assert!(matches!(outcome, StageOutcome::Degraded { .. }));
    }

    #[tokio::test]
    async fn test_fetch_whitespace_only_text_returns_empty() {
        // A reply with a text part is a reply: trimmed text comes back
        // as-is, even when empty
        let llm = Arc::new(MockLlmClient::with_text("   "));
        let fetcher = KeywordFetcher::new(llm);

        let (keywords, outcome) = fetcher.fetch("anything").await;

        assert_eq!(keywords, "");
        assert_eq!(outcome, StageOutcome::Success);
    }

    #[tokio::test]
    async fn test_fetch_client_error_degrades() {
        let llm = Arc::new(MockLlmClient::new(vec![Err(LlmError::ApiError {
            status: 503,
            message: "overloaded".to_string(),
        })]));
        let fetcher = KeywordFetcher::new(llm);

        let (keywords, outcome) = fetcher.fetch("anything").await;

        assert_eq!(keywords, FETCH_ERROR_SENTINEL);
        match outcome {
            StageOutcome::Degraded { reason } => assert!(reason.contains("503")),
            other => panic!("expected degraded outcome, got {:?}", other),
        }
    }
}
