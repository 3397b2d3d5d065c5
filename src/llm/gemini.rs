//! Gemini generateContent API client implementation
//!
//! Implements the LlmClient trait against the generative-language REST
//! endpoint. One blocking call per request; no retries, no streaming.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::{GenerateReply, LlmClient, LlmError};
use crate::config::LlmConfig;

/// Gemini API client
pub struct GeminiClient {
    model: String,
    api_key_env: String,
    base_url: String,
    http: Client,
}

impl GeminiClient {
    /// Create a new client from configuration
    ///
    /// The API key environment variable is read per call, not here: a
    /// missing key is a fetch-stage failure, not a startup error.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(?config, "from_config: called");
        let timeout = Duration::from_millis(config.timeout_ms);

        let http = Client::builder().timeout(timeout).build().map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key_env: config.api_key_env.clone(),
            base_url: config.base_url.clone(),
            http,
        })
    }

    fn api_key(&self) -> Result<String, LlmError> {
        std::env::var(&self.api_key_env).map_err(|_| LlmError::MissingApiKey(self.api_key_env.clone()))
    }

    /// Build the request body for the generateContent endpoint
    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        debug!(%self.model, prompt_len = prompt.len(), "build_request_body: called");
        serde_json::json!({
            "contents": [
                {
                    "parts": [ { "text": prompt } ]
                }
            ]
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<GenerateReply, LlmError> {
        debug!(%self.model, "generate: called");
        let api_key = self.api_key()?;
        let url = self.endpoint();
        let body = self.build_request_body(prompt);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            debug!(%status, "generate: API error");
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError { status, message: text });
        }

        debug!("generate: success");
        let reply: GenerateReply = response.json().await?;
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_client() -> GeminiClient {
        GeminiClient {
            model: "gemini-2.5-flash".to_string(),
            api_key_env: "SEOUP_TEST_GEMINI_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            http: Client::new(),
        }
    }

    #[test]
    fn test_build_request_body() {
        let client = test_client();

        let body = client.build_request_body("List 10 trending SEO keywords");

        assert!(body["contents"].is_array());
        assert_eq!(body["contents"][0]["parts"][0]["text"], "List 10 trending SEO keywords");
    }

    #[test]
    fn test_endpoint_includes_model() {
        let client = test_client();

        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_generate_without_api_key() {
        let client = test_client();
        unsafe { std::env::remove_var("SEOUP_TEST_GEMINI_KEY") };

        let result = client.generate("anything").await;
        assert!(matches!(result, Err(LlmError::MissingApiKey(_))));
    }
}
