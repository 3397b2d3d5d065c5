//! LlmClient trait definition

use async_trait::async_trait;

use super::{GenerateReply, LlmError};

/// Stateless LLM client - each call is independent
///
/// The single abstraction point between the keyword fetch stage and the
/// generative-language service. Implementations own their transport; the
/// caller only supplies a prompt and receives the parsed reply.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one prompt and return the parsed reply
    async fn generate(&self, prompt: &str) -> Result<GenerateReply, LlmError>;
}
