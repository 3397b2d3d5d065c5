//! seoupdater - Scheduled SEO keyword updater
//!
//! A one-shot automation tool that keeps a static site's SEO metadata fresh.
//! Each run performs three sequential stages:
//!
//! 1. **Fetch** - ask the Gemini API for trending keywords on a fixed topic
//! 2. **Update** - rewrite the `<meta name="keywords">` tag in a local HTML file
//! 3. **Publish** - commit the updated file to a local clone and push it
//!
//! Stages are isolated from one another: a failed fetch degrades to a sentinel
//! string, a failed update or push is recorded, and the run always continues
//! to the end. The [`pipeline::RunReport`] carries per-stage outcomes so a
//! caller can tell a clean run from a degraded one.
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait and Gemini implementation
//! - [`keywords`] - keyword fetch stage
//! - [`meta`] - HTML meta tag update stage
//! - [`publish`] - git commit/push stage
//! - [`pipeline`] - sequential runner and stage outcomes
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod keywords;
pub mod llm;
pub mod meta;
pub mod pipeline;
pub mod publish;

// Re-export commonly used types
pub use config::{Config, GitConfig, LlmConfig, SiteConfig};
pub use keywords::{FETCH_ERROR_SENTINEL, KeywordFetcher, NO_KEYWORDS_SENTINEL};
pub use llm::{GeminiClient, GenerateReply, LlmClient, LlmError};
pub use meta::{MetaError, MetaUpdater, apply_keywords};
pub use pipeline::{Pipeline, RunReport, StageOutcome};
pub use publish::{GitError, PublishError, Publisher, PublisherSettings};
