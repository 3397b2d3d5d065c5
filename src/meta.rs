//! HTML meta tag update stage
//!
//! Textual substitution only - the document is never parsed. An existing
//! `<meta name="keywords" ...>` tag is replaced in place (first occurrence,
//! case-insensitive); otherwise the tag is inserted right after the first
//! `<head>`. Keyword content is inserted verbatim, without escaping.

use regex::{NoExpand, Regex};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

/// Error types for HTML update operations
#[derive(Debug, Error)]
pub enum MetaError {
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
}

fn keywords_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)<meta name="keywords".*?>"#).expect("static pattern"))
}

/// Rewrite the keywords meta tag in an HTML document
///
/// Replaces the first existing keywords tag, or inserts one after the first
/// `<head>` when none exists. Only the first match is touched, so applying
/// the same keywords twice is idempotent. A document with neither tag nor
/// `<head>` comes back unchanged.
pub fn apply_keywords(html: &str, keywords: &str) -> String {
    let new_meta = format!(r#"<meta name="keywords" content="{}">"#, keywords);

    if keywords_tag_re().is_match(html) {
        debug!("apply_keywords: replacing existing tag");
        keywords_tag_re().replacen(html, 1, NoExpand(&new_meta)).into_owned()
    } else {
        debug!("apply_keywords: inserting after <head>");
        html.replacen("<head>", &format!("<head>\n    {}", new_meta), 1)
    }
}

/// File-backed updater for a fixed HTML path
pub struct MetaUpdater {
    path: PathBuf,
}

impl MetaUpdater {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the document this updater rewrites
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, apply the keywords, write it back in full
    pub async fn update(&self, keywords: &str) -> Result<(), MetaError> {
        debug!(path = %self.path.display(), "update: called");

        let html = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| MetaError::Read {
                path: self.path.clone(),
                source,
            })?;

        let updated = apply_keywords(&html, keywords);

        tokio::fs::write(&self.path, updated)
            .await
            .map_err(|source| MetaError::Write {
                path: self.path.clone(),
                source,
            })?;

        debug!("update: document written");
        Ok(())
    }
}
