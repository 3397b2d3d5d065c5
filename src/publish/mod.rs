//! Git publish stage
//!
//! Maintains a local clone of the site repository (created on first run,
//! reused after), copies the updated HTML file into it, commits with a
//! timestamped message, and pushes. Credentials come from environment
//! variables resolved when the stage runs, so a missing token is this
//! stage's failure rather than a startup error.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::GitConfig;

mod git;

pub use git::{GitError, run_git, run_git_redacted};

/// Error types for publish operations
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    #[error("HTML path has no file name: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Failed to copy {path}: {source}")]
    Copy { path: PathBuf, source: std::io::Error },

    #[error(transparent)]
    Git(#[from] GitError),
}

/// Resolved inputs for one publish run
#[derive(Debug, Clone)]
pub struct PublisherSettings {
    /// Remote repository URL
    pub repo_url: String,

    /// Access token embedded into the URL; None pushes with the URL as-is
    pub token: Option<String>,

    /// Local clone directory, reused across runs
    pub clone_dir: PathBuf,

    /// Remote name to push to
    pub remote: String,

    /// Committer identity for automated commits
    pub committer_name: String,
    pub committer_email: String,
}

impl PublisherSettings {
    /// Remote URL with the token embedded after the scheme
    ///
    /// Only https URLs with a non-empty token are rewritten; anything else
    /// (file paths in tests, pre-authenticated URLs) passes through.
    pub fn authed_url(&self) -> String {
        match &self.token {
            Some(token) if !token.is_empty() && self.repo_url.starts_with("https://") => {
                self.repo_url.replacen("https://", &format!("https://{}@", token), 1)
            }
            _ => self.repo_url.clone(),
        }
    }
}

enum Source {
    /// Resolve URL and token from the environment at publish time
    Env(GitConfig),

    /// Fixed settings, used by tests
    Fixed(PublisherSettings),
}

/// Git publish stage
pub struct Publisher {
    source: Source,
}

impl Publisher {
    /// Publisher that resolves its remote URL and token from the environment
    pub fn from_config(config: GitConfig) -> Self {
        Self {
            source: Source::Env(config),
        }
    }

    /// Publisher with fixed, pre-resolved settings
    pub fn with_settings(settings: PublisherSettings) -> Self {
        Self {
            source: Source::Fixed(settings),
        }
    }

    fn settings(&self) -> Result<PublisherSettings, PublishError> {
        match &self.source {
            Source::Fixed(settings) => Ok(settings.clone()),
            Source::Env(config) => {
                let repo_url =
                    std::env::var(&config.repo_url_env).map_err(|_| PublishError::MissingEnv(config.repo_url_env.clone()))?;
                let token = std::env::var(&config.token_env).ok();

                Ok(PublisherSettings {
                    repo_url,
                    token,
                    clone_dir: config.clone_dir.clone(),
                    remote: config.remote.clone(),
                    committer_name: config.committer_name.clone(),
                    committer_email: config.committer_email.clone(),
                })
            }
        }
    }

    /// Strip the access token out of a message before it reaches logs
    pub fn redact(&self, message: &str) -> String {
        let token = match &self.source {
            Source::Fixed(settings) => settings.token.clone(),
            Source::Env(config) => std::env::var(&config.token_env).ok(),
        };

        match token {
            Some(token) if !token.is_empty() => message.replace(&token, "***"),
            _ => message.to_string(),
        }
    }

    /// Commit message for a run at the given time
    pub fn commit_message(now: DateTime<Local>) -> String {
        format!("Auto SEO keyword update - {}", now.format("%Y-%m-%d %H:%M:%S"))
    }

    /// Clone if needed, copy the file in, commit, and push
    pub async fn publish(&self, html_path: &Path) -> Result<(), PublishError> {
        debug!(html_path = %html_path.display(), "publish: called");

        let settings = self.settings()?;
        let authed_url = settings.authed_url();
        let clone_dir = &settings.clone_dir;
        // The token must never reach logs or error text, even at DEBUG
        let secret = settings.token.as_deref();

        if !clone_dir.exists() {
            info!("Cloning repository into {}", clone_dir.display());
            let dir = clone_dir.to_string_lossy();
            run_git_redacted(&["clone", &authed_url, &dir], None, secret).await?;
        } else {
            debug!("publish: reusing existing clone");
        }

        let file_name = html_path
            .file_name()
            .ok_or_else(|| PublishError::InvalidPath(html_path.to_path_buf()))?;
        let dest = clone_dir.join(file_name);

        tokio::fs::copy(html_path, &dest).await.map_err(|source| PublishError::Copy {
            path: html_path.to_path_buf(),
            source,
        })?;
        debug!(dest = %dest.display(), "publish: copied file into clone");

        let file_arg = file_name.to_string_lossy();
        run_git(&["add", &file_arg], Some(clone_dir.as_path())).await?;

        let message = Self::commit_message(Local::now());
        let name_arg = format!("user.name={}", settings.committer_name);
        let email_arg = format!("user.email={}", settings.committer_email);
        run_git(
            &["-c", &name_arg, "-c", &email_arg, "commit", "-m", &message],
            Some(clone_dir.as_path()),
        )
        .await?;
        debug!(%message, "publish: committed");

        // The clone may predate credentials, or the token may have rotated
        run_git_redacted(
            &["remote", "set-url", &settings.remote, &authed_url],
            Some(clone_dir.as_path()),
            secret,
        )
        .await?;

        run_git_redacted(&["push", &settings.remote, "HEAD"], Some(clone_dir.as_path()), secret).await?;
        info!("Pushed changes to {}", settings.remote);

        Ok(())
    }
}
