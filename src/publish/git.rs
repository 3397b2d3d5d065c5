//! Thin wrapper over the git CLI

use std::path::Path;
use std::process::Output;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Error types for git operations
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Failed to run git: {0}")]
    Spawn(String),

    #[error("git {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
}

/// Run one git command, failing on a nonzero exit status
///
/// `cwd` is the working directory for the command; pass the clone directory
/// for in-repo operations.
pub async fn run_git(args: &[&str], cwd: Option<&Path>) -> Result<Output, GitError> {
    run_git_redacted(args, cwd, None).await
}

/// Like [`run_git`], with a secret scrubbed from logs and error text
///
/// The raw args still reach the git invocation; the secret is replaced with
/// `***` in the debug line, the error's command text, and the captured
/// stderr (git echoes the remote URL in clone and push failures).
pub async fn run_git_redacted(args: &[&str], cwd: Option<&Path>, secret: Option<&str>) -> Result<Output, GitError> {
    let scrub = |text: &str| match secret {
        Some(secret) if !secret.is_empty() => text.replace(secret, "***"),
        _ => text.to_string(),
    };
    let display_args: Vec<String> = args.iter().map(|a| scrub(a)).collect();
    debug!(args = ?display_args, ?cwd, "run_git: called");

    let mut command = Command::new("git");
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output = command.output().await.map_err(|e| GitError::Spawn(scrub(&e.to_string())))?;

    if !output.status.success() {
        let stderr = scrub(&String::from_utf8_lossy(&output.stderr));
        debug!(args = ?display_args, "run_git: command failed");
        return Err(GitError::CommandFailed {
            command: display_args.join(" "),
            stderr,
        });
    }

    debug!("run_git: command succeeded");
    Ok(output)
}
