//! seoupdater configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main seoupdater configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider configuration
    pub llm: LlmConfig,

    /// Site configuration (HTML file and topic)
    pub site: SiteConfig,

    /// Git publishing configuration
    pub git: GitConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .seoup.yml
        let local_config = PathBuf::from(".seoup.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/seoup/seoup.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("seoup").join("seoup.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// LLM provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Path to the HTML file to update
    #[serde(rename = "html-path")]
    pub html_path: PathBuf,

    /// Topic to fetch trending keywords for
    pub topic: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            html_path: PathBuf::from("index.html"),
            topic: "E-commerce SEO trends".to_string(),
        }
    }
}

/// Git publishing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Environment variable containing the remote repository URL
    #[serde(rename = "repo-url-env")]
    pub repo_url_env: String,

    /// Environment variable containing the access token
    #[serde(rename = "token-env")]
    pub token_env: String,

    /// Directory for the local clone, reused across runs
    #[serde(rename = "clone-dir")]
    pub clone_dir: PathBuf,

    /// Remote name to push to
    pub remote: String,

    /// Committer name used for automated commits
    #[serde(rename = "committer-name")]
    pub committer_name: String,

    /// Committer email used for automated commits
    #[serde(rename = "committer-email")]
    pub committer_email: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            repo_url_env: "GITHUB_REPO".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            clone_dir: PathBuf::from("repo"),
            remote: "origin".to_string(),
            committer_name: "seoup".to_string(),
            committer_email: "seoup@users.noreply.github.com".to_string(),
        }
    }
}
