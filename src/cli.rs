//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// seoupdater - scheduled SEO keyword updater
#[derive(Parser)]
#[command(
    name = "seoup",
    about = "Fetch trending SEO keywords, update HTML metadata, push to git",
    version,
    after_help = "Environment: GEMINI_API_KEY, GITHUB_REPO, GITHUB_TOKEN (names configurable)"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Run one update cycle: fetch keywords, update HTML, commit and push
    Run {
        /// Override the configured topic
        #[arg(short, long)]
        topic: Option<String>,

        /// Fetch and update only; skip the git publish stage
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the resolved configuration as YAML
    Config,
}
