//! seoup - scheduled SEO keyword updater
//!
//! CLI entry point. One invocation runs the fetch -> update -> publish
//! pipeline once; an external scheduler (cron, Render, ...) handles timing.

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use seoupdater::cli::{Cli, Command};
use seoupdater::config::Config;
use seoupdater::keywords::KeywordFetcher;
use seoupdater::llm::create_client;
use seoupdater::meta::MetaUpdater;
use seoupdater::pipeline::{Pipeline, RunReport, StageOutcome};
use seoupdater::publish::Publisher;

fn setup_logging(verbose: bool) {
    // This is a cron-driven one-shot tool: logs go straight to stdout
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!(
        "seoup loaded config: model={}, html={}, topic={}",
        config.llm.model,
        config.site.html_path.display(),
        config.site.topic
    );

    match cli.command {
        Some(Command::Config) => cmd_config(&config),
        Some(Command::Run { topic, dry_run }) => cmd_run(&config, topic, dry_run).await,
        None => cmd_run(&config, None, false).await,
    }
}

/// Print the resolved configuration as YAML
fn cmd_config(config: &Config) -> Result<()> {
    let yaml = serde_yaml::to_string(config).context("Failed to serialize configuration")?;
    print!("{}", yaml);
    Ok(())
}

/// Run one update cycle
///
/// Exits 0 regardless of stage outcomes: a degraded or failed stage is
/// reported in the summary, not via the exit status, so a scheduler never
/// sees a run as crashed.
async fn cmd_run(config: &Config, topic: Option<String>, dry_run: bool) -> Result<()> {
    let topic = topic.unwrap_or_else(|| config.site.topic.clone());

    let llm = create_client(&config.llm).context("Failed to create LLM client")?;
    let fetcher = KeywordFetcher::new(llm);
    let updater = MetaUpdater::new(&config.site.html_path);
    let publisher = if dry_run {
        None
    } else {
        Some(Publisher::from_config(config.git.clone()))
    };

    let pipeline = Pipeline::new(fetcher, updater, publisher, topic);

    println!("=== Running SEO update ===");
    let report = pipeline.run().await;
    print_report(&report);
    println!("=== Done ===");

    Ok(())
}

fn print_report(report: &RunReport) {
    print_stage("fetch", &report.fetch);
    print_stage("update", &report.update);
    print_stage("publish", &report.publish);

    println!("[INFO] keywords: {}", report.keywords);
    if report.succeeded() {
        println!("[SUCCESS] run completed");
    } else {
        println!("[ERROR] run completed with degraded or failed stages");
    }
}

fn print_stage(name: &str, outcome: &StageOutcome) {
    match outcome {
        StageOutcome::Success => println!("[INFO] {}: success", name),
        StageOutcome::Skipped => println!("[INFO] {}: skipped", name),
        other => println!("[ERROR] {}: {}", name, other),
    }
}
