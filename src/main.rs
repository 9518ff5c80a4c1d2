use std::path::PathBuf;

use clap::Parser;
use reflect::reflect_core::config::Config;

#[derive(Parser)]
#[command(name = "reflect", about = "Summarise a JSONL test log into a reflection report")]
struct Cli {
    /// Config file to layer over the defaults (default: ./reflect.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Test log to read (JSON Lines).
    #[arg(long)]
    log: Option<PathBuf>,

    /// Where to write the Markdown report.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Where to write the remediation checklist.
    #[arg(long)]
    checklist: Option<PathBuf>,

    /// Log at debug level to stderr (RUST_LOG takes precedence).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(log) = cli.log {
        config.paths.log = log;
    }
    if let Some(report) = cli.report {
        config.paths.report = report;
    }
    if let Some(checklist) = cli.checklist {
        config.paths.checklist = checklist;
    }
    tracing::debug!(?config, "resolved configuration");

    let outcome = reflect::run(&config, chrono::Utc::now())?;
    let stats = &outcome.statistics;
    println!(
        "{} tests, pass rate {:.2}%, p95 {} ms, {} failures ({} lines skipped)",
        stats.total,
        stats.pass_rate * 100.0,
        stats.p95_duration_ms,
        stats.failure_count(),
        outcome.summary.skipped(),
    );
    Ok(())
}
