use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "STAFFSEED_LOG";
const DEFAULT_DIRECTIVES: &str = "info";

/// `STAFFSEED_LOG` directives, falling back to `info` when unset or unparsable.
fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

fn file_subscriber(file: File, directives: Option<&str>) -> impl Subscriber + Send + Sync + 'static {
    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(filter(directives))
        .with(layer)
}

/// Send tracing events to an append-only log file. Console output stays on stdout.
pub fn init(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let directives = std::env::var(LOG_ENV).ok();
    file_subscriber(file, directives.as_deref())
        .try_init()
        .context("failed to install log subscriber")?;

    tracing::debug!(path = %log_path.display(), "logging initialized");
    Ok(())
}
