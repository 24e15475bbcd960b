//! Log output setup.
//!
//! The terminal belongs to the UI, so logs only go to a file, and only when
//! one is requested. Without a log file no subscriber is installed and the
//! `tracing` macros are no-ops.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "breathtui=info";

/// Appends structured logs to `path`, filtered by `RUST_LOG`.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}
