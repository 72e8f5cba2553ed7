//! File-backed tracing setup.
//!
//! The terminal is in raw mode for the whole session, so log output goes to
//! a file instead of stdout/stderr. Logging stays off unless the config
//! names a path.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub fn init(log_path: Option<&Path>) -> io::Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}
