//! Tracing subscriber setup.
//!
//! One-shot commands log to stderr. The TUI owns the terminal, so it logs to a
//! file instead. `RUST_LOG` overrides the default filter in both cases.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter("steamsum=warn"))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn init_file(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter("steamsum=info"))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

/// `<cache dir>/steamsum/steamsum.log`, falling back to the temp dir
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("steamsum")
        .join("steamsum.log")
}
