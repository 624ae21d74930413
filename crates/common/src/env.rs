//! Environment file helpers
//!
//! Loads mode-specific `.env.<mode>` files before the configuration is resolved.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Mode used to pick the env file when neither `APP_ENV` nor `NODE_ENV` is set.
pub const DEFAULT_MODE: &str = "development";

/// Mode selector from the real process environment, read before any `.env` file loads.
pub fn mode_hint() -> String {
    std::env::var("APP_ENV")
        .or_else(|_| std::env::var("NODE_ENV"))
        .ok()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODE.to_string())
}

/// Candidate env files for a mode, most specific first.
pub fn env_files_for(dir: &Path, mode: &str) -> Vec<PathBuf> {
    vec![dir.join(format!(".env.{}", mode.trim().to_ascii_lowercase())), dir.join(".env")]
}

/// Load `.env.<mode>` then `.env` from `dir`.
///
/// Variables already present in the process environment are never overridden,
/// so the mode file wins over the generic one. Missing files are skipped.
/// Returns the files that were actually loaded.
pub fn load_env_files_from(dir: &Path, mode: &str) -> Vec<PathBuf> {
    let mut loaded = Vec::new();
    for path in env_files_for(dir, mode) {
        match dotenvy::from_path(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "env file loaded");
                loaded.push(path);
            }
            Err(e) if e.not_found() => {}
            Err(e) => debug!(path = %path.display(), error = %e, "env file skipped"),
        }
    }
    loaded
}

/// Load env files for the current mode hint from the working directory.
pub fn load_env_files() -> Vec<PathBuf> {
    load_env_files_from(Path::new("."), &mode_hint())
}
