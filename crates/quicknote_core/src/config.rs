//! Application paths and logging defaults.
//!
//! # Responsibility
//! - Resolve where the notes database and rolling logs live.
//! - Provide the build-mode dependent default log level.
//!
//! # Invariants
//! - Configuration is derived from the platform data directory only; no
//!   environment variables or command-line flags are read.

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "quicknote";
const DB_FILE_NAME: &str = "notes.db";
const LOG_DIR_NAME: &str = "logs";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl AppConfig {
    /// Lays out the database and logs under `root`.
    pub fn in_dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            db_path: root.join(DB_FILE_NAME),
            log_dir: root.join(LOG_DIR_NAME),
            log_level: default_log_level(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::in_dir(default_app_dir())
    }
}

/// Per-user application directory, falling back to the temp dir.
pub fn default_app_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}
