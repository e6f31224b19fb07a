//! CLI smoke entry point.
//!
//! # Responsibility
//! - Initialize logging and the note store at their default locations.
//! - Print a deterministic summary for quick local sanity checks.

use quicknote_core::{init_logging, AppConfig, NoteStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = AppConfig::default();
    println!("quicknote_core ping={}", quicknote_core::ping());
    println!("quicknote_core version={}", quicknote_core::core_version());

    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("logging disabled: {err}");
    }

    let store = match NoteStore::initialize(&config.db_path) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("note store unavailable: {err}");
            return ExitCode::FAILURE;
        }
    };

    match store.count() {
        Ok(count) => {
            println!("db_path={}", store.db_path().display());
            println!("notes={count}");
            log::info!("event=cli_summary module=cli status=ok notes={count}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("note count failed: {err}");
            ExitCode::FAILURE
        }
    }
}
