//! Diagnostic logging
//!
//! stdout belongs to the menu, so logs go to a file in the platform data
//! directory, and only when `GURT_LOG` holds a filter such as `debug`.

use directories::ProjectDirs;
use std::fs::{self, File, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GURT_LOG";
const LOG_FILE: &str = "gurt.log";

pub fn init() {
    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return;
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false);

    // try_init: a subscriber installed elsewhere wins
    let _ = match log_file() {
        Some(file) => builder.with_writer(Mutex::new(file)).try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
}

fn log_file() -> Option<File> {
    let dirs = ProjectDirs::from("dev", "gurt", "gurt")?;
    let dir = dirs.data_local_dir();
    fs::create_dir_all(dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .ok()
}
