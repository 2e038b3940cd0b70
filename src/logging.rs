use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

/// Default log location inside the platform data directory.
pub fn default_log_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("", "", "emoquiz") {
        dirs.data_local_dir().join("emoquiz.log")
    } else {
        std::env::temp_dir().join("emoquiz.log")
    }
}

/// Install a file-backed subscriber. The terminal belongs to the TUI, so
/// nothing is ever written to stdout or stderr from here.
pub fn init(path: Option<&str>) -> Result<PathBuf, String> {
    let path = path.map(PathBuf::from).unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Cannot create log dir {}: {}", parent.display(), e))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| format!("Cannot open log file {}: {}", path.display(), e))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| format!("Cannot install logger: {}", e))?;

    Ok(path)
}
