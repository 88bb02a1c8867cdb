use std::{env, fs, io, path::PathBuf};

use directories::ProjectDirs;
use tempfile::TempDir;
use tracing::debug;

/// Resolve the application data directory, creating it if needed.
///
/// With `ephemeral` set, a fresh temporary directory is created under
/// `data_dir` (or the operating system temp directory) and survives only as
/// long as the operating system keeps it. Otherwise `data_dir` is used when
/// provided, falling back to the operating system's local data directory:
///
/// - Unix-like: `$HOME/.local/share/{app_name}`
/// - macOS: `~/Library/Application Support/{app_name}`
/// - Windows: `C:\Users\Username\AppData\Local\{app_name}`
pub fn setup_data_dir(
    app_name: &str,
    data_dir: Option<PathBuf>,
    ephemeral: bool,
) -> io::Result<PathBuf> {
    if ephemeral {
        let root = data_dir.unwrap_or_else(env::temp_dir).join(app_name);
        fs::create_dir_all(&root)?;
        let temp_dir = TempDir::new_in(&root)?;
        debug!("Created ephemeral data dir: {:?}", temp_dir.path());
        return Ok(temp_dir.into_path());
    }

    let data_dir = match data_dir {
        Some(data_dir) => data_dir,
        None => ProjectDirs::from("", "", app_name)
            .map(|dirs| dirs.data_local_dir().to_path_buf())
            .ok_or_else(|| io::Error::other("no valid home directory"))?,
    };
    fs::create_dir_all(&data_dir)?;
    Ok(data_dir)
}
