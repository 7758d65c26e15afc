// src/config/loader.rs
use crate::config::Config;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILE_NAME: &str = ".glyphs.toml";

/// Finds the nearest `.glyphs.toml`, starting from the given directory and
/// checking parent directories until a file is found.
///
/// # Arguments
///
/// * `dir` - The starting directory to search
///
/// # Returns
///
/// * `Some(PathBuf)` for the first config file found, `None` otherwise
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    dir.ancestors().find_map(|current_dir| {
        let config_file = current_dir.join(CONFIG_FILE_NAME);
        if config_file.is_file() {
            return Some(config_file);
        }
        debug!(dir = %current_dir.display(), "No config file here");
        None
    })
}

/// Loads settings from an explicit path, or from the nearest config file
/// above `dir`, falling back to defaults when there is none.
///
/// # Errors
///
/// This function may return an error if:
/// * The explicit path does not exist or cannot be read
/// * A config file is found but contains invalid TOML or unknown keys
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Config> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(dir),
    };

    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading config");
            Config::load(&path)
        }
        None => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}
