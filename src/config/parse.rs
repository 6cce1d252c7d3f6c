//! Script file discovery and loading

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Script file names to search for, in priority order
const SCRIPT_FILE_NAMES: &[&str] = &["gMake", "gmake", "build.gmake"];

/// Find the script file by searching current and parent directories
pub fn find_script_file() -> ConfigResult<PathBuf> {
    find_script_file_from(env::current_dir().map_err(|e| {
        ConfigError::Invalid(format!("Failed to get current directory: {}", e))
    })?)
}

/// Find the script file starting from a specific directory
pub fn find_script_file_from(start_dir: PathBuf) -> ConfigResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        // A case-insensitive filesystem reports both `gMake` and `gmake`;
        // only list entries that really exist under that name.
        let entries: Vec<String> = fs::read_dir(&current_dir)
            .map(|dir| {
                dir.filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();

        for file_name in SCRIPT_FILE_NAMES {
            let script_path = current_dir.join(file_name);
            searched_paths.push(script_path.display().to_string());

            if entries.iter().any(|e| e == file_name) && script_path.is_file() {
                return Ok(script_path);
            }
        }

        // Try parent directory
        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                // Reached root without finding a script
                return Err(ConfigError::NotFound(searched_paths.join(", ")));
            }
        }
    }
}

/// Read a script file into a string
pub fn read_script(path: &Path) -> ConfigResult<String> {
    fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
