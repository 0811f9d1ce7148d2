//! Configuration path utilities for name-sorter.
//!
//! This module provides the default file locations and the functions that
//! resolve user supplied paths, expanding `~` and anchoring bare file names
//! to the directory of the running executable.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default path for the optional settings file
const DEFAULT_SETTINGS_PATH: &str = "~/.name-sorter/settings.yml";

/// Default file name for the sorted output
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "sorted-names-list.txt";

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use name_sorter_core::config::get_settings_path;
///
/// let default_path = get_settings_path(&None);
/// assert!(default_path.ends_with("settings.yml"));
///
/// let custom_path = get_settings_path(&Some("/path/to/settings.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/settings.yml");
/// ```
pub fn get_settings_path(settings_path_arg: &Option<String>) -> String {
    let settings_path = match settings_path_arg {
        Some(settings_path) => settings_path,
        None => DEFAULT_SETTINGS_PATH,
    };

    shellexpand::tilde(settings_path).to_string()
}

/// Returns the directory containing the running executable.
///
/// # Errors
///
/// Returns [`Error::ExecutableDirectory`] if the executable path cannot be
/// determined or has no parent directory.
pub fn get_executable_directory() -> Result<PathBuf> {
    let executable = env::current_exe().map_err(Error::ExecutableDirectory)?;

    executable.parent().map(Path::to_path_buf).ok_or_else(|| {
        Error::ExecutableDirectory(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("`{}` has no parent directory", executable.display()),
        ))
    })
}

/// Resolves a file path given on the command line.
///
/// `~` is expanded first. A path made only of a file name, with no directory
/// component, is placed in `base_directory`; any other path is returned as is.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use name_sorter_core::config::resolve_file_path;
///
/// let base = Path::new("/opt/name-sorter");
/// assert_eq!(
///     resolve_file_path("names.txt", base),
///     PathBuf::from("/opt/name-sorter/names.txt")
/// );
/// assert_eq!(
///     resolve_file_path("./names.txt", base),
///     PathBuf::from("./names.txt")
/// );
/// ```
pub fn resolve_file_path(file_path: &str, base_directory: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(file_path).to_string();
    let path = PathBuf::from(&expanded);

    let has_directory = path
        .parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty());

    if has_directory || path.has_root() {
        path
    } else {
        base_directory.join(path)
    }
}
