//! Azure CLI discovery

use std::env;
use std::path::PathBuf;

/// Base name of the Azure CLI; `which` applies `PATHEXT` on Windows
const CLI_NAME: &str = "az";

/// Find the Azure CLI executable on a `PATH`-style search path
///
/// Returns the first executable match in search order, or `None` when the
/// path is unset or no directory holds a runnable CLI. Empty entries are
/// skipped rather than treated as the working directory.
pub fn find_azure_cli(search_path: Option<&str>) -> Option<PathBuf> {
    let dirs = env::split_paths(search_path?).filter(|dir| !dir.as_os_str().is_empty());
    let search_path = env::join_paths(dirs).ok()?;
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    which::which_in(CLI_NAME, Some(search_path), cwd).ok()
}
