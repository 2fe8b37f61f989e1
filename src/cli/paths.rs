//! Database path resolution.
//!
//! Order: explicit `--db` flag, then `PROJECTS_DB`, then the XDG data
//! directory.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the default database location.
pub const DB_ENV_VAR: &str = "PROJECTS_DB";

const APP_DIR: &str = "projects";
const DB_FILE_NAME: &str = "projects.db";

/// XDG-compliant data directory: `$XDG_DATA_HOME/projects/`, falling back to
/// `~/.local/share/projects/`, or `./projects/` when neither is set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|_| PathBuf::from("."));

    data_home.join(APP_DIR)
}

/// Default database file: `PROJECTS_DB` if set, else `<data dir>/projects.db`.
pub fn get_db_path() -> PathBuf {
    env::var_os(DB_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| get_data_dir().join(DB_FILE_NAME))
}

/// Pick the database file, preferring an explicit path.
pub fn resolve_db_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(get_db_path)
}
