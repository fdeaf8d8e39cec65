//! Path utilities: expand ~ in user-supplied paths.

use crate::errors::AppResult;
use std::env;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Turn a `--db` argument into an absolute path.
///
/// `~/` is expanded; any other relative path is taken from the current
/// working directory, for every command alike.
pub fn resolve_db_path(path: &str) -> AppResult<PathBuf> {
    let p = expand_tilde(path);
    if p.is_absolute() {
        Ok(p)
    } else {
        Ok(env::current_dir()?.join(p))
    }
}
