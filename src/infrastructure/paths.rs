//! Path utilities for configuration and catalog snapshot locations.
//!
//! Configuration follows the XDG base directory layout: `$XDG_CONFIG_HOME/dimoss`
//! when the variable is set, otherwise `~/.config/dimoss`.

use std::env;
use std::path::PathBuf;

/// Directory name under the user's configuration root.
const APP_DIR: &str = "dimoss";

/// File name of the configuration file.
const CONFIG_FILE: &str = "config.toml";

/// Returns the configuration directory, or `None` if neither
/// `XDG_CONFIG_HOME` nor `HOME` is set.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    resolve_config_dir(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok())
}

/// Returns the path of the default configuration file.
///
/// The file does not need to exist; callers treat a missing default file as
/// "use built-in defaults".
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

fn resolve_config_dir(xdg_config_home: Option<String>, home: Option<String>) -> Option<PathBuf> {
    xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.filter(|dir| !dir.is_empty()).map(|home| PathBuf::from(home).join(".config")))
        .map(|root| root.join(APP_DIR))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use dimoss_catalog::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/catalog.json"), "relative/catalog.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_with_home(path, env::var("HOME").ok().as_deref())
}

fn expand_with_home(path: &str, home: Option<&str>) -> String {
    let Some(home) = home else {
        return path.to_string();
    };

    if path == "~" {
        home.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}
