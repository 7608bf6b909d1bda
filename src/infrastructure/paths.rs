//! Filesystem location utilities.
//!
//! This module resolves where configuration and data live on disk, following
//! the XDG base directory convention with `$HOME` fallbacks. It also handles
//! tilde expansion for user-supplied paths.

use std::env;
use std::path::{Path, PathBuf};

/// Returns the path of the configuration file.
///
/// Resolves to `$XDG_CONFIG_HOME/shoplist/config.toml` when
/// `XDG_CONFIG_HOME` is set and non-empty, and to
/// `~/.config/shoplist/config.toml` otherwise.
///
/// The file is not required to exist; callers fall back to defaults when it
/// is missing.
#[must_use]
pub fn config_file() -> PathBuf {
    base_dir("XDG_CONFIG_HOME", ".config")
        .join("shoplist")
        .join("config.toml")
}

/// Returns the data directory used for log files.
///
/// Resolves to `$XDG_DATA_HOME/shoplist` when `XDG_DATA_HOME` is set and
/// non-empty, and to `~/.local/share/shoplist` otherwise. The directory is
/// created on demand by the log writer.
#[must_use]
pub fn data_dir() -> PathBuf {
    base_dir("XDG_DATA_HOME", ".local/share").join("shoplist")
}

/// Resolves an XDG base directory with a `$HOME`-relative fallback.
///
/// An empty or whitespace-only XDG variable counts as unset. When `HOME` is
/// also unset, the fallback is resolved against the current directory.
fn base_dir(xdg_var: &str, home_suffix: &str) -> PathBuf {
    if let Ok(dir) = env::var(xdg_var) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(home_suffix)
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a tilde prefix pass through unchanged, as does everything
/// when `HOME` is unset.
///
/// # Examples
///
/// ```
/// use shoplist::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/path"), "relative/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Ok(home) = env::var("HOME") else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        return format!("{home}/{rest}");
    }
    if path == "~" {
        return home;
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    struct EnvGuard {
        key: &'static str,
        prior: Option<OsString>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let prior = env::var_os(key);
            env::set_var(key, value);
            Self { key, prior }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.prior {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }

    #[test]
    fn paths_without_tilde_pass_through() {
        assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
        assert_eq!(expand_tilde("relative/path"), "relative/path");
    }

    // Environment variables are process-global, so everything env-dependent
    // lives in one test to keep parallel test threads out of each other's
    // way.
    #[test]
    fn xdg_variables_and_tilde_resolve_against_the_environment() {
        let _home = EnvGuard::set("HOME", "/home/shopper");
        let _config = EnvGuard::set("XDG_CONFIG_HOME", "/custom/config");
        let _data = EnvGuard::set("XDG_DATA_HOME", "");

        assert_eq!(
            config_file(),
            PathBuf::from("/custom/config/shoplist/config.toml")
        );
        assert_eq!(
            data_dir(),
            PathBuf::from("/home/shopper/.local/share/shoplist")
        );
        assert_eq!(expand_tilde("~/lists"), "/home/shopper/lists");
        assert_eq!(expand_tilde("~"), "/home/shopper");
    }
}
