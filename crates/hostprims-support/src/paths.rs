//! Application config directory resolution.
//!
//! Each [`ConfigBase`] variant resolves a per-OS base directory; the app
//! name is joined onto it and the result is expanded to an absolute path
//! (`~` against the home directory, relative paths against the current
//! directory).

use std::env;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Base
// ============================================================================

/// Per-OS base directory for application-specific data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigBase {
    /// Windows: `LOCALAPPDATA`, falling back to the legacy
    /// `<USERPROFILE>/Local Settings/Application Data`.
    LocalAppData,
    /// MacOS: `~/Library/Application Support`.
    MacLibrary,
    /// Other Unix: `XDG_CONFIG_HOME`, falling back to `~/.config`.
    Xdg,
}

/// Resolve the absolute config directory for an application name.
pub fn app_config_path(base: ConfigBase, app_name: &str) -> PathBuf {
    expand(base_dir(base).join(app_name))
}

fn base_dir(base: ConfigBase) -> PathBuf {
    match base {
        ConfigBase::LocalAppData => {
            local_app_data_dir(env_value("LOCALAPPDATA"), env_value("USERPROFILE"))
        }
        ConfigBase::MacLibrary => PathBuf::from("~/Library/Application Support"),
        ConfigBase::Xdg => xdg_config_dir(env_value("XDG_CONFIG_HOME")),
    }
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

pub(crate) fn local_app_data_dir(local: Option<String>, profile: Option<String>) -> PathBuf {
    match local {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(&profile.unwrap_or_default())
            .join("Local Settings")
            .join("Application Data"),
    }
}

pub(crate) fn xdg_config_dir(xdg: Option<String>) -> PathBuf {
    match xdg {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from("~/.config"),
    }
}

// ============================================================================
// Path Expansion
// ============================================================================

/// Expand a path to an absolute one: `~` against the home directory,
/// relative remainders against the current directory.
pub(crate) fn expand(path: PathBuf) -> PathBuf {
    let path = match home_dir() {
        Some(home) => expand_tilde(&path, &home),
        None => path,
    };
    if path.is_absolute() {
        path
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path,
        }
    }
}

fn expand_tilde(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

fn home_dir() -> Option<PathBuf> {
    env_value("HOME")
        .or_else(|| env_value("USERPROFILE"))
        .map(PathBuf::from)
}

// ============================================================================
// Tests
// ============================================================================
