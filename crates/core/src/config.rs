//! Where `surfsup.toml` is looked up and how it is read.
//!
//! The binary layers its settings as CLI flag, then `SURFSUP_*` environment
//! variable, then this file, then built-in defaults. This module only covers
//! the file step.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use serde::de::DeserializeOwned;

use crate::APP_NAME;

/// Describes where a configuration was loaded from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Path named by the `--config` flag or the config env var
    Explicit(PathBuf),
    /// `surfsup.toml` next to the process
    CurrentDir(PathBuf),
    /// `$XDG_CONFIG_HOME/surfsup/`
    XdgConfig(PathBuf),
    /// `/etc/surfsup/`
    System(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ConfigSource::Explicit(p)
            | ConfigSource::CurrentDir(p)
            | ConfigSource::XdgConfig(p)
            | ConfigSource::System(p) => Some(p),
            ConfigSource::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(p) => write!(f, "{}", p.display()),
            None => f.write_str("(defaults)"),
        }
    }
}

/// Locations checked for `filename`, most specific first.
fn candidates(explicit: Option<PathBuf>, filename: &str, config_home: &Path) -> Vec<ConfigSource> {
    let mut found = Vec::with_capacity(4);
    if let Some(path) = explicit {
        found.push(ConfigSource::Explicit(path));
    }
    found.push(ConfigSource::CurrentDir(PathBuf::from(filename)));
    found.push(ConfigSource::XdgConfig(config_home.join(APP_NAME).join(filename)));
    found.push(ConfigSource::System(
        Path::new("/etc").join(APP_NAME).join(filename),
    ));
    found
}

/// First existing config file among the env var's path, the working
/// directory, the XDG config home and `/etc/surfsup`. Falls back to
/// [`ConfigSource::Defaults`].
pub fn find_config_file(env_var: &str, filename: &str) -> ConfigSource {
    let explicit = env::var_os(env_var).map(PathBuf::from);
    let config_home = xdg_home("XDG_CONFIG_HOME", ".config");

    candidates(explicit, filename, &config_home)
        .into_iter()
        .find(|source| source.path().is_some_and(|p| p.exists()))
        .unwrap_or_else(|| {
            debug!("no {} found, using built-in defaults", filename);
            ConfigSource::Defaults
        })
}

/// `$var`, else `$HOME/<home_relative>`, else `<home_relative>` under the
/// working directory.
fn xdg_home(var: &str, home_relative: &str) -> PathBuf {
    env::var_os(var)
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(home_relative)))
        .unwrap_or_else(|| PathBuf::from(home_relative))
}

/// Directory a copy of the dataset may live in when it is not shipped next to
/// the binary.
pub fn get_xdg_data_dir() -> PathBuf {
    xdg_home("XDG_DATA_HOME", ".local/share").join(APP_NAME)
}

/// Parse the TOML at `source`, or `T::default()` for [`ConfigSource::Defaults`].
pub fn load_config<T: DeserializeOwned + Default>(source: &ConfigSource) -> anyhow::Result<T> {
    let Some(path) = source.path() else {
        return Ok(T::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing config file {}", path.display()))
}
