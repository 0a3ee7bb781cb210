//! SurfsUp Core Library
//!
//! Shared utilities for the climate API:
//! - Configuration loading (XDG-compliant)
//! - Dataset location helpers

mod config;
pub mod fs;

pub use config::{find_config_file, get_xdg_data_dir, load_config, ConfigSource};
pub use fs::{is_file, resolve_dataset};

/// Application name used for XDG paths
pub const APP_NAME: &str = "surfsup";

/// Default API port
pub const DEFAULT_PORT: u16 = 5000;

/// File name of the bundled Hawaii observation dataset
pub const DATASET_FILE: &str = "hawaii.sqlite";

/// Dataset location relative to the working directory
pub const DEFAULT_DATASET_PATH: &str = "./Resources/hawaii.sqlite";
