//! Filesystem utilities

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::{get_xdg_data_dir, DATASET_FILE};

/// Check if a path is a regular file
pub fn is_file(path: &str) -> bool {
    Path::new(path).is_file()
}

/// Pick the dataset file to serve.
///
/// The configured path wins when it points at a file. Otherwise the XDG data
/// directory copy is used if present, and the configured path is returned
/// unchanged when neither exists so the caller reports the path it was given.
pub fn resolve_dataset(configured: &str) -> PathBuf {
    if is_file(configured) {
        return PathBuf::from(configured);
    }

    let xdg = get_xdg_data_dir().join(DATASET_FILE);
    if xdg.is_file() {
        debug!("Using dataset from data dir: {}", xdg.display());
        return xdg;
    }

    warn!("Dataset not found at {} or {}", configured, xdg.display());
    PathBuf::from(configured)
}
