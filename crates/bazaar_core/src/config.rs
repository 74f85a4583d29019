//! Explicit configuration for catalog storage locations.
//!
//! # Responsibility
//! - Carry the database path and image directory as plain values passed
//!   into components at construction.
//!
//! # Invariants
//! - No process-wide storage constants exist in core; tests point this
//!   struct at temporary locations.

use std::path::{Path, PathBuf};

const DEFAULT_DB_FILE_NAME: &str = "bazaar.sqlite3";
const DEFAULT_IMAGE_DIR_NAME: &str = "images";

/// Storage locations for one catalog instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// SQLite database file path.
    pub db_path: PathBuf,
    /// Directory holding content-addressed image assets.
    pub image_dir: PathBuf,
}

impl CatalogConfig {
    /// Creates a config from explicit paths.
    pub fn new(db_path: impl Into<PathBuf>, image_dir: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            image_dir: image_dir.into(),
        }
    }

    /// Places both storage locations under a single root directory.
    pub fn under_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            db_path: root.join(DEFAULT_DB_FILE_NAME),
            image_dir: root.join(DEFAULT_IMAGE_DIR_NAME),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR_NAME),
        }
    }
}
