//! Content-addressed image store.
//!
//! # Responsibility
//! - Hash inbound image bytes and persist them under the digest-derived name.
//! - Resolve stored references back to bytes, falling back to the default
//!   asset when the named file is absent.
//!
//! # Invariants
//! - Canonical asset name is `hex(sha256(bytes)) + ".jpg"`.
//! - Identical bytes always map to the same name; re-storing is a no-op
//!   overwrite of identical content.
//! - References are bare file names; path separators are rejected before
//!   touching the filesystem.

use log::{debug, info};
use sha2::{Digest, Sha256};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File extension every stored asset carries.
pub const ASSET_EXTENSION: &str = ".jpg";

/// Well-known asset served when a referenced file is missing.
pub const DEFAULT_ASSET_NAME: &str = "default.jpg";

/// String handle returned by [`AssetStore::store`] and accepted by
/// [`AssetStore::resolve`].
pub type AssetRef = String;

pub type AssetResult<T> = Result<T, AssetError>;

/// Asset store error for reference validation and filesystem faults.
#[derive(Debug)]
pub enum AssetError {
    /// Reference is not a bare `.jpg` file name. Caller fault, not a
    /// storage fault.
    InvalidReference { name: String },
    /// Underlying filesystem operation failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for AssetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidReference { name } => {
                write!(f, "invalid asset reference `{name}`: expected a bare file name ending in {ASSET_EXTENSION}")
            }
            Self::Io { path, source } => {
                write!(f, "asset io failure at `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for AssetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidReference { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Filesystem-backed content-addressed store for listing images.
pub struct AssetStore {
    image_dir: PathBuf,
}

impl AssetStore {
    /// Creates a store rooted at `image_dir`, creating the directory when
    /// absent.
    pub fn new(image_dir: impl Into<PathBuf>) -> AssetResult<Self> {
        let image_dir = image_dir.into();
        fs::create_dir_all(&image_dir).map_err(|source| AssetError::Io {
            path: image_dir.clone(),
            source,
        })?;
        Ok(Self { image_dir })
    }

    /// Returns the directory assets are stored under.
    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// Stores `content` under its canonical hash-derived name and returns
    /// that name.
    ///
    /// # Contract
    /// - Identical bytes yield the same reference on every call.
    /// - Re-storing existing content overwrites the file with identical
    ///   bytes, which is indistinguishable from skipping the write.
    pub fn store(&self, content: &[u8]) -> AssetResult<AssetRef> {
        let name = canonical_asset_name(content);
        let path = self.image_dir.join(&name);

        fs::write(&path, content).map_err(|source| AssetError::Io { path, source })?;

        info!(
            "event=asset_store module=assets status=ok name={} bytes={}",
            name,
            content.len()
        );
        Ok(name)
    }

    /// Resolves a reference to the stored bytes.
    ///
    /// Missing assets degrade to [`DEFAULT_ASSET_NAME`]; the read path only
    /// fails on malformed references or genuine I/O faults (including a
    /// missing default asset).
    pub fn resolve(&self, name: &str) -> AssetResult<Vec<u8>> {
        validate_reference(name)?;

        let path = self.image_dir.join(name);
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    "event=asset_resolve module=assets status=fallback name={}",
                    name
                );
                let default_path = self.image_dir.join(DEFAULT_ASSET_NAME);
                fs::read(&default_path).map_err(|source| AssetError::Io {
                    path: default_path,
                    source,
                })
            }
            Err(source) => Err(AssetError::Io { path, source }),
        }
    }
}

/// Derives the canonical name for the given bytes.
pub fn canonical_asset_name(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}{ASSET_EXTENSION}", hasher.finalize())
}

fn validate_reference(name: &str) -> AssetResult<()> {
    let well_formed = name.len() > ASSET_EXTENSION.len()
        && name.ends_with(ASSET_EXTENSION)
        && !name.contains(['/', '\\'])
        && !name.contains("..");
    if well_formed {
        Ok(())
    } else {
        Err(AssetError::InvalidReference {
            name: name.to_string(),
        })
    }
}
