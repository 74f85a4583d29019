//! Category domain model.
//!
//! # Invariants
//! - `name` is unique across all categories (storage-enforced).
//! - Categories are created lazily on first use and never mutated.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned identifier for a category row.
pub type CategoryId = i64;

/// Validation failures for category write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryValidationError {
    /// Category name is empty or whitespace-only.
    EmptyName,
}

impl Display for CategoryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "category name must not be empty"),
        }
    }
}

impl Error for CategoryValidationError {}

/// A catalog category: a stable numeric id for a human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Storage-assigned category id.
    pub id: CategoryId,
    /// Unique display name.
    pub name: String,
}
