//! Item domain model.
//!
//! # Responsibility
//! - Define the write-side draft and the joined read model for listings.
//! - Provide validation invoked by every persistence write path.
//!
//! # Invariants
//! - `id` is assigned by storage and is monotonic per catalog.
//! - `name` is never empty in persisted rows.
//! - `image_name` is a bare asset file name, never a path.

use crate::model::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned identifier for a persisted item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = i64;

/// Validation failures for item write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Item name is empty or whitespace-only.
    EmptyName,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "item name must not be empty"),
        }
    }
}

impl Error for ItemValidationError {}

/// Write model for a new listing.
///
/// Drafts carry no `id`; identity is assigned by the repository on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    /// Display name of the listing. Duplicates are allowed; each draft is
    /// a distinct listing.
    pub name: String,
    /// Resolved category row id (see `CategoryRepository`).
    pub category_id: CategoryId,
    /// Bare asset file name referencing the stored image.
    pub image_name: String,
}

impl ItemDraft {
    /// Creates a draft for the given name, category and image reference.
    pub fn new(
        name: impl Into<String>,
        category_id: CategoryId,
        image_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category_id,
            image_name: image_name.into(),
        }
    }

    /// Validates draft fields before persistence.
    ///
    /// # Contract
    /// - Called by repository write paths before any SQL mutation.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        Ok(())
    }
}

/// Read model for every listing query: the item joined with its category's
/// display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Storage-assigned item id.
    pub id: ItemId,
    /// Listing display name.
    pub name: String,
    /// Serialized as `category` to match the external wire shape.
    #[serde(rename = "category")]
    pub category_name: String,
    /// Bare asset file name for the listing image.
    pub image_name: String,
}
