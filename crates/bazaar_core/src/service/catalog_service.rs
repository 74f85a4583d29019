//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide the add/list/get/search/fetch-image entry points callers use.
//! - Orchestrate category resolution, asset storage and item persistence
//!   for a single listing submission.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - A submission's image is stored before its item row is inserted, so a
//!   persisted row never references an image that was never written.

use crate::assets::store::{AssetError, AssetStore, DEFAULT_ASSET_NAME};
use crate::model::item::{ItemDraft, ItemId, ItemSummary};
use crate::repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
use crate::repo::item_repo::{ItemRepository, RepoError, SqliteItemRepository};
use log::info;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Use-case level error surfaced to transport layers.
#[derive(Debug)]
pub enum CatalogError {
    /// Listing name was empty. Rejected before any storage work.
    EmptyName,
    /// Category name was empty. Rejected before any storage work.
    EmptyCategory,
    /// No item with the requested id exists.
    NotFound(ItemId),
    Repo(RepoError),
    Asset(AssetError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "listing name must not be empty"),
            Self::EmptyCategory => write!(f, "listing category must not be empty"),
            Self::NotFound(id) => write!(f, "listing not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Asset(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyName | Self::EmptyCategory | Self::NotFound(_) => None,
            Self::Repo(err) => Some(err),
            Self::Asset(err) => Some(err),
        }
    }
}

impl From<RepoError> for CatalogError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<AssetError> for CatalogError {
    fn from(value: AssetError) -> Self {
        Self::Asset(value)
    }
}

/// Request model for submitting one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddListingRequest {
    /// Listing display name.
    pub name: String,
    /// Human-readable category name; resolved or created on submit.
    pub category: String,
    /// Raw image bytes. `None` references the default asset instead.
    pub image: Option<Vec<u8>>,
}

/// Outcome of a successful listing submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    /// Storage-assigned item id.
    pub item_id: ItemId,
    /// Asset reference persisted on the item row.
    pub image_name: String,
}

/// Use-case service wrapper for catalog operations.
pub struct CatalogService<I: ItemRepository, C: CategoryRepository> {
    items: I,
    categories: C,
    assets: AssetStore,
}

impl<'conn> CatalogService<SqliteItemRepository<'conn>, SqliteCategoryRepository<'conn>> {
    /// Creates a service over SQLite repositories sharing one connection.
    pub fn with_sqlite(conn: &'conn Connection, assets: AssetStore) -> Self {
        Self::new(
            SqliteItemRepository::new(conn),
            SqliteCategoryRepository::new(conn),
            assets,
        )
    }
}

impl<I: ItemRepository, C: CategoryRepository> CatalogService<I, C> {
    /// Creates a service using the provided repository implementations.
    pub fn new(items: I, categories: C, assets: AssetStore) -> Self {
        Self {
            items,
            categories,
            assets,
        }
    }

    /// Submits one listing: resolves the category, stores the image, then
    /// persists the item row.
    ///
    /// # Contract
    /// - Rejects empty name or category before any storage work.
    /// - Without image bytes the row references the default asset.
    /// - Returns the new item id and the persisted asset reference.
    pub fn add_listing(&self, request: &AddListingRequest) -> CatalogResult<NewListing> {
        if request.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if request.category.trim().is_empty() {
            return Err(CatalogError::EmptyCategory);
        }

        let category_id = self.categories.resolve_or_create(&request.category)?;

        let image_name = match &request.image {
            Some(bytes) => self.assets.store(bytes)?,
            None => DEFAULT_ASSET_NAME.to_string(),
        };

        let draft = ItemDraft::new(request.name.clone(), category_id, image_name.clone());
        let item_id = self.items.add_item(&draft)?;

        info!(
            "event=listing_added module=service status=ok id={} category_id={} image={}",
            item_id, category_id, image_name
        );

        Ok(NewListing {
            item_id,
            image_name,
        })
    }

    /// Gets one listing by id, joined with its category name.
    pub fn get_listing(&self, id: ItemId) -> CatalogResult<ItemSummary> {
        Ok(self.items.get_item(id)?)
    }

    /// Lists every listing in storage order.
    pub fn list_listings(&self) -> CatalogResult<Vec<ItemSummary>> {
        Ok(self.items.list_items()?)
    }

    /// Searches listings whose name contains `keyword`.
    pub fn search_listings(&self, keyword: &str) -> CatalogResult<Vec<ItemSummary>> {
        Ok(self.items.search_items(keyword)?)
    }

    /// Fetches image bytes for an asset reference, with default fallback.
    pub fn fetch_image(&self, name: &str) -> CatalogResult<Vec<u8>> {
        Ok(self.assets.resolve(name)?)
    }
}
