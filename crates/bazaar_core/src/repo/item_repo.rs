//! Item repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable write/read APIs over canonical `items` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `ItemDraft::validate()` before SQL mutations.
//! - Every read joins `categories` so callers always see the display name.
//! - Duplicate item names are allowed; each row is a distinct listing.

use crate::db::DbError;
use crate::model::category::CategoryValidationError;
use crate::model::item::{ItemDraft, ItemId, ItemSummary, ItemValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ITEM_SELECT_SQL: &str = "SELECT
    items.id,
    items.name,
    categories.name AS category_name,
    items.image_name
FROM items
JOIN categories ON items.category_id = categories.id";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for catalog persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ItemValidationError),
    CategoryValidation(CategoryValidationError),
    Db(DbError),
    NotFound(ItemId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::CategoryValidation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted catalog data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::CategoryValidation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ItemValidationError> for RepoError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<CategoryValidationError> for RepoError {
    fn from(value: CategoryValidationError) -> Self {
        Self::CategoryValidation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for item persistence and queries.
pub trait ItemRepository {
    /// Persists a draft and returns the storage-assigned id.
    fn add_item(&self, draft: &ItemDraft) -> RepoResult<ItemId>;
    /// Gets one item joined with its category name; `NotFound` when absent.
    fn get_item(&self, id: ItemId) -> RepoResult<ItemSummary>;
    /// Returns every item in storage order. Empty catalog yields an empty
    /// vec, never an error.
    fn list_items(&self) -> RepoResult<Vec<ItemSummary>>;
    /// Returns items whose name contains `keyword` as a substring (SQLite
    /// `LIKE` semantics, so ASCII case-insensitive). An empty keyword
    /// matches everything.
    fn search_items(&self, keyword: &str) -> RepoResult<Vec<ItemSummary>>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn add_item(&self, draft: &ItemDraft) -> RepoResult<ItemId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO items (name, category_id, image_name) VALUES (?1, ?2, ?3);",
            params![
                draft.name.as_str(),
                draft.category_id,
                draft.image_name.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_item(&self, id: ItemId) -> RepoResult<ItemSummary> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE items.id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => parse_item_row(row),
            None => Err(RepoError::NotFound(id)),
        }
    }

    fn list_items(&self) -> RepoResult<Vec<ItemSummary>> {
        // Storage order; callers must not rely on it beyond
        // insertion consistency.
        let mut stmt = self.conn.prepare(&format!("{ITEM_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }

    fn search_items(&self, keyword: &str) -> RepoResult<Vec<ItemSummary>> {
        let pattern = format!("%{}%", escape_like(keyword));

        let mut stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL} WHERE items.name LIKE ?1 ESCAPE '\\';"
        ))?;
        let mut rows = stmt.query(params![pattern])?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<ItemSummary> {
    let summary = ItemSummary {
        id: row.get("id")?,
        name: row.get("name")?,
        category_name: row.get("category_name")?,
        image_name: row.get("image_name")?,
    };

    if summary.name.trim().is_empty() {
        return Err(RepoError::InvalidData(format!(
            "empty name in items row {}",
            summary.id
        )));
    }

    Ok(summary)
}

/// Escapes `LIKE` wildcards so a keyword matches literally.
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("50% off_now"), "50\\% off\\_now");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }
}
