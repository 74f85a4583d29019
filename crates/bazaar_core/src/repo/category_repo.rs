//! Category repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Map category names to stable numeric ids, creating rows on first use.
//! - Keep the name→id mapping a bijection.
//!
//! # Invariants
//! - `categories.name` is UNIQUE in storage; resolve-or-create relies on
//!   the conflict-tolerant insert, so concurrent first-use of one name
//!   cannot produce duplicate rows.
//! - "Not found" on lookup is the expected create path, never an error.

use crate::model::category::{Category, CategoryId, CategoryValidationError};
use crate::repo::item_repo::{RepoError, RepoResult};
use log::info;
use rusqlite::{params, Connection, OptionalExtension};

/// Repository interface for category resolution.
pub trait CategoryRepository {
    /// Returns the id for `name`, inserting a new row on first use.
    fn resolve_or_create(&self, name: &str) -> RepoResult<CategoryId>;
    /// Returns all known categories ordered by name.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn resolve_or_create(&self, name: &str) -> RepoResult<CategoryId> {
        if name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName.into());
        }

        // The losing writer's insert is swallowed by the UNIQUE constraint;
        // the follow-up SELECT then observes the winner's row.
        let inserted = self.conn.execute(
            "INSERT INTO categories (name) VALUES (?1) ON CONFLICT (name) DO NOTHING;",
            params![name],
        )?;

        let id: Option<CategoryId> = self
            .conn
            .query_row(
                "SELECT id FROM categories WHERE name = ?1;",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        let id = id.ok_or_else(|| {
            RepoError::InvalidData(format!("category `{name}` missing after insert"))
        })?;

        if inserted > 0 {
            info!(
                "event=category_created module=repo status=ok id={} name={}",
                id, name
            );
        }

        Ok(id)
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY name;")?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();

        while let Some(row) = rows.next()? {
            categories.push(Category {
                id: row.get("id")?,
                name: row.get("name")?,
            });
        }

        Ok(categories)
    }
}
