//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `bazaar_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use bazaar_core::db::open_db_in_memory;
use bazaar_core::{ItemRepository, SqliteItemRepository};

fn main() {
    println!("bazaar_core version={}", bazaar_core::core_version());

    match open_db_in_memory() {
        Ok(conn) => {
            let repo = SqliteItemRepository::new(&conn);
            match repo.list_items() {
                Ok(items) => println!("catalog ready items={}", items.len()),
                Err(err) => eprintln!("catalog probe failed: {err}"),
            }
        }
        Err(err) => eprintln!("db open failed: {err}"),
    }
}
