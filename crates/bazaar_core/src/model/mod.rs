//! Domain model for catalog listings and categories.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep write models (drafts) separate from joined read models.
//!
//! # Invariants
//! - Item and category identifiers are storage-assigned and never reused.
//! - Listings are write-once; no mutation model exists in core.

pub mod category;
pub mod item;
