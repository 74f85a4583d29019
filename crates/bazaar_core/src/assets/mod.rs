//! Content-addressed asset storage.
//!
//! # Responsibility
//! - Map image bytes to deterministic, hash-derived file names.
//! - Keep the read path total via the default-asset fallback.
//!
//! # Invariants
//! - Asset identity is the SHA-256 digest of its bytes.
//! - Resolving a missing asset returns the default asset, never "not found".

pub mod store;
