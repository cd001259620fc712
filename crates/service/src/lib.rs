//! Service layer for the inventory tracker.
//! - Owns the in-memory item collection behind an explicit store handle.
//! - Keeps the permissive integer coercion rules in one place.
//! - Exposes the store through the `ItemRepository` trait so the HTTP layer
//!   does not depend on a concrete implementation.

pub mod errors;
pub mod items;
