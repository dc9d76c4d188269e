//! Core business logic - framework-agnostic shopping-list operations.
//!
//! Every function here takes a database connection and returns a typed
//! `Result`; nothing in this module knows about a UI. Pure helpers
//! (filtering, subtotals, selection) live alongside the async operations
//! that need them.

/// Monthly archival - finalizing the active list into a dated bucket
pub mod archive;
/// Catalog store - categories and items with cascade delete
pub mod catalog;
/// History browser - reading archived buckets and copying entries back
pub mod history;
/// Active list manager - the current shopping list and its derived values
pub mod list;
