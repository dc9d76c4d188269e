//! Cartkeeper - a household shopping-list core
//!
//! This crate provides the full shopping-list lifecycle: a catalog of
//! categories and items, an active list with quantities and prices, monthly
//! archival of finished lists, and copy-back from the archive into the
//! current list. It is framework-agnostic; a UI layer (CLI, TUI, web) talks
//! to it through the [`session::Session`] service or the `core` functions
//! directly.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

/// Configuration management - database connection and catalog seeding
pub mod config;
/// Core business logic - catalog, active list, archival, and history operations
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Stateful per-session service exposing snapshots to a UI collaborator
pub mod session;

#[cfg(test)]
pub mod test_utils;
