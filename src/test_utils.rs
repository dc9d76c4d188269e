//! Shared test utilities for Cartkeeper.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{catalog, list},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test category with the given name.
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::category::Model> {
    catalog::create_category(db, name.to_string()).await
}

/// Creates a test item with no unit.
pub async fn create_test_item(
    db: &DatabaseConnection,
    name: &str,
    category_id: i64,
) -> Result<entities::item::Model> {
    catalog::create_item(db, name.to_string(), category_id, None).await
}

/// Creates a test item with a custom unit.
pub async fn create_custom_item(
    db: &DatabaseConnection,
    name: &str,
    category_id: i64,
    unit: Option<&str>,
) -> Result<entities::item::Model> {
    catalog::create_item(db, name.to_string(), category_id, unit.map(str::to_string)).await
}

/// Creates a test active-list entry.
pub async fn create_test_entry(
    db: &DatabaseConnection,
    item_id: i64,
    quantity: i32,
    unit_price: Option<f64>,
) -> Result<entities::list_entry::Model> {
    list::add_to_list(db, item_id, quantity, unit_price).await
}

/// Sets up a complete test environment with one category and one item.
/// Returns (db, category, item) for common test scenarios.
pub async fn setup_with_item() -> Result<(
    DatabaseConnection,
    entities::category::Model,
    entities::item::Model,
)> {
    let db = setup_test_db().await?;
    let category = create_test_category(&db, "Test Category").await?;
    let item = create_test_item(&db, "Test Item", category.id).await?;
    Ok((db, category, item))
}
