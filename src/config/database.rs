//! Database configuration module.
//!
//! Handles `SQLite` database connection and table creation using `SeaORM`.
//! Table creation uses `Schema::create_table_from_entity` so the database
//! schema always matches the entity definitions without hand-written SQL.

use crate::entities::{Category, Item, ListEntry, MonthlyEntry, MonthlyList};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the `DATABASE_URL` environment variable or
/// returns the default local `SQLite` path.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/cartkeeper.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database.
///
/// Uses [`get_database_url`] for resolution, falling back to a local file
/// when no environment variable is set.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all database tables from the entity definitions.
///
/// Statements are issued with `IF NOT EXISTS` so bootstrap is idempotent and
/// safe to run on every startup.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = [
        schema.create_table_from_entity(Category),
        schema.create_table_from_entity(Item),
        schema.create_table_from_entity(ListEntry),
        schema.create_table_from_entity(MonthlyList),
        schema.create_table_from_entity(MonthlyEntry),
    ];

    for statement in &mut statements {
        db.execute(builder.build(statement.if_not_exists())).await?;
    }

    Ok(())
}
