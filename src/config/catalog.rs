//! Initial catalog loading from config.toml
//!
//! A fresh install starts with an empty catalog, which makes the app useless
//! until the user has typed in every category and item by hand. This module
//! loads a starter catalog from a TOML file and seeds it into the database,
//! skipping the seed entirely once any category exists.

use crate::entities::{Category, category, item};
use crate::errors::{Error, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// Categories to seed, each with its starter items
    pub categories: Vec<CategorySeed>,
}

/// Configuration for a single category and its items
#[derive(Debug, Deserialize, Clone)]
pub struct CategorySeed {
    /// Name of the category
    pub name: String,
    /// Items created inside this category
    #[serde(default)]
    pub items: Vec<ItemSeed>,
}

/// Configuration for a single catalog item
#[derive(Debug, Deserialize, Clone)]
pub struct ItemSeed {
    /// Name of the item
    pub name: String,
    /// Optional measurement unit (e.g., "kg", "L")
    pub unit: Option<String>,
}

/// Loads the starter catalog from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML syntax is invalid,
/// or required fields are missing.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the starter catalog from the default location (./config.toml)
pub fn load_default_config() -> Result<CatalogConfig> {
    load_config("config.toml")
}

/// Seeds the starter catalog into the database.
///
/// Returns `true` when the seed ran, `false` when the catalog already had
/// categories and the seed was skipped. Seeding an already-populated catalog
/// would duplicate user data, so this check makes startup idempotent.
pub async fn seed_catalog(db: &DatabaseConnection, config: &CatalogConfig) -> Result<bool> {
    let existing = Category::find().count(db).await?;
    if existing > 0 {
        info!(categories = existing, "catalog already seeded, skipping");
        return Ok(false);
    }

    let mut items_created = 0_usize;
    for seed in &config.categories {
        let created = category::ActiveModel {
            name: Set(seed.name.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        for item_seed in &seed.items {
            item::ActiveModel {
                name: Set(item_seed.name.clone()),
                category_id: Set(created.id),
                unit: Set(item_seed.unit.clone()),
                ..Default::default()
            }
            .insert(db)
            .await?;
            items_created += 1;
        }
    }

    info!(
        categories = config.categories.len(),
        items = items_created,
        "seeded starter catalog"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::Item;
    use crate::test_utils::setup_test_db;
    use sea_orm::{ActiveModelTrait, QueryOrder};

    #[test]
    fn test_parse_catalog_config() {
        let toml_str = r#"
            [[categories]]
            name = "Groceries"

            [[categories.items]]
            name = "Rice"
            unit = "kg"

            [[categories.items]]
            name = "Beans"
            unit = "kg"

            [[categories]]
            name = "Cleaning"

            [[categories.items]]
            name = "Dish soap"
        "#;

        let config: CatalogConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.categories[0].name, "Groceries");
        assert_eq!(config.categories[0].items.len(), 2);
        assert_eq!(config.categories[0].items[0].unit.as_deref(), Some("kg"));
        assert_eq!(config.categories[1].items[0].name, "Dish soap");
        assert!(config.categories[1].items[0].unit.is_none());
    }

    #[test]
    fn test_parse_category_without_items() {
        let config: CatalogConfig = toml::from_str("[[categories]]\nname = \"Empty\"\n").unwrap();
        assert_eq!(config.categories.len(), 1);
        assert!(config.categories[0].items.is_empty());
    }

    #[tokio::test]
    async fn test_seed_catalog_populates_tables() -> Result<()> {
        let db = setup_test_db().await?;
        let config = CatalogConfig {
            categories: vec![CategorySeed {
                name: "Groceries".to_string(),
                items: vec![ItemSeed {
                    name: "Rice".to_string(),
                    unit: Some("kg".to_string()),
                }],
            }],
        };

        let seeded = seed_catalog(&db, &config).await?;
        assert!(seeded);

        let categories = Category::find().all(&db).await?;
        assert_eq!(categories.len(), 1);

        let items = Item::find().order_by_asc(crate::entities::ItemColumn::Name).all(&db).await?;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category_id, categories[0].id);
        assert_eq!(items[0].unit.as_deref(), Some("kg"));

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_catalog_skips_when_populated() -> Result<()> {
        let db = setup_test_db().await?;
        category::ActiveModel {
            name: Set("Existing".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let config = CatalogConfig {
            categories: vec![CategorySeed {
                name: "Groceries".to_string(),
                items: vec![],
            }],
        };

        let seeded = seed_catalog(&db, &config).await?;
        assert!(!seeded);

        // Nothing new was written
        assert_eq!(Category::find().count(&db).await?, 1);
        Ok(())
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/config.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
