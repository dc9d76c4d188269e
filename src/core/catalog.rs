//! Catalog business logic - categories and the items inside them.
//!
//! All mutations validate their input, hit the store, and return the fresh
//! persisted record. Deleting a category cascades to its items inside one
//! transaction; list entries referencing the removed items are left in place
//! so history stays accurate.

use crate::{
    entities::{Category, Item, category, item},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Creates a new category with the given display name.
///
/// The name is trimmed; an empty or whitespace-only name is rejected before
/// the store is touched.
pub async fn create_category(db: &DatabaseConnection, name: String) -> Result<category::Model> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "category name cannot be empty".to_string(),
        });
    }

    let model = category::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };
    Ok(model.insert(db).await?)
}

/// Renames an existing category.
pub async fn rename_category(
    db: &DatabaseConnection,
    id: i64,
    name: String,
) -> Result<category::Model> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "category name cannot be empty".to_string(),
        });
    }

    let existing = Category::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "category",
            id,
        })?;

    let mut active: category::ActiveModel = existing.into();
    active.name = Set(name.to_string());
    Ok(active.update(db).await?)
}

/// Deletes a category and every item inside it, in one transaction.
///
/// Active and archived list entries referencing the removed items are NOT
/// deleted; they become dangling references that resolve to "item not found"
/// at display time. Returns the number of items removed by the cascade.
pub async fn delete_category(db: &DatabaseConnection, id: i64) -> Result<u64> {
    let txn = db.begin().await?;

    let existing = Category::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(Error::NotFound {
            entity: "category",
            id,
        })?;

    // Items must go first: they carry a foreign key to the category
    let removed = Item::delete_many()
        .filter(item::Column::CategoryId.eq(id))
        .exec(&txn)
        .await?
        .rows_affected;

    let name = existing.name.clone();
    existing.delete(&txn).await?;
    txn.commit().await?;

    info!(category = %name, items_removed = removed, "deleted category with cascade");
    Ok(removed)
}

/// Creates a new catalog item inside an existing category.
pub async fn create_item(
    db: &DatabaseConnection,
    name: String,
    category_id: i64,
    unit: Option<String>,
) -> Result<item::Model> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "item name cannot be empty".to_string(),
        });
    }

    Category::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "category",
            id: category_id,
        })?;

    let model = item::ActiveModel {
        name: Set(name.to_string()),
        category_id: Set(category_id),
        unit: Set(unit),
        ..Default::default()
    };
    Ok(model.insert(db).await?)
}

/// Replaces an item's name, category, and unit.
///
/// The target category must exist; moving an item between categories is a
/// plain field update with no effect on list entries referencing it.
pub async fn update_item(
    db: &DatabaseConnection,
    id: i64,
    name: String,
    category_id: i64,
    unit: Option<String>,
) -> Result<item::Model> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "item name cannot be empty".to_string(),
        });
    }

    let existing = Item::find_by_id(id).one(db).await?.ok_or(Error::NotFound {
        entity: "item",
        id,
    })?;

    Category::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "category",
            id: category_id,
        })?;

    let mut active: item::ActiveModel = existing.into();
    active.name = Set(name.to_string());
    active.category_id = Set(category_id);
    active.unit = Set(unit);
    Ok(active.update(db).await?)
}

/// Deletes a single catalog item.
///
/// List entries referencing the item are left alone and become dangling,
/// matching the category cascade's orphan tolerance.
pub async fn delete_item(db: &DatabaseConnection, id: i64) -> Result<()> {
    let existing = Item::find_by_id(id).one(db).await?.ok_or(Error::NotFound {
        entity: "item",
        id,
    })?;

    existing.delete(db).await?;
    Ok(())
}

/// Retrieves all categories ordered alphabetically by name.
pub async fn get_all_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>> {
    Category::find()
        .order_by_asc(category::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all catalog items ordered alphabetically by name.
pub async fn get_all_items(db: &DatabaseConnection) -> Result<Vec<item::Model>> {
    Item::find()
        .order_by_asc(item::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the items of one category, ordered alphabetically by name.
///
/// Used by the add-to-list flow to narrow the item picker after the user
/// chooses a category.
pub async fn get_items_in_category(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<Vec<item::Model>> {
    Item::find()
        .filter(item::Column::CategoryId.eq(category_id))
        .order_by_asc(item::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}
