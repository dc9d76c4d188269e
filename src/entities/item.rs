//! Item entity - A product in the catalog that can be added to shopping lists.
//!
//! Every item references a live category at write time. List entries refer to
//! items by id without a foreign-key constraint, so deleting an item leaves
//! historical and active entries dangling on purpose.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog item database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the product (e.g., "Rice", "Dish soap")
    pub name: String,
    /// Category this item belongs to
    pub category_id: i64,
    /// Optional measurement unit shown next to the name (e.g., "kg", "L")
    pub unit: Option<String>,
}

/// Defines relationships between Item and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each item belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
