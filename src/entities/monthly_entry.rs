//! Monthly entry entity - An archived shopping-list line inside a bucket.
//!
//! Rows are written once by the finalize operation and treated as an
//! immutable snapshot afterwards. Like active entries, `item_id` carries no
//! foreign-key relation so history survives catalog deletions.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Archived shopping-list entry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "monthly_list_entries")]
pub struct Model {
    /// Unique identifier for the archived entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Bucket this entry was archived into
    pub monthly_list_id: i64,
    /// Catalog item reference, preserved verbatim; may dangle
    pub item_id: i64,
    /// Quantity at archival time
    pub quantity: i32,
    /// Unit price at archival time
    pub unit_price: Option<f64>,
    /// Brand note at archival time
    pub brand: Option<String>,
    /// Purchase date at archival time
    pub purchase_date: Option<Date>,
    /// Purchased flag at archival time
    pub purchased: bool,
}

/// Defines relationships between MonthlyEntry and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each archived entry belongs to one bucket
    #[sea_orm(
        belongs_to = "super::monthly_list::Entity",
        from = "Column::MonthlyListId",
        to = "super::monthly_list::Column::Id"
    )]
    MonthlyList,
}

impl Related<super::monthly_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonthlyList.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
