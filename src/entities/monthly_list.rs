//! Monthly list entity - A historical bucket holding one month's archive.
//!
//! At most one row exists per `(month, year)`; the archive manager reuses an
//! existing bucket instead of creating a duplicate. Buckets are never deleted
//! by the core.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Monthly archive bucket database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "monthly_lists")]
pub struct Model {
    /// Unique identifier for the bucket
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Calendar month, 1-indexed (1 = January)
    pub month: i32,
    /// Calendar year
    pub year: i32,
    /// Number of archived entries, recomputed on every finalize
    pub items_count: Option<i32>,
    /// Sum of entry subtotals, recomputed on every finalize
    pub total_value: Option<f64>,
    /// When the bucket was first closed; stamped once
    pub finalized_at: Option<DateTimeUtc>,
    /// When the bucket row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between MonthlyList and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One bucket has many archived entries
    #[sea_orm(has_many = "super::monthly_entry::Entity")]
    Entries,
}

impl Related<super::monthly_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
