//! Active-list entry entity - One line of the current shopping list.
//!
//! `item_id` deliberately carries no foreign-key relation: entries may
//! outlive the catalog item they reference and must keep working as
//! "item not found" rows instead of blocking catalog deletes.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Active shopping-list entry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shopping_list_entries")]
pub struct Model {
    /// Unique identifier for the entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Catalog item this entry refers to; may dangle after item deletion
    pub item_id: i64,
    /// How many units to buy, always >= 1
    pub quantity: i32,
    /// Price per unit, if the user has filled it in
    pub unit_price: Option<f64>,
    /// Optional brand note
    pub brand: Option<String>,
    /// Day the entry was purchased; coupled to `purchased`
    pub purchase_date: Option<Date>,
    /// Whether the entry has been checked off
    pub purchased: bool,
    /// Insertion timestamp, used for creation-order listing
    pub created_at: DateTimeUtc,
}

/// Active-list entries have no enforced relationships; the `item_id`
/// reference is resolved in code and tolerated when missing.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
