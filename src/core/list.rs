//! Active list business logic - the current, in-progress shopping list.
//!
//! Mutations are async round-trips to the store; the derived values
//! (filtering, subtotals, totals) are pure functions over already-fetched
//! rows so callers can recompute them without touching the database.
//!
//! Two behaviors here are deliberate product decisions, not bugs: adding the
//! same item twice appends a second entry (repeat purchases in one list are
//! common), and unchecking "purchased" always clears the purchase date, even
//! a hand-picked one, because the two fields are coupled state.

use crate::{
    entities::{ListEntry, item, list_entry},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Status predicate for [`filter_entries`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// No status restriction
    #[default]
    All,
    /// Only entries not yet checked off
    Pending,
    /// Only entries checked off
    Purchased,
}

/// Partial update for [`update_entry`].
///
/// Outer `None` leaves the field unchanged; for the optional fields,
/// `Some(None)` explicitly clears the stored value. Clearing the price is a
/// real workflow: typing a number away back to an empty field removes it.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    /// New quantity; normalized to at least 1
    pub quantity: Option<i32>,
    /// New unit price, or `Some(None)` to clear it
    pub unit_price: Option<Option<f64>>,
    /// New brand note, or `Some(None)` to clear it
    pub brand: Option<Option<String>>,
    /// New purchase date, or `Some(None)` to clear it
    pub purchase_date: Option<Option<NaiveDate>>,
    /// New purchased flag; drives the date coupling below
    pub purchased: Option<bool>,
}

/// Appends a new entry to the active list.
///
/// Always appends, even when the item is already on the list. The entry
/// starts unpurchased with no brand or date; a quantity below 1 is
/// normalized to 1.
pub async fn add_to_list(
    db: &DatabaseConnection,
    item_id: i64,
    quantity: i32,
    unit_price: Option<f64>,
) -> Result<list_entry::Model> {
    let entry = list_entry::ActiveModel {
        item_id: Set(item_id),
        quantity: Set(quantity.max(1)),
        unit_price: Set(unit_price),
        brand: Set(None),
        purchase_date: Set(None),
        purchased: Set(false),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    Ok(entry.insert(db).await?)
}

/// Applies a partial update to one active-list entry.
///
/// Toggling `purchased` to true stamps today's date when no date would
/// otherwise be set; toggling it to false clears the date unconditionally.
pub async fn update_entry(
    db: &DatabaseConnection,
    id: i64,
    patch: EntryPatch,
) -> Result<list_entry::Model> {
    let existing = ListEntry::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "list entry",
            id,
        })?;

    // Resolve the date first so the purchased coupling sees the final value
    let mut next_date = match patch.purchase_date {
        Some(explicit) => explicit,
        None => existing.purchase_date,
    };
    if let Some(purchased) = patch.purchased {
        if purchased {
            if next_date.is_none() {
                next_date = Some(Utc::now().date_naive());
            }
        } else {
            next_date = None;
        }
    }

    let mut active: list_entry::ActiveModel = existing.into();
    if let Some(quantity) = patch.quantity {
        active.quantity = Set(quantity.max(1));
    }
    if let Some(price) = patch.unit_price {
        active.unit_price = Set(price);
    }
    if let Some(brand) = patch.brand {
        active.brand = Set(brand);
    }
    if let Some(purchased) = patch.purchased {
        active.purchased = Set(purchased);
    }
    active.purchase_date = Set(next_date);

    Ok(active.update(db).await?)
}

/// Removes one entry from the active list.
pub async fn remove_entry(db: &DatabaseConnection, id: i64) -> Result<()> {
    let result = ListEntry::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "list entry",
            id,
        });
    }
    Ok(())
}

/// Deletes every active entry. Returns how many were removed.
pub async fn clear_list(db: &DatabaseConnection) -> Result<u64> {
    let result = ListEntry::delete_many().exec(db).await?;
    Ok(result.rows_affected)
}

/// Retrieves the active list in creation order.
pub async fn get_active_entries(db: &DatabaseConnection) -> Result<Vec<list_entry::Model>> {
    ListEntry::find()
        .order_by_asc(list_entry::Column::CreatedAt)
        .order_by_asc(list_entry::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Looks up an item by id in an already-fetched catalog slice.
///
/// Returns `None` for dangling references; callers render those as
/// "item not found" rather than failing.
#[must_use]
pub fn resolve_item(items: &[item::Model], item_id: i64) -> Option<&item::Model> {
    items.iter().find(|i| i.id == item_id)
}

/// Line value of one entry: `quantity * unit_price`, or 0 without a price.
#[must_use]
pub fn subtotal(entry: &list_entry::Model) -> f64 {
    entry
        .unit_price
        .map_or(0.0, |price| f64::from(entry.quantity) * price)
}

/// Sums entry subtotals, optionally restricted to purchased entries.
#[must_use]
pub fn total(entries: &[list_entry::Model], only_purchased: bool) -> f64 {
    entries
        .iter()
        .filter(|e| !only_purchased || e.purchased)
        .map(subtotal)
        .sum()
}

/// Filters active entries by category, status, and item-name search.
///
/// All provided predicates must hold (AND semantics). The search is a
/// case-insensitive substring match on the resolved item name; entries whose
/// item no longer exists fail the category and search predicates but are
/// still returned by an unfiltered call.
#[must_use]
pub fn filter_entries<'a>(
    entries: &'a [list_entry::Model],
    items: &[item::Model],
    category_id: Option<i64>,
    status: StatusFilter,
    search: Option<&str>,
) -> Vec<&'a list_entry::Model> {
    let needle = search.map(str::to_lowercase);

    entries
        .iter()
        .filter(|entry| {
            let item = resolve_item(items, entry.item_id);

            if let Some(wanted) = category_id {
                if item.is_none_or(|i| i.category_id != wanted) {
                    return false;
                }
            }

            match status {
                StatusFilter::All => {}
                StatusFilter::Pending => {
                    if entry.purchased {
                        return false;
                    }
                }
                StatusFilter::Purchased => {
                    if !entry.purchased {
                        return false;
                    }
                }
            }

            if let Some(needle) = &needle {
                if item.is_none_or(|i| !i.name.to_lowercase().contains(needle)) {
                    return false;
                }
            }

            true
        })
        .collect()
}
