//! History browsing and copy-back business logic.
//!
//! The archive is read-only from here: buckets are listed newest first and
//! their entries can be selectively copied back into the active list as
//! fresh, unpurchased entries carrying only the item, quantity, and price.
//! The selection helpers are pure so a UI can drive checkbox state without
//! touching the store.

use crate::{
    core::list,
    entities::{MonthlyEntry, MonthlyList, item, list_entry, monthly_entry, monthly_list},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, prelude::*};
use std::collections::{HashMap, HashSet};
use tracing::info;

/// Retrieves all monthly buckets, newest first (`year desc, month desc`).
pub async fn get_monthly_lists(db: &DatabaseConnection) -> Result<Vec<monthly_list::Model>> {
    MonthlyList::find()
        .order_by_desc(monthly_list::Column::Year)
        .order_by_desc(monthly_list::Column::Month)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the archived entries of one bucket, in insertion order.
///
/// Fails with `NotFound` when the bucket id does not exist, so callers can
/// distinguish "empty month" from "no such month".
pub async fn get_entries_for_list(
    db: &DatabaseConnection,
    monthly_list_id: i64,
) -> Result<Vec<monthly_entry::Model>> {
    MonthlyList::find_by_id(monthly_list_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "monthly list",
            id: monthly_list_id,
        })?;

    MonthlyEntry::find()
        .filter(monthly_entry::Column::MonthlyListId.eq(monthly_list_id))
        .order_by_asc(monthly_entry::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Copies the selected archived entries back into the active list.
///
/// Each copy becomes a fresh unpurchased entry with only the item, quantity,
/// and unit price carried over; brand, purchase date, and purchased state
/// stay in history. An empty selection is rejected, and every selected id is
/// checked against the bucket before any insert happens, so a failure never
/// leaves a partial copy.
pub async fn copy_to_active_list(
    db: &DatabaseConnection,
    monthly_list_id: i64,
    selected_entry_ids: &[i64],
) -> Result<Vec<list_entry::Model>> {
    if selected_entry_ids.is_empty() {
        return Err(Error::Validation {
            message: "no entries selected to copy".to_string(),
        });
    }

    let entries = get_entries_for_list(db, monthly_list_id).await?;
    let by_id: HashMap<i64, &monthly_entry::Model> =
        entries.iter().map(|e| (e.id, e)).collect();

    let mut chosen = Vec::with_capacity(selected_entry_ids.len());
    for &id in selected_entry_ids {
        let entry = by_id.get(&id).ok_or(Error::NotFound {
            entity: "monthly list entry",
            id,
        })?;
        chosen.push(*entry);
    }

    let mut copied = Vec::with_capacity(chosen.len());
    for entry in chosen {
        copied.push(list::add_to_list(db, entry.item_id, entry.quantity, entry.unit_price).await?);
    }

    info!(
        monthly_list_id,
        copied = copied.len(),
        "copied archived entries into the active list"
    );
    Ok(copied)
}

/// Sorts archived entries alphabetically by their resolved item name.
///
/// Entries whose item no longer exists sort first under an empty name; they
/// are displayed, never dropped.
#[must_use]
pub fn sort_by_item_name<'a>(
    entries: &'a [monthly_entry::Model],
    items: &[item::Model],
) -> Vec<&'a monthly_entry::Model> {
    let mut sorted: Vec<&monthly_entry::Model> = entries.iter().collect();
    sorted.sort_by_key(|e| {
        list::resolve_item(items, e.item_id).map_or_else(String::new, |i| i.name.to_lowercase())
    });
    sorted
}

/// Filters archived entries by a case-insensitive item-name substring.
///
/// The same scoping drives both what is visible and what "select all"
/// affects, so the two stay consistent.
#[must_use]
pub fn search_entries<'a>(
    entries: &'a [monthly_entry::Model],
    items: &[item::Model],
    term: &str,
) -> Vec<&'a monthly_entry::Model> {
    let needle = term.to_lowercase();
    entries
        .iter()
        .filter(|e| {
            list::resolve_item(items, e.item_id)
                .is_some_and(|i| i.name.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Toggles a "select all" action over the currently visible entries.
///
/// When every visible entry is already selected the action deselects them
/// all; otherwise it selects them all. Selections outside the visible set
/// are left untouched.
pub fn toggle_select_all(selection: &mut HashSet<i64>, visible: &[&monthly_entry::Model]) {
    let all_selected = !visible.is_empty() && visible.iter().all(|e| selection.contains(&e.id));
    if all_selected {
        for entry in visible {
            selection.remove(&entry.id);
        }
    } else {
        for entry in visible {
            selection.insert(entry.id);
        }
    }
}

/// Human-readable month label for a 1-indexed month number.
#[must_use]
pub fn month_name(month: i32) -> Option<&'static str> {
    match month {
        1 => Some("January"),
        2 => Some("February"),
        3 => Some("March"),
        4 => Some("April"),
        5 => Some("May"),
        6 => Some("June"),
        7 => Some("July"),
        8 => Some("August"),
        9 => Some("September"),
        10 => Some("October"),
        11 => Some("November"),
        12 => Some("December"),
        _ => None,
    }
}
