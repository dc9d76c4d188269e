//! Monthly archival business logic.
//!
//! Finalizing a month snapshots the active list into a `(month, year)` bucket
//! and then resets the active list. The bucket is created at most once per
//! month; finalizing again in the same month reuses it and appends the new
//! entries, after which the bucket's aggregates are recomputed from the full
//! set of archived rows so repeated finalizes never leave stale counts.
//!
//! The snapshot steps run inside one database transaction. Clearing the
//! active list happens only after that transaction commits, so any failure
//! along the way leaves the list untouched and the whole operation safe to
//! retry.

use crate::{
    core::list,
    entities::{ListEntry, MonthlyEntry, MonthlyList, list_entry, monthly_entry, monthly_list},
    errors::Result,
};
use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Outcome of one finalize run.
#[derive(Debug, Clone)]
pub struct FinalizeResult {
    /// Calendar month that was archived, 1-indexed
    pub month: i32,
    /// Calendar year that was archived
    pub year: i32,
    /// How many active entries were copied into the bucket by this run
    pub entries_archived: usize,
    /// Whether an existing bucket for the month was reused
    pub reused_bucket: bool,
    /// The bucket row after aggregate recomputation
    pub bucket: monthly_list::Model,
}

/// Finalizes the active list into the bucket for today's month.
pub async fn finalize_month(db: &DatabaseConnection) -> Result<FinalizeResult> {
    finalize_month_on(db, Utc::now().date_naive()).await
}

/// Finalizes the active list into the bucket for the given date's month.
///
/// Split out from [`finalize_month`] so tests and administrative backfills
/// can target a specific month.
pub async fn finalize_month_on(db: &DatabaseConnection, date: NaiveDate) -> Result<FinalizeResult> {
    let month = date.month() as i32;
    let year = date.year();

    let txn = db.begin().await?;

    let active = ListEntry::find()
        .order_by_asc(list_entry::Column::CreatedAt)
        .order_by_asc(list_entry::Column::Id)
        .all(&txn)
        .await?;

    // Upsert semantics: at most one bucket per (month, year)
    let existing = MonthlyList::find()
        .filter(monthly_list::Column::Month.eq(month))
        .filter(monthly_list::Column::Year.eq(year))
        .one(&txn)
        .await?;
    let reused_bucket = existing.is_some();
    let bucket = match existing {
        Some(bucket) => bucket,
        None => {
            monthly_list::ActiveModel {
                month: Set(month),
                year: Set(year),
                items_count: Set(None),
                total_value: Set(None),
                finalized_at: Set(None),
                created_at: Set(Utc::now()),
                ..Default::default()
            }
            .insert(&txn)
            .await?
        }
    };

    // Append, never merge: each finalize adds its own snapshot rows
    for entry in &active {
        monthly_entry::ActiveModel {
            monthly_list_id: Set(bucket.id),
            item_id: Set(entry.item_id),
            quantity: Set(entry.quantity),
            unit_price: Set(entry.unit_price),
            brand: Set(entry.brand.clone()),
            purchase_date: Set(entry.purchase_date),
            purchased: Set(entry.purchased),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    // Recompute aggregates from the union of the bucket's entries
    let archived = MonthlyEntry::find()
        .filter(monthly_entry::Column::MonthlyListId.eq(bucket.id))
        .all(&txn)
        .await?;
    let total_value: f64 = archived
        .iter()
        .map(|e| e.unit_price.map_or(0.0, |p| f64::from(e.quantity) * p))
        .sum();

    let stamp_close = bucket.finalized_at.is_none();
    let mut bucket_update: monthly_list::ActiveModel = bucket.into();
    bucket_update.items_count = Set(Some(archived.len() as i32));
    bucket_update.total_value = Set(Some(total_value));
    if stamp_close {
        bucket_update.finalized_at = Set(Some(Utc::now()));
    }
    let bucket = bucket_update.update(&txn).await?;

    txn.commit().await?;

    // The snapshot is durable now; clearing is a separate, retry-safe step
    let cleared = list::clear_list(db).await?;

    info!(
        month,
        year,
        entries_archived = active.len(),
        reused_bucket,
        cleared,
        "finalized month"
    );

    Ok(FinalizeResult {
        month,
        year,
        entries_archived: active.len(),
        reused_bucket,
        bucket,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::list::{EntryPatch, add_to_list, get_active_entries, update_entry};
    use crate::test_utils::setup_with_item;

    #[tokio::test]
    async fn test_finalize_snapshots_and_clears() -> Result<()> {
        let (db, _category, item) = setup_with_item().await?;
        add_to_list(&db, item.id, 2, Some(5.0)).await?;
        add_to_list(&db, item.id, 1, Some(3.0)).await?;

        let result = finalize_month(&db).await?;
        let today = Utc::now().date_naive();
        assert_eq!(result.month, today.month() as i32);
        assert_eq!(result.year, today.year());
        assert_eq!(result.entries_archived, 2);
        assert!(!result.reused_bucket);
        assert_eq!(result.bucket.items_count, Some(2));
        assert_eq!(result.bucket.total_value, Some(13.0));
        assert!(result.bucket.finalized_at.is_some());

        let archived = MonthlyEntry::find().all(&db).await?;
        assert_eq!(archived.len(), 2);
        assert!(archived.iter().all(|e| e.monthly_list_id == result.bucket.id));

        assert!(get_active_entries(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_finalize_preserves_entry_fields_verbatim() -> Result<()> {
        let (db, _category, item) = setup_with_item().await?;
        let entry = add_to_list(&db, item.id, 3, Some(2.5)).await?;
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        update_entry(
            &db,
            entry.id,
            EntryPatch {
                brand: Some(Some("Acme".to_string())),
                purchase_date: Some(Some(date)),
                purchased: Some(true),
                ..Default::default()
            },
        )
        .await?;

        finalize_month(&db).await?;

        let archived = MonthlyEntry::find().all(&db).await?;
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].item_id, item.id);
        assert_eq!(archived[0].quantity, 3);
        assert_eq!(archived[0].unit_price, Some(2.5));
        assert_eq!(archived[0].brand.as_deref(), Some("Acme"));
        assert_eq!(archived[0].purchase_date, Some(date));
        assert!(archived[0].purchased);

        Ok(())
    }

    #[tokio::test]
    async fn test_double_finalize_reuses_bucket_and_appends() -> Result<()> {
        let (db, _category, item) = setup_with_item().await?;
        add_to_list(&db, item.id, 2, Some(5.0)).await?;

        let first = finalize_month(&db).await?;
        assert!(!first.reused_bucket);

        add_to_list(&db, item.id, 1, Some(3.0)).await?;
        add_to_list(&db, item.id, 4, None).await?;

        let second = finalize_month(&db).await?;
        assert!(second.reused_bucket);
        assert_eq!(second.bucket.id, first.bucket.id);
        assert_eq!(second.entries_archived, 2);

        // One bucket, entries from both runs present
        assert_eq!(MonthlyList::find().all(&db).await?.len(), 1);
        let archived = MonthlyEntry::find().all(&db).await?;
        assert_eq!(archived.len(), 3);

        // Aggregates recomputed over the union
        assert_eq!(second.bucket.items_count, Some(3));
        assert_eq!(second.bucket.total_value, Some(13.0));

        Ok(())
    }

    #[tokio::test]
    async fn test_finalized_at_is_stamped_once() -> Result<()> {
        let (db, _category, item) = setup_with_item().await?;
        add_to_list(&db, item.id, 1, None).await?;

        let first = finalize_month(&db).await?;
        let stamp = first.bucket.finalized_at.unwrap();

        add_to_list(&db, item.id, 1, None).await?;
        let second = finalize_month(&db).await?;
        assert_eq!(second.bucket.finalized_at, Some(stamp));

        Ok(())
    }

    #[tokio::test]
    async fn test_finalize_empty_list_creates_empty_bucket() -> Result<()> {
        let (db, _category, _item) = setup_with_item().await?;

        let result = finalize_month(&db).await?;
        assert_eq!(result.entries_archived, 0);
        assert_eq!(result.bucket.items_count, Some(0));
        assert_eq!(result.bucket.total_value, Some(0.0));

        Ok(())
    }

    #[tokio::test]
    async fn test_finalize_on_targets_given_month() -> Result<()> {
        let (db, _category, item) = setup_with_item().await?;
        add_to_list(&db, item.id, 1, Some(2.0)).await?;

        let date = NaiveDate::from_ymd_opt(2024, 11, 30).unwrap();
        let result = finalize_month_on(&db, date).await?;
        assert_eq!(result.month, 11);
        assert_eq!(result.year, 2024);

        // A different month gets its own bucket
        add_to_list(&db, item.id, 1, Some(2.0)).await?;
        let other = finalize_month_on(&db, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()).await?;
        assert!(!other.reused_bucket);
        assert_ne!(other.bucket.id, result.bucket.id);
        assert_eq!(MonthlyList::find().all(&db).await?.len(), 2);

        Ok(())
    }
}
