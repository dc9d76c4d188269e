//! Per-session service facade over the core operations.
//!
//! A `Session` owns the database connection together with in-memory
//! snapshots of the catalog and the active list, refreshed after every
//! successful mutation. The snapshots are eventually consistent with the
//! store: correct immediately after each awaited operation, not
//! continuously.
//!
//! A simple busy flag serializes user-triggered mutations the way a UI
//! disables its controls during an in-flight request; a second dispatch
//! while one is running is rejected, not queued. The session has an
//! explicit lifecycle: construct one per logical user session, drop it on
//! teardown. There is no global state.

use crate::{
    config::database,
    core::{archive, archive::FinalizeResult, catalog, history, list, list::EntryPatch},
    entities::{category, item, list_entry, monthly_entry, monthly_list},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;

/// Stateful service exposing the shopping-list core to a UI collaborator.
pub struct Session {
    db: DatabaseConnection,
    categories: Vec<category::Model>,
    items: Vec<item::Model>,
    active_list: Vec<list_entry::Model>,
    busy: bool,
}

impl Session {
    /// Creates a session over an existing connection and loads the initial
    /// snapshots.
    pub async fn new(db: DatabaseConnection) -> Result<Self> {
        let mut session = Self {
            db,
            categories: Vec::new(),
            items: Vec::new(),
            active_list: Vec::new(),
            busy: false,
        };
        session.refresh().await?;
        Ok(session)
    }

    /// Connects using the configured `DATABASE_URL` and creates a session.
    pub async fn connect() -> Result<Self> {
        let db = database::create_connection().await?;
        Self::new(db).await
    }

    /// Reloads every snapshot from the store.
    pub async fn refresh(&mut self) -> Result<()> {
        self.categories = catalog::get_all_categories(&self.db).await?;
        self.items = catalog::get_all_items(&self.db).await?;
        self.active_list = list::get_active_entries(&self.db).await?;
        Ok(())
    }

    /// Current categories, ordered by name.
    #[must_use]
    pub fn categories(&self) -> &[category::Model] {
        &self.categories
    }

    /// Current catalog items, ordered by name.
    #[must_use]
    pub fn items(&self) -> &[item::Model] {
        &self.items
    }

    /// Current active list, in creation order.
    #[must_use]
    pub fn active_list(&self) -> &[list_entry::Model] {
        &self.active_list
    }

    /// Whether a mutation is currently in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Underlying connection, for callers that need the core directly.
    #[must_use]
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn begin_op(&mut self) -> Result<()> {
        if self.busy {
            return Err(Error::Validation {
                message: "another operation is already in flight".to_string(),
            });
        }
        self.busy = true;
        Ok(())
    }

    /// Creates a category and refreshes the catalog snapshot.
    pub async fn add_category(&mut self, name: String) -> Result<category::Model> {
        self.begin_op()?;
        let result = catalog::create_category(&self.db, name).await;
        let result = self.after_catalog_op(result).await;
        self.busy = false;
        result
    }

    /// Renames a category and refreshes the catalog snapshot.
    pub async fn rename_category(&mut self, id: i64, name: String) -> Result<category::Model> {
        self.begin_op()?;
        let result = catalog::rename_category(&self.db, id, name).await;
        let result = self.after_catalog_op(result).await;
        self.busy = false;
        result
    }

    /// Deletes a category with its items; refreshes the catalog snapshot.
    pub async fn delete_category(&mut self, id: i64) -> Result<u64> {
        self.begin_op()?;
        let result = catalog::delete_category(&self.db, id).await;
        let result = self.after_catalog_op(result).await;
        self.busy = false;
        result
    }

    /// Creates a catalog item and refreshes the catalog snapshot.
    pub async fn add_item(
        &mut self,
        name: String,
        category_id: i64,
        unit: Option<String>,
    ) -> Result<item::Model> {
        self.begin_op()?;
        let result = catalog::create_item(&self.db, name, category_id, unit).await;
        let result = self.after_catalog_op(result).await;
        self.busy = false;
        result
    }

    /// Updates a catalog item and refreshes the catalog snapshot.
    pub async fn update_item(
        &mut self,
        id: i64,
        name: String,
        category_id: i64,
        unit: Option<String>,
    ) -> Result<item::Model> {
        self.begin_op()?;
        let result = catalog::update_item(&self.db, id, name, category_id, unit).await;
        let result = self.after_catalog_op(result).await;
        self.busy = false;
        result
    }

    /// Deletes a catalog item and refreshes the catalog snapshot.
    pub async fn delete_item(&mut self, id: i64) -> Result<()> {
        self.begin_op()?;
        let result = catalog::delete_item(&self.db, id).await;
        let result = self.after_catalog_op(result).await;
        self.busy = false;
        result
    }

    /// Appends an entry to the active list and refreshes its snapshot.
    pub async fn add_to_list(
        &mut self,
        item_id: i64,
        quantity: i32,
        unit_price: Option<f64>,
    ) -> Result<list_entry::Model> {
        self.begin_op()?;
        let result = list::add_to_list(&self.db, item_id, quantity, unit_price).await;
        let result = self.after_list_op(result).await;
        self.busy = false;
        result
    }

    /// Applies a partial update to an entry and refreshes the list snapshot.
    pub async fn update_entry(&mut self, id: i64, patch: EntryPatch) -> Result<list_entry::Model> {
        self.begin_op()?;
        let result = list::update_entry(&self.db, id, patch).await;
        let result = self.after_list_op(result).await;
        self.busy = false;
        result
    }

    /// Removes an entry and refreshes the list snapshot.
    pub async fn remove_entry(&mut self, id: i64) -> Result<()> {
        self.begin_op()?;
        let result = list::remove_entry(&self.db, id).await;
        let result = self.after_list_op(result).await;
        self.busy = false;
        result
    }

    /// Clears the active list and refreshes its snapshot.
    pub async fn clear_list(&mut self) -> Result<u64> {
        self.begin_op()?;
        let result = list::clear_list(&self.db).await;
        let result = self.after_list_op(result).await;
        self.busy = false;
        result
    }

    /// Archives the active list into this month's bucket, then refreshes the
    /// (now empty) list snapshot.
    pub async fn finalize_month(&mut self) -> Result<FinalizeResult> {
        self.begin_op()?;
        let result = archive::finalize_month(&self.db).await;
        let result = self.after_list_op(result).await;
        self.busy = false;
        result
    }

    /// Lists archived buckets, newest first. Read-only: no busy guard.
    pub async fn monthly_lists(&self) -> Result<Vec<monthly_list::Model>> {
        history::get_monthly_lists(&self.db).await
    }

    /// Lists the entries of one archived bucket. Read-only: no busy guard.
    pub async fn monthly_entries(&self, monthly_list_id: i64) -> Result<Vec<monthly_entry::Model>> {
        history::get_entries_for_list(&self.db, monthly_list_id).await
    }

    /// Copies archived entries back into the active list and refreshes its
    /// snapshot.
    pub async fn copy_from_history(
        &mut self,
        monthly_list_id: i64,
        selected_entry_ids: &[i64],
    ) -> Result<Vec<list_entry::Model>> {
        self.begin_op()?;
        let result = history::copy_to_active_list(&self.db, monthly_list_id, selected_entry_ids).await;
        let result = self.after_list_op(result).await;
        self.busy = false;
        result
    }

    /// On success, reloads the catalog snapshots (an edit may cascade into
    /// items, so both are reloaded together).
    async fn after_catalog_op<T>(&mut self, result: Result<T>) -> Result<T> {
        match result {
            Ok(value) => {
                self.categories = catalog::get_all_categories(&self.db).await?;
                self.items = catalog::get_all_items(&self.db).await?;
                Ok(value)
            }
            Err(e) => Err(e),
        }
    }

    /// On success, reloads the active-list snapshot.
    async fn after_list_op<T>(&mut self, result: Result<T>) -> Result<T> {
        match result {
            Ok(value) => {
                self.active_list = list::get_active_entries(&self.db).await?;
                Ok(value)
            }
            Err(e) => Err(e),
        }
    }
}
