use crate::guard::{GuardState, ItemStore, NavGuard, NavOutcome, Navigator, PersistenceError};
use crate::model::category::{Category, CategoryId, CategoryMode, Taxonomy};
use crate::model::config::EditorConfig;
use crate::model::item::TimelineItem;
use crate::ops::category_ops::{self, ToggleOutcome, ValidationError};

/// One timeline's editing state: the category taxonomy, the item list, and
/// the unsaved-changes guard, behind the surface a front end drives.
///
/// Each timeline/template instance owns its own editor; nothing here is
/// shared. All methods run synchronously on the caller's thread.
pub struct TimelineEditor {
    config: EditorConfig,
    taxonomy: Taxonomy,
    items: Vec<TimelineItem>,
    guard: NavGuard,
}

impl TimelineEditor {
    pub fn new(config: EditorConfig, items: Vec<TimelineItem>) -> Self {
        TimelineEditor {
            config,
            taxonomy: Taxonomy::new(),
            items,
            guard: NavGuard::new(),
        }
    }

    /// Restore an editor over a previously-persisted taxonomy (e.g. reopening
    /// a template that already had categories). Starts clean.
    pub fn with_taxonomy(config: EditorConfig, taxonomy: Taxonomy, items: Vec<TimelineItem>) -> Self {
        TimelineEditor {
            config,
            taxonomy,
            items,
            guard: NavGuard::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Category taxonomy
    // -----------------------------------------------------------------------

    /// Toggle categorization. Enabling takes effect immediately (seeding a
    /// default category when the taxonomy is empty); disabling only returns
    /// `ConfirmDisable` — the caller shows a prompt and follows up with
    /// `confirm_disable_categories` or `cancel_disable_categories`.
    pub fn set_categories_enabled(&mut self, enabled: bool) -> ToggleOutcome {
        if enabled {
            let outcome = category_ops::enable(
                &mut self.taxonomy,
                &mut self.items,
                &self.config.default_category,
            );
            if outcome != ToggleOutcome::NoChange {
                self.guard.mark_dirty();
            }
            outcome
        } else {
            // Intent only — nothing mutates until the confirmation lands
            category_ops::request_disable(&mut self.taxonomy)
        }
    }

    /// Confirmed disable: clears every item's category and re-sorts by start
    /// time. No-op when no disable prompt is open.
    pub fn confirm_disable_categories(&mut self) {
        if category_ops::confirm_disable(&mut self.taxonomy, &mut self.items) {
            self.guard.mark_dirty();
        }
    }

    /// Cancelled disable: categorization stays enabled, data untouched.
    pub fn cancel_disable_categories(&mut self) {
        category_ops::cancel_disable(&mut self.taxonomy);
    }

    pub fn add_category(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<CategoryId, ValidationError> {
        let id = category_ops::add_category(&mut self.taxonomy, name, description)?;
        self.guard.mark_dirty();
        Ok(id)
    }

    pub fn edit_category(
        &mut self,
        id: CategoryId,
        name: &str,
        description: &str,
    ) -> Result<(), ValidationError> {
        category_ops::edit_category(&mut self.taxonomy, &mut self.items, id, name, description)?;
        self.guard.mark_dirty();
        Ok(())
    }

    pub fn delete_category(&mut self, id: CategoryId) -> Result<(), ValidationError> {
        category_ops::delete_category(&mut self.taxonomy, &mut self.items, id)?;
        self.guard.mark_dirty();
        Ok(())
    }

    pub fn reorder_category(&mut self, from: usize, to: usize) -> Result<(), ValidationError> {
        category_ops::reorder_category(&mut self.taxonomy, from, to)?;
        self.guard.mark_dirty();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Hand the item list to the host for a direct edit — item CRUD belongs
    /// to the surrounding editor. Any call counts as an unsaved change.
    pub fn edit_items<R>(&mut self, f: impl FnOnce(&mut Vec<TimelineItem>) -> R) -> R {
        let out = f(&mut self.items);
        self.guard.mark_dirty();
        out
    }

    // -----------------------------------------------------------------------
    // Navigation guard
    // -----------------------------------------------------------------------

    pub fn request_navigation(&mut self, path: &str, nav: &mut dyn Navigator) -> NavOutcome {
        self.guard.request_navigation(path, nav)
    }

    pub fn confirm_and_save(
        &mut self,
        store: &mut dyn ItemStore,
        nav: &mut dyn Navigator,
    ) -> Result<(), PersistenceError> {
        self.guard.confirm_and_save(&self.items, store, nav)
    }

    pub fn discard_and_leave(&mut self, nav: &mut dyn Navigator) {
        self.guard.discard_and_leave(nav);
    }

    pub fn cancel_navigation(&mut self) {
        self.guard.cancel_navigation();
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Save the current items outside any navigation flow (the editor's
    /// plain save action). Success clears the dirty flag.
    pub fn save(&mut self, store: &mut dyn ItemStore) -> Result<(), PersistenceError> {
        store.save_items(&self.items)?;
        self.guard.mark_clean();
        Ok(())
    }

    /// Re-fetch items from the store, discarding local edits. On failure the
    /// in-memory items and the dirty flag are left as they were.
    pub fn reload(&mut self, store: &mut dyn ItemStore) -> Result<(), PersistenceError> {
        self.items = store.load_items()?;
        self.guard.mark_clean();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    /// Categories in display order
    pub fn categories(&self) -> Vec<&Category> {
        self.taxonomy.ordered()
    }

    pub fn categories_enabled(&self) -> bool {
        self.taxonomy.mode.is_enabled()
    }

    /// True while a disable prompt is waiting for an answer
    pub fn disable_pending(&self) -> bool {
        self.taxonomy.mode == CategoryMode::DisablePending
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn items(&self) -> &[TimelineItem] {
        &self.items
    }

    pub fn guard_state(&self) -> &GuardState {
        self.guard.state()
    }

    pub fn is_dirty(&self) -> bool {
        self.guard.is_dirty()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
}
