use chrono::Local;

use crate::model::category::{Category, CategoryId, CategoryMode, Taxonomy};
use crate::model::item::TimelineItem;
use crate::ops::item_ops;

/// Error type for taxonomy operations. Every rejected operation leaves the
/// taxonomy and the item list exactly as they were.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("category name cannot be empty")]
    EmptyName,
    #[error("category not found: {0}")]
    UnknownCategory(CategoryId),
    #[error("invalid position: {0}")]
    BadIndex(usize),
}

/// Outcome of an enable/disable request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Flag flipped on; the taxonomy already had categories, items untouched
    Enabled,
    /// Flag flipped on; a default category was seeded and assigned to every item
    EnabledWithSeed,
    /// Disabling clears data — the caller must prompt, then either
    /// `confirm_disable` or `cancel_disable`
    ConfirmDisable,
    /// Already in the requested mode
    NoChange,
}

// ---------------------------------------------------------------------------
// Enable / disable
// ---------------------------------------------------------------------------

/// Turn categorization on.
///
/// First enable on an empty taxonomy seeds one default category (named
/// `seed_name`, order 0) and assigns it to every item — the only case where
/// items change as a side effect of category creation. Enabling over a
/// non-empty taxonomy flips the flag only, so a disable/re-enable cycle never
/// re-seeds. Enabling while a disable prompt is open withdraws the prompt.
pub fn enable(
    taxonomy: &mut Taxonomy,
    items: &mut [TimelineItem],
    seed_name: &str,
) -> ToggleOutcome {
    match taxonomy.mode {
        CategoryMode::Enabled => ToggleOutcome::NoChange,
        CategoryMode::DisablePending => {
            taxonomy.mode = CategoryMode::Enabled;
            ToggleOutcome::NoChange
        }
        CategoryMode::Disabled => {
            taxonomy.mode = CategoryMode::Enabled;
            if taxonomy.is_empty() {
                let id = taxonomy.fresh_id();
                let seed = Category {
                    id,
                    name: seed_name.to_string(),
                    description: String::new(),
                    order: 0,
                    added: today_str(),
                };
                taxonomy.categories.insert(id, seed);
                item_ops::assign_category_to_all(items, seed_name);
                ToggleOutcome::EnabledWithSeed
            } else {
                ToggleOutcome::Enabled
            }
        }
    }
}

/// First half of turning categorization off: record the intent and ask the
/// caller to confirm. No data changes until `confirm_disable`.
pub fn request_disable(taxonomy: &mut Taxonomy) -> ToggleOutcome {
    match taxonomy.mode {
        CategoryMode::Disabled => ToggleOutcome::NoChange,
        CategoryMode::Enabled | CategoryMode::DisablePending => {
            taxonomy.mode = CategoryMode::DisablePending;
            ToggleOutcome::ConfirmDisable
        }
    }
}

/// Confirmed second half of disabling: clear `category` on every item and
/// re-sort by start time in the same pass. Category records are kept — only
/// the mode and the item references change. A no-op unless a disable is
/// actually pending.
pub fn confirm_disable(taxonomy: &mut Taxonomy, items: &mut [TimelineItem]) -> bool {
    if taxonomy.mode != CategoryMode::DisablePending {
        return false;
    }
    taxonomy.mode = CategoryMode::Disabled;
    item_ops::clear_category(items, |_| true);
    item_ops::sort_by_start_time(items);
    true
}

/// Withdraw a pending disable. The enabled flag was never observably false.
pub fn cancel_disable(taxonomy: &mut Taxonomy) {
    if taxonomy.mode == CategoryMode::DisablePending {
        taxonomy.mode = CategoryMode::Enabled;
    }
}

// ---------------------------------------------------------------------------
// Category CRUD
// ---------------------------------------------------------------------------

/// Add a category at the end of the display order (`order` = max + 1, or 0
/// when the taxonomy is empty). Returns the assigned id.
pub fn add_category(
    taxonomy: &mut Taxonomy,
    name: &str,
    description: &str,
) -> Result<CategoryId, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let order = taxonomy
        .categories
        .values()
        .map(|c| c.order)
        .max()
        .map_or(0, |max| max + 1);
    let id = taxonomy.fresh_id();
    let category = Category {
        id,
        name: name.to_string(),
        description: description.to_string(),
        order,
        added: today_str(),
    };
    taxonomy.categories.insert(id, category);
    Ok(id)
}

/// Edit a category's name and description in place. `order` is untouched.
/// A name change rewrites every item referencing the old name in the same
/// call, so item references never go stale.
pub fn edit_category(
    taxonomy: &mut Taxonomy,
    items: &mut [TimelineItem],
    id: CategoryId,
    name: &str,
    description: &str,
) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let category = taxonomy
        .get_mut(id)
        .ok_or(ValidationError::UnknownCategory(id))?;
    let old_name = std::mem::replace(&mut category.name, name.to_string());
    category.description = description.to_string();
    if old_name != name {
        item_ops::apply_category_rename(items, &old_name, name);
    }
    Ok(())
}

/// Delete a category and clear `category` on every item that referenced it.
/// Remaining categories keep their `order` values — no renumbering.
pub fn delete_category(
    taxonomy: &mut Taxonomy,
    items: &mut [TimelineItem],
    id: CategoryId,
) -> Result<(), ValidationError> {
    let removed = taxonomy
        .categories
        .shift_remove(&id)
        .ok_or(ValidationError::UnknownCategory(id))?;
    item_ops::clear_category(items, |it| it.category.as_deref() == Some(removed.name.as_str()));
    Ok(())
}

/// Move the category at display position `from` to display position `to`
/// (drag-and-drop reorder): splice the display sequence, then renumber every
/// `order` to the new position (0..n-1, contiguous), so ties cannot survive
/// a reorder.
pub fn reorder_category(
    taxonomy: &mut Taxonomy,
    from: usize,
    to: usize,
) -> Result<(), ValidationError> {
    let len = taxonomy.len();
    if from >= len {
        return Err(ValidationError::BadIndex(from));
    }
    if to >= len {
        return Err(ValidationError::BadIndex(to));
    }
    let mut sequence: Vec<CategoryId> = taxonomy.ordered().iter().map(|c| c.id).collect();
    let id = sequence.remove(from);
    sequence.insert(to, id);
    for (position, id) in sequence.iter().enumerate() {
        if let Some(category) = taxonomy.get_mut(*id) {
            category.order = position as i64;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn today_str() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
