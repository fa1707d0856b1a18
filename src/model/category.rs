use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque category identifier, unique within one taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(pub u64);

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single category record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Display name; also the join key items reference
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Display/priority order; not necessarily contiguous
    pub order: i64,
    /// Creation date (`YYYY-MM-DD`)
    pub added: String,
}

/// Whether categorization is on, off, or on with a disable prompt open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMode {
    Disabled,
    Enabled,
    /// Still enabled — the destructive step waits for an explicit confirm
    DisablePending,
}

impl CategoryMode {
    /// Disabling only takes effect once confirmed
    pub fn is_enabled(self) -> bool {
        !matches!(self, CategoryMode::Disabled)
    }
}

/// The ordered category set for one timeline, with its enabled/disabled mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxonomy {
    pub mode: CategoryMode,
    /// Insertion-ordered: map order is the creation sequence
    pub categories: IndexMap<CategoryId, Category>,
    #[serde(default)]
    next_id: u64,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::new()
    }
}

impl Taxonomy {
    pub fn new() -> Self {
        Taxonomy {
            mode: CategoryMode::Disabled,
            categories: IndexMap::new(),
            next_id: 0,
        }
    }

    /// Categories in display order: ascending `order`, ties broken by
    /// creation sequence (stable sort over insertion order)
    pub fn ordered(&self) -> Vec<&Category> {
        let mut cats: Vec<&Category> = self.categories.values().collect();
        cats.sort_by_key(|c| c.order);
        cats
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    pub fn get_mut(&mut self, id: CategoryId) -> Option<&mut Category> {
        self.categories.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Next unused id. Ids are never reused after a delete, and never
    /// collide with existing ids even when the taxonomy was restored
    /// without its counter.
    pub fn fresh_id(&mut self) -> CategoryId {
        let floor = self.categories.keys().map(|k| k.0 + 1).max().unwrap_or(0);
        self.next_id = self.next_id.max(floor);
        let id = CategoryId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: u64, name: &str, order: i64) -> Category {
        Category {
            id: CategoryId(id),
            name: name.to_string(),
            description: String::new(),
            order,
            added: "2026-06-01".to_string(),
        }
    }

    #[test]
    fn ordered_sorts_by_order_field() {
        let mut tax = Taxonomy::new();
        for c in [cat(0, "c", 2), cat(1, "a", 0), cat(2, "b", 1)] {
            tax.categories.insert(c.id, c);
        }
        let names: Vec<&str> = tax.ordered().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn ordered_breaks_ties_by_creation_sequence() {
        let mut tax = Taxonomy::new();
        // Same order value — insertion sequence decides
        for c in [cat(0, "first", 5), cat(1, "second", 5), cat(2, "third", 5)] {
            tax.categories.insert(c.id, c);
        }
        let names: Vec<&str> = tax.ordered().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn fresh_id_never_reuses() {
        let mut tax = Taxonomy::new();
        let a = tax.fresh_id();
        let b = tax.fresh_id();
        assert_ne!(a, b);
        tax.categories.shift_remove(&a);
        let c = tax.fresh_id();
        assert_ne!(c, a);
        assert_ne!(c, b);
    }

    #[test]
    fn fresh_id_skips_ids_of_a_restored_taxonomy() {
        let mut tax = Taxonomy::new();
        let c = cat(7, "restored", 0);
        tax.categories.insert(c.id, c);
        // Counter was lost (e.g. hand-written persisted data)
        let id = tax.fresh_id();
        assert_eq!(id, CategoryId(8));
    }

    #[test]
    fn mode_is_enabled_during_pending_disable() {
        assert!(CategoryMode::Enabled.is_enabled());
        assert!(CategoryMode::DisablePending.is_enabled());
        assert!(!CategoryMode::Disabled.is_enabled());
    }
}
