use crate::model::item::TimelineItem;

// Reconciliation pass: the category-field rewrites commanded by taxonomy
// operations. Every function here is total: an item whose `category` matches
// nothing is left alone, never an error.

/// Rewrite every item referencing `old_name` to `new_name`.
pub fn apply_category_rename(items: &mut [TimelineItem], old_name: &str, new_name: &str) {
    for item in items.iter_mut() {
        if item.category.as_deref() == Some(old_name) {
            item.category = Some(new_name.to_string());
        }
    }
}

/// Clear `category` on every item matching the predicate.
pub fn clear_category(items: &mut [TimelineItem], pred: impl Fn(&TimelineItem) -> bool) {
    for item in items.iter_mut() {
        if pred(item) {
            item.category = None;
        }
    }
}

/// Assign `name` to every item's `category`, replacing whatever was there.
pub fn assign_category_to_all(items: &mut [TimelineItem], name: &str) {
    for item in items.iter_mut() {
        item.category = Some(name.to_string());
    }
}

/// Sort items by `start_time` ascending (lexicographic). Stable, so items
/// sharing a start time keep their relative order.
pub fn sort_by_start_time(items: &mut [TimelineItem]) {
    items.sort_by(|a, b| a.start_time.cmp(&b.start_time));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(start: &str, title: &str, category: Option<&str>) -> TimelineItem {
        let mut it = TimelineItem::new(start.to_string(), title.to_string());
        it.category = category.map(|c| c.to_string());
        it
    }

    fn sample_items() -> Vec<TimelineItem> {
        vec![
            item("14:00", "Ceremony begins", Some("Ceremony")),
            item("12:30", "Guests arrive", Some("Ceremony")),
            item("18:00", "First dance", Some("Reception")),
            item("10:00", "Hair and makeup", None),
        ]
    }

    #[test]
    fn rename_touches_only_matching_items() {
        let mut items = sample_items();
        apply_category_rename(&mut items, "Ceremony", "Main Ceremony");
        assert_eq!(items[0].category.as_deref(), Some("Main Ceremony"));
        assert_eq!(items[1].category.as_deref(), Some("Main Ceremony"));
        assert_eq!(items[2].category.as_deref(), Some("Reception"));
        assert_eq!(items[3].category, None);
    }

    #[test]
    fn rename_with_no_match_is_a_noop() {
        let mut items = sample_items();
        let before = items.clone();
        apply_category_rename(&mut items, "Afterparty", "Late Night");
        assert_eq!(items, before);
    }

    #[test]
    fn clear_category_by_name_predicate() {
        let mut items = sample_items();
        clear_category(&mut items, |it| it.category.as_deref() == Some("Ceremony"));
        assert_eq!(items[0].category, None);
        assert_eq!(items[1].category, None);
        assert_eq!(items[2].category.as_deref(), Some("Reception"));
    }

    #[test]
    fn clear_category_all() {
        let mut items = sample_items();
        clear_category(&mut items, |_| true);
        assert!(items.iter().all(|it| it.category.is_none()));
    }

    #[test]
    fn assign_category_to_all_overwrites_existing() {
        let mut items = sample_items();
        assign_category_to_all(&mut items, "General");
        assert!(items.iter().all(|it| it.category.as_deref() == Some("General")));
    }

    #[test]
    fn sort_by_start_time_ascending() {
        let mut items = sample_items();
        sort_by_start_time(&mut items);
        let starts: Vec<&str> = items.iter().map(|it| it.start_time.as_str()).collect();
        assert_eq!(starts, vec!["10:00", "12:30", "14:00", "18:00"]);
    }

    #[test]
    fn sort_is_stable_for_equal_start_times() {
        let mut items = vec![
            item("12:00", "Toast", None),
            item("09:00", "Setup", None),
            item("12:00", "Cake cutting", None),
        ];
        sort_by_start_time(&mut items);
        assert_eq!(items[0].title, "Setup");
        assert_eq!(items[1].title, "Toast");
        assert_eq!(items[2].title, "Cake cutting");
    }
}
