use serde::{Deserialize, Serialize};

/// A single scheduled item in the timeline.
///
/// Field names follow the surrounding application's JSON (camelCase on the
/// wire). The core only ever rewrites `category` and reorders the list;
/// everything else is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    /// Sortable time value, compared lexicographically
    /// (`"14:30"`, `"2026-06-20T14:30"`, ...)
    pub start_time: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Name of the category this item belongs to, when categorization is on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl TimelineItem {
    pub fn new(start_time: String, title: String) -> Self {
        TimelineItem {
            start_time,
            title,
            duration_min: None,
            notes: None,
            category: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_and_skips_empty_fields() {
        let item = TimelineItem::new("14:30".into(), "Ceremony begins".into());
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"startTime":"14:30","title":"Ceremony begins"}"#);
    }

    #[test]
    fn round_trips_full_item() {
        let mut item = TimelineItem::new("15:00".into(), "Cocktail hour".into());
        item.duration_min = Some(60);
        item.notes = Some("terrace, weather permitting".into());
        item.category = Some("Reception".into());
        let json = serde_json::to_string(&item).unwrap();
        let back: TimelineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let item: TimelineItem =
            serde_json::from_str(r#"{"startTime":"09:00","title":"Hair and makeup"}"#).unwrap();
        assert_eq!(item.category, None);
        assert_eq!(item.duration_min, None);
    }
}
