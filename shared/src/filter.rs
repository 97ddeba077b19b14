//! Category and free-text filtering over fetched collections.

use crate::models::ContentRecord;

/// Sentinel meaning "no category filter applied".
pub const CATEGORY_ALL: &str = "all";

/// Fixed category list rendered as filter buttons.
///
/// "Faishon" matches the spelling already stored on backend records; do
/// not correct it here without migrating the stored data.
pub const CATEGORIES: &[&str] = &[
    "Business",
    "Culture",
    "Entertainment",
    "Faishon",
    "Lifestyle",
    "Politics",
    "Sports",
    "Technology",
    "Travel",
];

/// Category predicate: exact sentinel pass-through, otherwise a
/// case-insensitive comparison. A record without a category never matches
/// a non-sentinel selection.
pub fn matches_category(record: &ContentRecord, selected: &str) -> bool {
    selected == CATEGORY_ALL
        || (!record.category.is_empty() && record.category.eq_ignore_ascii_case(selected))
}

/// Free-text predicate: lower-cased substring over title or description.
/// An empty query matches everything.
pub fn matches_query(record: &ContentRecord, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
}

/// AND-combined category + query filter. Callers reset pagination to
/// page 1 whenever either input changes.
pub fn filter_records(
    records: &[ContentRecord],
    selected_category: &str,
    query: &str,
) -> Vec<ContentRecord> {
    records
        .iter()
        .filter(|record| matches_category(record, selected_category) && matches_query(record, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, category: &str, description: &str) -> ContentRecord {
        ContentRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image: None,
            category: category.to_string(),
            date: String::new(),
            author: String::new(),
            status: None,
            pdf: None,
        }
    }

    #[test]
    fn result_is_subset_and_satisfies_both_conjuncts() {
        let all = vec![
            record("1", "Rates climb again", "Business", "Central banks move"),
            record("2", "Street style", "Faishon", "Paris looks"),
            record("3", "Quiet markets", "Business", "A slow week"),
        ];
        let filtered = filter_records(&all, "business", "markets");
        assert_eq!(filtered.len(), 1);
        for kept in &filtered {
            assert!(all.contains(kept));
            assert!(matches_category(kept, "business"));
            assert!(matches_query(kept, "markets"));
        }
    }

    #[test]
    fn sentinel_passes_every_category() {
        let all = vec![
            record("1", "A", "Travel", ""),
            record("2", "B", "unlisted-category", ""),
        ];
        assert_eq!(filter_records(&all, CATEGORY_ALL, "").len(), 2);
    }

    #[test]
    fn empty_query_matches_everything() {
        let record = record("1", "Anything", "Sports", "at all");
        assert!(matches_query(&record, ""));
    }

    #[test]
    fn category_comparison_ignores_case() {
        let record = record("1", "A", "Tech", "x");
        assert!(matches_category(&record, "tech"));
        assert!(matches_category(&record, "TECH"));
        assert!(!matches_category(&record, "business"));
    }

    #[test]
    fn missing_category_never_matches_non_sentinel() {
        let record = record("1", "A", "", "x");
        assert!(!matches_category(&record, "Business"));
        assert!(!matches_category(&record, ""));
        assert!(matches_category(&record, CATEGORY_ALL));
    }

    #[test]
    fn query_searches_title_and_description() {
        let record = record("1", "Harbor lights", "Travel", "An evening walk");
        assert!(matches_query(&record, "HARBOR"));
        assert!(matches_query(&record, "evening"));
        assert!(!matches_query(&record, "morning"));
    }

    #[test]
    fn fetched_scenario_filters_by_category() {
        // GET /news/get-news → { data: [...] }, then category filtering.
        let body = serde_json::json!({
            "data": [{"_id": "1", "title": "A", "category": "Tech", "description": "x"}],
        });
        let fetched = crate::envelope::records(
            crate::models::ContentKind::News.envelope_keys(),
            body,
        );
        let tech = filter_records(&fetched, "tech", "");
        assert_eq!(tech.len(), 1);
        assert_eq!(tech[0].id, "1");

        let business = filter_records(&fetched, "business", "");
        assert!(business.is_empty());
        assert_eq!(crate::paginate::total_pages(business.len(), 6), 1);
    }
}
