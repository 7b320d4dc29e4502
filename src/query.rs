//! Filtering and pagination over an in-memory record set.

use crate::domain::employee::Employee;
use crate::domain::types::PageSize;
use crate::pagination::PageResult;

/// Records that can be matched by a free-text search.
pub trait Searchable {
    /// Returns `true` when the record matches the lower-cased `needle`.
    fn matches(&self, needle: &str) -> bool;
}

impl Searchable for Employee {
    fn matches(&self, needle: &str) -> bool {
        Employee::matches(self, needle)
    }
}

/// Filters `records` by `search` and returns the requested page.
///
/// An empty (or whitespace-only) search keeps every record. Page `0` is
/// treated as page `1`; pages past the end yield an empty slice while `total`
/// and `total_pages` still describe the whole filtered set.
pub fn query<T>(records: &[T], search: &str, page: usize, page_size: PageSize) -> PageResult<T>
where
    T: Searchable + Clone,
{
    let needle = search.trim().to_lowercase();
    let filtered: Vec<&T> = if needle.is_empty() {
        records.iter().collect()
    } else {
        records.iter().filter(|record| record.matches(&needle)).collect()
    };

    let page = page.max(1);
    let limit = page_size.get();
    let total = filtered.len();
    let total_pages = total.div_ceil(limit);

    let items = filtered
        .into_iter()
        .skip((page - 1).saturating_mul(limit))
        .take(limit)
        .cloned()
        .collect();

    PageResult {
        items,
        total,
        page,
        limit: page_size,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches(&self, needle: &str) -> bool {
            self.0.to_lowercase().contains(needle)
        }
    }

    fn rows(count: usize) -> Vec<Row> {
        const NAMES: [&str; 3] = ["Alpha", "Beta", "Gamma"];
        (0..count).map(|i| Row(NAMES[i % NAMES.len()])).collect()
    }

    fn size(value: usize) -> PageSize {
        PageSize::new(value).unwrap()
    }

    #[test]
    fn empty_search_keeps_all_records() {
        let result = query(&rows(23), "", 1, size(10));
        assert_eq!(result.total, 23);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.items.len(), 10);
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        let result = query(&rows(30), "  gAm ", 1, size(25));
        assert_eq!(result.total, 10);
        assert!(result.items.iter().all(|row| row.0 == "Gamma"));
    }

    #[test]
    fn last_page_is_partial() {
        let result = query(&rows(23), "", 3, size(10));
        assert_eq!(result.items.len(), 3);
        assert_eq!(result.page, 3);
    }

    #[test]
    fn page_past_end_is_empty_but_counts_hold() {
        let result = query(&rows(23), "", 4, size(10));
        assert!(result.is_empty());
        assert_eq!(result.total, 23);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn no_matches_has_zero_pages() {
        let result = query(&rows(5), "delta", 1, size(10));
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
        assert!(result.is_empty());
    }

    #[test]
    fn page_zero_is_first_page() {
        let records = rows(12);
        assert_eq!(
            query(&records, "", 0, size(10)),
            query(&records, "", 1, size(10))
        );
    }

    #[test]
    fn input_is_not_mutated() {
        let records = rows(7);
        let before = records.clone();
        let _ = query(&records, "beta", 1, size(10));
        assert_eq!(records, before);
    }
}
