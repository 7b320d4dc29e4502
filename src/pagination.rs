use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::domain::types::PageSize;

/// Number of pages shown on each side of the current page in the page strip.
const WINDOW_RADIUS: usize = 2;

/// A single entry of the page strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

impl Display for PageMarker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PageMarker::Page(page) => write!(f, "{page}"),
            PageMarker::Ellipsis => f.write_str("…"),
        }
    }
}

impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageMarker::Page(page) => serializer.serialize_u64(*page as u64),
            PageMarker::Ellipsis => serializer.serialize_str("…"),
        }
    }
}

fn get_pages(total_pages: usize, current_page: usize) -> Vec<PageMarker> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = vec![PageMarker::Page(1)];
    if last_page == 1 {
        return pages;
    }

    if current_page.saturating_sub(WINDOW_RADIUS) > 2 {
        pages.push(PageMarker::Ellipsis);
    }

    let mid_start = current_page.saturating_sub(WINDOW_RADIUS).max(2);
    let mid_end = current_page.saturating_add(WINDOW_RADIUS).min(last_page - 1);
    pages.extend((mid_start..=mid_end).map(PageMarker::Page));

    // A trailing gap of a single page shows that page instead of an ellipsis.
    if mid_end.saturating_add(2) < last_page {
        pages.push(PageMarker::Ellipsis);
    } else {
        pages.extend((mid_end + 1..last_page).map(PageMarker::Page));
    }
    pages.push(PageMarker::Page(last_page));

    pages
}

/// Current page and page size of the employee table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    page_size: PageSize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(1, PageSize::default())
    }
}

impl PaginationState {
    pub fn new(initial_page: usize, page_size: PageSize) -> Self {
        Self {
            current_page: initial_page.max(1),
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Sets the page without clamping to a page count. Used for resets.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Replaces the page size. The current page is left untouched; callers
    /// reset it explicitly since the old page no longer means the same rows.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
    }

    /// Moves to `target`, clamped into `[1, total_pages]`.
    pub fn go_to_page(&mut self, target: usize, total_pages: usize) {
        self.current_page = target.min(total_pages).max(1);
    }

    /// Compact page strip around the current page.
    pub fn page_numbers(&self, total_pages: usize) -> Vec<PageMarker> {
        get_pages(total_pages, self.current_page)
    }

    /// One-based bounds of the rows visible on the current page, as shown in
    /// "Showing X to Y of Z". Both bounds are zero for an empty result.
    pub fn record_range(&self, total_records: usize) -> (usize, usize) {
        let size = self.page_size.get();
        let start = (self.current_page - 1)
            .saturating_mul(size)
            .saturating_add(1)
            .min(total_records);
        let end = self.current_page.saturating_mul(size).min(total_records);
        (start, end)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total_pages: usize) -> bool {
        self.current_page < total_pages
    }
}

/// One page of query results together with the counts of the whole result.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    #[serde(rename = "data")]
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: PageSize,
    pub total_pages: usize,
}

impl<T> PageResult<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
