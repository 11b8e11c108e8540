//! Pagination arithmetic for list pages.
//!
//! The requested page comes straight from the `page` query parameter. Anything
//! that is not a positive integer means page 1. There is no upper
//! clamp: a page past the end is passed to the source, which returns an empty
//! list, and the page renders with no items.

/// Parse a requested page number, defaulting to 1.
pub fn current_page(requested: Option<&str>) -> u32 {
    requested
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

/// Number of pages needed for `total` items at `page_size` per page.
///
/// Rounds up. A `page_size` of zero yields zero pages.
pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Page links and the current page for one list render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current: u32,
    pages: Vec<u32>,
}

impl Pagination {
    /// Build pagination from a raw page request.
    pub fn new(total: u64, page_size: u32, requested: Option<&str>) -> Self {
        Self::for_page(total, page_size, current_page(requested))
    }

    /// Build pagination for an already-parsed current page.
    pub fn for_page(total: u64, page_size: u32, current: u32) -> Self {
        Self {
            current: current.max(1),
            pages: (1..=page_count(total, page_size)).collect(),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// Page numbers from 1 to the last page. Empty when there are no items.
    pub fn pages(&self) -> &[u32] {
        &self.pages
    }

    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    pub fn is_current(&self, page: u32) -> bool {
        page == self.current
    }

    /// Whether a page-link row should be shown.
    pub fn has_controls(&self) -> bool {
        self.pages.len() > 1
    }
}
