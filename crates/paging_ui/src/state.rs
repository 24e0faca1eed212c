//! Normalized pagination position and the input sanitizers that produce it.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Current page and page count after normalization.
///
/// Both values are one-based and `current_page <= total_pages` always holds; the only way to
/// obtain a state is through [`PaginationState::new`] or [`normalize_state`].
pub struct PaginationState {
    current_page: u32,
    total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl PaginationState {
    /// Builds a state from integer input, flooring `total_pages` to one and clamping
    /// `current_page` into `1..=total_pages`.
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
        }
    }

    /// One-based current page.
    pub fn current_page(self) -> u32 {
        self.current_page
    }

    /// Total page count (at least one).
    pub fn total_pages(self) -> u32 {
        self.total_pages
    }

    /// Returns `true` when the current page is the first page.
    pub fn is_first(self) -> bool {
        self.current_page == 1
    }

    /// Returns `true` when the current page is the last page.
    pub fn is_last(self) -> bool {
        self.current_page == self.total_pages
    }

    /// Returns a state positioned at `page`, clamped into the valid range.
    pub fn go_to(self, page: u32) -> Self {
        Self::new(page, self.total_pages)
    }

    /// Half-open range of item indices shown on the current page.
    ///
    /// `page_size == 0` is treated as one item per page. The range never extends past
    /// `total_items`, so it is empty when the current page lies beyond the data.
    pub fn item_range(self, page_size: usize, total_items: usize) -> Range<usize> {
        let page_size = page_size.max(1);
        let start = (self.current_page as usize - 1)
            .saturating_mul(page_size)
            .min(total_items);
        let end = start.saturating_add(page_size).min(total_items);
        start..end
    }
}

/// Sanitizes raw numeric `(current_page, total_pages)` input.
///
/// `total' = max(1, floor(total))` and `current' = max(1, min(total', floor(current)))`.
/// `NaN` clamps to one and values past `u32::MAX` saturate.
pub fn normalize_state(current_page: f64, total_pages: f64) -> PaginationState {
    let total_pages = floor_page(total_pages);
    PaginationState {
        current_page: floor_page(current_page).min(total_pages),
        total_pages,
    }
}

/// Number of pages needed to show `total_items` at `page_size` items per page.
///
/// Always at least one page so an empty listing still renders a single page.
pub fn page_count(total_items: usize, page_size: usize) -> u32 {
    let pages = total_items.div_ceil(page_size.max(1));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

fn floor_page(raw: f64) -> u32 {
    // Float-to-int casts saturate and map NaN to zero.
    (raw.floor() as u32).max(1)
}
