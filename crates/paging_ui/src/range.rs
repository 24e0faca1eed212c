//! Page-range computation for pagination controls.
//!
//! The computer is a pure function of a normalized [`PaginationState`] and a
//! [`PaginationConfig`]: the first and last page are always reachable, a sliding window of pages
//! surrounds the current page, and ellipsis markers stand in for every hidden gap.

use crate::config::{PaginationConfig, PaginationLabels};
use crate::state::PaginationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Item kinds emitted by the range computer.
pub enum PaginationItemKind {
    /// Jump to the first page.
    First,
    /// Step back one page.
    Previous,
    /// Direct page button.
    Page,
    /// Hidden-range placeholder.
    Ellipsis,
    /// Step forward one page.
    Next,
    /// Jump to the last page.
    Last,
}

impl PaginationItemKind {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Previous => "previous",
            Self::Page => "page",
            Self::Ellipsis => "ellipsis",
            Self::Next => "next",
            Self::Last => "last",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One display unit of a pagination control.
pub enum PaginationItem {
    /// Jump-to-first control targeting page one.
    First {
        /// Target page.
        page: u32,
        /// Whether activation is blocked.
        disabled: bool,
    },
    /// Step-back control.
    Previous {
        /// Target page.
        page: u32,
        /// Whether activation is blocked.
        disabled: bool,
    },
    /// Direct page button.
    Page {
        /// Page number.
        page: u32,
        /// Whether this is the current page.
        active: bool,
        /// Whether activation is blocked.
        disabled: bool,
    },
    /// Non-interactive marker for hidden pages.
    Ellipsis {
        /// Position of the marker within the page/ellipsis run.
        index: usize,
    },
    /// Step-forward control.
    Next {
        /// Target page.
        page: u32,
        /// Whether activation is blocked.
        disabled: bool,
    },
    /// Jump-to-last control targeting the final page.
    Last {
        /// Target page.
        page: u32,
        /// Whether activation is blocked.
        disabled: bool,
    },
}

impl PaginationItem {
    /// Kind tag of the item.
    pub fn kind(&self) -> PaginationItemKind {
        match self {
            Self::First { .. } => PaginationItemKind::First,
            Self::Previous { .. } => PaginationItemKind::Previous,
            Self::Page { .. } => PaginationItemKind::Page,
            Self::Ellipsis { .. } => PaginationItemKind::Ellipsis,
            Self::Next { .. } => PaginationItemKind::Next,
            Self::Last { .. } => PaginationItemKind::Last,
        }
    }

    /// Page the item navigates to; `None` for ellipsis markers.
    pub fn target_page(&self) -> Option<u32> {
        match *self {
            Self::First { page, .. }
            | Self::Previous { page, .. }
            | Self::Page { page, .. }
            | Self::Next { page, .. }
            | Self::Last { page, .. } => Some(page),
            Self::Ellipsis { .. } => None,
        }
    }

    /// Returns `true` only for the page item matching the current page.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Page { active: true, .. })
    }

    /// Returns `true` when the item cannot be activated. Ellipsis markers are always disabled.
    pub fn is_disabled(&self) -> bool {
        match *self {
            Self::First { disabled, .. }
            | Self::Previous { disabled, .. }
            | Self::Page { disabled, .. }
            | Self::Next { disabled, .. }
            | Self::Last { disabled, .. } => disabled,
            Self::Ellipsis { .. } => true,
        }
    }

    /// Target page when the item may be activated.
    pub fn activation_target(&self) -> Option<u32> {
        if self.is_disabled() {
            None
        } else {
            self.target_page()
        }
    }

    /// Stable list-rendering key.
    pub fn key(&self) -> String {
        match self {
            Self::Page { page, .. } => format!("page-{page}"),
            Self::Ellipsis { index } => format!("ellipsis-{index}"),
            other => other.kind().token().to_string(),
        }
    }

    /// Visible text resolved against `labels`.
    pub fn text(&self, labels: &PaginationLabels) -> String {
        match self {
            Self::First { .. } => labels.first.text.clone(),
            Self::Previous { .. } => labels.previous.text.clone(),
            Self::Page { page, .. } => page.to_string(),
            Self::Ellipsis { .. } => labels.ellipsis.text.clone(),
            Self::Next { .. } => labels.next.text.clone(),
            Self::Last { .. } => labels.last.text.clone(),
        }
    }

    /// Accessible name resolved against `labels`.
    pub fn aria_label(&self, labels: &PaginationLabels) -> String {
        match self {
            Self::First { .. } => labels.first.aria_label.clone(),
            Self::Previous { .. } => labels.previous.aria_label.clone(),
            Self::Page { page, .. } => labels.page_label(*page),
            Self::Ellipsis { .. } => labels.ellipsis.aria_label.clone(),
            Self::Next { .. } => labels.next.aria_label.clone(),
            Self::Last { .. } => labels.last.aria_label.clone(),
        }
    }
}

/// Computes the full item sequence for a pagination control.
///
/// Order is first, previous, the page/ellipsis run, next, last, with the navigation items
/// present only when enabled in `config`. A single page produces an empty sequence.
pub fn compute_pagination_items(
    state: PaginationState,
    config: &PaginationConfig,
) -> Vec<PaginationItem> {
    let current = state.current_page();
    let total = state.total_pages();
    if total <= 1 {
        return Vec::new();
    }

    let disabled = config.disabled;
    let at_start = disabled || state.is_first();
    let at_end = disabled || state.is_last();

    let capacity = total.min(config.max_visible_pages.max(1)) as usize + 6;
    let mut items = Vec::with_capacity(capacity);
    if config.show_first_last {
        items.push(PaginationItem::First {
            page: 1,
            disabled: at_start,
        });
    }
    if config.show_prev_next {
        items.push(PaginationItem::Previous {
            page: current.saturating_sub(1).max(1),
            disabled: at_start,
        });
    }

    push_page_run(&mut items, state, config.max_visible_pages, disabled);

    if config.show_prev_next {
        items.push(PaginationItem::Next {
            page: current.saturating_add(1).min(total),
            disabled: at_end,
        });
    }
    if config.show_first_last {
        items.push(PaginationItem::Last {
            page: total,
            disabled: at_end,
        });
    }
    items
}

/// Computes only the page/ellipsis run, without navigation items.
///
/// `max_visible_pages` below one is treated as one.
pub fn page_run(state: PaginationState, max_visible_pages: u32) -> Vec<PaginationItem> {
    let mut items = Vec::new();
    push_page_run(&mut items, state, max_visible_pages, false);
    items
}

fn push_page_run(
    items: &mut Vec<PaginationItem>,
    state: PaginationState,
    max_visible_pages: u32,
    disabled: bool,
) {
    let current = state.current_page();
    let total = state.total_pages();
    let max_visible_pages = max_visible_pages.max(1);
    let page = |page: u32| PaginationItem::Page {
        page,
        active: page == current,
        disabled,
    };

    if total <= max_visible_pages {
        items.extend((1..=total).map(page));
        return;
    }

    let run_start = items.len();
    let side_pages = i64::from((max_visible_pages - 1) / 2);
    let left_boundary = i64::from(current) - side_pages;
    let right_boundary = i64::from(current) + side_pages;
    let last = i64::from(total);

    items.push(page(1));
    if left_boundary > 2 {
        items.push(PaginationItem::Ellipsis {
            index: items.len() - run_start,
        });
    }
    // Window is clamped to 2..=total-1; both ends are emitted separately.
    for n in left_boundary.max(2)..=right_boundary.min(last - 1) {
        items.push(page(n as u32));
    }
    if right_boundary < last - 1 {
        items.push(PaginationItem::Ellipsis {
            index: items.len() - run_start,
        });
    }
    items.push(page(total));
}
