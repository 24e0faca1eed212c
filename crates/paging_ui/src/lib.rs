//! Pagination primitives for shell and application surfaces.
//!
//! The crate splits a pagination control into a pure core and a thin Leptos layer:
//!
//! - [`normalize_state`] and [`PaginationState`] sanitize raw page input,
//! - [`compute_pagination_items`] turns a state and a [`PaginationConfig`] into the ordered
//!   [`PaginationItem`] sequence (first/previous, the page/ellipsis run, next/last),
//! - [`Pagination`] renders that sequence with the shared `data-ui-*` DOM contract and reports
//!   page changes through a callback.
//!
//! The core never allocates hidden state; identical inputs always produce identical output.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod config;
mod primitives;
mod range;
mod state;

pub use config::{
    NavLabel, PaginationConfig, PaginationConfigError, PaginationLabels,
    DEFAULT_MAX_VISIBLE_PAGES, MIN_VISIBLE_PAGES, PAGE_PLACEHOLDER,
};
pub use primitives::{LayoutGap, LayoutJustify, Pagination};
pub use range::{compute_pagination_items, page_run, PaginationItem, PaginationItemKind};
pub use state::{normalize_state, page_count, PaginationState};

/// Convenience imports for application crates consuming the pagination primitives.
pub mod prelude {
    pub use crate::{
        compute_pagination_items, normalize_state, page_count, LayoutGap, LayoutJustify,
        Pagination, PaginationConfig, PaginationItem, PaginationItemKind, PaginationLabels,
        PaginationState,
    };
}
