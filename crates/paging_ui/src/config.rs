//! Display configuration for pagination controls.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest window that can show the current page with a neighbour on each side.
pub const MIN_VISIBLE_PAGES: u32 = 3;
/// Default number of page buttons in the sliding window.
pub const DEFAULT_MAX_VISIBLE_PAGES: u32 = 7;
/// Placeholder substituted with the page number in [`PaginationLabels::page_aria_label`].
pub const PAGE_PLACEHOLDER: &str = "{page}";

#[derive(Debug, Error)]
/// Errors raised while loading or validating a [`PaginationConfig`].
pub enum PaginationConfigError {
    /// The config payload is not valid JSON for [`PaginationConfig`].
    #[error("invalid pagination config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The sliding window is too small to be useful.
    #[error("max-visible-pages must be at least {minimum}, got {requested}")]
    MaxVisiblePagesTooSmall {
        /// Requested window size.
        requested: u32,
        /// Minimum accepted window size.
        minimum: u32,
    },
    /// The page aria-label template has nowhere to put the page number.
    #[error("page-aria-label must contain the {{page}} placeholder")]
    MissingPagePlaceholder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
/// Visible text and accessibility label for one navigation control.
pub struct NavLabel {
    /// Text rendered inside the control.
    pub text: String,
    /// Accessible name announced for the control.
    pub aria_label: String,
}

impl Default for NavLabel {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl NavLabel {
    /// Builds a label from its visible text and accessible name.
    pub fn new(text: impl Into<String>, aria_label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            aria_label: aria_label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
/// Label overrides for every item kind a pagination control can emit.
pub struct PaginationLabels {
    /// Jump-to-first control.
    pub first: NavLabel,
    /// Step-back control.
    pub previous: NavLabel,
    /// Step-forward control.
    pub next: NavLabel,
    /// Jump-to-last control.
    pub last: NavLabel,
    /// Hidden-range placeholder.
    pub ellipsis: NavLabel,
    /// Accessible name template for page buttons; `{page}` is replaced by the page number.
    pub page_aria_label: String,
}

impl Default for PaginationLabels {
    fn default() -> Self {
        Self {
            first: NavLabel::new("«", "Go to first page"),
            previous: NavLabel::new("‹", "Go to previous page"),
            next: NavLabel::new("›", "Go to next page"),
            last: NavLabel::new("»", "Go to last page"),
            ellipsis: NavLabel::new("…", "More pages"),
            page_aria_label: format!("Go to page {PAGE_PLACEHOLDER}"),
        }
    }
}

impl PaginationLabels {
    /// Accessible name for the button targeting `page`.
    pub fn page_label(&self, page: u32) -> String {
        self.page_aria_label
            .replace(PAGE_PLACEHOLDER, &page.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
/// Configuration consumed by [`compute_pagination_items`](crate::compute_pagination_items).
pub struct PaginationConfig {
    /// Upper bound on the number of page buttons before ellipses are introduced.
    pub max_visible_pages: u32,
    /// Emit first/last navigation items.
    pub show_first_last: bool,
    /// Emit previous/next navigation items.
    pub show_prev_next: bool,
    /// Disable every emitted item.
    pub disabled: bool,
    /// Text and accessible names.
    pub labels: PaginationLabels,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            show_first_last: true,
            show_prev_next: true,
            disabled: false,
            labels: PaginationLabels::default(),
        }
    }
}

impl PaginationConfig {
    /// Parses a JSON config payload and validates it.
    ///
    /// Missing fields fall back to [`PaginationConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`PaginationConfigError::Parse`] for malformed JSON and the
    /// [`PaginationConfig::validate`] errors for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, PaginationConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the config for values the control cannot render sensibly.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationConfigError::MaxVisiblePagesTooSmall`] when the window is below
    /// [`MIN_VISIBLE_PAGES`] and [`PaginationConfigError::MissingPagePlaceholder`] when the page
    /// label template lacks `{page}`.
    pub fn validate(&self) -> Result<(), PaginationConfigError> {
        if self.max_visible_pages < MIN_VISIBLE_PAGES {
            return Err(PaginationConfigError::MaxVisiblePagesTooSmall {
                requested: self.max_visible_pages,
                minimum: MIN_VISIBLE_PAGES,
            });
        }
        if !self.labels.page_aria_label.contains(PAGE_PLACEHOLDER) {
            return Err(PaginationConfigError::MissingPagePlaceholder);
        }
        Ok(())
    }

    /// Returns a copy that passes [`PaginationConfig::validate`].
    pub fn normalized(&self) -> Self {
        let mut config = self.clone();
        config.max_visible_pages = config.max_visible_pages.max(MIN_VISIBLE_PAGES);
        if !config.labels.page_aria_label.contains(PAGE_PLACEHOLDER) {
            config.labels.page_aria_label = PaginationLabels::default().page_aria_label;
        }
        config
    }
}
