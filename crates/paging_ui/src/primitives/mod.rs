//! Leptos primitives rendering computed pagination items.

use leptos::*;

mod pagination;

pub use pagination::Pagination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Spacing between pagination controls.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    Md,
    /// Large gap.
    Lg,
}

impl Default for LayoutGap {
    fn default() -> Self {
        Self::Sm
    }
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Horizontal placement of the control row.
pub enum LayoutJustify {
    /// Start justification.
    Start,
    /// Center justification.
    Center,
    /// End justification.
    End,
}

impl Default for LayoutJustify {
    fn default() -> Self {
        Self::Center
    }
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-pagination", None), "ui-pagination");
        assert_eq!(merge_layout_class("ui-pagination", Some("")), "ui-pagination");
        assert_eq!(
            merge_layout_class("ui-pagination", Some("results-pager")),
            "ui-pagination results-pager"
        );
    }

    #[test]
    fn tokens_match_css_contract() {
        assert_eq!(LayoutGap::default().token(), "sm");
        assert_eq!(LayoutJustify::default().token(), "center");
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
