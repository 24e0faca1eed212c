use super::*;

use crate::config::{PaginationConfig, PaginationLabels};
use crate::range::{compute_pagination_items, PaginationItem};
use crate::state::PaginationState;

#[component]
/// Shared pagination control.
///
/// Renders the items produced by [`compute_pagination_items`] and calls `on_page_change` with the
/// target page when an enabled item is activated. Nothing is rendered inside the `<nav>` when
/// there is only one page.
pub fn Pagination(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] current_page: MaybeSignal<u32>,
    #[prop(into)] total_pages: MaybeSignal<u32>,
    #[prop(optional, into)] config: MaybeSignal<PaginationConfig>,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    #[prop(default = LayoutJustify::Center)] justify: LayoutJustify,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_page_change: Option<Callback<u32>>,
) -> impl IntoView {
    let config = create_memo(move |_| {
        let config = config.get();
        match config.validate() {
            Ok(()) => config,
            Err(err) => {
                leptos::logging::warn!("pagination config rejected: {err}");
                config.normalized()
            }
        }
    });
    let items = create_memo(move |_| {
        let state = PaginationState::new(current_page.get(), total_pages.get());
        config.with(|config| compute_pagination_items(state, config))
    });

    view! {
        <nav
            class=merge_layout_class("ui-pagination", layout_class)
            aria-label=aria_label.unwrap_or_else(|| "Pagination".to_string())
            data-ui-primitive="true"
            data-ui-kind="pagination"
            data-ui-gap=gap.token()
            data-ui-justify=justify.token()
            data-ui-disabled=move || bool_token(config.with(|config| config.disabled))
        >
            {move || {
                let labels = config.with(|config| config.labels.clone());
                items
                    .get()
                    .into_iter()
                    .map(|item| item_view(item, &labels, on_page_change))
                    .collect_view()
            }}
        </nav>
    }
}

fn item_view(
    item: PaginationItem,
    labels: &PaginationLabels,
    on_page_change: Option<Callback<u32>>,
) -> View {
    let text = item.text(labels);
    let aria_label = item.aria_label(labels);

    if let PaginationItem::Ellipsis { .. } = item {
        return view! {
            <span
                data-ui-slot="ellipsis"
                data-ui-key=item.key()
                data-ui-disabled="true"
                title=aria_label
                aria-hidden="true"
            >
                {text}
            </span>
        }
        .into_view();
    }

    view! {
        <button
            type="button"
            disabled=item.is_disabled()
            aria-label=aria_label
            aria-current=item.is_active().then_some("page")
            data-ui-slot="item"
            data-ui-key=item.key()
            data-ui-variant=item.kind().token()
            data-ui-selected=bool_token(item.is_active())
            data-ui-disabled=bool_token(item.is_disabled())
            on:click=move |_| {
                if let (Some(on_page_change), Some(page)) = (on_page_change, item.activation_target()) {
                    on_page_change.call(page);
                }
            }
        >
            {text}
        </button>
    }
    .into_view()
}
