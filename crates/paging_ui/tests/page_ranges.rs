use paging_ui::{
    compute_pagination_items, normalize_state, page_count, PaginationConfig, PaginationItem,
    PaginationItemKind,
};

fn render(items: &[PaginationItem]) -> String {
    let labels = PaginationConfig::default().labels;
    items
        .iter()
        .map(|item| item.text(&labels))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn raw_listing_input_flows_through_to_rendered_items() {
    let total_pages = page_count(487, 20);
    assert_eq!(total_pages, 25);

    let state = normalize_state(12.6, f64::from(total_pages));
    let config = PaginationConfig::from_json(r#"{"max-visible-pages":5}"#).expect("config");
    let items = compute_pagination_items(state, &config);

    assert_eq!(render(&items), "« ‹ 1 … 10 11 12 13 14 … 25 › »");
    assert_eq!(state.item_range(20, 487), 220..240);
}

#[test]
fn out_of_range_request_lands_on_last_page() {
    let state = normalize_state(400.0, 25.0);
    let items = compute_pagination_items(state, &PaginationConfig::default());

    let active: Vec<u32> = items
        .iter()
        .filter(|item| item.is_active())
        .filter_map(PaginationItem::target_page)
        .collect();
    assert_eq!(active, vec![25]);

    let blocked: Vec<PaginationItemKind> = items
        .iter()
        .filter(|item| item.kind() != PaginationItemKind::Page && item.is_disabled())
        .map(PaginationItem::kind)
        .collect();
    assert_eq!(
        blocked,
        vec![
            PaginationItemKind::Ellipsis,
            PaginationItemKind::Next,
            PaginationItemKind::Last
        ]
    );
}

#[test]
fn clicking_next_then_previous_returns_to_start() {
    let config = PaginationConfig::default();
    let mut state = normalize_state(1.0, 3.0);

    let next = compute_pagination_items(state, &config)
        .into_iter()
        .find(|item| item.kind() == PaginationItemKind::Next)
        .and_then(|item| item.activation_target())
        .expect("next enabled");
    state = state.go_to(next);
    assert_eq!(state.current_page(), 2);

    let previous = compute_pagination_items(state, &config)
        .into_iter()
        .find(|item| item.kind() == PaginationItemKind::Previous)
        .and_then(|item| item.activation_target())
        .expect("previous enabled");
    state = state.go_to(previous);
    assert_eq!(state.current_page(), 1);
}

#[test]
fn empty_listing_renders_nothing() {
    let state = normalize_state(1.0, f64::from(page_count(0, 20)));
    assert!(compute_pagination_items(state, &PaginationConfig::default()).is_empty());
}
