mod common;

use common::catalogue;
use marketdesk_listview::{
    FilterCriteria, ListConfig, ListError, ListState, ListView, NumericRange, Selection,
    SortDirection, SortKey,
};
use marketdesk_model::{ListRecord, Product};
use marketdesk_types::RecordId;
use pretty_assertions::assert_eq;

fn state() -> ListState {
    ListState::new(ListConfig::default()).unwrap()
}

// ── ListState ────────────────────────────────────────────────────

#[test]
fn opens_on_first_page_with_defaults() {
    let state = state();
    assert_eq!(state.page(), 1);
    assert_eq!(state.window().page_size(), 10);
    assert_eq!(state.sort(), &SortKey::descending("created_at"));
    assert!(state.filter().is_unconstrained());
}

#[test]
fn rejects_invalid_config() {
    let config = ListConfig {
        default_page_size: 7,
        ..ListConfig::default()
    };
    assert!(matches!(
        ListState::new(config),
        Err(ListError::UnsupportedPageSize { size: 7, .. })
    ));
}

#[test]
fn sort_change_on_page_three_resets_to_page_one() {
    let records = catalogue(45);
    let mut state = state();
    state.set_page(3).unwrap();
    assert_eq!(state.page(), 3);

    state.set_sort(SortKey::ascending("product_name"));
    assert_eq!(state.page(), 1);

    let page = ListView::of::<Product>().run(&records, &state.query());
    assert_eq!(page.items[0].product_name, "Item 01");
    assert_eq!(page.window.page(), 1);
}

#[test]
fn filter_change_resets_page() {
    let mut state = state();
    state.set_page(4).unwrap();
    state.set_filter(FilterCriteria::new().with_range("base_price", NumericRange::at_least(1.0)));
    assert_eq!(state.page(), 1);
}

#[test]
fn page_size_change_resets_page_and_checks_tiers() {
    let mut state = state();
    state.set_page(2).unwrap();

    state.set_page_size(50).unwrap();
    assert_eq!(state.page(), 1);
    assert_eq!(state.window().page_size(), 50);

    assert!(matches!(
        state.set_page_size(30),
        Err(ListError::UnsupportedPageSize { size: 30, .. })
    ));
    assert_eq!(state.set_page_size(0), Err(ListError::ZeroPageSize));
    assert_eq!(state.window().page_size(), 50);
}

#[test]
fn toggle_sort_flips_active_column() {
    let mut state = state();
    state.toggle_sort("created_at");
    assert_eq!(state.sort().direction, SortDirection::Ascending);
    state.toggle_sort("created_at");
    assert_eq!(state.sort().direction, SortDirection::Descending);

    state.set_page(2).unwrap();
    state.toggle_sort("base_price");
    assert_eq!(state.sort(), &SortKey::ascending("base_price"));
    assert_eq!(state.page(), 1);
}

#[test]
fn page_zero_is_rejected() {
    let mut state = state();
    assert_eq!(state.set_page(0), Err(ListError::ZeroPage));
    assert_eq!(state.page(), 1);
}

#[test]
fn next_and_previous_stay_in_bounds() {
    let mut state = state();
    assert!(!state.previous_page());

    assert!(state.next_page(2));
    assert_eq!(state.page(), 2);
    assert!(!state.next_page(2));
    assert_eq!(state.page(), 2);

    assert!(state.previous_page());
    assert_eq!(state.page(), 1);
}

#[test]
fn page_past_end_is_allowed_and_empty() {
    let records = catalogue(5);
    let mut state = state();
    state.set_page(9999).unwrap();
    let page = ListView::of::<Product>().run(&records, &state.query());
    assert!(page.is_empty());
    assert_eq!(page.total, 5);
}

// ── Selection ────────────────────────────────────────────────────

#[test]
fn select_and_deselect_rows() {
    let mut selection = Selection::new();
    selection.set(RecordId::from(1_i64), true);
    selection.set(RecordId::from(2_i64), true);
    selection.set(RecordId::from(1_i64), false);

    assert_eq!(selection.len(), 1);
    assert!(selection.is_selected(&RecordId::from(2_i64)));
    assert!(!selection.is_selected(&RecordId::from(1_i64)));
}

#[test]
fn select_all_then_none() {
    let records = catalogue(4);
    let mut selection = Selection::new();

    selection.set_all(&records, true);
    assert_eq!(selection.len(), 4);
    assert!(records.iter().all(|p| selection.is_selected(&p.record_id())));

    selection.set_all(&records, false);
    assert!(selection.is_empty());
}

#[test]
fn retain_drops_deleted_rows() {
    let mut records = catalogue(3);
    let mut selection = Selection::new();
    selection.set_all(&records, true);

    let removed = records.remove(0).record_id();
    selection.retain_existing(&records);

    assert_eq!(selection.len(), 2);
    assert!(!selection.is_selected(&removed));
    let mut ids: Vec<String> = selection.ids().map(ToString::to_string).collect();
    ids.sort();
    let mut expected: Vec<String> = records.iter().map(|p| p.product_id.to_string()).collect();
    expected.sort();
    assert_eq!(ids, expected);
}
