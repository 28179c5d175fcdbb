#![allow(clippy::unwrap_used, clippy::expect_used)]

use acctview_core::lists::ListKind;
use acctview_core::queries::{Selection, SortDescriptor};
use acctview_core::url_state::{
    FilterInput, FilterValue, HistoryMode, ListState, ListStateAdapter, MemoryHistory, Navigator,
    QueryParams,
};
use mockall::mock;
use mockall::predicate::eq;

mock! {
    pub Nav {}

    impl Navigator for Nav {
        fn current(&self) -> QueryParams;
        fn navigate(&mut self, params: QueryParams, mode: HistoryMode);
    }
}

#[test]
fn test_filter_change_replaces_history_entry() {
    let schema = ListKind::Orders.schema();
    let mut nav = MockNav::new();
    nav.expect_current()
        .returning(|| QueryParams::parse("status=paid&page=3"));
    nav.expect_navigate()
        .with(
            eq(QueryParams::parse("status=confirmed%2Cscheduled")),
            eq(HistoryMode::Replace),
        )
        .times(1)
        .return_const(());

    let mut adapter = ListStateAdapter::new(&schema, nav);
    adapter.set_filter(
        "status",
        FilterInput::Values(vec!["confirmed".into(), "scheduled".into()]),
    );
}

#[test]
fn test_clear_filters_pushes_empty_params() {
    let schema = ListKind::ApiLogs.schema();
    let mut nav = MockNav::new();
    nav.expect_navigate()
        .with(eq(QueryParams::new()), eq(HistoryMode::Push))
        .times(1)
        .return_const(());

    ListStateAdapter::new(&schema, nav).clear_filters();
}

#[test]
fn test_set_sort_ignores_unsortable_column() {
    let schema = ListKind::Orders.schema();
    let mut nav = MockNav::new();
    nav.expect_current().returning(QueryParams::new);
    nav.expect_navigate().times(0);

    let mut adapter = ListStateAdapter::new(&schema, nav);
    adapter.set_sort(SortDescriptor::asc("currency"));
    adapter.toggle_sort("currency");
}

#[test]
fn test_set_sort_keeps_page_and_filters() {
    let schema = ListKind::Orders.schema();
    let mut history = MemoryHistory::from_query("status=confirmed&page=2");
    let mut adapter = ListStateAdapter::new(&schema, &mut history);

    adapter.set_sort(SortDescriptor::asc("clientName"));

    drop(adapter);
    assert_eq!(
        history.current().to_query_string(),
        "page=2&sortBy=clientName&sortDir=asc&status=confirmed"
    );
}

#[test]
fn test_set_page_keeps_filters_and_sort() {
    let schema = ListKind::Orders.schema();
    let mut history = MemoryHistory::from_query("search=acme&sortBy=total&sortDir=asc");
    let mut adapter = ListStateAdapter::new(&schema, &mut history);

    adapter.set_page(3);

    let state = adapter.state();
    assert_eq!(state.page, 3);
    assert_eq!(state.text("search"), "acme");
    assert_eq!(state.sort, SortDescriptor::asc("total"));
    drop(adapter);
    assert_eq!(history.len(), 1);
    assert_eq!(
        history.current().to_query_string(),
        "page=3&search=acme&sortBy=total&sortDir=asc"
    );
}

#[test]
fn test_single_value_is_wrapped_into_selection() {
    let schema = ListKind::Orders.schema();
    let mut adapter = ListStateAdapter::new(&schema, MemoryHistory::new());

    adapter.set_filter("type", FilterInput::one("video"));

    assert_eq!(adapter.state().selection("type"), Selection::single("video"));
    assert_eq!(adapter.navigator().current().get("type"), Some("video"));
}

#[test]
fn test_payment_filter_uses_short_param() {
    let schema = ListKind::Orders.schema();
    let mut adapter = ListStateAdapter::new(&schema, MemoryHistory::new());

    adapter.set_filter("paymentStatus", FilterInput::Text("paid,partial".into()));

    assert_eq!(adapter.navigator().current().get("payment"), Some("paid,partial"));
    assert!(adapter.has_active_filters());
}

#[test]
fn test_api_log_key_and_timestamp_range() {
    let schema = ListKind::ApiLogs.schema();
    let mut adapter = ListStateAdapter::new(&schema, MemoryHistory::new());

    adapter.set_filter("key", FilterInput::Text("key_live".into()));
    adapter.set_filter(
        "date",
        FilterInput::Range {
            from: Some("2024-05-01".into()),
            to: Some("not-a-date".into()),
        },
    );

    let state = adapter.state();
    assert_eq!(state.text("key"), "key_live");
    assert_eq!(
        state.filters.get("date"),
        Some(&FilterValue::Range {
            from: Some("2024-05-01".into()),
            to: None,
        })
    );
    assert_eq!(adapter.criteria().active_count(), 2);
}

#[test]
fn test_members_have_no_default_sort() {
    let schema = ListKind::Members.schema();
    let mut adapter = ListStateAdapter::new(&schema, MemoryHistory::new());
    assert_eq!(adapter.state().sort, SortDescriptor::none());

    adapter.toggle_sort("name");
    assert_eq!(adapter.navigator().current().get("sortBy"), Some("name"));
    assert_eq!(adapter.navigator().current().get("sortDir"), Some("desc"));
}

#[test]
fn test_fingerprint_is_stable_across_param_order() {
    let schema = ListKind::Orders.schema();
    let a = ListState::from_params(&schema, &QueryParams::parse("status=paid&page=2"));
    let b = ListState::from_params(&schema, &QueryParams::parse("page=2&status=paid&utm=x"));
    assert_eq!(a.fingerprint(&schema), b.fingerprint(&schema));
}
