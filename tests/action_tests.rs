//! Action and state tests using TestHarness
//!
//! - Create harness with initial state
//! - Emit actions to simulate user events
//! - Drain and assert emitted actions

use tui_dispatch::testing::*;
use tui_dispatch::{assert_emitted, assert_not_emitted, EffectStore, NumericComponentId};
use tui_dispatch_components::SelectList;

use sleevetui::{
    action::Action,
    catalog::Catalog,
    effect::Effect,
    reducer::reducer,
    state::{AppState, LinkKind, Tab},
    ui,
};

fn test_catalog() -> Catalog {
    Catalog::from_json(
        r#"{
            "games": [
                {"name":"Magic","variants":[{"sku":"std","count":"10"}]},
                {"name":"Mtg Arena","variants":[{"sku":"unknown-sku","count":"5"}]}
            ],
            "skus": [
                {"sku":"std","name":"Standard","width":63.5,"height":88.0,
                 "link":"https://example.com/std"}
            ]
        }"#,
    )
    .unwrap()
}

fn test_state() -> AppState {
    AppState::new(test_catalog())
}

#[test]
fn test_reducer_open_and_back() {
    let mut store = EffectStore::new(test_state(), reducer);
    assert_eq!(store.state().games.viewing, None);

    let result = store.dispatch(Action::GameOpen);
    assert!(result.changed, "State should change");
    assert_eq!(store.state().games.viewing, Some(0));

    let result = store.dispatch(Action::Back);
    assert!(result.changed);
    assert_eq!(store.state().games.viewing, None);

    // Back while Browsing is swallowed: no transition, no effects.
    let result = store.dispatch(Action::Back);
    assert!(!result.changed);
    assert!(result.effects.is_empty());
}

#[test]
fn test_reducer_buy_emits_open_link() {
    let mut store = EffectStore::new(test_state(), reducer);
    store.dispatch(Action::GameOpen);

    let result = store.dispatch(Action::LinkOpen(LinkKind::Standard));
    assert!(result.changed);
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(
        &result.effects[0],
        Effect::OpenLink { url } if url == "https://example.com/std"
    ));
}

#[test]
fn test_reducer_tab_cycle() {
    let mut store = EffectStore::new(test_state(), reducer);
    assert_eq!(store.state().tab, Tab::Games);
    store.dispatch(Action::TabNext);
    assert_eq!(store.state().tab, Tab::Sleeves);
    store.dispatch(Action::TabNext);
    assert_eq!(store.state().tab, Tab::Games);
}

#[test]
fn test_details_keyboard_events() {
    let mut harness = TestHarness::<AppState, Action>::new(test_state());

    let actions = harness.send_keys::<NumericComponentId, _, _>("b", |state, event| {
        ui::handle_details_event(&event.kind, state).actions
    });
    actions.assert_count(1);
    actions.assert_first(Action::LinkOpen(LinkKind::Standard));

    let actions = harness.send_keys::<NumericComponentId, _, _>("p", |state, event| {
        ui::handle_details_event(&event.kind, state).actions
    });
    actions.assert_first(Action::LinkOpen(LinkKind::Premium));

    let actions = harness.send_keys::<NumericComponentId, _, _>("h", |state, event| {
        ui::handle_details_event(&event.kind, state).actions
    });
    actions.assert_first(Action::Back);
}

#[test]
fn test_game_list_enter_opens_details() {
    use crossterm::event::{KeyCode, KeyEvent};
    use tui_dispatch::EventKind;

    let state = test_state();
    let mut list = SelectList::new();

    let event = EventKind::Key(KeyEvent::from(KeyCode::Enter));
    let response = ui::handle_game_list_event(&event, &state, &mut list);
    assert!(response.consumed);
    response.actions.assert_first(Action::GameOpen);

    // Esc maps to Back; the reducer decides whether anything happens.
    let event = EventKind::Key(KeyEvent::from(KeyCode::Esc));
    let response = ui::handle_game_list_event(&event, &state, &mut list);
    response.actions.assert_first(Action::Back);
}

#[test]
fn test_search_keyboard_events() {
    let mut harness = TestHarness::<AppState, Action>::new(test_state());

    let actions = harness.send_keys::<NumericComponentId, _, _>("m t g", |state, event| {
        ui::handle_search_event(&event.kind, state).actions
    });
    actions.assert_count(3);
    assert_emitted!(actions, Action::SearchInput('m'));
    assert_emitted!(actions, Action::SearchInput('g'));

    use crossterm::event::{KeyCode, KeyEvent};
    use tui_dispatch::EventKind;

    let event = EventKind::Key(KeyEvent::from(KeyCode::Esc));
    let state = test_state();
    let response = ui::handle_search_event(&event, &state);
    response.actions.assert_first(Action::SearchCancel);
    assert_not_emitted!(response.actions, Action::SearchSubmit);
}

#[test]
fn test_harness_emit_and_drain() {
    let mut harness = TestHarness::<(), Action>::new(());

    harness.emit(Action::GameOpen);
    harness.emit(Action::Back);
    harness.emit(Action::Quit);

    let actions = harness.drain_emitted();
    actions.assert_count(3);
    assert_emitted!(actions, Action::GameOpen);
    assert_not_emitted!(actions, Action::SearchStart);
}
