//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, Tab};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => {
            state.message = None;
            state.rebuild_games_filtered();
            state.rebuild_sleeves_filtered();
            DispatchResult::changed()
        }

        // ===== Tabs =====
        // Each tab keeps its own query, filter and cursor across switches.
        // Input mode does not follow the user: the outgoing tab leaves
        // search input, keeping its query.
        Action::TabNext => {
            state.search_mut().active = false;
            state.tab = state.tab.next();
            state.message = None;
            DispatchResult::changed()
        }

        Action::TabPrev => {
            state.search_mut().active = false;
            state.tab = state.tab.prev();
            state.message = None;
            DispatchResult::changed()
        }

        Action::TabSelect(tab) => {
            if state.tab == tab {
                return DispatchResult::unchanged();
            }
            state.search_mut().active = false;
            state.tab = tab;
            state.message = None;
            DispatchResult::changed()
        }

        // ===== List / detail cursors =====
        Action::SelectionMove(delta) => {
            if state.tab == Tab::Games && state.games.viewing.is_some() {
                return move_variant_cursor(state, delta);
            }
            let index = step_index(current_selection(state), delta);
            if !set_active_selected(state, index) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        Action::SelectionPage(delta) => {
            if state.tab == Tab::Games && state.games.viewing.is_some() {
                return DispatchResult::unchanged();
            }
            let page = state.list_page_size() as i16;
            let index = step_index(current_selection(state), delta.saturating_mul(page));
            if !set_active_selected(state, index) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        Action::SelectionJumpTop => {
            if state.tab == Tab::Games && state.games.viewing.is_some() {
                return set_variant_cursor(state, 0);
            }
            if !set_active_selected(state, 0) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        Action::SelectionJumpBottom => {
            if state.tab == Tab::Games && state.games.viewing.is_some() {
                let last = variant_count(state).saturating_sub(1);
                return set_variant_cursor(state, last);
            }
            let last = state.active_list_len().saturating_sub(1);
            if !set_active_selected(state, last) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        Action::ListSelect(index) => {
            if state.tab == Tab::Games && state.games.viewing.is_some() {
                return DispatchResult::unchanged();
            }
            if !set_active_selected(state, index) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        Action::VariantSelect(index) => set_variant_cursor(state, index),

        // ===== Browsing <-> Viewing =====
        Action::GameOpen => {
            if state.tab != Tab::Games || state.games.viewing.is_some() {
                return DispatchResult::unchanged();
            }
            let Some(game_idx) = state.selected_game_index() else {
                return DispatchResult::unchanged();
            };
            state.games.viewing = Some(game_idx);
            state.games.variant_index = 0;
            state.message = None;
            DispatchResult::changed()
        }

        Action::Back => {
            // While Browsing the back action is swallowed: the screen does
            // not change and the app stays up.
            if state.tab == Tab::Games && state.games.viewing.is_some() {
                state.games.viewing = None;
                state.games.variant_index = 0;
                state.message = None;
                return DispatchResult::changed();
            }
            DispatchResult::unchanged()
        }

        // ===== Search =====
        Action::SearchStart => {
            if state.tab == Tab::Games && state.games.viewing.is_some() {
                return DispatchResult::unchanged();
            }
            let search = state.search_mut();
            search.active = true;
            search.query.clear();
            state.rebuild_active_filtered();
            DispatchResult::changed()
        }

        Action::SearchCancel => {
            let search = state.search_mut();
            if !search.active && search.query.is_empty() {
                return DispatchResult::unchanged();
            }
            search.active = false;
            search.query.clear();
            state.rebuild_active_filtered();
            DispatchResult::changed()
        }

        Action::SearchSubmit => {
            state.search_mut().active = false;
            state.rebuild_active_filtered();
            DispatchResult::changed()
        }

        Action::SearchInput(ch) => {
            state.search_mut().query.push(ch);
            state.rebuild_active_filtered();
            DispatchResult::changed()
        }

        Action::SearchBackspace => {
            state.search_mut().query.pop();
            state.rebuild_active_filtered();
            DispatchResult::changed()
        }

        // ===== Purchase links =====
        Action::LinkOpen(kind) => match state.current_link(kind).map(str::to_string) {
            Some(url) => {
                state.message = Some(format!("Opening {url}"));
                DispatchResult::changed_with(Effect::OpenLink { url })
            }
            None => {
                state.message = Some("No purchase link available".to_string());
                DispatchResult::changed()
            }
        },

        Action::UiTerminalResize(width, height) => {
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn current_selection(state: &AppState) -> usize {
    match state.tab {
        Tab::Games => state.games.selected_index,
        Tab::Sleeves => state.sleeves.selected_index,
    }
}

fn set_active_selected(state: &mut AppState, index: usize) -> bool {
    match state.tab {
        Tab::Games => state.set_games_selected(index),
        Tab::Sleeves => state.set_sleeves_selected(index),
    }
}

fn step_index(current: usize, delta: i16) -> usize {
    let stepped = current as i64 + delta as i64;
    stepped.max(0) as usize
}

fn variant_count(state: &AppState) -> usize {
    state
        .viewing_game()
        .map(|group| group.variants.len())
        .unwrap_or(0)
}

fn move_variant_cursor(state: &mut AppState, delta: i16) -> DispatchResult<Effect> {
    let index = step_index(state.games.variant_index, delta);
    set_variant_cursor(state, index)
}

fn set_variant_cursor(state: &mut AppState, index: usize) -> DispatchResult<Effect> {
    let count = variant_count(state);
    if count == 0 {
        return DispatchResult::unchanged();
    }
    let bounded = index.min(count - 1);
    if bounded == state.games.variant_index {
        return DispatchResult::unchanged();
    }
    state.games.variant_index = bounded;
    DispatchResult::changed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::state::LinkKind;

    fn test_catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "games": [
                    {"name":"Magic","variants":[{"sku":"std","count":"10"}]},
                    {"name":"Mtg Arena","variants":[{"sku":"unknown-sku","count":"5"}]}
                ],
                "skus": [
                    {"sku":"std","name":"Standard","width":63.5,"height":88.0,
                     "link":"https://example.com/std",
                     "premium_link":"https://example.com/std-premium"},
                    {"sku":"bare","name":"Bare","width":70.0,"height":70.0}
                ]
            }"#,
        )
        .unwrap()
    }

    fn test_state() -> AppState {
        AppState::new(test_catalog())
    }

    #[test]
    fn test_open_then_back_round_trip() {
        let mut state = test_state();
        assert_eq!(state.games.viewing, None);

        let result = reducer(&mut state, Action::GameOpen);
        assert!(result.changed);
        assert_eq!(state.games.viewing, Some(0));

        let result = reducer(&mut state, Action::Back);
        assert!(result.changed);
        assert_eq!(state.games.viewing, None);
    }

    #[test]
    fn test_back_while_browsing_is_swallowed() {
        let mut state = test_state();
        let before = state.clone();

        let result = reducer(&mut state, Action::Back);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.games.viewing, before.games.viewing);
        assert_eq!(state.tab, before.tab);
    }

    #[test]
    fn test_tab_switch_preserves_queries() {
        let mut state = test_state();
        reducer(&mut state, Action::SearchStart);
        reducer(&mut state, Action::SearchInput('m'));
        reducer(&mut state, Action::SearchSubmit);
        assert_eq!(state.games.search.query, "m");

        reducer(&mut state, Action::TabNext);
        assert_eq!(state.tab, Tab::Sleeves);
        assert_eq!(state.games.search.query, "m");

        reducer(&mut state, Action::TabPrev);
        assert_eq!(state.tab, Tab::Games);
        assert_eq!(state.games.search.query, "m");
        assert_eq!(state.games.filtered.len(), 2);
    }

    #[test]
    fn test_tab_switch_leaves_search_input_mode() {
        let mut state = test_state();
        reducer(&mut state, Action::SearchStart);
        reducer(&mut state, Action::SearchInput('m'));
        assert!(state.games.search.active);

        reducer(&mut state, Action::TabNext);
        assert!(
            !state.games.search.active,
            "input mode must not resume when the tab regains focus"
        );
        assert_eq!(state.games.search.query, "m");

        reducer(&mut state, Action::TabPrev);
        assert!(!state.games.search.active);
        assert_eq!(state.games.search.query, "m");

        // Same for the explicit tab jump.
        reducer(&mut state, Action::TabNext);
        reducer(&mut state, Action::SearchStart);
        assert!(state.sleeves.search.active);
        reducer(&mut state, Action::TabSelect(Tab::Games));
        assert!(!state.sleeves.search.active);
    }

    #[test]
    fn test_search_input_refilters_and_ranks() {
        let mut state = test_state();
        reducer(&mut state, Action::SearchStart);
        for ch in "mtg".chars() {
            reducer(&mut state, Action::SearchInput(ch));
        }
        // "Mtg Arena" matches at 0, "Magic" does not contain "mtg".
        assert_eq!(state.games.filtered, vec![1]);

        reducer(&mut state, Action::SearchBackspace);
        reducer(&mut state, Action::SearchBackspace);
        // Query "m": both match at index 0, catalog order kept.
        assert_eq!(state.games.filtered, vec![0, 1]);

        let result = reducer(&mut state, Action::SearchCancel);
        assert!(result.changed);
        assert!(state.games.search.query.is_empty());
        assert_eq!(state.games.filtered, vec![0, 1]);
    }

    #[test]
    fn test_search_start_ignored_while_viewing() {
        let mut state = test_state();
        reducer(&mut state, Action::GameOpen);

        let result = reducer(&mut state, Action::SearchStart);
        assert!(!result.changed);
        assert!(!state.games.search.active);
    }

    #[test]
    fn test_link_open_resolved_emits_effect() {
        let mut state = test_state();
        reducer(&mut state, Action::GameOpen); // Magic, sku "std"

        let result = reducer(&mut state, Action::LinkOpen(LinkKind::Standard));
        assert!(result.changed);
        assert_eq!(
            result.effects,
            vec![Effect::OpenLink {
                url: "https://example.com/std".to_string()
            }]
        );
    }

    #[test]
    fn test_link_open_unresolved_sku_is_recovered() {
        let mut state = test_state();
        state.set_games_selected(1); // Mtg Arena, unresolved sku
        reducer(&mut state, Action::GameOpen);

        let result = reducer(&mut state, Action::LinkOpen(LinkKind::Standard));
        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(
            state.message.as_deref(),
            Some("No purchase link available")
        );
    }

    #[test]
    fn test_link_open_premium_missing_on_sleeves_tab() {
        let mut state = test_state();
        reducer(&mut state, Action::TabNext);
        assert_eq!(state.tab, Tab::Sleeves);
        state.set_sleeves_selected(1); // "bare", no links

        let result = reducer(&mut state, Action::LinkOpen(LinkKind::Premium));
        assert!(result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_selection_clamps_to_filtered_list() {
        let mut state = test_state();
        let result = reducer(&mut state, Action::ListSelect(99));
        assert!(result.changed);
        assert_eq!(state.games.selected_index, 1);

        let result = reducer(&mut state, Action::SelectionMove(-5));
        assert!(result.changed);
        assert_eq!(state.games.selected_index, 0);

        let result = reducer(&mut state, Action::SelectionMove(-1));
        assert!(!result.changed);
    }

    #[test]
    fn test_variant_cursor_moves_in_detail_view() {
        let mut state = test_state();
        // Give Magic a second variant so the cursor has somewhere to go.
        state.catalog.games[0].variants.push(crate::catalog::SizeVariant {
            sku: "bare".into(),
            count: "2".into(),
            width: None,
            height: None,
        });
        reducer(&mut state, Action::GameOpen);

        let result = reducer(&mut state, Action::SelectionMove(1));
        assert!(result.changed);
        assert_eq!(state.games.variant_index, 1);

        let result = reducer(&mut state, Action::SelectionMove(1));
        assert!(!result.changed, "cursor clamps at the last variant");

        reducer(&mut state, Action::Back);
        assert_eq!(state.games.variant_index, 0);
    }
}
