use serde::{Deserialize, Serialize};
use tui_dispatch_debug::debug::{ron_string, DebugSection, DebugState};

use crate::catalog::{Catalog, GameGroup, SizeVariant, SkuMeta};
use crate::search;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Games,
    Sleeves,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Games => Tab::Sleeves,
            Tab::Sleeves => Tab::Games,
        }
    }

    pub fn prev(self) -> Self {
        // Two tabs, so prev == next.
        self.next()
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Games => "Games",
            Tab::Sleeves => "Sleeves",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkKind {
    Standard,
    Premium,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub active: bool,
    pub query: String,
}

/// Games tab: list cursor plus the Browsing/Viewing toggle. `viewing` is an
/// index into `catalog.games`; `None` means the list (Browsing) screen.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GamesTab {
    pub search: SearchState,
    pub filtered: Vec<usize>,
    pub selected_index: usize,
    pub viewing: Option<usize>,
    /// Cursor over the detail view's display-ordered variants.
    pub variant_index: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SleevesTab {
    pub search: SearchState,
    pub filtered: Vec<usize>,
    pub selected_index: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppState {
    pub terminal_size: (u16, u16),
    /// Read-only after construction; the reducer never writes into it.
    pub catalog: Catalog,
    pub tab: Tab,
    pub games: GamesTab,
    pub sleeves: SleevesTab,
    pub message: Option<String>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let mut state = Self {
            terminal_size: (80, 24),
            catalog,
            tab: Tab::Games,
            games: GamesTab::default(),
            sleeves: SleevesTab::default(),
            message: None,
        };
        state.rebuild_games_filtered();
        state.rebuild_sleeves_filtered();
        state
    }

    pub fn rebuild_games_filtered(&mut self) {
        self.games.filtered = search::filter_games(&self.catalog, &self.games.search.query);
        if self.games.selected_index >= self.games.filtered.len() {
            self.games.selected_index = 0;
        }
    }

    pub fn rebuild_sleeves_filtered(&mut self) {
        self.sleeves.filtered = search::filter_skus(&self.catalog, &self.sleeves.search.query);
        if self.sleeves.selected_index >= self.sleeves.filtered.len() {
            self.sleeves.selected_index = 0;
        }
    }

    pub fn search_mut(&mut self) -> &mut SearchState {
        match self.tab {
            Tab::Games => &mut self.games.search,
            Tab::Sleeves => &mut self.sleeves.search,
        }
    }

    pub fn search(&self) -> &SearchState {
        match self.tab {
            Tab::Games => &self.games.search,
            Tab::Sleeves => &self.sleeves.search,
        }
    }

    pub fn rebuild_active_filtered(&mut self) {
        match self.tab {
            Tab::Games => self.rebuild_games_filtered(),
            Tab::Sleeves => self.rebuild_sleeves_filtered(),
        }
    }

    /// Clamp-and-set for the games list cursor; reports whether it moved.
    pub fn set_games_selected(&mut self, index: usize) -> bool {
        if self.games.filtered.is_empty() {
            self.games.selected_index = 0;
            return false;
        }
        let bounded = index.min(self.games.filtered.len() - 1);
        if bounded != self.games.selected_index {
            self.games.selected_index = bounded;
            return true;
        }
        false
    }

    pub fn set_sleeves_selected(&mut self, index: usize) -> bool {
        if self.sleeves.filtered.is_empty() {
            self.sleeves.selected_index = 0;
            return false;
        }
        let bounded = index.min(self.sleeves.filtered.len() - 1);
        if bounded != self.sleeves.selected_index {
            self.sleeves.selected_index = bounded;
            return true;
        }
        false
    }

    /// The game under the list cursor (Browsing screen).
    pub fn selected_game_index(&self) -> Option<usize> {
        self.games.filtered.get(self.games.selected_index).copied()
    }

    pub fn selected_game(&self) -> Option<&GameGroup> {
        self.selected_game_index()
            .and_then(|idx| self.catalog.games.get(idx))
    }

    /// The game shown by the detail screen, if any.
    pub fn viewing_game(&self) -> Option<&GameGroup> {
        self.games
            .viewing
            .and_then(|idx| self.catalog.games.get(idx))
    }

    /// The detail screen's variant under the cursor, in display order.
    pub fn current_variant(&self) -> Option<&SizeVariant> {
        let group = self.viewing_game()?;
        let order = group.display_order(&self.catalog);
        order
            .get(self.games.variant_index)
            .and_then(|&idx| group.variants.get(idx))
    }

    pub fn selected_sku(&self) -> Option<&SkuMeta> {
        self.sleeves
            .filtered
            .get(self.sleeves.selected_index)
            .and_then(|&idx| self.catalog.skus.get(idx))
    }

    /// Resolve the purchase URL the user is pointing at, if one exists.
    /// Games tab resolves through the current variant's sku; an unresolved
    /// sku yields no URL, never an error.
    pub fn current_link(&self, kind: LinkKind) -> Option<&str> {
        let meta = match self.tab {
            Tab::Games => self
                .current_variant()
                .and_then(|variant| self.catalog.sku(&variant.sku))?,
            Tab::Sleeves => self.selected_sku()?,
        };
        match kind {
            LinkKind::Standard => meta.link.as_deref(),
            LinkKind::Premium => meta.premium_link.as_deref(),
        }
    }

    /// Number of rows in whichever list the Browsing screen is showing.
    pub fn active_list_len(&self) -> usize {
        match self.tab {
            Tab::Games => self.games.filtered.len(),
            Tab::Sleeves => self.sleeves.filtered.len(),
        }
    }

    pub fn list_page_size(&self) -> usize {
        self.terminal_size.1.saturating_sub(8) as usize
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::bundled().unwrap_or_default())
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        vec![
            DebugSection::new("Catalog")
                .entry("games", ron_string(&self.catalog.games.len()))
                .entry("skus", ron_string(&self.catalog.skus.len())),
            DebugSection::new("Navigation")
                .entry("tab", ron_string(&self.tab))
                .entry("viewing", ron_string(&self.games.viewing))
                .entry("game_selected", ron_string(&self.games.selected_index))
                .entry("variant_selected", ron_string(&self.games.variant_index))
                .entry("sleeve_selected", ron_string(&self.sleeves.selected_index)),
            DebugSection::new("Search")
                .entry("games_query", ron_string(&self.games.search.query))
                .entry("games_active", ron_string(&self.games.search.active))
                .entry("sleeves_query", ron_string(&self.sleeves.search.query))
                .entry("sleeves_active", ron_string(&self.sleeves.search.active))
                .entry("games_filtered", ron_string(&self.games.filtered.len()))
                .entry("sleeves_filtered", ron_string(&self.sleeves.filtered.len())),
            DebugSection::new("Status").entry("message", ron_string(&self.message)),
        ]
    }
}
