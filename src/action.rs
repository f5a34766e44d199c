use serde::{Deserialize, Serialize};

use crate::state::{LinkKind, Tab};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[action(infer_categories)]
pub enum Action {
    Init,

    TabNext,
    TabPrev,
    TabSelect(Tab),

    SelectionMove(i16),
    SelectionPage(i16),
    SelectionJumpTop,
    SelectionJumpBottom,
    ListSelect(usize),

    /// Browsing -> Viewing(current selection) on the Games tab.
    GameOpen,
    /// Viewing -> Browsing; swallowed (no-op) while already Browsing.
    Back,
    VariantSelect(usize),

    SearchStart,
    SearchCancel,
    SearchSubmit,
    SearchInput(char),
    SearchBackspace,

    LinkOpen(LinkKind),

    UiTerminalResize(u16, u16),
    Quit,
}
