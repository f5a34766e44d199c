use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};
use tui_dispatch::{
    Component, EventContext, EventKind, EventRoutingState, HandlerResponse, RenderContext,
};
use tui_dispatch_components::style::BorderStyle;
use tui_dispatch_components::{
    BaseStyle, Padding, SelectList, SelectListBehavior, SelectListProps, SelectListStyle,
    SelectionStyle, StatusBar, StatusBarHint, StatusBarItem, StatusBarProps, StatusBarSection,
    StatusBarStyle,
};

use crate::action::Action;
use crate::catalog::{GameGroup, SkuMeta};
use crate::state::{AppState, LinkKind, Tab};

const BG_BASE: Color = Color::Rgb(24, 18, 22);
const BG_PANEL: Color = Color::Rgb(38, 26, 32);
const BG_PANEL_ALT: Color = Color::Rgb(46, 32, 40);
const BG_HIGHLIGHT: Color = Color::Rgb(118, 36, 64);
const TEXT_MAIN: Color = Color::Rgb(240, 232, 236);
const TEXT_DIM: Color = Color::Rgb(188, 168, 176);
const ACCENT_ROSE: Color = Color::Rgb(226, 120, 160);
const ACCENT_BLUE: Color = Color::Rgb(10, 128, 222);

const VARIANT_CARD_HEIGHT: u16 = 7;

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SleeveComponentId {
    Header,
    GameList,
    GameDetails,
    SleeveList,
    Search,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SleeveContext {
    Browse,
    Details,
    Search,
}

impl EventRoutingState<SleeveComponentId, SleeveContext> for AppState {
    fn focused(&self) -> Option<SleeveComponentId> {
        if self.search().active {
            return Some(SleeveComponentId::Search);
        }
        match self.tab {
            Tab::Games if self.games.viewing.is_some() => Some(SleeveComponentId::GameDetails),
            Tab::Games => Some(SleeveComponentId::GameList),
            Tab::Sleeves => Some(SleeveComponentId::SleeveList),
        }
    }

    fn modal(&self) -> Option<SleeveComponentId> {
        if self.search().active {
            Some(SleeveComponentId::Search)
        } else {
            None
        }
    }

    fn binding_context(&self, id: SleeveComponentId) -> SleeveContext {
        match id {
            SleeveComponentId::GameDetails => SleeveContext::Details,
            SleeveComponentId::Search => SleeveContext::Search,
            SleeveComponentId::Header
            | SleeveComponentId::GameList
            | SleeveComponentId::SleeveList => SleeveContext::Browse,
        }
    }

    fn default_context(&self) -> SleeveContext {
        SleeveContext::Browse
    }
}

pub struct SleeveUi {
    game_list: SelectList,
    sleeve_list: SelectList,
    status_bar: StatusBar,
}

impl Default for SleeveUi {
    fn default() -> Self {
        Self::new()
    }
}

impl SleeveUi {
    pub fn new() -> Self {
        Self {
            game_list: SelectList::new(),
            sleeve_list: SelectList::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        _render_ctx: RenderContext,
        event_ctx: &mut EventContext<SleeveComponentId>,
    ) {
        let base = Block::default().style(Style::default().bg(BG_BASE));
        frame.render_widget(base, area);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(area);

        event_ctx.set_component_area(SleeveComponentId::Header, layout[0]);
        if state.search().active {
            event_ctx.set_component_area(SleeveComponentId::Search, layout[0]);
        }
        render_header(frame, layout[0], state);

        match state.tab {
            Tab::Games if state.games.viewing.is_some() => {
                event_ctx.set_component_area(SleeveComponentId::GameDetails, layout[1]);
                render_game_details(frame, layout[1], state);
            }
            Tab::Games => {
                event_ctx.set_component_area(SleeveComponentId::GameList, layout[1]);
                render_games_browse(frame, layout[1], state, &mut self.game_list);
            }
            Tab::Sleeves => {
                event_ctx.set_component_area(SleeveComponentId::SleeveList, layout[1]);
                render_sleeves(frame, layout[1], state, &mut self.sleeve_list);
            }
        }

        render_footer(frame, layout[2], state, &mut self.status_bar);
    }

    pub fn handle_game_list_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        handle_game_list_event(event, state, &mut self.game_list)
    }

    pub fn handle_details_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        handle_details_event(event, state)
    }

    pub fn handle_sleeve_list_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        handle_sleeve_list_event(event, state, &mut self.sleeve_list)
    }

    pub fn handle_search_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        handle_search_event(event, state)
    }
}

pub fn handle_game_list_event(
    event: &EventKind,
    state: &AppState,
    game_list: &mut SelectList,
) -> HandlerResponse<Action> {
    match event {
        EventKind::Key(key) => match key.code {
            KeyCode::Enter => handler_response(vec![Action::GameOpen]),
            KeyCode::Esc => handler_response(vec![Action::Back]),
            KeyCode::PageDown => handler_response(vec![Action::SelectionPage(1)]),
            KeyCode::PageUp => handler_response(vec![Action::SelectionPage(-1)]),
            KeyCode::Home => handler_response(vec![Action::SelectionJumpTop]),
            KeyCode::End => handler_response(vec![Action::SelectionJumpBottom]),
            _ => {
                let items = game_items(state);
                let props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: state
                        .games
                        .selected_index
                        .min(items.len().saturating_sub(1)),
                    is_focused: true,
                    style: list_style(),
                    behavior: SelectListBehavior {
                        show_scrollbar: true,
                        wrap_navigation: false,
                    },
                    on_select: Action::ListSelect,
                    render_item: &|item| item.clone(),
                };
                let actions: Vec<_> = game_list.handle_event(event, props).into_iter().collect();
                handler_response(actions)
            }
        },
        EventKind::Scroll { delta, .. } => {
            handler_response(vec![Action::SelectionMove((*delta * 3) as i16)])
        }
        _ => HandlerResponse::ignored(),
    }
}

pub fn handle_details_event(event: &EventKind, _state: &AppState) -> HandlerResponse<Action> {
    let actions = match event {
        EventKind::Key(key) => match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                vec![Action::Back]
            }
            KeyCode::Up | KeyCode::Char('k') => vec![Action::SelectionMove(-1)],
            KeyCode::Down | KeyCode::Char('j') => vec![Action::SelectionMove(1)],
            KeyCode::Home => vec![Action::SelectionJumpTop],
            KeyCode::End => vec![Action::SelectionJumpBottom],
            KeyCode::Char('b') | KeyCode::Enter => vec![Action::LinkOpen(LinkKind::Standard)],
            KeyCode::Char('p') => vec![Action::LinkOpen(LinkKind::Premium)],
            _ => vec![],
        },
        EventKind::Scroll { delta, .. } => vec![Action::SelectionMove(*delta as i16)],
        _ => vec![],
    };
    handler_response(actions)
}

pub fn handle_sleeve_list_event(
    event: &EventKind,
    state: &AppState,
    sleeve_list: &mut SelectList,
) -> HandlerResponse<Action> {
    match event {
        EventKind::Key(key) => match key.code {
            KeyCode::Esc => handler_response(vec![Action::Back]),
            KeyCode::Char('b') | KeyCode::Enter => {
                handler_response(vec![Action::LinkOpen(LinkKind::Standard)])
            }
            KeyCode::Char('p') => handler_response(vec![Action::LinkOpen(LinkKind::Premium)]),
            KeyCode::PageDown => handler_response(vec![Action::SelectionPage(1)]),
            KeyCode::PageUp => handler_response(vec![Action::SelectionPage(-1)]),
            KeyCode::Home => handler_response(vec![Action::SelectionJumpTop]),
            KeyCode::End => handler_response(vec![Action::SelectionJumpBottom]),
            _ => {
                let items = sleeve_items(state);
                let props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: state
                        .sleeves
                        .selected_index
                        .min(items.len().saturating_sub(1)),
                    is_focused: true,
                    style: list_style(),
                    behavior: SelectListBehavior {
                        show_scrollbar: true,
                        wrap_navigation: false,
                    },
                    on_select: Action::ListSelect,
                    render_item: &|item| item.clone(),
                };
                let actions: Vec<_> = sleeve_list.handle_event(event, props).into_iter().collect();
                handler_response(actions)
            }
        },
        EventKind::Scroll { delta, .. } => {
            handler_response(vec![Action::SelectionMove((*delta * 3) as i16)])
        }
        _ => HandlerResponse::ignored(),
    }
}

pub fn handle_search_event(event: &EventKind, _state: &AppState) -> HandlerResponse<Action> {
    let actions = match event {
        EventKind::Key(key) => match key.code {
            KeyCode::Esc => vec![Action::SearchCancel],
            KeyCode::Enter => vec![Action::SearchSubmit],
            KeyCode::Backspace => vec![Action::SearchBackspace],
            KeyCode::Char(ch) => vec![Action::SearchInput(ch)],
            _ => vec![],
        },
        _ => vec![],
    };
    handler_response(actions)
}

fn handler_response(actions: Vec<Action>) -> HandlerResponse<Action> {
    if actions.is_empty() {
        HandlerResponse::ignored()
    } else {
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
        .border_style(Style::default().fg(BG_HIGHLIGHT))
        .title("SLEEVE CATALOG");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(10)])
        .split(inner);

    let tabs = Tabs::new(vec![Tab::Games.title(), Tab::Sleeves.title()])
        .select(match state.tab {
            Tab::Games => 0,
            Tab::Sleeves => 1,
        })
        .style(Style::default().fg(TEXT_DIM))
        .highlight_style(
            Style::default()
                .fg(ACCENT_ROSE)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, layout[0]);

    let search = state.search();
    let query = if search.active {
        format!("/{}_", search.query)
    } else if search.query.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", search.query)
    };
    let line = Line::from(vec![
        Span::raw("Search: "),
        Span::styled(query, Style::default().fg(ACCENT_ROSE)),
        Span::raw("   Shown: "),
        Span::styled(
            format!("{}", state.active_list_len()),
            Style::default().fg(ACCENT_BLUE),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), layout[1]);
}

pub fn render_games_browse(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    game_list: &mut SelectList,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(44), Constraint::Percentage(56)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("GAMES")
        .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
        .border_style(Style::default().fg(ACCENT_ROSE));
    let inner = block.inner(layout[0]);
    frame.render_widget(block, layout[0]);

    let items = game_items(state);
    let props = SelectListProps {
        items: &items,
        count: items.len(),
        selected: state
            .games
            .selected_index
            .min(items.len().saturating_sub(1)),
        is_focused: !state.games.search.active,
        style: list_style(),
        behavior: SelectListBehavior {
            show_scrollbar: true,
            wrap_navigation: false,
        },
        on_select: Action::ListSelect,
        render_item: &|item| item.clone(),
    };
    game_list.render(frame, inner, props);

    render_game_summary(frame, layout[1], state);
}

fn render_game_summary(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("SUMMARY")
        .style(Style::default().bg(BG_PANEL_ALT).fg(TEXT_MAIN))
        .border_style(Style::default().fg(TEXT_DIM));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(group) = state.selected_game() else {
        let empty = Paragraph::new("No games match the current search.")
            .style(Style::default().fg(TEXT_DIM))
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, inner);
        return;
    };

    let (resolved, unresolved) = group.sku_tallies(&state.catalog);
    let mut lines = vec![
        Line::from(Span::styled(
            group.entry.name.clone(),
            Style::default()
                .fg(ACCENT_ROSE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Total Cards: {}", group.total_count())),
        Line::from(format!(
            "Sizes: {} known, {} unknown",
            resolved, unresolved
        )),
        Line::from(""),
    ];
    for variant in &group.variants {
        let name = state
            .catalog
            .sku(&variant.sku)
            .map(|meta| meta.name.clone())
            .unwrap_or_else(|| "Unknown Sku".to_string());
        lines.push(Line::from(vec![
            Span::styled(format!("  {name}"), Style::default().fg(TEXT_MAIN)),
            Span::styled(
                format!("  x{}", variant.count_value()),
                Style::default().fg(TEXT_DIM),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter to view details",
        Style::default().fg(TEXT_DIM),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

pub fn render_game_details(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(group) = state.viewing_game() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title("GAME DETAILS")
        .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
        .border_style(Style::default().fg(ACCENT_ROSE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            group.entry.name.clone(),
            Style::default()
                .fg(ACCENT_ROSE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   Total Cards: {}", group.total_count()),
            Style::default().fg(TEXT_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), layout[0]);

    render_variant_cards(frame, layout[1], state, group);
}

fn render_variant_cards(frame: &mut Frame, area: Rect, state: &AppState, group: &GameGroup) {
    let order = group.display_order(&state.catalog);
    if order.is_empty() {
        return;
    }
    let visible = (area.height / VARIANT_CARD_HEIGHT).max(1) as usize;
    let cursor = state.games.variant_index.min(order.len() - 1);
    let first = cursor.saturating_sub(visible.saturating_sub(1));

    for (slot, &variant_idx) in order.iter().skip(first).take(visible).enumerate() {
        let Some(variant) = group.variants.get(variant_idx) else {
            continue;
        };
        let card_area = Rect {
            x: area.x,
            y: area.y + (slot as u16) * VARIANT_CARD_HEIGHT,
            width: area.width,
            height: VARIANT_CARD_HEIGHT.min(area.height.saturating_sub(
                (slot as u16) * VARIANT_CARD_HEIGHT,
            )),
        };
        if card_area.height < 3 {
            break;
        }
        let is_selected = first + slot == cursor;
        render_sku_card(
            frame,
            card_area,
            state.catalog.sku(&variant.sku),
            Some(variant),
            is_selected,
        );
    }
}

/// One sleeve card: resolved name or the "Unknown Sku" placeholder,
/// dimensions with catalog fallback, and the purchase actions.
fn render_sku_card(
    frame: &mut Frame,
    area: Rect,
    meta: Option<&SkuMeta>,
    variant: Option<&crate::catalog::SizeVariant>,
    is_selected: bool,
) {
    let title = meta
        .map(|m| m.name.clone())
        .unwrap_or_else(|| "Unknown Sku".to_string());
    let border = if is_selected {
        Style::default()
            .fg(ACCENT_ROSE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_DIM)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().bg(BG_PANEL_ALT).fg(TEXT_MAIN))
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = variant
        .and_then(|v| v.width)
        .or(meta.map(|m| m.width));
    let height = variant
        .and_then(|v| v.height)
        .or(meta.map(|m| m.height));
    let dim = |value: Option<f64>| {
        value
            .map(|v| format!("{v}"))
            .unwrap_or_else(|| "-".to_string())
    };

    let mut lines = Vec::new();
    if let Some(variant) = variant {
        lines.push(Line::from(format!("Count: {}", variant.count)));
    }
    lines.push(Line::from(format!(
        "Width: {}   Height: {}",
        dim(width),
        dim(height)
    )));

    let mut actions = Vec::new();
    match meta.and_then(|m| m.link.as_deref()) {
        Some(_) => actions.push(Span::styled(
            "[b] Buy Now",
            Style::default()
                .fg(ACCENT_BLUE)
                .add_modifier(Modifier::BOLD),
        )),
        None => actions.push(Span::styled(
            "unavailable",
            Style::default().fg(TEXT_DIM).add_modifier(Modifier::DIM),
        )),
    }
    if meta.and_then(|m| m.premium_link.as_deref()).is_some() {
        actions.push(Span::raw("   "));
        actions.push(Span::styled(
            "[p] Buy Premium",
            Style::default()
                .fg(ACCENT_ROSE)
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(actions));

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_sleeves(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    sleeve_list: &mut SelectList,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(44), Constraint::Percentage(56)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("SLEEVE SIZES")
        .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
        .border_style(Style::default().fg(ACCENT_ROSE));
    let inner = block.inner(layout[0]);
    frame.render_widget(block, layout[0]);

    let items = sleeve_items(state);
    let props = SelectListProps {
        items: &items,
        count: items.len(),
        selected: state
            .sleeves
            .selected_index
            .min(items.len().saturating_sub(1)),
        is_focused: !state.sleeves.search.active,
        style: list_style(),
        behavior: SelectListBehavior {
            show_scrollbar: true,
            wrap_navigation: false,
        },
        on_select: Action::ListSelect,
        render_item: &|item| item.clone(),
    };
    sleeve_list.render(frame, inner, props);

    let detail = Rect {
        x: layout[1].x,
        y: layout[1].y,
        width: layout[1].width,
        height: VARIANT_CARD_HEIGHT.min(layout[1].height),
    };
    match state.selected_sku() {
        Some(meta) => render_sku_card(frame, detail, Some(meta), None, true),
        None => {
            let empty = Paragraph::new("No sleeves match the current search.")
                .style(Style::default().fg(TEXT_DIM))
                .wrap(Wrap { trim: true });
            frame.render_widget(empty, layout[1]);
        }
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, status_bar: &mut StatusBar) {
    let (left_hints, center_hints) = status_hints(state);
    let status = state.message.clone().unwrap_or_default();
    let status_span = Span::styled(status, Style::default().fg(ACCENT_ROSE));
    let status_items = [StatusBarItem::span(status_span)];

    let style = StatusBarStyle {
        base: BaseStyle {
            border: Some(BorderStyle {
                borders: Borders::ALL,
                style: Style::default().fg(TEXT_DIM),
                focused_style: Some(Style::default().fg(ACCENT_ROSE)),
            }),
            padding: Padding::xy(1, 0),
            bg: Some(BG_PANEL),
            fg: Some(TEXT_MAIN),
        },
        text: Style::default().fg(TEXT_DIM),
        hint_key: Style::default()
            .fg(ACCENT_BLUE)
            .add_modifier(Modifier::BOLD),
        hint_label: Style::default().fg(TEXT_DIM),
        separator: Style::default().fg(TEXT_DIM),
    };

    let props = StatusBarProps {
        left: StatusBarSection::hints(&left_hints).with_separator("  "),
        center: StatusBarSection::hints(&center_hints).with_separator("  "),
        right: StatusBarSection::items(&status_items).with_separator("  "),
        style,
        is_focused: false,
    };
    Component::<Action>::render(status_bar, frame, area, props);
}

fn status_hints(state: &AppState) -> (Vec<StatusBarHint<'static>>, Vec<StatusBarHint<'static>>) {
    if state.search().active {
        let left = vec![
            StatusBarHint::new("Enter", "Apply"),
            StatusBarHint::new("Esc", "Cancel"),
            StatusBarHint::new("Bksp", "Delete"),
        ];
        return (left, vec![StatusBarHint::new("q", "Quit")]);
    }

    let mut left = Vec::new();
    match state.tab {
        Tab::Games if state.games.viewing.is_some() => {
            left.extend([
                StatusBarHint::new("j/k", "Variant"),
                StatusBarHint::new("b", "Buy"),
                StatusBarHint::new("p", "Premium"),
                StatusBarHint::new("Esc", "Back"),
            ]);
        }
        Tab::Games => {
            left.extend([
                StatusBarHint::new("j/k", "Move"),
                StatusBarHint::new("Enter", "Details"),
                StatusBarHint::new("/", "Search"),
            ]);
        }
        Tab::Sleeves => {
            left.extend([
                StatusBarHint::new("j/k", "Move"),
                StatusBarHint::new("b", "Buy"),
                StatusBarHint::new("p", "Premium"),
                StatusBarHint::new("/", "Search"),
            ]);
        }
    }
    let center = vec![
        StatusBarHint::new("Tab", "Switch"),
        StatusBarHint::new("q", "Quit"),
    ];
    (left, center)
}

pub fn game_items(state: &AppState) -> Vec<Line<'static>> {
    state
        .games
        .filtered
        .iter()
        .filter_map(|&idx| state.catalog.games.get(idx))
        .map(|group| {
            Line::from(vec![
                Span::styled(group.entry.name.clone(), Style::default().fg(TEXT_MAIN)),
                Span::styled(
                    format!("  ({} cards)", group.total_count()),
                    Style::default().fg(TEXT_DIM),
                ),
            ])
        })
        .collect()
}

pub fn sleeve_items(state: &AppState) -> Vec<Line<'static>> {
    state
        .sleeves
        .filtered
        .iter()
        .filter_map(|&idx| state.catalog.skus.get(idx))
        .map(|meta| {
            let availability = match (&meta.link, &meta.premium_link) {
                (Some(_), Some(_)) => "buy/premium",
                (Some(_), None) => "buy",
                (None, Some(_)) => "premium",
                (None, None) => "unavailable",
            };
            Line::from(vec![
                Span::styled(meta.name.clone(), Style::default().fg(TEXT_MAIN)),
                Span::styled(
                    format!("  {}x{}  [{availability}]", meta.width, meta.height),
                    Style::default().fg(TEXT_DIM),
                ),
            ])
        })
        .collect()
}

fn list_style() -> SelectListStyle {
    SelectListStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: None,
            fg: Some(TEXT_MAIN),
        },
        selection: SelectionStyle {
            style: Some(
                Style::default()
                    .bg(BG_HIGHLIGHT)
                    .fg(TEXT_MAIN)
                    .add_modifier(Modifier::BOLD),
            ),
            marker: None,
            disabled: false,
        },
        ..SelectListStyle::default()
    }
}
