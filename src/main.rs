use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventKind,
    HandlerResponse, Keybindings,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

use sleevetui::action::Action;
use sleevetui::catalog::Catalog;
use sleevetui::effect::Effect;
use sleevetui::reducer::reducer;
use sleevetui::state::{AppState, Tab};
use sleevetui::ui::{SleeveComponentId, SleeveContext, SleeveUi};

#[derive(Parser, Debug)]
#[command(name = "sleevetui")]
#[command(about = "Browse card games and the sleeve sizes that fit them")]
struct Args {
    /// Alternate catalog file (same JSON shape as the bundled catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let debug = DebugSession::new(args.debug);

    let catalog_path = args.catalog;
    let state = debug
        .load_state_or_else_async(move || async move {
            let catalog = match &catalog_path {
                Some(path) => Catalog::from_path(path).await,
                None => Catalog::bundled(),
            };
            let catalog = match catalog {
                Ok(catalog) => catalog,
                Err(error) => {
                    eprintln!("Error: could not load catalog: {error}");
                    std::process::exit(1);
                }
            };
            Ok::<AppState, io::Error>(AppState::new(catalog))
        })
        .await
        .map_err(debug_error)?;
    let replay_actions = debug.load_replay_items().map_err(debug_error)?;
    let (middleware, recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug.save_actions(recorder.as_ref()).map_err(debug_error)?;
    Ok(())
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(SleeveUi::new()));
    let mut bus: EventBus<AppState, Action, SleeveComponentId, SleeveContext> = EventBus::new();
    let keybindings: Keybindings<SleeveContext> = Keybindings::new();

    let ui_game_list = Rc::clone(&ui);
    bus.register(SleeveComponentId::GameList, move |event, state| {
        ui_game_list
            .borrow_mut()
            .handle_game_list_event(&event.kind, state)
    });

    let ui_details = Rc::clone(&ui);
    bus.register(SleeveComponentId::GameDetails, move |event, state| {
        ui_details
            .borrow_mut()
            .handle_details_event(&event.kind, state)
    });

    let ui_sleeves = Rc::clone(&ui);
    bus.register(SleeveComponentId::SleeveList, move |event, state| {
        ui_sleeves
            .borrow_mut()
            .handle_sleeve_list_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(SleeveComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
    });

    bus.register_global(|event, state| match event.kind {
        EventKind::Resize(width, height) => {
            HandlerResponse::action(Action::UiTerminalResize(width, height)).with_render()
        }
        EventKind::Key(key) => match key.code {
            crossterm::event::KeyCode::Char('q') => HandlerResponse::action(Action::Quit),
            crossterm::event::KeyCode::Tab => HandlerResponse::action(Action::TabNext),
            crossterm::event::KeyCode::BackTab => HandlerResponse::action(Action::TabPrev),
            crossterm::event::KeyCode::Char('1') if !state.search().active => {
                HandlerResponse::action(Action::TabSelect(Tab::Games))
            }
            crossterm::event::KeyCode::Char('2') if !state.search().active => {
                HandlerResponse::action(Action::TabSelect(Tab::Sleeves))
            }
            crossterm::event::KeyCode::Char('/') if !state.search().active => {
                HandlerResponse::action(Action::SearchStart)
            }
            _ => HandlerResponse::ignored(),
        },
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

fn handle_effect(effect: Effect, _ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::OpenLink { url } => {
            // Fire and forget; the open result is never reported back.
            std::thread::spawn(move || {
                let _ = open::that(&url);
            });
        }
    }
}
