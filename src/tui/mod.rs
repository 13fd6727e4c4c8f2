//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm Event → TuiEvent → dispatch() → Action → core::update() → Effect
//!                                                                       │
//!            run loop performs the I/O (fetch, save prefs, quit) ◄──────┘
//! ```
//!
//! The one background task is the country fetch. It runs on tokio and
//! reports back over an `mpsc` channel as an `Action`, so every state
//! change still happens on the UI thread.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms waiting for input and
//! only redraws after an event or a background action.

mod component;
mod components;
mod event;
mod text;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::PathBuf;
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{CountrySource, HttpCountrySource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::prefs;
use crate::core::route::{LIST_PATH, Route};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CardGridEvent, CardGridState, CountryDetailState, DetailEvent, PathPromptState, PromptEvent,
    RegionPickerEvent, RegionPickerState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub card_grid: CardGridState,
    pub detail: CountryDetailState,
    /// Region filter overlay (None = hidden)
    pub region_picker: Option<RegionPickerState>,
    /// Path prompt overlay (None = hidden)
    pub path_prompt: Option<PathPromptState>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            card_grid: CardGridState::new(),
            detail: CountryDetailState::new(),
            region_picker: None,
            path_prompt: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let prefs_path = prefs::prefs_path();
    let dark_mode = prefs_path
        .as_deref()
        .and_then(prefs::load_dark_mode)
        .unwrap_or(config.dark_mode);

    let source: Arc<dyn CountrySource> =
        Arc::new(HttpCountrySource::new(config.countries_url.clone()));
    let initial = Route::parse(&config.start_path);
    info!("Starting at {} (dark mode: {})", initial, dark_mode);

    let mut app = App::with_route(config.countries_url.clone(), dark_mode, initial);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from the fetch task
    let (tx, rx) = mpsc::channel();
    spawn_fetch(source.clone(), tx.clone());

    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effect = dispatch(&mut app, &mut tui, event);
            if !perform(effect, &source, &tx, prefs_path.as_ref()) {
                break 'main;
            }
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {}", action_name(&action));
            let effect = update(&mut app, action);
            if !perform(effect, &source, &tx, prefs_path.as_ref()) {
                break 'main;
            }
        }
    }

    ratatui::restore();
    info!("Atlas shutting down");
    Ok(())
}

/// Executes an effect. Returns false when the app should exit.
fn perform(
    effect: Effect,
    source: &Arc<dyn CountrySource>,
    tx: &mpsc::Sender<Action>,
    prefs_path: Option<&PathBuf>,
) -> bool {
    match effect {
        Effect::None => true,
        Effect::Quit => false,
        Effect::FetchCountries => {
            spawn_fetch(source.clone(), tx.clone());
            true
        }
        Effect::PersistTheme(dark_mode) => {
            match prefs_path {
                Some(path) => {
                    if let Err(e) = prefs::save_dark_mode(path, dark_mode) {
                        warn!("Failed to save theme preference: {}", e);
                    }
                }
                None => warn!("No home directory, theme preference not saved"),
            }
            true
        }
    }
}

fn action_name(action: &Action) -> String {
    match action {
        Action::CountriesLoaded(countries) => format!("CountriesLoaded({})", countries.len()),
        other => format!("{other:?}"),
    }
}

fn spawn_fetch(source: Arc<dyn CountrySource>, tx: mpsc::Sender<Action>) {
    info!("Spawning country fetch from {}", source.location());
    tokio::spawn(async move {
        let action = match source.fetch_countries().await {
            Ok(countries) => Action::CountriesLoaded(countries),
            Err(e) => Action::FetchFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
}

/// Routes one input event through overlays and the current screen,
/// applying the resulting action. Pure apart from `update()`.
pub(crate) fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let route_before = app.route().clone();
    let effect = route_event(app, tui, event);
    if *app.route() != route_before {
        on_route_change(app, tui);
    }
    effect
}

fn route_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    // Global shortcuts, regardless of screen or overlay
    match event {
        TuiEvent::Resize => return Effect::None,
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::ToggleTheme => return update(app, Action::ToggleTheme),
        TuiEvent::Retry => return update(app, Action::RetryFetch),
        TuiEvent::OpenPathPrompt => {
            tui.region_picker = None;
            tui.path_prompt = Some(PathPromptState::new(app.route().path()));
            return Effect::None;
        }
        _ => {}
    }

    if let Some(ref mut prompt) = tui.path_prompt {
        return match prompt.handle_event(&event) {
            Some(PromptEvent::Go(path)) => {
                tui.path_prompt = None;
                update(app, Action::Navigate(path))
            }
            Some(PromptEvent::Dismiss) => {
                tui.path_prompt = None;
                Effect::None
            }
            None => Effect::None,
        };
    }

    if let Some(ref mut picker) = tui.region_picker {
        return match picker.handle_event(&event) {
            Some(RegionPickerEvent::Select(region)) => {
                tui.region_picker = None;
                tui.card_grid.reset();
                update(app, Action::SelectRegion(region))
            }
            Some(RegionPickerEvent::Dismiss) => {
                tui.region_picker = None;
                Effect::None
            }
            None => Effect::None,
        };
    }

    let route = app.route().clone();
    match route {
        Route::List => list_event(app, tui, event),
        Route::Detail(_) => detail_event(app, tui, event),
        Route::NotFound(_) => match event {
            TuiEvent::Submit | TuiEvent::Escape => {
                update(app, Action::Navigate(LIST_PATH.to_string()))
            }
            _ => Effect::None,
        },
    }
}

fn list_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let action = match event {
        TuiEvent::Escape => Action::Quit,
        TuiEvent::InputChar(c) => Action::SearchInput(c),
        TuiEvent::Paste(text) => Action::SearchPaste(text),
        TuiEvent::Backspace => Action::SearchBackspace,
        TuiEvent::ClearLine => Action::ClearSearch,
        TuiEvent::Tab => {
            tui.region_picker = Some(RegionPickerState::new(
                app.store.regions().to_vec(),
                &app.filter.region,
            ));
            return Effect::None;
        }
        other => {
            tui.card_grid.set_len(app.visible_countries().len());
            let Some(CardGridEvent::Open(index)) = tui.card_grid.handle_event(&other) else {
                return Effect::None;
            };
            let Some(code) = app
                .visible_countries()
                .get(index)
                .map(|c| c.route_id().to_string())
            else {
                return Effect::None;
            };
            Action::OpenCountry(code)
        }
    };

    if matches!(
        action,
        Action::SearchInput(_) | Action::SearchPaste(_) | Action::SearchBackspace | Action::ClearSearch
    ) {
        tui.card_grid.reset();
    }
    update(app, action)
}

fn detail_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if matches!(event, TuiEvent::Escape | TuiEvent::Backspace) {
        return update(app, Action::Back);
    }

    let border_codes: Vec<String> = app
        .detail_country()
        .map(|c| {
            app.store
                .border_countries(c)
                .iter()
                .map(|b| b.alpha3_code.clone())
                .collect()
        })
        .unwrap_or_default();
    tui.detail.set_border_count(border_codes.len());

    match tui.detail.handle_event(&event) {
        Some(DetailEvent::FollowBorder(index)) => match border_codes.get(index) {
            Some(code) => update(app, Action::OpenBorder(code.clone())),
            None => Effect::None,
        },
        None => Effect::None,
    }
}

/// Resets per-screen presentation state after navigation.
fn on_route_change(app: &App, tui: &mut TuiState) {
    tui.detail = CountryDetailState::new();
    if *app.route() == Route::List {
        // Land on the card that was last opened
        let visible = app.visible_countries();
        tui.card_grid.set_len(visible.len());
        let index = app
            .store
            .selected
            .as_deref()
            .and_then(|id| visible.iter().position(|c| c.route_id() == id))
            .unwrap_or(0);
        tui.card_grid.select(index);
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use ratatui::Frame;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// Renders into a test backend and returns the buffer's symbols as one string.
    pub fn render_to_string(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(draw).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }
}
