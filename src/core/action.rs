//! # Actions
//!
//! Everything that can happen in Atlas becomes an `Action`.
//! User opens a card? That's `Action::OpenCountry(code)`.
//! The fetch completes? That's `Action::CountriesLoaded(countries)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing any I/O the caller must perform. No side effects
//! here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::country::Country;
use crate::core::filter::FilterState;
use crate::core::route::Route;
use crate::core::state::App;
use crate::core::store::LoadState;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CountriesLoaded(Vec<Country>),
    FetchFailed(String),
    RetryFetch,
    SearchInput(char),
    SearchPaste(String),
    SearchBackspace,
    ClearSearch,
    /// Empty string clears the region filter.
    SelectRegion(String),
    /// A card in the grid was opened. Carries the alpha3 code.
    OpenCountry(String),
    /// A border button on the detail page was followed. Carries the border code.
    OpenBorder(String),
    /// Go to a typed path.
    Navigate(String),
    Back,
    ToggleTheme,
    Quit,
}

/// I/O the event loop must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    FetchCountries,
    PersistTheme(bool),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::CountriesLoaded(countries) => {
            info!("Loaded {} countries", countries.len());
            app.store.replace(countries);
            app.status_message.clear();
            Effect::None
        }
        Action::FetchFailed(message) => {
            warn!("Country fetch failed: {}", message);
            app.store.load = LoadState::Failed(message);
            app.status_message = "Could not load countries (Ctrl+R to retry)".to_string();
            Effect::None
        }
        Action::RetryFetch => {
            if app.store.load == LoadState::Loading {
                return Effect::None;
            }
            app.store.load = LoadState::Loading;
            app.status_message = "Loading countries...".to_string();
            Effect::FetchCountries
        }
        Action::SearchInput(c) => {
            if !c.is_control() {
                app.filter.query.push(c);
            }
            Effect::None
        }
        Action::SearchPaste(text) => {
            // The query is a single line
            app.filter
                .query
                .extend(text.chars().filter(|c| !c.is_control()));
            Effect::None
        }
        Action::SearchBackspace => {
            app.filter.query.pop();
            Effect::None
        }
        Action::ClearSearch => {
            app.filter.query.clear();
            Effect::None
        }
        Action::SelectRegion(region) => {
            debug!("Region filter set to {:?}", region);
            app.filter.region = region;
            Effect::None
        }
        Action::OpenCountry(id) => {
            if id.is_empty() {
                debug!("Ignoring open with an empty country id");
                return Effect::None;
            }
            // Commit and navigate with the same value.
            app.store.selected = Some(id.clone());
            navigate_to(app, Route::detail_for(&id));
            Effect::None
        }
        Action::OpenBorder(border_code) => {
            let target = app
                .store
                .resolve_border(&border_code)
                .map(|c| c.route_id().to_string());
            match target {
                Some(code) => navigate_to(app, Route::detail_for(&code)),
                None => {
                    app.status_message = format!("No country with code {border_code}");
                }
            }
            Effect::None
        }
        Action::Navigate(path) => {
            navigate_to(app, Route::parse(&path));
            Effect::None
        }
        Action::Back => {
            let left_list = *app.route() != Route::List;
            if app.history.back() {
                debug!("Back to {}", app.route());
                if left_list && *app.route() == Route::List {
                    app.filter = FilterState::new();
                }
            }
            Effect::None
        }
        Action::ToggleTheme => {
            app.dark_mode = !app.dark_mode;
            info!("Dark mode {}", if app.dark_mode { "on" } else { "off" });
            Effect::PersistTheme(app.dark_mode)
        }
        Action::Quit => Effect::Quit,
    }
}

/// Pushes `route`, resetting the list filter when the list view is entered
/// from elsewhere.
fn navigate_to(app: &mut App, route: Route) {
    let entering_list = route == Route::List && *app.route() != Route::List;
    debug!("Navigate {} -> {}", app.route(), route);
    app.history.push(route);
    if entering_list {
        app.filter = FilterState::new();
    }
}
