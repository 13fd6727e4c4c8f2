//! # Application State
//!
//! Core business state for Atlas. No TUI types live here; presentation
//! state (selected card, focused border button, open overlays) lives in
//! the `tui` module.
//!
//! ```text
//! App
//! ├── store: CountryStore      // countries, regions, selection slot, load state
//! ├── history: History         // route stack
//! ├── filter: FilterState      // search text + region, reset on entering the list
//! ├── dark_mode: bool          // persisted theme flag
//! ├── status_message: String   // nav bar text
//! └── source_url: String       // where the countries come from
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::country::Country;
use crate::core::filter::FilterState;
use crate::core::route::{History, Route};
use crate::core::store::CountryStore;

pub struct App {
    pub store: CountryStore,
    pub history: History,
    pub filter: FilterState,
    pub dark_mode: bool,
    pub status_message: String,
    pub source_url: String,
}

impl App {
    pub fn new(source_url: String, dark_mode: bool) -> Self {
        Self::with_route(source_url, dark_mode, Route::List)
    }

    pub fn with_route(source_url: String, dark_mode: bool, initial: Route) -> Self {
        Self {
            store: CountryStore::new(),
            history: History::new(initial),
            filter: FilterState::new(),
            dark_mode,
            status_message: String::new(),
            source_url,
        }
    }

    pub fn route(&self) -> &Route {
        self.history.current()
    }

    /// Countries passing the current filter, in payload order.
    pub fn visible_countries(&self) -> Vec<&Country> {
        self.filter.apply(self.store.countries())
    }

    /// The country the current detail route points at, if it resolves.
    pub fn detail_country(&self) -> Option<&Country> {
        match self.route() {
            Route::Detail(id) => self.store.resolve(id),
            _ => None,
        }
    }
}
