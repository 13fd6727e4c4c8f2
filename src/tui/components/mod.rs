//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `NavBar`: title, path, status and theme toggle label
//! - `SearchBox`: the name query
//! - `NotFoundPage`: unknown paths
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components with persistent state in `TuiState` that emit events:
//! - `CardGrid`: selection over the visible countries
//! - `CountryDetail`: focus over the border buttons
//! - `RegionPicker`: region filter overlay
//! - `PathPrompt`: typed navigation overlay
//!
//! Stateful components follow the persistent state + transient wrapper
//! pattern: `FooState` lives across frames, `Foo<'a>` borrows it plus its
//! props for a single render.
//!
//! ### Props-Based Data Flow
//!
//! Components never read `App` directly. `ui::draw_ui` pulls what each one
//! needs and passes it in:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! NavBar::new(app.route().path(), app.status_message.clone(), app.dark_mode)
//!     .render(frame, nav_area);
//!
//! // Bad: Hidden dependency on global state
//! nav_bar.render(frame, area); // reads from global App
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

pub mod card_grid;
pub mod country_detail;
pub mod nav_bar;
pub mod not_found;
pub mod path_prompt;
pub mod region_picker;
pub mod search_box;

pub use card_grid::{CardGrid, CardGridEvent, CardGridState};
pub use country_detail::{CountryDetail, CountryDetailState, DetailEvent};
pub use nav_bar::NavBar;
pub use not_found::NotFoundPage;
pub use path_prompt::{PathPrompt, PathPromptState, PromptEvent};
pub use region_picker::{RegionPicker, RegionPickerEvent, RegionPickerState};
pub use search_box::SearchBox;

/// Compute a centered rect using percentage of the outer rect.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
