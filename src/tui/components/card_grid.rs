//! # CardGrid Component
//!
//! The filtered countries as a grid of cards, one per country, with a
//! keyboard-driven selection.
//!
//! ## Architecture
//!
//! `CardGrid` is a transient component (created each frame) that wraps
//! `&'a mut CardGridState` (persistent state) and the visible countries
//! (props). The column count and visible rows depend on the terminal size,
//! so they are recorded on the state during render and used by the next
//! round of event handling.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::country::Country;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::text::truncate_to_width;
use crate::tui::theme::Palette;

/// Minimum card width, borders included.
pub const CARD_WIDTH: u16 = 30;
/// Card height: 2 borders + 4 lines.
pub const CARD_HEIGHT: u16 = 6;

/// Selection and scroll state for the grid. Lives in `TuiState`.
#[derive(Debug, Clone)]
pub struct CardGridState {
    pub selected: usize,
    /// Number of cards (synced from the visible countries).
    pub len: usize,
    /// Columns at the last render.
    pub columns: usize,
    /// Fully visible rows at the last render.
    pub visible_rows: usize,
    /// First row shown.
    pub scroll_row: usize,
}

impl Default for CardGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl CardGridState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            len: 0,
            columns: 1,
            visible_rows: 1,
            scroll_row: 0,
        }
    }

    /// Updates the card count, clamping the selection into range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.len.saturating_sub(1));
        self.scroll_to_selected();
    }

    /// Back to the first card, e.g. after the filter changes.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_row = 0;
    }

    pub fn scroll_to_selected(&mut self) {
        let columns = self.columns.max(1);
        let rows = self.visible_rows.max(1);
        let row = self.selected / columns;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + rows {
            self.scroll_row = row + 1 - rows;
        }
    }

    fn page(&self) -> usize {
        self.columns.max(1) * self.visible_rows.max(1)
    }
}

/// High-level events emitted by the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardGridEvent {
    /// Open the card at this index of the visible list.
    Open(usize),
}

impl EventHandler for CardGridState {
    type Event = CardGridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CardGridEvent> {
        if self.len == 0 {
            return None;
        }
        let columns = self.columns.max(1);
        let target = match event {
            TuiEvent::Submit => return Some(CardGridEvent::Open(self.selected)),
            TuiEvent::CursorLeft => self.selected.saturating_sub(1),
            TuiEvent::CursorRight => self.selected + 1,
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                if self.selected < columns {
                    self.selected
                } else {
                    self.selected - columns
                }
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                // Stay put on the last row rather than jumping sideways
                if self.selected + columns < self.len {
                    self.selected + columns
                } else {
                    self.selected
                }
            }
            TuiEvent::PageUp => self.selected.saturating_sub(self.page()),
            TuiEvent::PageDown => self.selected + self.page(),
            TuiEvent::Home => 0,
            TuiEvent::End => self.len - 1,
            _ => return None,
        };
        self.select(target);
        None
    }
}

/// Transient render wrapper for the grid.
pub struct CardGrid<'a> {
    state: &'a mut CardGridState,
    countries: &'a [&'a Country],
    /// Alpha3 code of the last opened country, marked on its card.
    last_opened: Option<&'a str>,
    palette: Palette,
}

impl<'a> CardGrid<'a> {
    pub fn new(
        state: &'a mut CardGridState,
        countries: &'a [&'a Country],
        last_opened: Option<&'a str>,
        palette: Palette,
    ) -> Self {
        Self {
            state,
            countries,
            last_opened,
            palette,
        }
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, country: &Country, is_selected: bool) {
        let marker = if self.last_opened == Some(country.route_id()) {
            "● "
        } else {
            ""
        };
        let name_width = (area.width as usize).saturating_sub(4 + marker.chars().count());
        let title = format!(" {marker}{} ", truncate_to_width(&country.name, name_width));

        let title_style = if is_selected {
            self.palette.label().add_modifier(Modifier::REVERSED)
        } else {
            self.palette.label()
        };

        let block = Block::bordered()
            .title(Span::styled(title, title_style))
            .border_style(self.palette.border(is_selected))
            .style(self.palette.surface());

        let value_width = (area.width as usize).saturating_sub(2);
        let field = |label: &str, value: &str| {
            Line::from(vec![
                Span::styled(format!("{label}: "), self.palette.label()),
                Span::raw(truncate_to_width(
                    value,
                    value_width.saturating_sub(label.len() + 2),
                )),
            ])
        };

        let lines = vec![
            field("Population", &country.population_display()),
            field("Region", country.region_or_default()),
            field("Capital", country.capital_or_default()),
            Line::from(Span::styled(country.alpha3_code.clone(), self.palette.muted())),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Component for CardGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let columns = (area.width / CARD_WIDTH).max(1) as usize;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        self.state.columns = columns;
        self.state.visible_rows = visible_rows;
        self.state.set_len(self.countries.len());
        self.state.scroll_to_selected();

        let card_width = area.width / columns as u16;
        let first = self.state.scroll_row * columns;
        let last = (first + columns * visible_rows).min(self.countries.len());

        for (offset, country) in self.countries[first..last].iter().enumerate() {
            let row = (offset / columns) as u16;
            let col = (offset % columns) as u16;
            let card_area = Rect {
                x: area.x + col * card_width,
                y: area.y + row * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT.min(area.height.saturating_sub(row * CARD_HEIGHT)),
            };
            let index = first + offset;
            self.render_card(frame, card_area, country, index == self.state.selected);
        }
    }
}
