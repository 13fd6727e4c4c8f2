//! # Region Picker Component
//!
//! Overlay for choosing the region filter. Opened with Tab on the list
//! screen. The first entry clears the filter.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RegionPickerState` lives in `TuiState` while the overlay is open
//! - `RegionPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

pub const ALL_REGIONS: &str = "All regions";

/// Persistent state for the region picker overlay.
pub struct RegionPickerState {
    /// Region names, without the "All regions" entry.
    pub regions: Vec<String>,
    /// Index into the displayed list (0 = "All regions").
    pub selected: usize,
    pub list_state: ListState,
}

impl RegionPickerState {
    /// Opens the picker with `current` (empty = no filter) preselected.
    pub fn new(regions: Vec<String>, current: &str) -> Self {
        let selected = regions
            .iter()
            .position(|r| r == current)
            .map(|i| i + 1)
            .unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            regions,
            selected,
            list_state,
        }
    }

    fn entry_count(&self) -> usize {
        self.regions.len() + 1
    }

    fn select(&mut self, index: usize) {
        self.selected = index.min(self.entry_count() - 1);
        self.list_state.select(Some(self.selected));
    }
}

/// Events emitted by the region picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionPickerEvent {
    /// Empty string = all regions.
    Select(String),
    Dismiss,
}

impl EventHandler for RegionPickerState {
    type Event = RegionPickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<RegionPickerEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Tab => Some(RegionPickerEvent::Dismiss),
            TuiEvent::CursorUp | TuiEvent::ScrollUp | TuiEvent::BackTab => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.select(self.selected + 1);
                None
            }
            TuiEvent::Home => {
                self.select(0);
                None
            }
            TuiEvent::End => {
                self.select(self.entry_count() - 1);
                None
            }
            TuiEvent::Submit => {
                let region = match self.selected {
                    0 => String::new(),
                    i => self.regions[i - 1].clone(),
                };
                Some(RegionPickerEvent::Select(region))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the region picker overlay.
pub struct RegionPicker<'a> {
    state: &'a mut RegionPickerState,
    palette: Palette,
}

impl<'a> RegionPicker<'a> {
    pub fn new(state: &'a mut RegionPickerState, palette: Palette) -> Self {
        Self { state, palette }
    }
}

impl Component for RegionPicker<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(40, 50, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border(true))
            .title(" Filter by Region ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1))
            .style(self.palette.surface());

        if self.state.regions.is_empty() {
            let empty = Paragraph::new("No regions loaded yet.")
                .style(self.palette.muted())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let items: Vec<ListItem> = std::iter::once(ALL_REGIONS)
            .chain(self.state.regions.iter().map(String::as_str))
            .enumerate()
            .map(|(i, name)| {
                let label = if name.is_empty() { "(no region)" } else { name };
                let style = if i == self.state.selected {
                    self.palette.label().add_modifier(Modifier::REVERSED)
                } else {
                    self.palette.surface()
                };
                ListItem::new(Line::from(Span::styled(label.to_string(), style)))
            })
            .collect();

        frame.render_stateful_widget(List::new(items).block(block), overlay, &mut self.state.list_state);
    }
}
