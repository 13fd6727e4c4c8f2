//! # CountryDetail Component
//!
//! Full page for one country: flag panel, properties and a row of border
//! buttons. The country is resolved from the route on every frame, so the
//! component also covers the case where the identifier matches nothing.
//!
//! Border buttons are built from the neighbours that exist in the store.
//! Codes that do not resolve are left out rather than rendered blank.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::country::{Country, NOT_PROVIDED};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

pub const NOT_FOUND_MESSAGE: &str = "Country not found";

/// Which border button has focus. Lives in `TuiState`, reset on every
/// route change.
#[derive(Debug, Clone, Default)]
pub struct CountryDetailState {
    pub focused: usize,
    /// Number of border buttons (synced from the store).
    pub border_count: usize,
}

impl CountryDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_border_count(&mut self, count: usize) {
        self.border_count = count;
        self.focused = self.focused.min(count.saturating_sub(1));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    /// Follow the border button at this index.
    FollowBorder(usize),
}

impl EventHandler for CountryDetailState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        if self.border_count == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorRight | TuiEvent::Tab | TuiEvent::CursorDown => {
                self.focused = (self.focused + 1) % self.border_count;
                None
            }
            TuiEvent::CursorLeft | TuiEvent::BackTab | TuiEvent::CursorUp => {
                self.focused = (self.focused + self.border_count - 1) % self.border_count;
                None
            }
            TuiEvent::Submit => Some(DetailEvent::FollowBorder(self.focused)),
            _ => None,
        }
    }
}

pub struct CountryDetail<'a> {
    state: &'a mut CountryDetailState,
    /// The route identifier, shown when it does not resolve.
    identifier: &'a str,
    country: Option<&'a Country>,
    borders: &'a [&'a Country],
    palette: Palette,
}

impl<'a> CountryDetail<'a> {
    pub fn new(
        state: &'a mut CountryDetailState,
        identifier: &'a str,
        country: Option<&'a Country>,
        borders: &'a [&'a Country],
        palette: Palette,
    ) -> Self {
        Self {
            state,
            identifier,
            country,
            borders,
            palette,
        }
    }

    fn render_not_found(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(NOT_FOUND_MESSAGE, self.palette.label())),
            Line::from(Span::styled(
                format!("Nothing is loaded under \"{}\"", self.identifier),
                self.palette.muted(),
            )),
        ];
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            middle,
        );
    }

    fn render_flag(&self, frame: &mut Frame, area: Rect, country: &Country) {
        let block = Block::bordered()
            .title(" Flag ")
            .border_style(self.palette.border(false))
            .padding(Padding::uniform(1))
            .style(self.palette.surface());
        let lines = vec![
            Line::from(Span::styled(
                country.alpha3_code.clone(),
                self.palette.label().add_modifier(Modifier::UNDERLINED),
            )),
            Line::default(),
            Line::from(Span::styled(
                country.flag.clone().unwrap_or_else(|| NOT_PROVIDED.to_string()),
                self.palette.muted(),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn properties(&self, country: &Country) -> Vec<Line<'static>> {
        let field = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label}: "), self.palette.label()),
                Span::raw(value),
            ])
        };

        let mut lines = vec![
            Line::from(Span::styled(
                country.name.clone(),
                self.palette.label().add_modifier(Modifier::UNDERLINED),
            )),
            Line::default(),
            field("Native Name", country.native_name_or_default().to_string()),
            field("Population", country.population_display()),
            field("Region", country.region_or_default().to_string()),
            field("Sub Region", country.subregion_or_default().to_string()),
            field("Capital", country.capital_or_default().to_string()),
            Line::default(),
            field("Top Level Domain", country.top_level_domain_display()),
            field("Currencies", country.currencies_display()),
            field("Languages", country.languages_display()),
        ];

        // Islands carry no `borders` key at all: no section.
        if country.borders.is_some() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Border Countries:", self.palette.label())));
            lines.push(self.border_buttons());
        }
        lines
    }

    fn border_buttons(&self) -> Line<'static> {
        if self.borders.is_empty() {
            return Line::from(Span::styled("(none available)", self.palette.muted()));
        }
        let mut spans = Vec::with_capacity(self.borders.len() * 2);
        for (i, neighbour) in self.borders.iter().enumerate() {
            let style = if i == self.state.focused {
                self.palette.border(true).add_modifier(Modifier::REVERSED)
            } else {
                self.palette.surface()
            };
            spans.push(Span::styled(format!("[ {} ]", neighbour.name), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Component for CountryDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.set_border_count(self.borders.len());

        let [back_area, _, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled(" ← Back (Esc) ", self.palette.label().add_modifier(Modifier::REVERSED))),
            back_area,
        );

        let Some(country) = self.country else {
            self.render_not_found(frame, body);
            return;
        };

        let [flag_area, props_area] =
            Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                .spacing(2)
                .areas(body);

        self.render_flag(frame, flag_area, country);
        frame.render_widget(
            Paragraph::new(self.properties(country)).wrap(Wrap { trim: false }),
            props_area,
        );
    }
}
