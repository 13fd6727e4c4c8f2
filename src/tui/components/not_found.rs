//! # NotFoundPage Component
//!
//! Shown for any path that is neither the list nor a single-segment detail
//! path. The only ways out are a fresh navigation: Enter/Esc goes to the
//! list, Ctrl+G opens the path prompt.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub const PAGE_NOT_FOUND: &str = "Page not found";

pub struct NotFoundPage<'a> {
    pub path: &'a str,
    pub palette: Palette,
}

impl Component for NotFoundPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(PAGE_NOT_FOUND, self.palette.label())),
            Line::from(Span::styled(format!("No route for {}", self.path), self.palette.muted())),
            Line::default(),
            Line::from(Span::styled("Enter: go to /countries", self.palette.muted())),
        ];
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
    }
}
