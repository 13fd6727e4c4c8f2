//! # SearchBox Component
//!
//! Shows the name query. Typing on the list screen always lands here, so
//! the box has no focus state of its own; the buffer lives in
//! `App::filter`.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::theme::Palette;

const PLACEHOLDER: &str = "Search for a country...";

pub struct SearchBox<'a> {
    pub query: &'a str,
    pub match_count: usize,
    pub palette: Palette,
    /// Whether to place the terminal cursor at the end of the query.
    pub show_cursor: bool,
}

impl Component for SearchBox<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Search ")
            .title_bottom(Line::from(format!(" {} shown ", self.match_count)).right_aligned())
            .border_style(self.palette.border(true))
            .style(self.palette.surface());

        let line = if self.query.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, self.palette.muted()))
        } else {
            Line::from(self.query)
        };

        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(line).block(block), area);

        if self.show_cursor && inner.width > 0 && inner.height > 0 {
            let offset = (self.query.width() as u16).min(inner.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
        }
    }
}
