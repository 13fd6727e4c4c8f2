//! # NavBar Component
//!
//! Top bar shown on every screen: the app title, the current path and
//! status message, and the theme toggle label.
//!
//! Stateless. All props come from `App`:
//! - `path`: canonical path of the current route
//! - `status_message`: transient status (fetch errors, unresolved borders)
//! - `dark_mode`: drives both the label and the palette
//!
//! The toggle label names the mode you would switch *to*, so dark mode
//! shows "Light Mode".

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub const TITLE: &str = "Where in the world?";

pub struct NavBar {
    pub path: String,
    pub status_message: String,
    pub dark_mode: bool,
}

impl NavBar {
    pub fn new(path: String, status_message: String, dark_mode: bool) -> Self {
        Self {
            path,
            status_message,
            dark_mode,
        }
    }

    fn toggle_label(&self) -> &'static str {
        if self.dark_mode {
            "☀ Light Mode (Ctrl+T)"
        } else {
            "☾ Dark Mode (Ctrl+T)"
        }
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_mode(self.dark_mode);
        let label = self.toggle_label();
        let label_width = label.chars().count() as u16 + 1;

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(label_width)]).areas(area);

        let mut spans = vec![
            Span::styled(format!(" {TITLE}"), palette.label()),
            Span::styled(format!("  {}", self.path), palette.muted()),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                palette.muted().add_modifier(Modifier::ITALIC),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(palette.surface()), left);
        frame.render_widget(
            Paragraph::new(Span::styled(label, palette.label())).style(palette.surface()),
            right,
        );
    }
}
