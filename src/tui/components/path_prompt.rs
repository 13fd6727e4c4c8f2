//! # Path Prompt Component
//!
//! A one-line overlay for typing a path (Ctrl+G), the terminal stand-in
//! for the browser address bar. Prefilled with the current path.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

pub struct PathPromptState {
    pub buffer: String,
}

impl PathPromptState {
    pub fn new(current_path: String) -> Self {
        Self {
            buffer: current_path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Go(String),
    Dismiss,
}

impl EventHandler for PathPromptState {
    type Event = PromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PromptEvent> {
        match event {
            TuiEvent::Escape => Some(PromptEvent::Dismiss),
            TuiEvent::Submit => Some(PromptEvent::Go(self.buffer.trim().to_string())),
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.push(*c);
                None
            }
            TuiEvent::Paste(text) => {
                self.buffer.extend(text.chars().filter(|c| !c.is_control()));
                None
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            TuiEvent::ClearLine => {
                self.buffer.clear();
                None
            }
            _ => None,
        }
    }
}

pub struct PathPrompt<'a> {
    state: &'a PathPromptState,
    palette: Palette,
}

impl<'a> PathPrompt<'a> {
    pub fn new(state: &'a PathPromptState, palette: Palette) -> Self {
        Self { state, palette }
    }
}

impl Component for PathPrompt<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(4).min(70);
        let overlay = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + area.height / 3,
            width,
            height: 3.min(area.height),
        };
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .title(" Go to path ")
            .title_bottom(Line::from(" Enter Go  Esc Cancel ").centered())
            .border_style(self.palette.border(true))
            .style(self.palette.surface());
        let inner = block.inner(overlay);
        frame.render_widget(Paragraph::new(self.state.buffer.as_str()).block(block), overlay);

        if inner.width > 0 && inner.height > 0 {
            let offset = (self.state.buffer.width() as u16).min(inner.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
        }
    }
}
