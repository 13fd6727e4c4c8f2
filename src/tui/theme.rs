//! # Theme
//!
//! Light and dark palettes. Components take a `Palette` as a prop rather
//! than reading the dark-mode flag themselves.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                background: Color::Rgb(32, 44, 55),
                surface: Color::Rgb(43, 57, 69),
                text: Color::Rgb(255, 255, 255),
                muted: Color::Rgb(160, 170, 180),
                accent: Color::Cyan,
                error: Color::LightRed,
            }
        } else {
            Self {
                background: Color::Rgb(250, 250, 250),
                surface: Color::Rgb(255, 255, 255),
                text: Color::Rgb(17, 21, 23),
                muted: Color::Rgb(110, 110, 110),
                accent: Color::Blue,
                error: Color::Red,
            }
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn surface(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }
}
