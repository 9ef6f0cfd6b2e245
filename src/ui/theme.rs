//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;
use crate::core::cards::Rgb;

/// Central theme. Change colours here and they propagate everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub positive: Color,
    pub attention: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                mode,
                background: Color::Rgb(15, 23, 42),
                surface: Color::Rgb(30, 41, 59),
                text: Color::Rgb(226, 232, 240),
                muted: Color::Rgb(148, 163, 184),
                border: Color::Rgb(71, 85, 105),
                accent: Color::Rgb(249, 115, 22),
                positive: Color::Rgb(74, 222, 128),
                attention: Color::Rgb(248, 113, 113),
            },
            ThemeMode::Light => Self {
                mode,
                background: Color::Rgb(248, 250, 252),
                surface: Color::Rgb(255, 255, 255),
                text: Color::Rgb(30, 41, 59),
                muted: Color::Rgb(100, 116, 139),
                border: Color::Rgb(203, 213, 225),
                accent: Color::Rgb(234, 88, 12),
                positive: Color::Rgb(22, 163, 74),
                attention: Color::Rgb(220, 38, 38),
            },
        }
    }

    pub fn rgb(color: Rgb) -> Color {
        Color::Rgb(color.0, color.1, color.2)
    }

    // ── document ───────────────────────────────────────────────
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn surface_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn tone_style(&self, positive: bool) -> Style {
        let fg = if positive { self.positive } else { self.attention };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border of the item that has keyboard focus.
    pub fn focus_border_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.surface)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn nav_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default().bg(self.surface).fg(self.muted)
    }

    pub fn chip_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.background)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted).bg(self.surface)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}
