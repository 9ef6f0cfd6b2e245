//! Popup overlay widgets for the settings menu and controls submenu.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::app::settings::{SettingsItem, SETTINGS_ITEMS};
use crate::app::state::AppState;
use crate::config::{Action, AppConfig};

use super::layout::centered_fixed;
use super::theme::Theme;
use super::wrap;

fn popup_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(theme.title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style())
        .style(theme.surface_style())
}

// ───────────────────────────────────────── settings popup ────

/// Settings menu popup overlay.
pub struct SettingsPopup<'a> {
    pub state: &'a AppState,
}

impl Widget for SettingsPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.state.theme;
        let height = (SETTINGS_ITEMS.len() as u16) + 6;
        let popup = centered_fixed(46, height, area);
        Clear.render(popup, buf);

        let block = popup_block(" Settings ", theme);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::raw("")];
        for (i, item) in SETTINGS_ITEMS.iter().enumerate() {
            let selected = i == self.state.settings_selected;
            let (prefix, style) = if selected {
                (" ▸ ", theme.selected_style())
            } else {
                ("   ", theme.text_style())
            };

            let mut spans = vec![Span::styled(format!("{prefix}{}", item.label()), style)];
            match (item, item.value(self.state)) {
                (SettingsItem::Toggle { get, .. }, Some(value)) => {
                    spans.push(Span::styled(format!("  [{value}]"), theme.tone_style(get(self.state))));
                }
                (_, Some(value)) => {
                    spans.push(Span::styled(format!("  {value}"), theme.accent_style()));
                }
                (_, None) => spans.push(Span::styled("  ›", theme.muted_style())),
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Enter/Space: change  Esc: close",
            theme.muted_style(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

// ───────────────────────────────────────── controls popup ────

/// Interactive controls / keybinding popup overlay.
pub struct ControlsPopup<'a> {
    pub config: &'a AppConfig,
    pub theme: &'a Theme,
    pub selected: usize,
    pub awaiting_rebind: bool,
    /// First action row shown when the list is taller than the popup.
    pub offset: usize,
}

/// Action rows that fit in a controls popup over `area`.
pub fn controls_visible_rows(area: Rect) -> usize {
    // Borders, leading blank, reset block and hint take 7 rows.
    (area.height.min(Action::ALL.len() as u16 + 7)).saturating_sub(7) as usize
}

/// Scroll offset that keeps action row `selected` inside `visible` rows.
pub fn controls_offset(selected: usize, visible: usize) -> usize {
    let last = Action::ALL.len().saturating_sub(visible);
    selected.saturating_sub(visible.saturating_sub(1)).min(last)
}

impl Widget for ControlsPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let height = (Action::ALL.len() as u16) + 7;
        let popup = centered_fixed(56, height, area);
        Clear.render(popup, buf);

        let block = popup_block(" Controls ", theme);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let visible = controls_visible_rows(area);
        let mut lines = vec![Line::raw("")];

        // ── Action rows ─────────────────────────────────────────
        for (i, &action) in Action::ALL.iter().enumerate().skip(self.offset).take(visible) {
            let is_selected = i == self.selected;
            let prefix = if is_selected { " ▸ " } else { "   " };

            let keys_display = if is_selected && self.awaiting_rebind {
                "Press a key…".to_string()
            } else {
                self.config.display_bindings(action)
            };

            let base_style = if is_selected {
                theme.selected_style()
            } else {
                theme.text_style()
            };
            let key_style = if is_selected && self.awaiting_rebind {
                theme.selected_style().fg(theme.attention)
            } else if is_selected {
                theme.selected_style().fg(theme.accent)
            } else {
                theme.accent_style()
            };

            // Fixed-width columns: label left-aligned, keys right-aligned.
            let label_col = format!("{prefix}{:<22}", action.label());
            let keys_width = (inner.width as usize).saturating_sub(wrap::width(&label_col)).max(1);
            let keys_col = format!("{keys_display:>keys_width$}");

            lines.push(Line::from(vec![
                Span::styled(label_col, base_style),
                Span::styled(keys_col, key_style),
            ]));
        }

        // ── Reset option ────────────────────────────────────────
        let is_reset_selected = self.selected == Action::ALL.len();
        lines.push(Line::raw(""));
        let (reset_prefix, reset_style) = if is_reset_selected {
            (" ▸ ", theme.selected_style())
        } else {
            ("   ", theme.text_style())
        };
        lines.push(Line::from(Span::styled(
            format!("{reset_prefix}⟳ Reset to defaults"),
            reset_style,
        )));

        // ── Hint bar ────────────────────────────────────────────
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Enter: add key  Del: clear  Esc: back",
            theme.muted_style(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn settings_popup_shows_current_values() {
        let state = AppState::new(AppConfig::default()).unwrap();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        SettingsPopup { state: &state }.render(area, &mut buf);
        let out = text(&buf);
        assert!(out.contains("Settings"));
        assert!(out.contains("Swipe Distance"));
        assert!(out.contains("50px"));
        assert!(out.contains("[ON]"));
    }

    #[test]
    fn controls_popup_prompts_while_rebinding() {
        let config = AppConfig::default();
        let area = Rect::new(0, 0, 80, 40);
        let mut buf = Buffer::empty(area);
        ControlsPopup {
            config: &config,
            theme: &Theme::default(),
            selected: 0,
            awaiting_rebind: true,
            offset: 0,
        }
        .render(area, &mut buf);
        let out = text(&buf);
        assert!(out.contains("Press a key…"));
        assert!(out.contains("Reset to defaults"));
    }

    #[test]
    fn short_terminals_show_fewer_action_rows() {
        assert_eq!(controls_visible_rows(Rect::new(0, 0, 80, 60)), Action::ALL.len());
        assert_eq!(controls_visible_rows(Rect::new(0, 0, 80, 17)), 10);
        assert_eq!(controls_offset(3, 10), 0);
        assert_eq!(controls_offset(12, 10), 3);
        assert_eq!(controls_offset(Action::ALL.len(), 10), Action::ALL.len() - 10);
    }
}
