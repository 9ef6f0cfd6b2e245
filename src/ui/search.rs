//! Search overlay (query input, result count and ranked results).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::core::search::SearchResult;

use super::layout::{centered_fixed, contains};
use super::theme::Theme;
use super::wrap;

pub const PLACEHOLDER: &str = "Type to search…";
const CLOSE_BUTTON: &str = "[X]";
const MAX_WIDTH: u16 = 80;
const MAX_HEIGHT: u16 = 24;
/// Input, status line and a rule.
const HEADER_ROWS: u16 = 3;
const RESULT_ROWS: u16 = 2;

/// Clickable regions of the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGeometry {
    pub panel: Rect,
    pub close: Rect,
    /// One rect per visible result, in result order.
    pub results: Vec<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchHit {
    Close,
    Result(usize),
    Panel,
    Outside,
}

/// Lay the overlay out over `terminal` for `result_count` results.
pub fn search_geometry(terminal: Rect, result_count: usize) -> SearchGeometry {
    let panel = centered_fixed(
        MAX_WIDTH.min(terminal.width.saturating_sub(4)),
        MAX_HEIGHT.min(terminal.height.saturating_sub(2)),
        terminal,
    );
    let close = Rect::new(
        panel.x + panel.width.saturating_sub(CLOSE_BUTTON.len() as u16 + 2),
        panel.y,
        CLOSE_BUTTON.len() as u16,
        1,
    )
    .intersection(panel);

    let inner_top = panel.y + 1 + HEADER_ROWS;
    let inner_bottom = (panel.y + panel.height).saturating_sub(1);
    let fit = (inner_bottom.saturating_sub(inner_top) / RESULT_ROWS) as usize;
    let results = (0..result_count.min(fit))
        .map(|i| {
            Rect::new(
                panel.x + 1,
                inner_top + i as u16 * RESULT_ROWS,
                panel.width.saturating_sub(2),
                RESULT_ROWS,
            )
        })
        .collect();

    SearchGeometry { panel, close, results }
}

impl SearchGeometry {
    pub fn hit(&self, col: u16, row: u16) -> SearchHit {
        if contains(self.close, col, row) {
            return SearchHit::Close;
        }
        if let Some(i) = self.results.iter().position(|r| contains(*r, col, row)) {
            return SearchHit::Result(i);
        }
        if contains(self.panel, col, row) {
            SearchHit::Panel
        } else {
            SearchHit::Outside
        }
    }
}

/// Status line under the input.
pub fn status_text(query: &str, count: usize) -> String {
    let query = query.trim();
    if query.is_empty() {
        PLACEHOLDER.to_string()
    } else if count == 0 {
        format!("No results for “{query}”")
    } else if count == 1 {
        "1 result".to_string()
    } else {
        format!("{count} results")
    }
}

pub struct SearchOverlay<'a> {
    pub query: &'a str,
    pub results: &'a [SearchResult],
    pub selected: Option<usize>,
    pub theme: &'a Theme,
}

impl Widget for SearchOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let geometry = search_geometry(area, self.results.len());
        let panel = geometry.panel;
        if panel.width < 4 || panel.height < 4 {
            return;
        }

        Clear.render(panel, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.focus_border_style())
            .title(Span::styled(" Search ", self.theme.title_style()))
            .style(self.theme.surface_style());
        let inner = block.inner(panel);
        block.render(panel, buf);
        buf.set_stringn(
            geometry.close.x,
            geometry.close.y,
            CLOSE_BUTTON,
            geometry.close.width as usize,
            self.theme.tone_style(false),
        );

        let input = if self.query.is_empty() {
            Line::from(vec![
                Span::styled("/ ", self.theme.accent_style()),
                Span::styled(PLACEHOLDER, self.theme.muted_style()),
            ])
        } else {
            Line::from(vec![
                Span::styled("/ ", self.theme.accent_style()),
                Span::styled(self.query.to_string(), self.theme.text_style()),
                Span::styled("▏", self.theme.accent_style()),
            ])
        };
        Paragraph::new(input).render(Rect::new(inner.x, inner.y, inner.width, 1), buf);
        if inner.height < 2 {
            return;
        }

        let status = status_text(self.query, self.results.len());
        buf.set_stringn(inner.x, inner.y + 1, status, inner.width as usize, self.theme.muted_style());
        if inner.height < 3 {
            return;
        }
        buf.set_stringn(
            inner.x,
            inner.y + 2,
            "─".repeat(inner.width as usize),
            inner.width as usize,
            self.theme.border_style(),
        );

        let width = inner.width as usize;
        for (i, (rect, result)) in geometry.results.iter().zip(self.results).enumerate() {
            let selected = self.selected == Some(i);
            let marker = if selected { "▸ " } else { "  " };
            let title_style = if selected {
                self.theme.selected_style()
            } else {
                self.theme.heading_style()
            };
            let kind = format!("[{}] ", result.kind);
            let title_w = width.saturating_sub(wrap::width(marker) + wrap::width(&kind));
            let title = Line::from(vec![
                Span::styled(marker, self.theme.accent_style()),
                Span::styled(kind, self.theme.accent_style()),
                Span::styled(wrap::truncate(&result.title, title_w), title_style),
            ]);
            Paragraph::new(title).render(Rect::new(rect.x, rect.y, rect.width, 1), buf);
            let content = wrap::truncate(&result.content, width.saturating_sub(4));
            buf.set_stringn(rect.x + 4, rect.y + 1, content, width.saturating_sub(4), self.theme.muted_style());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::Report;
    use crate::core::search::{build_index, search_entries};

    fn render(query: &str, results: &[SearchResult]) -> String {
        let area = Rect::new(0, 0, 90, 30);
        let mut buf = Buffer::empty(area);
        SearchOverlay {
            query,
            results,
            selected: Some(0),
            theme: &Theme::default(),
        }
        .render(area, &mut buf);
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
    fn status_line_reflects_query_state() {
        assert_eq!(status_text("  ", 0), PLACEHOLDER);
        assert_eq!(status_text("bullying", 0), "No results for “bullying”");
        assert_eq!(status_text("paz", 1), "1 result");
        assert_eq!(status_text("paz", 7), "7 results");
    }

    #[test]
    fn results_are_listed_with_their_kind() {
        let entries = build_index(&Report::builtin());
        let results = search_entries(&entries, "bullying", 10);
        assert!(!results.is_empty());
        let out = render("bullying", &results);
        assert!(out.contains(&format!("{} results", results.len())) || out.contains("1 result"));
        assert!(out.contains("[chart]"));
    }

    #[test]
    fn clicks_map_to_results_and_close() {
        let geometry = search_geometry(Rect::new(0, 0, 90, 30), 3);
        assert_eq!(geometry.results.len(), 3);
        let second = geometry.results[1];
        assert_eq!(geometry.hit(second.x + 2, second.y + 1), SearchHit::Result(1));
        assert_eq!(geometry.hit(geometry.close.x, geometry.close.y), SearchHit::Close);
        assert_eq!(geometry.hit(0, 0), SearchHit::Outside);
    }

    #[test]
    fn results_beyond_the_panel_are_not_laid_out() {
        let geometry = search_geometry(Rect::new(0, 0, 90, 12), 50);
        let bottom = geometry.panel.y + geometry.panel.height - 1;
        assert!(geometry.results.iter().all(|r| r.y + r.height <= bottom));
    }
}
