//! Report body and navigation bar widgets.
//!
//! Each visible block is drawn into its own scratch buffer at full height and
//! the rows inside the viewport are copied into the frame, so blocks cut by
//! the viewport edge still render correctly.

use std::collections::HashSet;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::core::card_stack::CardStack;
use crate::core::report::{optimized_image_url, Report, SectionId, Tone, NAV_ITEMS};

use super::card_stack::CardStackWidget;
use super::chart::{ChartCard, CHART_CARD_HEIGHT};
use super::document::{
    app_access_link_rows, chart_columns, column_span, gallery_columns, reference_text, timeline_card_span,
    BlockKind, DocBlock, DocumentLayout, FocusTarget, FLIP_HINT, GALLERY_TILE_HEIGHT,
};
use super::layout::{nav_geometry, AUTHORS_BUTTON, BRAND_LABEL, SEARCH_BUTTON, THEME_BUTTON};
use super::theme::Theme;
use super::wrap;

// ───────────────────────────────────────── nav bar ───────────

pub struct NavBar<'a> {
    pub theme: &'a Theme,
    pub active: Option<SectionId>,
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.status_bar_style());
        let geometry = nav_geometry(area);

        put(buf, geometry.brand, BRAND_LABEL, self.theme.accent_style());
        for (id, rect) in &geometry.items {
            let label = NAV_ITEMS
                .iter()
                .find(|item| item.target == *id)
                .map_or("", |item| item.label);
            put(buf, *rect, label, self.theme.nav_style(self.active == Some(*id)));
        }
        put(buf, geometry.search, SEARCH_BUTTON, self.theme.text_style());
        put(buf, geometry.authors, AUTHORS_BUTTON, self.theme.text_style());
        put(buf, geometry.theme, THEME_BUTTON, self.theme.text_style());
    }
}

/// Write `text` clipped to `rect`'s first row.
fn put(buf: &mut Buffer, rect: Rect, text: &str, style: Style) {
    if rect.is_empty() {
        return;
    }
    buf.set_stringn(rect.x, rect.y, text, rect.width as usize, style);
}

/// `text` centered on row `y` of `area`.
fn put_centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    let w = wrap::width(text) as u16;
    let x = area.x + area.width.saturating_sub(w) / 2;
    buf.set_stringn(x, y, text, area.width as usize, style);
}

// ───────────────────────────────────────── body ──────────────

pub struct ReportBody<'a> {
    pub report: &'a Report,
    pub layout: &'a DocumentLayout,
    pub theme: &'a Theme,
    pub scroll: usize,
    pub expanded: &'a HashSet<SectionId>,
    pub flipped: &'a HashSet<usize>,
    pub focus: Option<FocusTarget>,
    pub cards: &'a CardStack,
    /// Front-card drag displacement in columns.
    pub drag_dx: i32,
}

impl Widget for ReportBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.base_style());
        let left = area.x + self.layout.x;
        let right = area.x.saturating_add(area.width);

        for block in self.layout.visible_blocks(self.scroll, area.height) {
            let rect = Rect::new(0, 0, self.layout.width, block.height);
            let mut scratch = Buffer::empty(rect);
            scratch.set_style(rect, self.theme.base_style());
            self.render_block(block, rect, &mut scratch);

            for row in 0..block.height {
                let doc_row = block.top + row as usize;
                if doc_row < self.scroll || doc_row >= self.scroll + area.height as usize {
                    continue;
                }
                let y = area.y + (doc_row - self.scroll) as u16;
                for col in 0..rect.width {
                    let x = left + col;
                    if x >= right {
                        break;
                    }
                    if let (Some(src), Some(dst)) = (scratch.cell((col, row)), buf.cell_mut((x, y))) {
                        *dst = src.clone();
                    }
                }
            }
        }
    }
}

impl ReportBody<'_> {
    fn focused(&self, target: FocusTarget) -> bool {
        self.focus == Some(target)
    }

    fn panel(&self, title: &str, border: Style, focused: bool) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused { self.theme.focus_border_style() } else { border })
            .title(format!(" {title} "))
            .title_style(border)
    }

    fn render_block(&self, block: &DocBlock, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let width = area.width as usize;
        match block.kind {
            BlockKind::Hero => self.render_hero(area, buf),
            BlockKind::SectionHeader(id) => self.render_section_header(id, area, buf),
            BlockKind::Paragraph { section, index } => {
                let Some(text) = self.report.section(section).and_then(|s| s.paragraphs.get(index)) else {
                    return;
                };
                for (i, line) in wrap::wrap(text, width).iter().enumerate() {
                    buf.set_stringn(area.x, area.y + i as u16, line, width, theme.text_style());
                }
            }
            BlockKind::Highlight { section, index } => {
                let Some(highlight) = self.report.section(section).and_then(|s| s.highlights.get(index)) else {
                    return;
                };
                let tone = theme.tone_style(highlight.tone == Tone::Positive);
                let marker = match highlight.tone {
                    Tone::Positive => "✓",
                    Tone::Attention => "!",
                };
                self.render_panel(&format!("{marker} {}", highlight.title), highlight.text, tone, area, buf);
            }
            BlockKind::Callout(section) => {
                let Some(callout) = self.report.section(section).and_then(|s| s.callout.as_ref()) else {
                    return;
                };
                self.render_panel(callout.title, callout.text, theme.accent_style(), area, buf);
            }
            BlockKind::ChartRow { year, first, count } => {
                let charts = self.report.charts(year);
                let cols = chart_columns(area.width) as u16;
                for (i, chart) in charts.iter().skip(first).take(count).enumerate() {
                    let (x, w) = column_span(area.width, cols, i as u16);
                    let rect = Rect::new(area.x + x, area.y, w, CHART_CARD_HEIGHT);
                    ChartCard { chart, theme }.render(rect, buf);
                }
            }
            BlockKind::TimelineEvent(i) => self.render_timeline_event(i, area, buf),
            BlockKind::GalleryRow { first, count } => {
                let images = self.report.gallery_images();
                let cols = gallery_columns(area.width);
                for col in 0..count {
                    let index = first + col;
                    let Some(url) = images.get(index) else {
                        continue;
                    };
                    let (x, w) = column_span(area.width, cols, col as u16);
                    let rect = Rect::new(area.x + x, area.y, w, GALLERY_TILE_HEIGHT);
                    let title = format!("Foto {}", index + 1);
                    let tile = self.panel(&title, theme.border_style(), self.focused(FocusTarget::Image(index)));
                    let inner = tile.inner(rect);
                    tile.render(rect, buf);
                    put_centered(buf, inner, inner.y, "▣", theme.accent_style());
                    let link = wrap::truncate(&optimized_image_url(url), inner.width as usize);
                    put_centered(buf, inner, inner.y + inner.height.saturating_sub(1), &link, theme.muted_style());
                }
            }
            BlockKind::Video(i) => {
                let Some(video) = self.report.videos.get(i) else {
                    return;
                };
                let panel = self.panel("Vídeo", theme.border_style(), self.focused(FocusTarget::Video(i)));
                let inner = panel.inner(area);
                panel.render(area, buf);
                let inner_w = inner.width as usize;
                let title = wrap::truncate(&format!("▶ {}", video.title), inner_w);
                buf.set_stringn(inner.x, inner.y, title, inner_w, theme.heading_style());
                let url = wrap::truncate(video.url, inner_w);
                buf.set_stringn(inner.x, inner.y + 1, url, inner_w, theme.muted_style());
            }
            BlockKind::Documents => CardStackWidget {
                stack: self.cards,
                theme,
                drag_dx: self.drag_dx,
                focused: self.focused(FocusTarget::Documents),
            }
            .render(area, buf),
            BlockKind::Reference(i) => {
                let Some(reference) = self.report.references.get(i) else {
                    return;
                };
                for (row, line) in wrap::wrap(&reference_text(reference), width).iter().enumerate() {
                    buf.set_stringn(area.x, area.y + row as u16, line, width, theme.muted_style());
                }
            }
            BlockKind::AppAccess => self.render_app_access(area, buf),
            BlockKind::Footer => {
                let rule = "─".repeat(width);
                buf.set_stringn(area.x, area.y, rule, width, theme.border_style());
                let footer = &self.report.footer;
                for (row, line) in [footer.authors, footer.place, footer.credits].iter().enumerate() {
                    put_centered(buf, area, area.y + 1 + row as u16, line, theme.muted_style());
                }
            }
        }
    }

    fn render_hero(&self, area: Rect, buf: &mut Buffer) {
        let hero = &self.report.hero;
        let width = area.width as usize;
        let mut y = area.y;
        put_centered(buf, area, y, &format!(" {} ", hero.badge), self.theme.chip_style(true));
        y += 2;
        for line in wrap::wrap(hero.title_lead, width) {
            put_centered(buf, area, y, &line, self.theme.heading_style());
            y += 1;
        }
        for line in wrap::wrap(hero.title_tail, width) {
            put_centered(buf, area, y, &line, self.theme.accent_style());
            y += 1;
        }
        y += 1;
        for line in wrap::wrap(hero.tagline, width) {
            put_centered(buf, area, y, &line, self.theme.muted_style());
            y += 1;
        }
    }

    fn render_section_header(&self, id: SectionId, area: Rect, buf: &mut Buffer) {
        let Some(section) = self.report.section(id) else {
            return;
        };
        let width = area.width as usize;
        let text = if section.collapsible {
            let marker = if self.expanded.contains(&id) { '▾' } else { '▸' };
            format!("{marker} {} {}", section.icon, section.title)
        } else {
            format!("{} {}", section.icon, section.title)
        };
        let style = if self.focused(FocusTarget::Section(id)) {
            self.theme.selected_style()
        } else {
            self.theme.heading_style()
        };
        buf.set_stringn(area.x, area.y, wrap::truncate(&text, width), width, style);
        buf.set_stringn(area.x, area.y + 1, "─".repeat(width), width, self.theme.border_style());
    }

    fn render_panel(&self, title: &str, text: &str, accent: Style, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(accent);
        let inner = block.inner(area);
        block.render(area, buf);
        let width = inner.width as usize;
        buf.set_stringn(inner.x, inner.y, title, width, accent);
        for (i, line) in wrap::wrap(text, width).iter().enumerate() {
            buf.set_stringn(inner.x, inner.y + 1 + i as u16, line, width, self.theme.text_style());
        }
    }

    fn render_timeline_event(&self, index: usize, area: Rect, buf: &mut Buffer) {
        let Some(event) = self.report.timeline.get(index) else {
            return;
        };
        let (x, card_w) = timeline_card_span(event, area.width);
        let rect = Rect::new(area.x + x, area.y, card_w, area.height);
        let flipped = self.flipped.contains(&index);
        let border = if flipped { self.theme.border_style() } else { self.theme.accent_style() };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused(FocusTarget::Timeline(index)) {
                self.theme.focus_border_style()
            } else {
                border
            });
        let inner = block.inner(rect);
        block.render(rect, buf);
        let width = inner.width as usize;
        let mut y = inner.y;

        if flipped {
            for line in wrap::wrap(event.title, width) {
                buf.set_stringn(inner.x, y, line, width, self.theme.accent_style());
                y += 1;
            }
            for line in wrap::wrap(event.description, width) {
                buf.set_stringn(inner.x, y, line, width, self.theme.text_style());
                y += 1;
            }
        } else {
            buf.set_stringn(inner.x, y, event.year, width, self.theme.accent_style());
            y += 1;
            for line in wrap::wrap(event.title, width) {
                buf.set_stringn(inner.x, y, line, width, self.theme.heading_style());
                y += 1;
            }
        }
        let hint_y = inner.y + inner.height.saturating_sub(1);
        if hint_y >= y {
            let w = wrap::width(FLIP_HINT) as u16;
            let hint_x = inner.x + inner.width.saturating_sub(w);
            buf.set_stringn(hint_x, hint_y, FLIP_HINT, width, self.theme.muted_style());
        }
    }

    fn render_app_access(&self, area: Rect, buf: &mut Buffer) {
        let access = &self.report.app_access;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.accent_style());
        let inner = block.inner(area);
        block.render(area, buf);
        let width = inner.width as usize;

        buf.set_stringn(inner.x, inner.y, access.title, width, self.theme.heading_style());
        for (i, line) in wrap::wrap(access.caption, width).iter().enumerate() {
            buf.set_stringn(inner.x, inner.y + 1 + i as u16, line, width, self.theme.muted_style());
        }

        let (qr_row, instagram_row) = app_access_link_rows(access.caption, area.width);
        let links = [
            (qr_row, FocusTarget::QrCode, format!("▦ QR code   {}", access.qr_url)),
            (instagram_row, FocusTarget::Instagram, format!("◎ Instagram {}", access.instagram_url)),
        ];
        for (row, target, text) in links {
            let style = if self.focused(target) {
                self.theme.selected_style()
            } else {
                self.theme.link_style()
            };
            buf.set_stringn(area.x + 1, area.y + row, wrap::truncate(&text, width), width, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gesture::SwipeThresholds;
    use crate::core::stack::LayoutMode;
    use ratatui::{backend::TestBackend, Terminal};

    struct Fixture {
        report: Report,
        cards: CardStack,
        expanded: HashSet<SectionId>,
        flipped: HashSet<usize>,
        theme: Theme,
    }

    fn fixture() -> Fixture {
        let report = Report::builtin();
        let cards = CardStack::new(
            report.document_deck().unwrap(),
            LayoutMode::Stack,
            SwipeThresholds::default(),
        );
        let expanded = report
            .sections
            .iter()
            .filter(|s| s.default_expanded)
            .map(|s| s.id)
            .collect();
        Fixture {
            report,
            cards,
            expanded,
            flipped: HashSet::new(),
            theme: Theme::default(),
        }
    }

    fn draw(f: &Fixture, scroll: usize, focus: Option<FocusTarget>) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let layout = DocumentLayout::build(&f.report, &f.expanded, &f.cards, 100);
        terminal
            .draw(|frame| {
                frame.render_widget(
                    ReportBody {
                        report: &f.report,
                        layout: &layout,
                        theme: &f.theme,
                        scroll,
                        expanded: &f.expanded,
                        flipped: &f.flipped,
                        focus,
                        cards: &f.cards,
                        drag_dx: 0,
                    },
                    frame.area(),
                );
            })
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn first_screen_shows_hero_and_summary() {
        let f = fixture();
        let out = draw(&f, 0, None);
        assert!(out.contains("2ª DIREC/RN"));
        assert!(out.contains("A cultura de paz como prática institucional:"));
        assert!(out.contains("▾ ⌂ Resumo"));
        assert!(out.contains("▸ ▯ 1. Introdução"));
    }

    #[test]
    fn blocks_cut_by_the_viewport_still_draw() {
        let f = fixture();
        let layout = DocumentLayout::build(&f.report, &f.expanded, &f.cards, 100);
        let block = layout
            .block(BlockKind::TimelineEvent(0))
            .copied()
            .unwrap();
        // Scroll so only the last row of the first timeline card shows.
        let out = draw(&f, block.bottom() - 1, None);
        let first_line = out.lines().next().unwrap();
        assert!(first_line.contains('╰'), "{first_line}");
    }

    #[test]
    fn flipped_timeline_card_shows_description() {
        let mut f = fixture();
        let layout = DocumentLayout::build(&f.report, &f.expanded, &f.cards, 100);
        let top = layout.block(BlockKind::TimelineEvent(1)).unwrap().top;
        assert!(!draw(&f, top, None).contains("24 capacitações"));
        f.flipped.insert(1);
        assert!(draw(&f, top, None).contains("24 capacitações"));
    }

    #[test]
    fn documents_block_draws_the_card_stack() {
        let f = fixture();
        let layout = DocumentLayout::build(&f.report, &f.expanded, &f.cards, 100);
        let top = layout.block(BlockKind::Documents).unwrap().top;
        let out = draw(&f, top, Some(FocusTarget::Documents));
        assert!(out.contains(" All "));
        assert!(out.contains("Plano de ação 2023"));
    }

    #[test]
    fn nav_bar_highlights_nothing_above_the_first_section() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 140, 1);
        let mut buf = Buffer::empty(area);
        NavBar { theme: &theme, active: None }.render(area, &mut buf);
        let row: String = (0..140).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(row.contains("NUREPDH"));
        assert!(row.contains("Diagnóstico"));
        assert!(row.contains(SEARCH_BUTTON));
    }
}
