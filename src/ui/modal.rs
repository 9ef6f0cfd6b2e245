//! Full-screen overlays: image viewer, video player card and author bios.
//!
//! Renders a panel centred on the terminal with a close button, and for
//! images navigation arrows plus a position indicator (e.g. "3 / 12").
//! Media cannot play in a terminal, so image and video modals offer an
//! "open in browser" button instead.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::core::report::{optimized_image_url, Author, Video};

use super::layout::contains;
use super::theme::Theme;
use super::wrap;

const CLOSE_BUTTON: &str = "[X]";
const OPEN_BUTTON: &str = "[ Open in browser ]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Image,
    Video,
    Authors,
}

/// Clickable regions of an open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalHitZones {
    pub panel: Rect,
    pub close: Rect,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    pub open: Option<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalHit {
    Close,
    Prev,
    Next,
    Open,
    Panel,
    Outside,
}

impl ModalHitZones {
    pub fn hit(&self, col: u16, row: u16) -> ModalHit {
        let inside = |r: Option<Rect>| r.is_some_and(|r| contains(r, col, row));
        if contains(self.close, col, row) {
            ModalHit::Close
        } else if inside(self.prev) {
            ModalHit::Prev
        } else if inside(self.next) {
            ModalHit::Next
        } else if inside(self.open) {
            ModalHit::Open
        } else if contains(self.panel, col, row) {
            ModalHit::Panel
        } else {
            ModalHit::Outside
        }
    }
}

/// The overlay area: centred, 80% of the terminal.
fn overlay_area(terminal: Rect) -> Rect {
    let margin_x = (terminal.width as f32 * 0.1).round() as u16;
    let margin_y = (terminal.height as f32 * 0.1).round() as u16;
    Rect::new(
        terminal.x + margin_x,
        terminal.y + margin_y,
        terminal.width.saturating_sub(margin_x * 2).max(20.min(terminal.width)),
        terminal.height.saturating_sub(margin_y * 2).max(8.min(terminal.height)),
    )
}

pub fn modal_zones(kind: ModalKind, terminal: Rect) -> ModalHitZones {
    let panel = overlay_area(terminal);
    let close = Rect::new(panel.x + panel.width.saturating_sub(5), panel.y, 3, 1);

    let arrows = (kind == ModalKind::Image).then(|| {
        let arrow_y = panel.y + panel.height / 2;
        (
            Rect::new(panel.x, arrow_y, 3, 1),
            Rect::new(panel.x + panel.width.saturating_sub(3), arrow_y, 3, 1),
        )
    });

    let open = (kind != ModalKind::Authors).then(|| {
        let w = (wrap::width(OPEN_BUTTON) as u16).min(panel.width.saturating_sub(2));
        Rect::new(
            panel.x + panel.width.saturating_sub(w) / 2,
            (panel.y + panel.height).saturating_sub(3),
            w,
            1,
        )
    });

    ModalHitZones {
        panel,
        close,
        prev: arrows.map(|(prev, _)| prev),
        next: arrows.map(|(_, next)| next),
        open,
    }
}

pub enum ModalContent<'a> {
    Image { url: &'a str, index: usize, total: usize },
    Video(&'a Video),
    Authors(&'a [Author]),
}

impl ModalContent<'_> {
    pub fn kind(&self) -> ModalKind {
        match self {
            Self::Image { .. } => ModalKind::Image,
            Self::Video(_) => ModalKind::Video,
            Self::Authors(_) => ModalKind::Authors,
        }
    }
}

pub struct ModalWidget<'a> {
    pub content: ModalContent<'a>,
    pub theme: &'a Theme,
}

impl Widget for ModalWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let zones = modal_zones(self.content.kind(), area);
        let panel = zones.panel;
        Clear.render(panel, buf);

        let title = match &self.content {
            ModalContent::Image { index, total, .. } => format!(" Foto {} / {} ", index + 1, total),
            ModalContent::Video(_) => " Vídeo ".to_string(),
            ModalContent::Authors(_) => " Autoras ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.focus_border_style())
            .title(Span::styled(title, self.theme.title_style()))
            .style(self.theme.surface_style());
        let inner = block.inner(panel);
        block.render(panel, buf);
        if inner.width < 4 || inner.height < 3 {
            return;
        }

        buf.set_stringn(zones.close.x, zones.close.y, CLOSE_BUTTON, 3, self.theme.tone_style(false));
        if let (Some(prev), Some(next)) = (zones.prev, zones.next) {
            buf.set_stringn(prev.x, prev.y, " ◀", 3, self.theme.accent_style());
            buf.set_stringn(next.x, next.y, "▶ ", 3, self.theme.accent_style());
        }
        if let Some(open) = zones.open {
            buf.set_stringn(open.x, open.y, OPEN_BUTTON, open.width as usize, self.theme.chip_style(true));
        }

        // Leave room for the arrows and the open button.
        let body = Rect::new(
            inner.x + 2,
            inner.y,
            inner.width.saturating_sub(4),
            inner.height.saturating_sub(3),
        );
        match &self.content {
            ModalContent::Image { url, .. } => self.render_image(url, body, buf),
            ModalContent::Video(video) => self.render_video(video, body, buf),
            ModalContent::Authors(authors) => self.render_authors(authors, body, buf),
        }

        let hint = match self.content.kind() {
            ModalKind::Image => " ←/→ navigate   Enter open   Esc close ",
            ModalKind::Video => " Enter open   Esc close ",
            ModalKind::Authors => " Esc close ",
        };
        let footer_y = inner.y + inner.height.saturating_sub(1);
        Paragraph::new(Line::from(Span::styled(hint, self.theme.muted_style())))
            .render(Rect::new(inner.x, footer_y, inner.width, 1), buf);
    }
}

impl ModalWidget<'_> {
    fn render_image(&self, url: &str, body: Rect, buf: &mut Buffer) {
        if body.height == 0 {
            return;
        }
        // Placeholder frame where the picture would be.
        let frame = Rect::new(
            body.x + body.width / 6,
            body.y + 1,
            body.width - body.width / 3,
            body.height.saturating_sub(3).max(1),
        );
        for y in frame.y..frame.y + frame.height {
            buf.set_stringn(frame.x, y, "░".repeat(frame.width as usize), frame.width as usize, self.theme.muted_style());
        }
        let mid = frame.y + frame.height / 2;
        put_centered(buf, body, mid, " ▣ ", self.theme.accent_style());
        let link = wrap::truncate(&optimized_image_url(url), body.width as usize);
        let link_y = (frame.y + frame.height).min(body.y + body.height.saturating_sub(1));
        put_centered(buf, body, link_y, &link, self.theme.link_style());
    }

    fn render_video(&self, video: &Video, body: Rect, buf: &mut Buffer) {
        let width = body.width as usize;
        let mut y = body.y + 1;
        let bottom = body.y + body.height;
        for line in wrap::wrap(video.title, width) {
            if y >= bottom {
                return;
            }
            put_centered(buf, body, y, &line, self.theme.heading_style());
            y += 1;
        }
        y += 1;
        if y < bottom {
            put_centered(buf, body, y, "▶", self.theme.accent_style());
            y += 2;
        }
        if y < bottom {
            put_centered(buf, body, y, &wrap::truncate(video.url, width), self.theme.link_style());
        }
    }

    fn render_authors(&self, authors: &[Author], body: Rect, buf: &mut Buffer) {
        let width = body.width as usize;
        let mut lines: Vec<Line> = Vec::new();
        for author in authors {
            lines.push(Line::from(Span::styled(
                format!("{} {}", author.name, author.surname),
                self.theme.heading_style(),
            )));
            lines.push(Line::from(Span::styled("Formação", self.theme.accent_style())));
            lines.extend(
                wrap::wrap(author.education, width)
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, self.theme.text_style()))),
            );
            lines.push(Line::from(Span::styled("Experiência", self.theme.accent_style())));
            lines.extend(
                wrap::wrap(author.experience, width)
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, self.theme.text_style()))),
            );
            lines.push(Line::from(Span::styled(
                wrap::truncate(author.photo_url, width),
                self.theme.muted_style(),
            )));
            lines.push(Line::default());
        }
        Paragraph::new(lines).render(body, buf);
    }
}

fn put_centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: ratatui::style::Style) {
    let w = wrap::width(text) as u16;
    let x = area.x + area.width.saturating_sub(w) / 2;
    buf.set_stringn(x, y, text, area.width as usize, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::Report;

    fn render(content: ModalContent<'_>) -> String {
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        ModalWidget {
            content,
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
    fn image_modal_has_arrows_and_open_button() {
        let zones = modal_zones(ModalKind::Image, Rect::new(0, 0, 100, 40));
        let prev = zones.prev.unwrap();
        let next = zones.next.unwrap();
        assert_eq!(zones.hit(prev.x + 1, prev.y), ModalHit::Prev);
        assert_eq!(zones.hit(next.x + 1, next.y), ModalHit::Next);
        assert_eq!(zones.hit(zones.close.x, zones.close.y), ModalHit::Close);
        let open = zones.open.unwrap();
        assert_eq!(zones.hit(open.x, open.y), ModalHit::Open);
        assert_eq!(zones.hit(0, 0), ModalHit::Outside);
    }

    #[test]
    fn authors_modal_has_no_media_controls() {
        let zones = modal_zones(ModalKind::Authors, Rect::new(0, 0, 100, 40));
        assert!(zones.prev.is_none());
        assert!(zones.open.is_none());
    }

    #[test]
    fn image_modal_shows_position_and_large_url() {
        let report = Report::builtin();
        let out = render(ModalContent::Image {
            url: report.gallery[2],
            index: 2,
            total: 12,
        });
        assert!(out.contains("Foto 3 / 12"));
        assert!(out.contains("ZmL9Ag7l.png"));
    }

    #[test]
    fn authors_modal_lists_both_bios() {
        let report = Report::builtin();
        let out = render(ModalContent::Authors(&report.authors));
        assert!(out.contains("Albeísa Cleyse Batista Farias"));
        assert!(out.contains("Terezinha de Jesus Saraiva"));
        assert!(out.contains("Formação"));
    }
}
