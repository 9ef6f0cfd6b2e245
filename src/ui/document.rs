//! Document geometry: the report as a column of blocks.
//!
//! [`DocumentLayout::build`] measures every block at the current width and
//! records where it sits in document rows. The renderer draws the blocks that
//! intersect the viewport; the input handler uses the same layout for
//! scrolling, section jumps, keyboard focus and click hit-testing.

use std::collections::HashSet;

use crate::core::card_stack::CardStack;
use crate::core::report::{Align, Hero, Report, Section, SectionId, SurveyYear, TimelineEvent, NAV_ITEMS};

use super::card_stack;
use super::chart::CHART_CARD_HEIGHT;
use super::wrap;

const MAX_CONTENT_WIDTH: u16 = 100;
const SIDE_MARGIN: u16 = 2;
const MIN_MARGINED_WIDTH: u16 = 24;

pub const SECTION_HEADER_HEIGHT: u16 = 2;
pub const GALLERY_TILE_HEIGHT: u16 = 5;
const GALLERY_MIN_TILE_WIDTH: u16 = 24;
const GALLERY_MAX_COLUMNS: u16 = 4;
pub const VIDEO_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 4;
const WIDE_CHART_WIDTH: u16 = 84;
const WIDE_TIMELINE_WIDTH: u16 = 70;

// ───────────────────────────────────────── blocks ────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Hero,
    SectionHeader(SectionId),
    Paragraph { section: SectionId, index: usize },
    Highlight { section: SectionId, index: usize },
    Callout(SectionId),
    ChartRow { year: SurveyYear, first: usize, count: usize },
    TimelineEvent(usize),
    GalleryRow { first: usize, count: usize },
    Video(usize),
    Documents,
    Reference(usize),
    AppAccess,
    Footer,
}

/// One block, `top` in document rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocBlock {
    pub kind: BlockKind,
    pub top: usize,
    pub height: u16,
}

impl DocBlock {
    pub fn bottom(&self) -> usize {
        self.top + self.height as usize
    }
}

/// Something keyboard focus can rest on and a click can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Section(SectionId),
    Timeline(usize),
    Image(usize),
    Video(usize),
    Documents,
    QrCode,
    Instagram,
}

/// Where a focus target is drawn. `x` is relative to the content column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetRect {
    pub target: FocusTarget,
    pub top: usize,
    pub x: u16,
    pub width: u16,
    pub height: u16,
}

impl TargetRect {
    fn contains(&self, col: u16, row: usize) -> bool {
        col >= self.x
            && col < self.x.saturating_add(self.width)
            && row >= self.top
            && row < self.top + self.height as usize
    }
}

// ───────────────────────────────────────── metrics ───────────

/// Left margin and width of the content column inside a body of `body_width`.
pub fn content_frame(body_width: u16) -> (u16, u16) {
    if body_width < MIN_MARGINED_WIDTH {
        return (0, body_width);
    }
    let width = (body_width - 2 * SIDE_MARGIN).min(MAX_CONTENT_WIDTH);
    ((body_width - width) / 2, width)
}

pub fn chart_columns(width: u16) -> usize {
    if width >= WIDE_CHART_WIDTH {
        2
    } else {
        1
    }
}

pub fn gallery_columns(width: u16) -> u16 {
    (width / GALLERY_MIN_TILE_WIDTH).clamp(1, GALLERY_MAX_COLUMNS)
}

/// Width of column `index` when `width` is split into `count` columns with a
/// one-cell gutter, and its x offset.
pub fn column_span(width: u16, count: u16, index: u16) -> (u16, u16) {
    let count = count.max(1);
    let w = width.saturating_sub(count - 1) / count;
    (index * (w + 1), w)
}

/// `(x, width)` of a timeline card. Wide layouts alternate sides.
pub fn timeline_card_span(event: &TimelineEvent, width: u16) -> (u16, u16) {
    if width < WIDE_TIMELINE_WIDTH {
        return (0, width);
    }
    let card_w = width * 3 / 5;
    match event.align {
        Align::Left => (0, card_w),
        Align::Right => (width - card_w, card_w),
    }
}

pub const FLIP_HINT: &str = "Enter ⇄ flip";

/// Rows of the front face (inside the border): year, title, hint.
pub fn timeline_front_lines(event: &TimelineEvent, inner: usize) -> usize {
    1 + wrap::height(event.title, inner) + 1
}

/// Rows of the back face: title, description, hint.
pub fn timeline_back_lines(event: &TimelineEvent, inner: usize) -> usize {
    wrap::height(event.title, inner) + wrap::height(event.description, inner) + 1
}

/// Card height fits the taller face so flipping never moves the document.
fn timeline_card_height(event: &TimelineEvent, card_w: u16) -> u16 {
    let inner = card_w.saturating_sub(2) as usize;
    let lines = timeline_front_lines(event, inner).max(timeline_back_lines(event, inner));
    lines as u16 + 2
}

fn hero_height(hero: &Hero, width: u16) -> u16 {
    let w = width as usize;
    let lines = 1 // badge
        + 1
        + wrap::height(hero.title_lead, w)
        + wrap::height(hero.title_tail, w)
        + 1
        + wrap::height(hero.tagline, w);
    lines as u16
}

/// Bordered panel: title row plus wrapped text.
pub fn panel_height(text: &str, width: u16) -> u16 {
    2 + 1 + wrap::height(text, width.saturating_sub(2) as usize) as u16
}

pub fn reference_text(reference: &str) -> String {
    format!("• {reference}")
}

/// Rows of the app access box, borders included.
fn app_access_height(caption: &str, width: u16) -> u16 {
    2 + 1 + app_caption_lines(caption, width) + 1 + 2
}

fn app_caption_lines(caption: &str, width: u16) -> u16 {
    wrap::height(caption, width.saturating_sub(2) as usize) as u16
}

/// Row offsets (from the box top) of the QR code and Instagram links.
pub fn app_access_link_rows(caption: &str, width: u16) -> (u16, u16) {
    let qr = 1 + 1 + app_caption_lines(caption, width) + 1;
    (qr, qr + 1)
}

pub fn section_open(section: &Section, expanded: &HashSet<SectionId>) -> bool {
    !section.collapsible || expanded.contains(&section.id)
}

// ───────────────────────────────────────── layout ────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentLayout {
    /// Left margin of the content column inside the body.
    pub x: u16,
    pub width: u16,
    pub blocks: Vec<DocBlock>,
    pub total_height: usize,
    /// Section header rows, document order.
    pub anchors: Vec<(SectionId, usize)>,
    /// Focus targets, document order.
    pub targets: Vec<TargetRect>,
}

struct Builder {
    layout: DocumentLayout,
    cursor: usize,
}

impl Builder {
    fn push(&mut self, kind: BlockKind, height: u16, gap: usize) -> usize {
        let top = self.cursor;
        self.layout.blocks.push(DocBlock { kind, top, height });
        self.cursor += height as usize + gap;
        top
    }

    fn target(&mut self, target: FocusTarget, top: usize, x: u16, width: u16, height: u16) {
        self.layout.targets.push(TargetRect {
            target,
            top,
            x,
            width,
            height,
        });
    }

    fn gap(&mut self, rows: usize) {
        self.cursor += rows;
    }
}

impl DocumentLayout {
    pub fn build(
        report: &Report,
        expanded: &HashSet<SectionId>,
        cards: &CardStack,
        body_width: u16,
    ) -> Self {
        let (x, width) = content_frame(body_width);
        let mut b = Builder {
            layout: DocumentLayout {
                x,
                width,
                ..Self::default()
            },
            cursor: 0,
        };

        b.push(BlockKind::Hero, hero_height(&report.hero, width), 2);

        for section in &report.sections {
            let id = section.id;
            let top = b.push(BlockKind::SectionHeader(id), SECTION_HEADER_HEIGHT, 0);
            b.layout.anchors.push((id, top));
            if section.collapsible {
                b.target(FocusTarget::Section(id), top, 0, width, 1);
            }
            if !section_open(section, expanded) {
                b.gap(1);
                continue;
            }

            for (index, text) in section.paragraphs.iter().enumerate() {
                let h = wrap::height(text, width as usize) as u16;
                b.push(BlockKind::Paragraph { section: id, index }, h, 1);
            }
            for (index, highlight) in section.highlights.iter().enumerate() {
                b.push(
                    BlockKind::Highlight { section: id, index },
                    panel_height(highlight.text, width),
                    1,
                );
            }
            if let Some(callout) = &section.callout {
                b.push(BlockKind::Callout(id), panel_height(callout.text, width), 1);
            }
            Self::push_attachment(&mut b, report, section, cards);
            b.gap(1);
        }

        b.push(BlockKind::Footer, FOOTER_HEIGHT, 0);
        b.layout.total_height = b.cursor;
        b.layout
    }

    fn push_attachment(b: &mut Builder, report: &Report, section: &Section, cards: &CardStack) {
        use crate::core::report::Attachment;

        let width = b.layout.width;
        match section.attachment {
            Attachment::None => {}
            Attachment::Charts(year) => {
                let count = report.charts(year).len();
                let cols = chart_columns(width);
                for first in (0..count).step_by(cols) {
                    let kind = BlockKind::ChartRow {
                        year,
                        first,
                        count: cols.min(count - first),
                    };
                    b.push(kind, CHART_CARD_HEIGHT, 1);
                }
            }
            Attachment::Timeline => {
                for (i, event) in report.timeline.iter().enumerate() {
                    let (x, card_w) = timeline_card_span(event, width);
                    let h = timeline_card_height(event, card_w);
                    let top = b.push(BlockKind::TimelineEvent(i), h, 1);
                    b.target(FocusTarget::Timeline(i), top, x, card_w, h);
                }
            }
            Attachment::Gallery => {
                let count = report.gallery_images().len();
                let cols = gallery_columns(width);
                for first in (0..count).step_by(cols as usize) {
                    let in_row = (cols as usize).min(count - first);
                    let top = b.push(BlockKind::GalleryRow { first, count: in_row }, GALLERY_TILE_HEIGHT, 1);
                    for col in 0..in_row {
                        let (x, w) = column_span(width, cols, col as u16);
                        b.target(FocusTarget::Image(first + col), top, x, w, GALLERY_TILE_HEIGHT);
                    }
                }
            }
            Attachment::Videos => {
                for i in 0..report.videos.len() {
                    let top = b.push(BlockKind::Video(i), VIDEO_HEIGHT, 1);
                    b.target(FocusTarget::Video(i), top, 0, width, VIDEO_HEIGHT);
                }
            }
            Attachment::Documents => {
                let h = card_stack::required_height(cards, width);
                let top = b.push(BlockKind::Documents, h, 1);
                b.target(FocusTarget::Documents, top, 0, width, h);
            }
            Attachment::References => {
                for (i, reference) in report.references.iter().enumerate() {
                    let h = wrap::height(&reference_text(reference), width as usize) as u16;
                    b.push(BlockKind::Reference(i), h, 0);
                }
            }
            Attachment::AppAccess => {
                let caption = report.app_access.caption;
                let h = app_access_height(caption, width);
                let top = b.push(BlockKind::AppAccess, h, 1);
                let (qr, instagram) = app_access_link_rows(caption, width);
                let inner = width.saturating_sub(2);
                b.target(FocusTarget::QrCode, top + qr as usize, 1, inner, 1);
                b.target(FocusTarget::Instagram, top + instagram as usize, 1, inner, 1);
            }
        }
    }

    // ── queries ────────────────────────────────────────────────

    pub fn max_scroll(&self, viewport: u16) -> usize {
        self.total_height.saturating_sub(viewport as usize)
    }

    pub fn anchor_top(&self, id: SectionId) -> Option<usize> {
        self.anchors.iter().find(|(a, _)| *a == id).map(|(_, top)| *top)
    }

    /// Scroll offset that puts the header of `id` on the first body row.
    pub fn scroll_for(&self, id: SectionId, viewport: u16) -> Option<usize> {
        self.anchor_top(id).map(|top| top.min(self.max_scroll(viewport)))
    }

    /// Navigation item to highlight: the last one whose section starts at or
    /// above the top third of the viewport.
    pub fn active_nav(&self, scroll: usize, viewport: u16) -> Option<SectionId> {
        let probe = scroll + viewport as usize / 3;
        NAV_ITEMS
            .iter()
            .filter_map(|item| self.anchor_top(item.target).map(|top| (item.target, top)))
            .filter(|(_, top)| *top <= probe)
            .last()
            .map(|(id, _)| id)
    }

    /// Blocks intersecting rows `[scroll, scroll + viewport)`.
    pub fn visible_blocks(&self, scroll: usize, viewport: u16) -> impl Iterator<Item = &DocBlock> {
        let end = scroll + viewport as usize;
        self.blocks
            .iter()
            .filter(move |b| b.bottom() > scroll && b.top < end)
    }

    pub fn block_at(&self, row: usize) -> Option<&DocBlock> {
        self.blocks.iter().find(|b| row >= b.top && row < b.bottom())
    }

    pub fn block(&self, kind: BlockKind) -> Option<&DocBlock> {
        self.blocks.iter().find(|b| b.kind == kind)
    }

    pub fn target_rect(&self, target: FocusTarget) -> Option<&TargetRect> {
        self.targets.iter().find(|t| t.target == target)
    }

    /// Target under content column `col`, document row `row`.
    pub fn target_at(&self, col: u16, row: usize) -> Option<&TargetRect> {
        self.targets.iter().find(|t| t.contains(col, row))
    }

    /// The target after (or before) `current`, wrapping. With no current
    /// focus, starts from the first target visible at `scroll`.
    pub fn next_focus(&self, current: Option<FocusTarget>, forward: bool, scroll: usize) -> Option<FocusTarget> {
        let n = self.targets.len();
        if n == 0 {
            return None;
        }
        let position = current.and_then(|c| self.targets.iter().position(|t| t.target == c));
        let next = match position {
            Some(i) if forward => (i + 1) % n,
            Some(i) => (i + n - 1) % n,
            None => {
                let first_visible = self.targets.iter().position(|t| t.top >= scroll);
                match first_visible {
                    Some(i) if forward => i,
                    Some(i) => (i + n - 1) % n,
                    None if forward => 0,
                    None => n - 1,
                }
            }
        };
        Some(self.targets[next].target)
    }

    /// Smallest scroll change that brings `target` fully into view.
    pub fn reveal(&self, target: FocusTarget, scroll: usize, viewport: u16) -> usize {
        let Some(rect) = self.target_rect(target) else {
            return scroll;
        };
        let viewport = viewport as usize;
        let bottom = rect.top + rect.height as usize;
        let scroll = if rect.top < scroll {
            rect.top
        } else if bottom > scroll + viewport {
            bottom.saturating_sub(viewport).min(rect.top)
        } else {
            scroll
        };
        scroll.min(self.max_scroll(viewport as u16))
    }
}
