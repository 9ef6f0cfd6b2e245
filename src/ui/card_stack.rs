//! Document card stack widget.
//!
//! Rows, top to bottom: category chips, layout buttons, then the cards in the
//! current mode. In stack mode a pagination row and a drag hint follow the
//! pile. [`card_stack_geometry`] is shared by the renderer and the mouse
//! handler so clicks land on exactly what was drawn.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::core::card_stack::CardStack;
use crate::core::cards::{Card, CategoryFilter};
use crate::core::stack::{capabilities, layout_for, LayoutMode, StackEntry};

use super::layout::contains;
use super::theme::Theme;
use super::wrap;

pub const EMPTY_MESSAGE: &str = "No documents in this category.";
pub const DRAG_HINT: &str = "Drag to browse";

const STACK_CARD_MAX_WIDTH: u16 = 48;
const STACK_CARD_HEIGHT: u16 = 9;
/// Cards drawn in the pile; deeper ones stay hidden behind these.
const STACK_VISIBLE_DEPTH: usize = 4;
const GRID_CARD_HEIGHT: u16 = 7;
const GRID_MIN_COLUMN_WIDTH: u16 = 28;
const GRID_MAX_COLUMNS: u16 = 3;
const LIST_CARD_HEIGHT: u16 = 4;
const EMPTY_HEIGHT: u16 = 5;
/// Chips, layout buttons and a spacer.
const CARDS_TOP: u16 = 3;

const PX_PER_COLUMN: i32 = 4;
const PX_PER_ROW: i32 = 8;

/// Screen rect of one drawn card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRect {
    pub stack_position: usize,
    pub rect: Rect,
}

/// Clickable regions of the widget. `cards` is in paint order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStackGeometry {
    pub chips: Vec<(CategoryFilter, Rect)>,
    pub modes: Vec<(LayoutMode, Rect)>,
    pub cards: Vec<CardRect>,
    pub dots: Vec<(usize, Rect)>,
    pub hint: Option<Rect>,
    pub empty: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackHit {
    Filter(CategoryFilter),
    Mode(LayoutMode),
    Card { stack_position: usize },
    Dot(usize),
}

impl CardStackGeometry {
    /// What lies under `(col, row)`. Overlapping cards resolve to the one
    /// painted last.
    pub fn hit(&self, col: u16, row: u16) -> Option<StackHit> {
        if let Some((filter, _)) = self.chips.iter().find(|(_, r)| contains(*r, col, row)) {
            return Some(StackHit::Filter(filter.clone()));
        }
        if let Some((mode, _)) = self.modes.iter().find(|(_, r)| contains(*r, col, row)) {
            return Some(StackHit::Mode(*mode));
        }
        if let Some((index, _)) = self.dots.iter().find(|(_, r)| contains(*r, col, row)) {
            return Some(StackHit::Dot(*index));
        }
        self.cards
            .iter()
            .rev()
            .find(|c| contains(c.rect, col, row))
            .map(|c| StackHit::Card {
                stack_position: c.stack_position,
            })
    }

    pub fn card_rect(&self, stack_position: usize) -> Option<Rect> {
        self.cards
            .iter()
            .find(|c| c.stack_position == stack_position)
            .map(|c| c.rect)
    }
}

fn chip_label(filter: &CategoryFilter) -> String {
    format!(" {} ", filter.label())
}

fn mode_label(mode: LayoutMode) -> String {
    format!(" {} ", mode.label())
}

fn grid_columns(width: u16) -> u16 {
    (width / GRID_MIN_COLUMN_WIDTH).clamp(1, GRID_MAX_COLUMNS)
}

/// Pixel placement → cell offset.
fn cell_offset(stack_position: usize, total: usize) -> (u16, u16) {
    let placement = layout_for(stack_position, total, LayoutMode::Stack);
    (
        (placement.offset_x / PX_PER_COLUMN).max(0) as u16,
        (placement.offset_y / PX_PER_ROW).max(0) as u16,
    )
}

/// Rows needed to draw `stack` at `width`.
pub fn required_height(stack: &CardStack, width: u16) -> u16 {
    let n = stack.filtered().len();
    let body = if n == 0 {
        EMPTY_HEIGHT
    } else {
        match stack.state().mode {
            LayoutMode::Stack => {
                let depth = n.min(STACK_VISIBLE_DEPTH);
                let (_, dy) = cell_offset(depth - 1, n);
                STACK_CARD_HEIGHT + dy + 2
            }
            LayoutMode::Grid => {
                let cols = grid_columns(width) as usize;
                n.div_ceil(cols) as u16 * GRID_CARD_HEIGHT
            }
            LayoutMode::List => n as u16 * LIST_CARD_HEIGHT,
        }
    };
    CARDS_TOP + body
}

/// Lay the widget out inside `area`. `drag_dx` shifts the front stack card
/// horizontally by that many columns.
pub fn card_stack_geometry(stack: &CardStack, area: Rect, drag_dx: i32) -> CardStackGeometry {
    let mut geometry = CardStackGeometry::default();
    let right = area.x.saturating_add(area.width);

    // A lone `All` chip filters nothing.
    let categories = stack.categories();
    let categories = if categories.len() > 1 { categories } else { Vec::new() };
    let mut x = area.x;
    for filter in categories {
        let w = wrap::width(&chip_label(&filter)) as u16;
        let rect = Rect::new(x, area.y, w, 1).intersection(area);
        geometry.chips.push((filter, rect));
        x = x.saturating_add(w + 1);
    }

    let mut x = area.x;
    for &mode in LayoutMode::ALL {
        let w = wrap::width(&mode_label(mode)) as u16;
        let rect = Rect::new(x, area.y + 1, w, 1).intersection(area);
        geometry.modes.push((mode, rect));
        x = x.saturating_add(w + 1);
    }

    let top = area.y + CARDS_TOP;
    let entries = stack.display();
    let n = entries.len();
    if n == 0 {
        geometry.empty = Some(Rect::new(area.x, top, area.width, EMPTY_HEIGHT).intersection(area));
        return geometry;
    }

    match stack.state().mode {
        LayoutMode::Stack => {
            let depth = n.min(STACK_VISIBLE_DEPTH);
            let (spread_x, spread_y) = cell_offset(depth - 1, n);
            let card_w = STACK_CARD_MAX_WIDTH.min(area.width.saturating_sub(spread_x));
            let left = area.x + area.width.saturating_sub(card_w + spread_x) / 2;

            for entry in &entries {
                if entry.stack_position >= depth {
                    continue;
                }
                let (dx, dy) = cell_offset(entry.stack_position, n);
                let mut x = left + dx;
                if entry.stack_position == 0 && drag_dx != 0 {
                    let max_x = right.saturating_sub(card_w);
                    x = (i32::from(x) + drag_dx).clamp(i32::from(area.x), i32::from(max_x.max(area.x))) as u16;
                }
                let rect = Rect::new(x, top + dy, card_w, STACK_CARD_HEIGHT).intersection(area);
                geometry.cards.push(CardRect {
                    stack_position: entry.stack_position,
                    rect,
                });
            }

            let dots_y = top + STACK_CARD_HEIGHT + spread_y;
            let dots_w = (n as u16).saturating_mul(2).saturating_sub(1);
            let dots_x = area.x + area.width.saturating_sub(dots_w) / 2;
            if n > 1 {
                for i in 0..n {
                    let rect = Rect::new(dots_x + 2 * i as u16, dots_y, 1, 1).intersection(area);
                    geometry.dots.push((i, rect));
                }
            }
            let hint_w = wrap::width(DRAG_HINT) as u16;
            let hint_x = area.x + area.width.saturating_sub(hint_w) / 2;
            geometry.hint = Some(Rect::new(hint_x, dots_y + 1, hint_w, 1).intersection(area));
        }
        LayoutMode::Grid => {
            let cols = grid_columns(area.width);
            let col_w = area.width.saturating_sub(cols - 1) / cols;
            for entry in &entries {
                let i = entry.stack_position as u16;
                let rect = Rect::new(
                    area.x + (i % cols) * (col_w + 1),
                    top + (i / cols) * GRID_CARD_HEIGHT,
                    col_w,
                    GRID_CARD_HEIGHT,
                )
                .intersection(area);
                geometry.cards.push(CardRect {
                    stack_position: entry.stack_position,
                    rect,
                });
            }
        }
        LayoutMode::List => {
            for entry in &entries {
                let rect = Rect::new(
                    area.x,
                    top + entry.stack_position as u16 * LIST_CARD_HEIGHT,
                    area.width,
                    LIST_CARD_HEIGHT,
                )
                .intersection(area);
                geometry.cards.push(CardRect {
                    stack_position: entry.stack_position,
                    rect,
                });
            }
        }
    }

    geometry
}

// ───────────────────────────────────────── widget ────────────

pub struct CardStackWidget<'a> {
    pub stack: &'a CardStack,
    pub theme: &'a Theme,
    /// Front-card drag displacement in columns.
    pub drag_dx: i32,
    /// Keyboard focus is on the stack.
    pub focused: bool,
}

impl Widget for CardStackWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let geometry = card_stack_geometry(self.stack, area, self.drag_dx);
        let state = self.stack.state();

        for (filter, rect) in geometry.chips.iter().filter(|(_, r)| !r.is_empty()) {
            let style = self.theme.chip_style(*filter == state.filter);
            buf.set_stringn(rect.x, rect.y, chip_label(filter), rect.width as usize, style);
        }
        for (mode, rect) in geometry.modes.iter().filter(|(_, r)| !r.is_empty()) {
            let style = self.theme.chip_style(*mode == state.mode);
            buf.set_stringn(rect.x, rect.y, mode_label(*mode), rect.width as usize, style);
        }
        if let Some((_, last)) = geometry.modes.last().filter(|(_, r)| !r.is_empty()) {
            let x = last.x + last.width + 2;
            let room = (area.x + area.width).saturating_sub(x) as usize;
            buf.set_stringn(x, last.y, state.mode.description(), room, self.theme.muted_style());
        }

        if let Some(rect) = geometry.empty.filter(|r| !r.is_empty()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(self.theme.border_style());
            let inner = block.inner(rect);
            block.render(rect, buf);
            let w = wrap::width(EMPTY_MESSAGE) as u16;
            let x = inner.x + inner.width.saturating_sub(w) / 2;
            let y = inner.y + inner.height / 2;
            buf.set_stringn(x, y, EMPTY_MESSAGE, inner.width as usize, self.theme.muted_style());
            return;
        }

        let entries = self.stack.display();
        let active = self.stack.active_index().unwrap_or(0);
        for placed in &geometry.cards {
            let Some(entry) = entries.iter().find(|e| e.stack_position == placed.stack_position) else {
                continue;
            };
            let highlighted = match state.mode {
                LayoutMode::Stack => entry.stack_position == 0,
                LayoutMode::Grid | LayoutMode::List => entry.stack_position == active,
            };
            self.render_card(entry, placed.rect, highlighted, buf);
        }

        for (index, rect) in geometry.dots.iter().filter(|(_, r)| !r.is_empty()) {
            let (symbol, style) = if *index == active {
                ("●", self.theme.accent_style())
            } else {
                ("○", self.theme.muted_style())
            };
            buf.set_stringn(rect.x, rect.y, symbol, 1, style);
        }
        if let Some(rect) = geometry.hint.filter(|r| !r.is_empty()) {
            buf.set_stringn(rect.x, rect.y, DRAG_HINT, rect.width as usize, self.theme.muted_style());
        }
    }
}

impl CardStackWidget<'_> {
    fn render_card(&self, entry: &StackEntry<'_>, rect: Rect, highlighted: bool, buf: &mut Buffer) {
        let card: &Card = entry.card;
        let mode = self.stack.state().mode;
        let caps = capabilities(card, entry.stack_position, mode);
        let accent = card.accent.map(Theme::rgb).unwrap_or(self.theme.accent);

        let border_style = if highlighted && self.focused {
            self.theme.focus_border_style()
        } else if caps.is_interactive {
            Style::default().fg(accent)
        } else {
            self.theme.border_style()
        };

        Clear.render(rect, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if highlighted { BorderType::Thick } else { BorderType::Rounded })
            .border_style(border_style)
            .style(self.theme.surface_style());
        let inner = block.inner(rect);
        block.render(rect, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        let mut y = inner.y;
        let bottom = inner.y + inner.height;

        let icon = card.icon.map(String::from).unwrap_or_default();
        let category = card.category.as_deref().unwrap_or_default();
        let header = format!("{icon} {category}");
        buf.set_stringn(inner.x, y, header.trim(), width, Style::default().fg(accent));
        y += 1;

        let title_style = if caps.is_interactive {
            self.theme.heading_style()
        } else {
            self.theme.muted_style().add_modifier(Modifier::BOLD)
        };
        let title_rows = if mode == LayoutMode::List { 1 } else { 2 };
        for line in wrap::wrap(&card.title, width).into_iter().take(title_rows) {
            if y >= bottom {
                return;
            }
            buf.set_stringn(inner.x, y, line, width, title_style);
            y += 1;
        }

        // Cards behind the front one show only their header.
        if !caps.is_interactive {
            return;
        }

        let footer_rows = u16::from(caps.has_destination && mode != LayoutMode::List);
        let room = bottom.saturating_sub(y).saturating_sub(footer_rows) as usize;
        let description = wrap::wrap(&card.description, width);
        for (i, line) in description.iter().take(room).enumerate() {
            let text = if i + 1 == room && description.len() > room {
                wrap::truncate(&format!("{line} …"), width)
            } else {
                line.clone()
            };
            buf.set_stringn(inner.x, y, text, width, self.theme.muted_style());
            y += 1;
        }

        if footer_rows == 1 {
            buf.set_stringn(inner.x, bottom - 1, "↗ Open document", width, self.theme.link_style());
        }
    }
}
