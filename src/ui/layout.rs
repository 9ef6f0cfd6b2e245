//! Layout helpers that split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::core::report::{SectionId, NAV_ITEMS};

use super::wrap;

/// Primary screen layout: navigation bar, scrolling report body and a
/// bottom status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub nav_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // navigation bar
                Constraint::Min(3),    // report body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            nav_area: chunks[0],
            body_area: chunks[1],
            status_area: chunks[2],
        }
    }
}

// ───────────────────────────────────────── nav bar ───────────

pub const BRAND_LABEL: &str = " ☮ NUREPDH ";
pub const SEARCH_BUTTON: &str = "[/ Search]";
pub const THEME_BUTTON: &str = "[◐]";
pub const AUTHORS_BUTTON: &str = "[Authors]";

/// Clickable regions of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGeometry {
    pub brand: Rect,
    /// Navigation items that fit, in order.
    pub items: Vec<(SectionId, Rect)>,
    pub search: Rect,
    pub theme: Rect,
    pub authors: Rect,
}

/// What a click on the navigation bar hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    Brand,
    Item(SectionId),
    Search,
    Theme,
    Authors,
}

/// Lay out the navigation bar: brand on the left, buttons on the right and
/// as many section links as fit in between.
pub fn nav_geometry(area: Rect) -> NavGeometry {
    let row = |x: u16, label: &str| Rect::new(x, area.y, wrap::width(label) as u16, 1);
    let right_edge = area.x.saturating_add(area.width);

    let brand = row(area.x, BRAND_LABEL).intersection(area);

    let mut x = right_edge;
    let mut button = |label: &str| {
        let w = wrap::width(label) as u16;
        x = x.saturating_sub(w + 1).max(area.x);
        row(x, label).intersection(area)
    };
    let theme = button(THEME_BUTTON);
    let authors = button(AUTHORS_BUTTON);
    let search = button(SEARCH_BUTTON);
    let buttons_left = search.x;

    let mut items = Vec::new();
    let mut cursor = brand.x.saturating_add(brand.width).saturating_add(1);
    for item in NAV_ITEMS {
        let w = wrap::width(item.label) as u16;
        if cursor.saturating_add(w) >= buttons_left {
            break;
        }
        items.push((item.target, Rect::new(cursor, area.y, w, 1)));
        cursor = cursor.saturating_add(w + 2);
    }

    NavGeometry {
        brand,
        items,
        search,
        theme,
        authors,
    }
}

impl NavGeometry {
    pub fn hit(&self, col: u16, row: u16) -> Option<NavHit> {
        if contains(self.brand, col, row) {
            return Some(NavHit::Brand);
        }
        if let Some((id, _)) = self.items.iter().find(|(_, r)| contains(*r, col, row)) {
            return Some(NavHit::Item(*id));
        }
        [
            (self.search, NavHit::Search),
            (self.theme, NavHit::Theme),
            (self.authors, NavHit::Authors),
        ]
        .into_iter()
        .find(|(r, _)| contains(*r, col, row))
        .map(|(_, hit)| hit)
    }
}

pub fn contains(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Centered rectangle with fixed dimensions, clamped to the available area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_fills_between_bars() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.nav_area, Rect::new(0, 0, 100, 1));
        assert_eq!(layout.body_area, Rect::new(0, 1, 100, 28));
        assert_eq!(layout.status_area, Rect::new(0, 29, 100, 1));
    }

    #[test]
    fn wide_nav_bar_shows_every_item() {
        let nav = nav_geometry(Rect::new(0, 0, 140, 1));
        assert_eq!(nav.items.len(), NAV_ITEMS.len());
        let (id, rect) = nav.items[1];
        assert_eq!(id, SectionId::Climate2024);
        assert_eq!(nav.hit(rect.x, 0), Some(NavHit::Item(SectionId::Climate2024)));
        assert_eq!(nav.hit(nav.theme.x, 0), Some(NavHit::Theme));
        assert_eq!(nav.hit(nav.search.x + 1, 0), Some(NavHit::Search));
    }

    #[test]
    fn narrow_nav_bar_drops_items_not_buttons() {
        let nav = nav_geometry(Rect::new(0, 0, 60, 1));
        assert!(nav.items.len() < NAV_ITEMS.len());
        for (_, rect) in &nav.items {
            assert!(rect.x + rect.width < nav.search.x);
        }
    }
}
