//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::collections::HashSet;

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::card_stack::{Activation, CardStack, CardStackEvent};
use crate::core::cards::DeckError;
use crate::core::gesture::DragTracker;
use crate::core::report::{Report, SectionId};
use crate::core::search::{build_index, search_entries, SearchEntry, SearchResult};
use crate::core::stack::LayoutMode;
use crate::ui::document::{section_open, DocumentLayout, FocusTarget};
use crate::ui::layout::AppLayout;
use crate::ui::settle::SettleAnimation;
use crate::ui::theme::Theme;

/// Maximum number of search results kept.
pub const SEARCH_LIMIT: usize = 20;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Report,
    Search,
    /// Gallery image at this index.
    Image(usize),
    Video(usize),
    Authors,
    SettingsMenu,
    ControlsSubmenu,
}

/// A pointer press on a document card, pending until release.
#[derive(Debug, Clone)]
pub struct CardPress {
    pub stack_position: usize,
    pub tracker: DragTracker,
}

/// Top-level application state.
pub struct AppState {
    pub report: Report,
    /// The document card stack.
    pub cards: CardStack,
    pub search_index: Vec<SearchEntry>,
    pub config: AppConfig,
    pub theme: Theme,
    /// Document geometry for the current width and expansion state.
    pub layout: DocumentLayout,
    /// First document row shown in the body.
    pub scroll: usize,
    pub expanded: HashSet<SectionId>,
    /// Timeline events showing their back face.
    pub flipped: HashSet<usize>,
    pub focus: Option<FocusTarget>,
    pub active_view: ActiveView,
    pub search_query: String,
    pub search_results: Vec<SearchResult>,
    pub search_selected: usize,
    pub press: Option<CardPress>,
    /// Front card springing back after a drag that did not navigate.
    pub settle: SettleAnimation,
    /// Links opened this session, in activation order.
    pub visited: Vec<String>,
    /// Links waiting to be handed to the browser by the event loop.
    pub pending_links: Vec<String>,
    pub terminal_area: Rect,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    pub settings_selected: usize,
    pub controls_selected: usize,
    /// When `true`, the controls submenu is waiting for the user to press
    /// a key to rebind the action at `controls_selected`.
    pub awaiting_rebind: bool,
    /// Set by `--no-open`: record links without launching a browser.
    pub links_disabled: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, DeckError> {
        let report = Report::builtin();
        let deck = report.document_deck()?;
        let cards = CardStack::new(deck, config.default_layout, config.swipe);
        let search_index = build_index(&report);
        let expanded = report
            .sections
            .iter()
            .filter(|s| s.collapsible && s.default_expanded)
            .map(|s| s.id)
            .collect();

        let mut state = Self {
            report,
            cards,
            search_index,
            theme: Theme::for_mode(config.theme),
            config,
            layout: DocumentLayout::default(),
            scroll: 0,
            expanded,
            flipped: HashSet::new(),
            focus: None,
            active_view: ActiveView::default(),
            search_query: String::new(),
            search_results: Vec::new(),
            search_selected: 0,
            press: None,
            settle: SettleAnimation::default(),
            visited: Vec::new(),
            pending_links: Vec::new(),
            terminal_area: Rect::default(),
            should_quit: false,
            status_message: None,
            settings_selected: 0,
            controls_selected: 0,
            awaiting_rebind: false,
            links_disabled: false,
        };
        state.relayout();
        Ok(state)
    }

    // ── geometry ────────────────────────────────────────────────

    pub fn screen(&self) -> AppLayout {
        AppLayout::from_area(self.terminal_area)
    }

    /// Rows available to the report body.
    pub fn viewport(&self) -> u16 {
        self.screen().body_area.height
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_area = Rect::new(0, 0, width, height);
        self.relayout();
    }

    /// Rebuild the document geometry and keep the scroll offset in range.
    pub fn relayout(&mut self) {
        let width = self.screen().body_area.width;
        self.layout = DocumentLayout::build(&self.report, &self.expanded, &self.cards, width);
        if let Some(target) = self.focus {
            if self.layout.target_rect(target).is_none() {
                self.focus = None;
            }
        }
        self.scroll = self.scroll.min(self.layout.max_scroll(self.viewport()));
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.layout.max_scroll(self.viewport());
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    pub fn scroll_to(&mut self, row: usize) {
        self.scroll = row.min(self.layout.max_scroll(self.viewport()));
    }

    /// Navigation item to highlight for the current scroll position.
    pub fn active_nav(&self) -> Option<SectionId> {
        self.layout.active_nav(self.scroll, self.viewport())
    }

    /// Front-card displacement in columns, while dragging or settling.
    pub fn drag_dx(&self) -> i32 {
        let state = self.cards.state();
        let px = if state.dragging {
            state.drag_offset
        } else {
            self.settle.offset_px()
        };
        (px / self.config.px_per_cell.max(1.0)).round() as i32
    }

    // ── navigation ──────────────────────────────────────────────

    /// Put the header of `id` on the first body row and close the search
    /// overlay.
    pub fn jump_to_section(&mut self, id: SectionId) {
        if let Some(row) = self.layout.scroll_for(id, self.viewport()) {
            self.scroll = row;
        }
        if self.active_view == ActiveView::Search {
            self.active_view = ActiveView::Report;
        }
        tracing::debug!(section = %id, scroll = self.scroll, "jumped to section");
    }

    /// Expand a collapsed section before jumping to it.
    pub fn reveal_section(&mut self, id: SectionId) {
        if let Some(section) = self.report.section(id) {
            if section.collapsible && !section_open(section, &self.expanded) {
                self.expanded.insert(id);
                self.relayout();
            }
        }
        self.jump_to_section(id);
    }

    pub fn toggle_section(&mut self, id: SectionId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
        self.relayout();
    }

    /// Step to the next (or previous) section header relative to the top row.
    pub fn step_section(&mut self, forward: bool) {
        let scroll = self.scroll;
        let anchors = self.layout.anchors.iter().map(|(id, top)| (*id, *top));
        let target = if forward {
            anchors.filter(|(_, top)| *top > scroll).map(|(id, _)| id).next()
        } else {
            anchors.filter(|(_, top)| *top < scroll).map(|(id, _)| id).last()
        };
        if let Some(id) = target {
            self.jump_to_section(id);
        }
    }

    pub fn move_focus(&mut self, forward: bool) {
        self.focus = self.layout.next_focus(self.focus, forward, self.scroll);
        if let Some(target) = self.focus {
            self.scroll = self.layout.reveal(target, self.scroll, self.viewport());
        }
    }

    // ── activation ──────────────────────────────────────────────

    /// Activate a focus target: toggle, flip, open a modal or follow a link.
    pub fn activate(&mut self, target: FocusTarget) {
        match target {
            FocusTarget::Section(id) => self.toggle_section(id),
            FocusTarget::Timeline(i) => {
                if !self.flipped.remove(&i) {
                    self.flipped.insert(i);
                }
            }
            FocusTarget::Image(i) => self.active_view = ActiveView::Image(i),
            FocusTarget::Video(i) => self.active_view = ActiveView::Video(i),
            FocusTarget::Documents => {
                let stack_position = match self.cards.state().mode {
                    LayoutMode::Stack => 0,
                    LayoutMode::Grid | LayoutMode::List => self.cards.active_index().unwrap_or(0),
                };
                let activation = self.cards.apply(CardStackEvent::Click { stack_position });
                self.handle_activation(activation);
            }
            FocusTarget::QrCode => self.open_link(self.report.app_access.qr_url),
            FocusTarget::Instagram => self.open_link(self.report.app_access.instagram_url),
        }
    }

    pub fn handle_activation(&mut self, activation: Option<Activation>) {
        let Some(activation) = activation else {
            return;
        };
        match activation.url {
            Some(url) => self.open_link(&url),
            None => {
                self.status_message = Some(format!("{} has no link", activation.card_id));
            }
        }
    }

    /// Record `url` and queue it for the system browser unless disabled.
    pub fn open_link(&mut self, url: &str) {
        self.visited.push(url.to_string());
        if self.links_disabled || !self.config.open_links {
            tracing::info!(url, "link recorded");
            self.status_message = Some(format!("Link: {url}"));
            return;
        }
        self.pending_links.push(url.to_string());
        self.status_message = Some(format!("Opening {url}…"));
    }

    /// Report the outcome of a browser launch.
    pub fn link_finished(&mut self, url: &str, opened: bool) {
        if opened {
            tracing::info!(url, "link opened");
            self.status_message = Some(format!("Opened {url}"));
        } else {
            tracing::warn!(url, "could not open link");
            self.status_message = Some(format!("Could not open {url}"));
        }
    }

    /// Move the image modal by one, wrapping around the gallery.
    pub fn step_image(&mut self, forward: bool) {
        let ActiveView::Image(index) = self.active_view else {
            return;
        };
        let count = self.report.gallery_images().len();
        if count == 0 {
            return;
        }
        let next = if forward {
            (index + 1) % count
        } else {
            (index + count - 1) % count
        };
        self.active_view = ActiveView::Image(next);
    }

    /// Follow the link behind the open image or video modal.
    pub fn open_modal_link(&mut self) {
        let url = match self.active_view {
            ActiveView::Image(i) => self.report.gallery_images().get(i).copied(),
            ActiveView::Video(i) => self.report.videos.get(i).map(|v| v.url),
            _ => None,
        };
        if let Some(url) = url {
            self.open_link(url);
        }
    }

    // ── search ──────────────────────────────────────────────────

    pub fn open_search(&mut self) {
        self.active_view = ActiveView::Search;
        self.refresh_search();
    }

    pub fn refresh_search(&mut self) {
        self.search_results = search_entries(&self.search_index, &self.search_query, SEARCH_LIMIT);
        self.search_selected = 0;
    }

    /// Jump to the selected search result.
    pub fn confirm_search(&mut self, index: usize) {
        if let Some(result) = self.search_results.get(index) {
            let target = result.target;
            tracing::debug!(query = %self.search_query, %target, "search result chosen");
            self.reveal_section(target);
        }
    }

    // ── settings ────────────────────────────────────────────────

    pub fn toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        self.theme = Theme::for_mode(self.config.theme);
        self.save_config();
    }

    /// Persist the configuration, reporting failures in the status bar.
    pub fn save_config(&mut self) {
        if let Err(err) = self.config.save() {
            tracing::warn!(%err, "could not save config");
            self.status_message = Some(format!("Could not save settings: {err}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card_stack::CardStackEvent;

    fn state() -> AppState {
        let mut state = AppState::new(AppConfig::default()).unwrap();
        state.resize(100, 30);
        state
    }

    #[test]
    fn starts_with_summary_and_development_expanded() {
        let s = state();
        assert!(s.expanded.contains(&SectionId::Summary));
        assert!(s.expanded.contains(&SectionId::Development));
        assert!(!s.expanded.contains(&SectionId::Climate2024));
        assert_eq!(s.scroll, 0);
    }

    #[test]
    fn jumping_puts_header_on_first_row_and_closes_search() {
        let mut s = state();
        s.active_view = ActiveView::Search;
        s.jump_to_section(SectionId::Methodology);
        assert_eq!(Some(s.scroll), s.layout.anchor_top(SectionId::Methodology));
        assert_eq!(s.active_view, ActiveView::Report);
    }

    #[test]
    fn scroll_is_clamped_to_document() {
        let mut s = state();
        s.scroll_by(-5);
        assert_eq!(s.scroll, 0);
        s.scroll_to(usize::MAX);
        assert_eq!(s.scroll, s.layout.max_scroll(s.viewport()));
    }

    #[test]
    fn toggling_a_section_changes_document_height() {
        let mut s = state();
        let before = s.layout.total_height;
        s.toggle_section(SectionId::Climate2024);
        assert!(s.layout.total_height > before);
        s.toggle_section(SectionId::Climate2024);
        assert_eq!(s.layout.total_height, before);
    }

    #[test]
    fn image_modal_wraps_around_gallery() {
        let mut s = state();
        let last = s.report.gallery_images().len() - 1;
        s.active_view = ActiveView::Image(last);
        s.step_image(true);
        assert_eq!(s.active_view, ActiveView::Image(0));
        s.step_image(false);
        assert_eq!(s.active_view, ActiveView::Image(last));
    }

    #[test]
    fn activating_documents_records_the_front_card_link() {
        let mut s = state();
        s.activate(FocusTarget::Documents);
        let url = s.cards.filtered()[0].url.clone().unwrap();
        assert_eq!(s.visited, vec![url.clone()]);
        assert_eq!(s.pending_links, vec![url]);
    }

    #[test]
    fn disabled_links_are_recorded_but_not_queued() {
        let mut s = state();
        s.links_disabled = true;
        s.activate(FocusTarget::Instagram);
        assert_eq!(s.visited.len(), 1);
        assert!(s.pending_links.is_empty());
        assert!(s.status_message.as_deref().unwrap().starts_with("Link: "));
    }

    #[test]
    fn grid_activation_targets_the_active_card() {
        let mut s = state();
        s.cards.apply(CardStackEvent::SetMode(LayoutMode::Grid));
        s.cards.apply(CardStackEvent::SelectIndex(2));
        s.activate(FocusTarget::Documents);
        let url = s.cards.filtered()[2].url.clone().unwrap();
        assert_eq!(s.visited, vec![url]);
    }

    #[test]
    fn search_result_expands_its_section() {
        let mut s = state();
        s.search_query = "bullying".into();
        s.open_search();
        let target = s.search_results[0].target;
        s.confirm_search(0);
        assert_eq!(s.active_view, ActiveView::Report);
        if s.report.section(target).is_some_and(|sec| sec.collapsible) {
            assert!(s.expanded.contains(&target));
        }
        assert_eq!(Some(s.scroll), s.layout.scroll_for(target, s.viewport()));
    }
}
