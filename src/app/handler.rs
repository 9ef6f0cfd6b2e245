//! Input handling: maps key/mouse events to state mutations.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::config::{Action, KeyBind};
use crate::core::card_stack::CardStackEvent;
use crate::core::gesture::{DragTracker, NavigationCommand};
use crate::ui::card_stack::{card_stack_geometry, CardStackGeometry, StackHit};
use crate::ui::document::{FocusTarget, TargetRect};
use crate::ui::layout::{contains, nav_geometry, NavHit};
use crate::ui::modal::{modal_zones, ModalHit, ModalKind};
use crate::ui::search::{search_geometry, SearchHit};

use super::settings::{SettingsItem, SETTINGS_ITEMS};
use super::state::{ActiveView, AppState, CardPress};

/// Rows moved by one mouse wheel notch.
const WHEEL_ROWS: isize = 3;

/// Total selectable rows in the controls submenu (actions + "Reset").
pub fn controls_item_count() -> usize {
    Action::ALL.len() + 1
}

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Only process Press events (ignore Release/Repeat on supported terminals).
    if key.kind != KeyEventKind::Press {
        return;
    }
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Report => handle_report_key(state, key),
        ActiveView::Search => handle_search_key(state, key),
        ActiveView::Image(_) | ActiveView::Video(_) | ActiveView::Authors => {
            handle_modal_key(state, key)
        }
        ActiveView::SettingsMenu => handle_settings_key(state, key),
        ActiveView::ControlsSubmenu => {
            if state.awaiting_rebind {
                handle_rebind_key(state, key);
            } else {
                handle_controls_key(state, key);
            }
        }
    }
}

/// Pasted text goes into the search query when the overlay is open.
pub fn handle_paste(state: &mut AppState, text: &str) {
    if state.active_view != ActiveView::Search {
        return;
    }
    state.search_query.extend(text.chars().filter(|c| !c.is_control()));
    state.refresh_search();
}

// ── Report view (configurable bindings) ─────────────────────────

fn handle_report_key(state: &mut AppState, key: KeyEvent) {
    state.status_message = None;

    if key.code == KeyCode::Esc {
        state.focus = None;
        return;
    }
    let Some(action) = state.config.match_key(key) else {
        // Unbound digits jump straight to a document card.
        if let KeyCode::Char(ch @ '1'..='9') = key.code {
            if key.modifiers.is_empty() {
                let index = ch as usize - '1' as usize;
                state.cards.apply(CardStackEvent::SelectIndex(index));
            }
        }
        return;
    };
    let page = state.viewport().saturating_sub(1).max(1) as isize;

    match action {
        Action::ScrollUp => state.scroll_by(-1),
        Action::ScrollDown => state.scroll_by(1),
        Action::PageUp => state.scroll_by(-page),
        Action::PageDown => state.scroll_by(page),
        Action::Top => state.scroll_to(0),
        Action::Bottom => state.scroll_to(usize::MAX),
        Action::NextSection => state.step_section(true),
        Action::PrevSection => state.step_section(false),
        Action::FocusNext => state.move_focus(true),
        Action::FocusPrev => state.move_focus(false),
        Action::Activate => match state.focus {
            Some(target) => state.activate(target),
            None => {
                let hint = state.config.short_binding(Action::FocusNext);
                state.status_message = Some(format!("Press {hint} to focus an item"));
            }
        },
        Action::CardPrev => navigate_cards(state, NavigationCommand::Retreat),
        Action::CardNext => navigate_cards(state, NavigationCommand::Advance),
        Action::CycleFilter => {
            state.cards.cycle_filter();
            state.settle.stop();
            state.relayout();
            state.status_message = Some(format!("Category: {}", state.cards.state().filter));
        }
        Action::CycleLayout => {
            state.cards.cycle_mode();
            state.settle.stop();
            state.relayout();
            state.status_message = Some(format!("Layout: {}", state.cards.state().mode.description()));
        }
        Action::OpenSearch => state.open_search(),
        Action::ToggleTheme => state.toggle_theme(),
        Action::ShowAuthors => state.active_view = ActiveView::Authors,
        Action::OpenSettings => {
            state.active_view = ActiveView::SettingsMenu;
            state.settings_selected = 0;
        }
        Action::Quit => state.should_quit = true,
    }
}

fn navigate_cards(state: &mut AppState, command: NavigationCommand) {
    state.settle.stop();
    state.cards.apply(CardStackEvent::Navigate(command));
}

// ── Search overlay ──────────────────────────────────────────────

fn handle_search_key(state: &mut AppState, key: KeyEvent) {
    let toggles = state.config.match_key(key) == Some(Action::OpenSearch)
        && (key.modifiers.contains(KeyModifiers::CONTROL) || state.search_query.is_empty());
    if toggles {
        state.active_view = ActiveView::Report;
        return;
    }

    match key.code {
        KeyCode::Esc => state.active_view = ActiveView::Report,
        KeyCode::Enter => state.confirm_search(state.search_selected),
        KeyCode::Up => state.search_selected = state.search_selected.saturating_sub(1),
        KeyCode::Down => {
            if state.search_selected + 1 < state.search_results.len() {
                state.search_selected += 1;
            }
        }
        KeyCode::Backspace => {
            state.search_query.pop();
            state.refresh_search();
        }
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            state.search_query.push(ch);
            state.refresh_search();
        }
        _ => {}
    }
}

// ── Modals ──────────────────────────────────────────────────────

fn handle_modal_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('x') => {
            state.active_view = ActiveView::Report;
        }
        KeyCode::Left | KeyCode::Char('h') => state.step_image(false),
        KeyCode::Right | KeyCode::Char('l') => state.step_image(true),
        KeyCode::Enter | KeyCode::Char('o') => {
            if state.active_view == ActiveView::Authors {
                state.active_view = ActiveView::Report;
            } else {
                state.open_modal_link();
            }
        }
        _ => {}
    }
}

fn modal_kind(view: ActiveView) -> Option<ModalKind> {
    match view {
        ActiveView::Image(_) => Some(ModalKind::Image),
        ActiveView::Video(_) => Some(ModalKind::Video),
        ActiveView::Authors => Some(ModalKind::Authors),
        _ => None,
    }
}

fn handle_modal_mouse(state: &mut AppState, kind: ModalKind, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    match modal_zones(kind, state.terminal_area).hit(mouse.column, mouse.row) {
        ModalHit::Close | ModalHit::Outside => state.active_view = ActiveView::Report,
        ModalHit::Prev => state.step_image(false),
        ModalHit::Next => state.step_image(true),
        ModalHit::Open => state.open_modal_link(),
        ModalHit::Panel => {}
    }
}

// ── Settings menu (hardcoded keys) ──────────────────────────────

fn handle_settings_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            state.active_view = ActiveView::Report;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.settings_selected = state.settings_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.settings_selected < SETTINGS_ITEMS.len() - 1 {
                state.settings_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
            if let Some(item) = SETTINGS_ITEMS.get(state.settings_selected) {
                match item {
                    SettingsItem::Submenu { view, .. } => {
                        state.active_view = *view;
                        state.controls_selected = 0;
                    }
                    SettingsItem::Toggle { get, set, .. } => {
                        let current = get(state);
                        set(state, !current);
                    }
                    SettingsItem::Cycle { cycle, .. } => {
                        cycle(state);
                    }
                }
            }
        }
        _ => {}
    }
}

// ── Controls submenu (hardcoded navigation, interactive rebinding) ──

fn handle_controls_key(state: &mut AppState, key: KeyEvent) {
    let item_count = controls_item_count();

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            state.active_view = ActiveView::Report;
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.active_view = ActiveView::SettingsMenu;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.controls_selected = state.controls_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.controls_selected < item_count - 1 {
                state.controls_selected += 1;
            }
        }
        KeyCode::Enter => {
            if state.controls_selected < Action::ALL.len() {
                // Start rebinding the selected action.
                state.awaiting_rebind = true;
            } else {
                // "Reset to defaults" item.
                state.config.reset_defaults();
                state.save_config();
            }
        }
        KeyCode::Delete | KeyCode::Backspace => {
            // Clear all bindings for the selected action.
            if let Some(&action) = Action::ALL.get(state.controls_selected) {
                state.config.bindings.insert(action, Vec::new());
                state.save_config();
            }
        }
        _ => {}
    }
}

/// Capture the next key press as a new binding.
fn handle_rebind_key(state: &mut AppState, key: KeyEvent) {
    // Esc cancels rebinding.
    if key.code == KeyCode::Esc {
        state.awaiting_rebind = false;
        return;
    }

    let Some(&action) = Action::ALL.get(state.controls_selected) else {
        state.awaiting_rebind = false;
        return;
    };
    state.config.add_binding(action, KeyBind::from_key_event(key));
    state.save_config();
    state.awaiting_rebind = false;
}

// ── Mouse ───────────────────────────────────────────────────────

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    handle_mouse_at(state, mouse, Instant::now());
}

/// [`handle_mouse`] with an explicit timestamp for drag velocity.
pub fn handle_mouse_at(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    if let Some(kind) = modal_kind(state.active_view) {
        handle_modal_mouse(state, kind, mouse);
        return;
    }
    match state.active_view {
        ActiveView::Search => handle_search_mouse(state, mouse),
        ActiveView::Report => handle_report_mouse(state, mouse, now),
        _ => {}
    }
}

fn handle_search_mouse(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let geometry = search_geometry(state.terminal_area, state.search_results.len());
            match geometry.hit(mouse.column, mouse.row) {
                SearchHit::Close | SearchHit::Outside => state.active_view = ActiveView::Report,
                SearchHit::Result(i) => {
                    state.search_selected = i;
                    state.confirm_search(i);
                }
                SearchHit::Panel => {}
            }
        }
        MouseEventKind::ScrollUp => {
            state.search_selected = state.search_selected.saturating_sub(1);
        }
        MouseEventKind::ScrollDown => {
            if state.search_selected + 1 < state.search_results.len() {
                state.search_selected += 1;
            }
        }
        _ => {}
    }
}

fn handle_report_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            state.status_message = None;
            let screen = state.screen();
            if contains(screen.nav_area, mouse.column, mouse.row) {
                if let Some(hit) = nav_geometry(screen.nav_area).hit(mouse.column, mouse.row) {
                    handle_nav_click(state, hit);
                }
                return;
            }
            let Some((col, row)) = document_point(state, mouse.column, mouse.row) else {
                return;
            };
            let Some(rect) = state.layout.target_at(col, row).copied() else {
                return;
            };
            state.focus = Some(rect.target);
            if rect.target == FocusTarget::Documents {
                press_documents(state, &rect, col, row, mouse.column, now);
            } else {
                state.activate(rect.target);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let Some(press) = state.press.as_mut() else {
                return;
            };
            let offset = press.tracker.move_to(mouse.column, now);
            if !press.tracker.has_moved() {
                return;
            }
            let stack_position = press.stack_position;
            if !state.cards.state().dragging {
                state.cards.apply(CardStackEvent::DragStart { stack_position });
            }
            state.cards.apply(CardStackEvent::DragMove { offset });
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(press) = state.press.take() else {
                return;
            };
            if state.cards.state().dragging {
                let release = press.tracker.release(mouse.column, now);
                let before = state.cards.active_index();
                state.cards.apply(CardStackEvent::DragEnd {
                    offset: release.offset,
                    velocity: release.velocity,
                });
                if state.cards.active_index() == before {
                    state.settle.start(release.offset);
                }
            } else if !press.tracker.has_moved() {
                let activation = state.cards.apply(CardStackEvent::Click {
                    stack_position: press.stack_position,
                });
                state.handle_activation(activation);
            }
        }
        MouseEventKind::ScrollUp => state.scroll_by(-WHEEL_ROWS),
        MouseEventKind::ScrollDown => state.scroll_by(WHEEL_ROWS),
        _ => {}
    }
}

fn handle_nav_click(state: &mut AppState, hit: NavHit) {
    match hit {
        NavHit::Brand => state.scroll_to(0),
        NavHit::Item(id) => state.jump_to_section(id),
        NavHit::Search => state.open_search(),
        NavHit::Theme => state.toggle_theme(),
        NavHit::Authors => state.active_view = ActiveView::Authors,
    }
}

/// Screen cell to (content column, document row), if inside the body.
fn document_point(state: &AppState, col: u16, row: u16) -> Option<(u16, usize)> {
    let body = state.screen().body_area;
    if !contains(body, col, row) {
        return None;
    }
    let left = body.x + state.layout.x;
    let col = col.checked_sub(left)?;
    Some((col, state.scroll + (row - body.y) as usize))
}

/// Card stack geometry in block-local coordinates.
fn documents_geometry(state: &AppState, rect: &TargetRect) -> CardStackGeometry {
    let area = Rect::new(0, 0, state.layout.width, rect.height);
    card_stack_geometry(&state.cards, area, state.drag_dx())
}

fn press_documents(state: &mut AppState, rect: &TargetRect, col: u16, row: usize, screen_col: u16, now: Instant) {
    let local_x = col.saturating_sub(rect.x);
    let local_y = (row - rect.top) as u16;
    let Some(hit) = documents_geometry(state, rect).hit(local_x, local_y) else {
        return;
    };
    match hit {
        StackHit::Filter(filter) => {
            state.cards.apply(CardStackEvent::SetFilter(filter));
            state.settle.stop();
            state.relayout();
        }
        StackHit::Mode(mode) => {
            state.cards.apply(CardStackEvent::SetMode(mode));
            state.settle.stop();
            state.relayout();
        }
        StackHit::Dot(index) => {
            state.settle.stop();
            state.cards.apply(CardStackEvent::SelectIndex(index));
        }
        StackHit::Card { stack_position } => {
            state.settle.stop();
            state.press = Some(CardPress {
                stack_position,
                tracker: DragTracker::press(screen_col, now, state.config.px_per_cell),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::cards::CategoryFilter;
    use crate::core::report::SectionId;
    use crate::core::stack::LayoutMode;
    use std::time::Duration;

    fn state() -> AppState {
        let mut state = AppState::new(AppConfig::default()).unwrap();
        state.resize(100, 30);
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Bring the card stack into view and return the screen cell at the
    /// middle of the front card.
    fn front_card_cell(s: &mut AppState) -> (u16, u16) {
        let rect = *s.layout.target_rect(FocusTarget::Documents).unwrap();
        s.scroll_to(rect.top);
        let front = documents_geometry(s, &rect).card_rect(0).unwrap();
        let body = s.screen().body_area;
        let col = body.x + s.layout.x + rect.x + front.x + front.width / 2;
        let row = body.y + (rect.top + front.y as usize - s.scroll) as u16 + 2;
        (col, row)
    }

    #[test]
    fn scroll_keys_move_and_clamp() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Down));
        handle_key(&mut s, key(KeyCode::Char('j')));
        assert_eq!(s.scroll, 2);
        handle_key(&mut s, key(KeyCode::Home));
        assert_eq!(s.scroll, 0);
        handle_key(&mut s, key(KeyCode::End));
        assert_eq!(s.scroll, s.layout.max_scroll(s.viewport()));
    }

    #[test]
    fn section_keys_step_between_headers() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Char(']')));
        let first = s.layout.anchors[0].1;
        assert_eq!(s.scroll, first);
        handle_key(&mut s, key(KeyCode::Char(']')));
        assert_eq!(s.scroll, s.layout.anchors[1].1);
        handle_key(&mut s, key(KeyCode::Char('[')));
        assert_eq!(s.scroll, first);
    }

    #[test]
    fn tab_then_enter_toggles_a_section() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Tab));
        let Some(FocusTarget::Section(id)) = s.focus else {
            panic!("expected a section header first, got {:?}", s.focus);
        };
        let was_open = s.expanded.contains(&id);
        handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.expanded.contains(&id), !was_open);
    }

    #[test]
    fn card_keys_rotate_filter_and_select() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Right));
        assert_eq!(s.cards.active_index(), Some(1));
        handle_key(&mut s, key(KeyCode::Left));
        handle_key(&mut s, key(KeyCode::Left));
        assert_eq!(s.cards.active_index(), Some(s.cards.filtered().len() - 1));
        handle_key(&mut s, key(KeyCode::Char('3')));
        assert_eq!(s.cards.active_index(), Some(2));
        handle_key(&mut s, key(KeyCode::Char('f')));
        assert_eq!(s.cards.state().filter, CategoryFilter::named("Plano"));
        assert_eq!(s.cards.active_index(), Some(0));
        handle_key(&mut s, key(KeyCode::Char('v')));
        assert_eq!(s.cards.state().mode, LayoutMode::Grid);
    }

    #[test]
    fn bound_digit_runs_its_action_instead_of_selecting() {
        let mut s = state();
        s.config.add_binding(Action::Quit, KeyBind::new(KeyCode::Char('1'), KeyModifiers::NONE));
        handle_key(&mut s, key(KeyCode::Char('2')));
        assert_eq!(s.cards.active_index(), Some(1));
        handle_key(&mut s, key(KeyCode::Char('1')));
        assert!(s.should_quit);
        assert_eq!(s.cards.active_index(), Some(1));
    }

    #[test]
    fn search_typing_and_enter_jump_to_result() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Char('/')));
        assert_eq!(s.active_view, ActiveView::Search);
        for ch in "bullying".chars() {
            handle_key(&mut s, key(KeyCode::Char(ch)));
        }
        assert_eq!(s.search_query, "bullying");
        assert!(!s.search_results.is_empty());
        let target = s.search_results[0].target;
        handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.active_view, ActiveView::Report);
        assert_eq!(Some(s.scroll), s.layout.scroll_for(target, s.viewport()));
    }

    #[test]
    fn ctrl_k_closes_search_even_with_a_query() {
        let mut s = state();
        s.open_search();
        handle_paste(&mut s, "paz\n");
        assert_eq!(s.search_query, "paz");
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert_eq!(s.active_view, ActiveView::Report);
    }

    #[test]
    fn nav_click_jumps_to_section() {
        let mut s = state();
        let nav = nav_geometry(s.screen().nav_area);
        let (id, rect) = nav.items[1];
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), rect.x, rect.y));
        assert_eq!(Some(s.scroll), s.layout.scroll_for(id, s.viewport()));
        assert_ne!(id, SectionId::Summary);
    }

    #[test]
    fn long_drag_on_front_card_advances() {
        let mut s = state();
        let (col, row) = front_card_cell(&mut s);
        let t0 = Instant::now();
        handle_mouse_at(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), col, row), t0);
        handle_mouse_at(
            &mut s,
            mouse(MouseEventKind::Drag(MouseButton::Left), col - 10, row),
            t0 + Duration::from_millis(50),
        );
        assert!(s.cards.state().dragging);
        handle_mouse_at(
            &mut s,
            mouse(MouseEventKind::Up(MouseButton::Left), col - 10, row),
            t0 + Duration::from_millis(100),
        );
        assert!(!s.cards.state().dragging);
        assert_eq!(s.cards.active_index(), Some(1));
        assert!(s.visited.is_empty());
    }

    #[test]
    fn short_slow_drag_snaps_back() {
        let mut s = state();
        let (col, row) = front_card_cell(&mut s);
        let t0 = Instant::now();
        handle_mouse_at(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), col, row), t0);
        handle_mouse_at(
            &mut s,
            mouse(MouseEventKind::Drag(MouseButton::Left), col + 2, row),
            t0 + Duration::from_millis(200),
        );
        handle_mouse_at(
            &mut s,
            mouse(MouseEventKind::Up(MouseButton::Left), col + 2, row),
            t0 + Duration::from_millis(600),
        );
        assert_eq!(s.cards.active_index(), Some(0));
        assert!(s.settle.is_animating());
        assert_eq!(s.drag_dx(), 2);
        assert!(s.visited.is_empty());
    }

    #[test]
    fn click_on_front_card_opens_its_link() {
        let mut s = state();
        let (col, row) = front_card_cell(&mut s);
        let t0 = Instant::now();
        handle_mouse_at(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), col, row), t0);
        handle_mouse_at(&mut s, mouse(MouseEventKind::Up(MouseButton::Left), col, row), t0);
        let url = s.cards.filtered()[0].url.clone().unwrap();
        assert_eq!(s.visited, vec![url]);
    }

    #[test]
    fn image_modal_arrows_and_outside_click() {
        let mut s = state();
        s.active_view = ActiveView::Image(0);
        handle_key(&mut s, key(KeyCode::Right));
        assert_eq!(s.active_view, ActiveView::Image(1));
        let zones = modal_zones(ModalKind::Image, s.terminal_area);
        let prev = zones.prev.unwrap();
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), prev.x + 1, prev.y));
        assert_eq!(s.active_view, ActiveView::Image(0));
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert_eq!(s.active_view, ActiveView::Report);
    }

    #[test]
    fn wheel_scrolls_three_rows() {
        let mut s = state();
        handle_mouse(&mut s, mouse(MouseEventKind::ScrollDown, 10, 10));
        assert_eq!(s.scroll, 3);
        handle_mouse(&mut s, mouse(MouseEventKind::ScrollUp, 10, 10));
        assert_eq!(s.scroll, 0);
    }

    #[test]
    fn settings_menu_opens_controls_and_backs_out() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Char('?')));
        assert_eq!(s.active_view, ActiveView::SettingsMenu);
        handle_key(&mut s, key(KeyCode::Down));
        handle_key(&mut s, key(KeyCode::Up));
        assert_eq!(s.settings_selected, 0);
        handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.active_view, ActiveView::ControlsSubmenu);
        handle_key(&mut s, key(KeyCode::Enter));
        assert!(s.awaiting_rebind);
        handle_key(&mut s, key(KeyCode::Esc));
        assert!(!s.awaiting_rebind);
        handle_key(&mut s, key(KeyCode::Left));
        assert_eq!(s.active_view, ActiveView::SettingsMenu);
        handle_key(&mut s, key(KeyCode::Esc));
        assert_eq!(s.active_view, ActiveView::Report);
    }
}
