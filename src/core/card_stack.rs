//! Card stack state machine.
//!
//! All widget state (filter, active index, mode, drag flag) lives in
//! [`CardStackState`]. Transitions go through the pure [`reduce`] function so
//! they can be tested without any terminal. [`CardStack`] bundles the state
//! with its deck for callers that just want to apply events.

use super::cards::{Card, CardDeck, CategoryFilter};
use super::gesture::{interpret_drag_end, NavigationCommand, SwipeThresholds};
use super::stack::{capabilities, display_order, LayoutMode, StackEntry};

/// Mutable widget state. Created on mount, discarded on unmount.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStackState {
    pub filter: CategoryFilter,
    /// Meaningful only while the filtered set is non-empty; always read
    /// modulo the current filtered count.
    pub active_index: usize,
    pub mode: LayoutMode,
    /// Set between drag start and drag end; suppresses the click that
    /// terminates the same gesture.
    pub dragging: bool,
    /// Live horizontal drag displacement (px) of the front card.
    pub drag_offset: f32,
}

impl CardStackState {
    pub fn new(mode: LayoutMode) -> Self {
        Self {
            filter: CategoryFilter::All,
            active_index: 0,
            mode,
            dragging: false,
            drag_offset: 0.0,
        }
    }
}

impl Default for CardStackState {
    fn default() -> Self {
        Self::new(LayoutMode::default())
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum CardStackEvent {
    SetFilter(CategoryFilter),
    SetMode(LayoutMode),
    /// Pointer pressed and moved on the card at `stack_position`.
    DragStart { stack_position: usize },
    DragMove { offset: f32 },
    DragEnd { offset: f32, velocity: f32 },
    /// Pagination dot / direct jump.
    SelectIndex(usize),
    /// Keyboard next/previous.
    Navigate(NavigationCommand),
    /// Click on the card at `stack_position` (display position in flow modes).
    Click { stack_position: usize },
}

/// A card the user activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub card_id: String,
    /// Present when the card follows a link.
    pub url: Option<String>,
}

/// Result of one transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: CardStackState,
    pub activation: Option<Activation>,
}

impl Transition {
    fn to(state: CardStackState) -> Self {
        Self {
            state,
            activation: None,
        }
    }
}

/// Apply `event` to `state`.
///
/// Navigation on an empty filtered set is a no-op; every index computation
/// is guarded against a zero count.
pub fn reduce(
    mut state: CardStackState,
    deck: &CardDeck,
    thresholds: &SwipeThresholds,
    event: CardStackEvent,
) -> Transition {
    let count = deck.filtered_count(&state.filter);

    match event {
        CardStackEvent::SetFilter(filter) => {
            if filter != state.filter {
                state.filter = filter;
                state.active_index = 0;
                state.dragging = false;
                state.drag_offset = 0.0;
            }
        }
        CardStackEvent::SetMode(mode) => {
            state.mode = mode;
            state.dragging = false;
            state.drag_offset = 0.0;
        }
        CardStackEvent::DragStart { stack_position } => {
            if state.mode == LayoutMode::Stack && stack_position == 0 && count > 0 {
                state.dragging = true;
                state.drag_offset = 0.0;
            }
        }
        CardStackEvent::DragMove { offset } => {
            if state.dragging {
                state.drag_offset = offset;
            }
        }
        CardStackEvent::DragEnd { offset, velocity } => {
            if state.dragging {
                if count > 0 {
                    let command = interpret_drag_end(offset, velocity, thresholds);
                    state.active_index = rotate(state.active_index, count, command);
                }
                state.drag_offset = 0.0;
                state.dragging = false;
            }
        }
        CardStackEvent::SelectIndex(index) => {
            if index < count {
                state.active_index = index;
            }
        }
        CardStackEvent::Navigate(command) => {
            if count > 0 {
                state.active_index = rotate(state.active_index, count, command);
            }
        }
        CardStackEvent::Click { stack_position } => {
            if state.dragging || count == 0 {
                return Transition::to(state);
            }
            let filter = state.filter.clone();
            let filtered: Vec<&Card> = deck.filtered(&filter).collect();
            let order = display_order(&filtered, state.active_index % count, state.mode);
            let Some(entry) = order.iter().find(|e| e.stack_position == stack_position) else {
                return Transition::to(state);
            };
            let caps = capabilities(entry.card, entry.stack_position, state.mode);
            if !caps.is_interactive {
                return Transition::to(state);
            }
            let activation = Activation {
                card_id: entry.card.id.clone(),
                url: caps.follows_link().then(|| entry.card.url.clone()).flatten(),
            };
            tracing::debug!(card = %activation.card_id, "card activated");
            return Transition {
                state,
                activation: Some(activation),
            };
        }
    }

    Transition::to(state)
}

/// Rotate `index` within `[0, count)`. `count` must be non-zero.
fn rotate(index: usize, count: usize, command: NavigationCommand) -> usize {
    let index = index % count;
    match command {
        NavigationCommand::Advance => (index + 1) % count,
        NavigationCommand::Retreat => (index + count - 1) % count,
        NavigationCommand::Stay => index,
    }
}

// ───────────────────────────────────────── owner ─────────────

/// Deck + state + thresholds, applying events in place.
#[derive(Debug, Clone)]
pub struct CardStack {
    deck: CardDeck,
    state: CardStackState,
    thresholds: SwipeThresholds,
}

impl CardStack {
    pub fn new(deck: CardDeck, mode: LayoutMode, thresholds: SwipeThresholds) -> Self {
        Self {
            deck,
            state: CardStackState::new(mode),
            thresholds,
        }
    }

    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    pub fn state(&self) -> &CardStackState {
        &self.state
    }

    pub fn set_thresholds(&mut self, thresholds: SwipeThresholds) {
        self.thresholds = thresholds;
    }

    /// Apply an event; returns the activated card, if any.
    pub fn apply(&mut self, event: CardStackEvent) -> Option<Activation> {
        let before_filter = self.state.filter.clone();
        let before_index = self.state.active_index;
        let transition = reduce(self.state.clone(), &self.deck, &self.thresholds, event);
        self.state = transition.state;
        if self.state.filter != before_filter {
            tracing::debug!(filter = %self.state.filter, "card filter changed");
        } else if self.state.active_index != before_index {
            tracing::debug!(from = before_index, to = self.state.active_index, "active card changed");
        }
        transition.activation
    }

    pub fn categories(&self) -> Vec<CategoryFilter> {
        self.deck.categories()
    }

    pub fn filtered(&self) -> Vec<&Card> {
        self.deck.filtered(&self.state.filter).collect()
    }

    /// Active index clamped to the current filtered set, `None` when empty.
    pub fn active_index(&self) -> Option<usize> {
        let count = self.deck.filtered_count(&self.state.filter);
        (count > 0).then(|| self.state.active_index % count)
    }

    pub fn active_card(&self) -> Option<&Card> {
        let index = self.active_index()?;
        self.deck.filtered(&self.state.filter).nth(index)
    }

    /// Cards in paint order for the current mode.
    pub fn display(&self) -> Vec<StackEntry<'_>> {
        let filtered = self.filtered();
        let active = self.active_index().unwrap_or(0);
        display_order(&filtered, active, self.state.mode)
    }

    /// Advance the filter to the next category, wrapping to `All`.
    pub fn cycle_filter(&mut self) {
        let cats = self.categories();
        let idx = cats.iter().position(|c| *c == self.state.filter).unwrap_or(0);
        let next = cats[(idx + 1) % cats.len()].clone();
        self.apply(CardStackEvent::SetFilter(next));
    }

    pub fn cycle_mode(&mut self) {
        let next = self.state.mode.next();
        self.apply(CardStackEvent::SetMode(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> CardDeck {
        CardDeck::new(vec![
            Card::new("plan-0", "Plano 2023", "").category("Plano").url("https://example.org/p0"),
            Card::new("doc-0", "Protocolo", "").category("Documento").url("https://example.org/d0"),
            Card::new("plan-1", "Plano 2024", "").category("Plano").url("#"),
        ])
        .unwrap()
    }

    fn run(state: CardStackState, events: Vec<CardStackEvent>) -> CardStackState {
        let deck = deck();
        let thresholds = SwipeThresholds::default();
        events
            .into_iter()
            .fold(state, |s, e| reduce(s, &deck, &thresholds, e).state)
    }

    fn drag(offset: f32, velocity: f32) -> Vec<CardStackEvent> {
        vec![
            CardStackEvent::DragStart { stack_position: 0 },
            CardStackEvent::DragMove { offset },
            CardStackEvent::DragEnd { offset, velocity },
        ]
    }

    #[test]
    fn changing_filter_resets_index() {
        for start in 0..3 {
            for filter in [CategoryFilter::named("Plano"), CategoryFilter::named("Documento"), CategoryFilter::named("Nada")] {
                let mut state = CardStackState::default();
                state.active_index = start;
                let next = run(state, vec![CardStackEvent::SetFilter(filter.clone())]);
                assert_eq!(next.active_index, 0);
                assert_eq!(next.filter, filter);
            }
        }
    }

    #[test]
    fn same_filter_keeps_index() {
        let mut state = CardStackState::default();
        state.active_index = 2;
        let next = run(state, vec![CardStackEvent::SetFilter(CategoryFilter::All)]);
        assert_eq!(next.active_index, 2);
    }

    #[test]
    fn drag_past_distance_advances_and_wraps() {
        let mut state = CardStackState::default();
        state.active_index = 2;
        let next = run(state, drag(-60.0, 1.0));
        assert_eq!(next.active_index, 0);
        assert!(!next.dragging);
        assert_eq!(next.drag_offset, 0.0);
    }

    #[test]
    fn small_drag_snaps_back() {
        let next = run(CardStackState::default(), drag(-10.0, 1.0));
        assert_eq!(next.active_index, 0);
        assert!(!next.dragging);
    }

    #[test]
    fn fast_flick_retreats_and_wraps() {
        let next = run(CardStackState::default(), drag(30.0, 50.0));
        assert_eq!(next.active_index, 2);
    }

    #[test]
    fn drag_is_ignored_outside_stack_mode_and_off_front_card() {
        let grid = run(CardStackState::new(LayoutMode::Grid), drag(-80.0, 1.0));
        assert_eq!(grid.active_index, 0);

        let back = run(
            CardStackState::default(),
            vec![
                CardStackEvent::DragStart { stack_position: 1 },
                CardStackEvent::DragEnd { offset: -80.0, velocity: 1.0 },
            ],
        );
        assert_eq!(back.active_index, 0);
    }

    #[test]
    fn single_match_filter_yields_single_stack() {
        let deck = deck();
        let thresholds = SwipeThresholds::default();
        let mut state = CardStackState::default();
        state.active_index = 2;
        let state = reduce(state, &deck, &thresholds, CardStackEvent::SetFilter(CategoryFilter::named("Documento"))).state;
        assert_eq!(state.active_index, 0);
        let filtered: Vec<&Card> = deck.filtered(&state.filter).collect();
        let order = crate::core::stack::stack_order(&filtered, state.active_index);
        assert_eq!(order.len(), 1);
        assert_eq!(order[0].card.id, "doc-0");
    }

    #[test]
    fn empty_filtered_set_makes_navigation_a_no_op() {
        let deck = deck();
        let thresholds = SwipeThresholds::default();
        let mut state = reduce(
            CardStackState::default(),
            &deck,
            &thresholds,
            CardStackEvent::SetFilter(CategoryFilter::named("Vídeo")),
        )
        .state;
        for event in [
            CardStackEvent::DragStart { stack_position: 0 },
            CardStackEvent::DragEnd { offset: -90.0, velocity: -90.0 },
            CardStackEvent::SelectIndex(0),
            CardStackEvent::SelectIndex(4),
            CardStackEvent::Navigate(NavigationCommand::Advance),
            CardStackEvent::Navigate(NavigationCommand::Retreat),
            CardStackEvent::Click { stack_position: 0 },
        ] {
            let t = reduce(state.clone(), &deck, &thresholds, event);
            assert_eq!(t.state.active_index, 0);
            assert!(!t.state.dragging);
            assert!(t.activation.is_none());
            state = t.state;
        }
    }

    #[test]
    fn select_index_jumps_directly_and_ignores_out_of_range() {
        let jumped = run(CardStackState::default(), vec![CardStackEvent::SelectIndex(2)]);
        assert_eq!(jumped.active_index, 2);
        let ignored = run(jumped, vec![CardStackEvent::SelectIndex(3)]);
        assert_eq!(ignored.active_index, 2);
    }

    #[test]
    fn keyboard_navigation_rotates() {
        let next = run(
            CardStackState::default(),
            vec![CardStackEvent::Navigate(NavigationCommand::Retreat)],
        );
        assert_eq!(next.active_index, 2);
        let next = run(next, vec![CardStackEvent::Navigate(NavigationCommand::Advance)]);
        assert_eq!(next.active_index, 0);
    }

    #[test]
    fn click_during_drag_is_suppressed() {
        let deck = deck();
        let thresholds = SwipeThresholds::default();
        let dragging = reduce(
            CardStackState::default(),
            &deck,
            &thresholds,
            CardStackEvent::DragStart { stack_position: 0 },
        )
        .state;
        assert!(dragging.dragging);
        let t = reduce(dragging, &deck, &thresholds, CardStackEvent::Click { stack_position: 0 });
        assert!(t.activation.is_none());
        assert!(t.state.dragging);
    }

    #[test]
    fn click_on_front_card_activates_with_link() {
        let deck = deck();
        let t = reduce(
            CardStackState::default(),
            &deck,
            &SwipeThresholds::default(),
            CardStackEvent::Click { stack_position: 0 },
        );
        assert_eq!(
            t.activation,
            Some(Activation {
                card_id: "plan-0".into(),
                url: Some("https://example.org/p0".into()),
            })
        );
    }

    #[test]
    fn click_on_background_stack_card_is_inert() {
        let deck = deck();
        let t = reduce(
            CardStackState::default(),
            &deck,
            &SwipeThresholds::default(),
            CardStackEvent::Click { stack_position: 1 },
        );
        assert!(t.activation.is_none());
    }

    #[test]
    fn placeholder_url_activates_without_link() {
        let deck = deck();
        let t = reduce(
            CardStackState::new(LayoutMode::List),
            &deck,
            &SwipeThresholds::default(),
            CardStackEvent::Click { stack_position: 2 },
        );
        let activation = t.activation.unwrap();
        assert_eq!(activation.card_id, "plan-1");
        assert_eq!(activation.url, None);
    }

    #[test]
    fn owner_cycles_filters_and_modes() {
        let mut stack = CardStack::new(deck(), LayoutMode::Stack, SwipeThresholds::default());
        stack.cycle_filter();
        assert_eq!(stack.state().filter, CategoryFilter::named("Plano"));
        assert_eq!(stack.filtered().len(), 2);
        stack.cycle_filter();
        stack.cycle_filter();
        assert_eq!(stack.state().filter, CategoryFilter::All);
        stack.cycle_mode();
        assert_eq!(stack.state().mode, LayoutMode::Grid);
    }

    #[test]
    fn owner_reads_active_card_against_current_count() {
        let mut stack = CardStack::new(deck(), LayoutMode::Stack, SwipeThresholds::default());
        stack.apply(CardStackEvent::SelectIndex(2));
        assert_eq!(stack.active_card().map(|c| c.id.as_str()), Some("plan-1"));
        stack.apply(CardStackEvent::SetFilter(CategoryFilter::named("Nada")));
        assert_eq!(stack.active_index(), None);
        assert!(stack.active_card().is_none());
        assert!(stack.display().is_empty());
    }
}
