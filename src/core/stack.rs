//! Stack layout engine: render order and per-card placement for the three
//! display modes.
//!
//! In stack mode the cards form a circular pile starting at the active card.
//! [`stack_order`] yields that pile front-to-back; [`display_order`] reverses
//! it so the front card (`stack_position == 0`) is painted last and ends up
//! on top.

use std::fmt;
use std::str::FromStr;

use super::cards::Card;
use super::ParseChoiceError;

// ───────────────────────────────────────── mode ──────────────

/// How the card set is arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum LayoutMode {
    #[default]
    Stack,
    Grid,
    List,
}

impl LayoutMode {
    pub const ALL: &[LayoutMode] = &[LayoutMode::Stack, LayoutMode::Grid, LayoutMode::List];

    pub fn label(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Grid => "grid",
            Self::List => "list",
        }
    }

    /// Tooltip text for the layout toggle.
    pub fn description(self) -> &'static str {
        match self {
            Self::Stack => "Stack: interactive (drag)",
            Self::Grid => "Grid: overview",
            Self::List => "List: compact",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Stack => Self::Grid,
            Self::Grid => Self::List,
            Self::List => Self::Stack,
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LayoutMode {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stack" => Ok(Self::Stack),
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            other => Err(ParseChoiceError {
                kind: "layout",
                value: other.to_string(),
                expected: "stack, grid, list",
            }),
        }
    }
}

// ───────────────────────────────────────── ordering ──────────

/// A card tagged with its depth in the pile (0 = front).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackEntry<'a> {
    pub card: &'a Card,
    pub stack_position: usize,
}

/// Circular order starting at `active_index`, front card first.
///
/// Returns an empty vec for an empty set; `active_index` is taken modulo the
/// current length.
pub fn stack_order<'a>(filtered: &[&'a Card], active_index: usize) -> Vec<StackEntry<'a>> {
    let n = filtered.len();
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| StackEntry {
            card: filtered[(active_index + i) % n],
            stack_position: i,
        })
        .collect()
}

/// Order in which cards are painted. The last entry is drawn on top.
pub fn display_order<'a>(
    filtered: &[&'a Card],
    active_index: usize,
    mode: LayoutMode,
) -> Vec<StackEntry<'a>> {
    match mode {
        LayoutMode::Stack => {
            let mut order = stack_order(filtered, active_index);
            order.reverse();
            order
        }
        LayoutMode::Grid | LayoutMode::List => filtered
            .iter()
            .enumerate()
            .map(|(i, &card)| StackEntry {
                card,
                stack_position: i,
            })
            .collect(),
    }
}

// ───────────────────────────────────────── placement ─────────

/// Stack spacing between consecutive cards, in px on both axes.
pub const STACK_STEP_PX: i32 = 8;
/// Rotation step between consecutive cards, in degrees.
pub const STACK_TILT_DEG: i32 = 2;

/// Visual placement of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardPlacement {
    pub offset_x: i32,
    pub offset_y: i32,
    /// Higher paints above lower.
    pub z_index: i32,
    pub rotation_deg: i32,
}

/// Placement for the card at `stack_position` among `total` cards.
///
/// Grid and list are flow layouts: no offset, no rotation, flat depth.
pub fn layout_for(stack_position: usize, total: usize, mode: LayoutMode) -> CardPlacement {
    match mode {
        LayoutMode::Stack => {
            let pos = stack_position as i32;
            CardPlacement {
                offset_x: STACK_STEP_PX * pos,
                offset_y: STACK_STEP_PX * pos,
                z_index: total as i32 - pos,
                rotation_deg: (pos - 1) * STACK_TILT_DEG,
            }
        }
        LayoutMode::Grid | LayoutMode::List => CardPlacement {
            z_index: 1,
            ..CardPlacement::default()
        },
    }
}

// ───────────────────────────────────────── capabilities ──────

/// What a card may do in the current render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardCapabilities {
    /// Accepts clicks (and drags, for the front stack card).
    pub is_interactive: bool,
    pub has_destination: bool,
}

impl CardCapabilities {
    /// Activating the card follows its url.
    pub fn follows_link(self) -> bool {
        self.is_interactive && self.has_destination
    }
}

/// In stack mode only the front card is interactive; in grid/list every card is.
pub fn capabilities(card: &Card, stack_position: usize, mode: LayoutMode) -> CardCapabilities {
    CardCapabilities {
        is_interactive: mode != LayoutMode::Stack || stack_position == 0,
        has_destination: card.has_destination(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<Card> {
        (0..n).map(|i| Card::new(format!("c{i}"), format!("Card {i}"), "")).collect()
    }

    fn ids(entries: &[StackEntry<'_>]) -> Vec<String> {
        entries.iter().map(|e| e.card.id.clone()).collect()
    }

    #[test]
    fn stack_order_is_a_rotation_starting_at_active() {
        let owned = cards(4);
        let refs: Vec<&Card> = owned.iter().collect();
        let order = stack_order(&refs, 2);
        assert_eq!(ids(&order), ["c2", "c3", "c0", "c1"]);
        let positions: Vec<_> = order.iter().map(|e| e.stack_position).collect();
        assert_eq!(positions, [0, 1, 2, 3]);
    }

    #[test]
    fn stack_order_is_a_permutation_for_every_active_index() {
        let owned = cards(5);
        let refs: Vec<&Card> = owned.iter().collect();
        for active in 0..refs.len() {
            let order = stack_order(&refs, active);
            assert_eq!(order.len(), refs.len());
            let mut got = ids(&order);
            got.sort();
            let mut want: Vec<String> = owned.iter().map(|c| c.id.clone()).collect();
            want.sort();
            assert_eq!(got, want);
            assert_eq!(order[0].card.id, refs[active].id);
        }
    }

    #[test]
    fn display_order_paints_front_card_last() {
        let owned = cards(3);
        let refs: Vec<&Card> = owned.iter().collect();
        let order = display_order(&refs, 1, LayoutMode::Stack);
        let last = order.last().unwrap();
        assert_eq!(last.stack_position, 0);
        assert_eq!(last.card.id, "c1");
        assert_eq!(ids(&order), ["c0", "c2", "c1"]);
    }

    #[test]
    fn flow_modes_keep_filtered_order() {
        let owned = cards(3);
        let refs: Vec<&Card> = owned.iter().collect();
        for mode in [LayoutMode::Grid, LayoutMode::List] {
            let order = display_order(&refs, 2, mode);
            assert_eq!(ids(&order), ["c0", "c1", "c2"]);
            assert_eq!(order[2].stack_position, 2);
        }
    }

    #[test]
    fn empty_set_has_no_order() {
        assert!(stack_order(&[], 3).is_empty());
        assert!(display_order(&[], 0, LayoutMode::Stack).is_empty());
    }

    #[test]
    fn stack_placement_fans_out() {
        let front = layout_for(0, 4, LayoutMode::Stack);
        assert_eq!(front, CardPlacement { offset_x: 0, offset_y: 0, z_index: 4, rotation_deg: -2 });
        let second = layout_for(1, 4, LayoutMode::Stack);
        assert_eq!(second.rotation_deg, 0);
        assert_eq!((second.offset_x, second.offset_y), (8, 8));
        let third = layout_for(2, 4, LayoutMode::Stack);
        assert_eq!(third.rotation_deg, 2);
        assert!(front.z_index > second.z_index && second.z_index > third.z_index);
    }

    #[test]
    fn flow_placement_is_flat() {
        for mode in [LayoutMode::Grid, LayoutMode::List] {
            let p = layout_for(3, 5, mode);
            assert_eq!(p, CardPlacement { offset_x: 0, offset_y: 0, z_index: 1, rotation_deg: 0 });
        }
    }

    #[test]
    fn only_front_stack_card_is_interactive() {
        let card = Card::new("a", "A", "").url("https://example.org");
        assert!(capabilities(&card, 0, LayoutMode::Stack).follows_link());
        assert!(!capabilities(&card, 1, LayoutMode::Stack).is_interactive);
        assert!(capabilities(&card, 3, LayoutMode::Grid).follows_link());
        assert!(capabilities(&card, 3, LayoutMode::List).is_interactive);
    }

    #[test]
    fn layout_mode_cycles_and_parses() {
        assert_eq!(LayoutMode::Stack.next().next().next(), LayoutMode::Stack);
        assert_eq!("Grid".parse::<LayoutMode>().unwrap(), LayoutMode::Grid);
        let err = "carousel".parse::<LayoutMode>().unwrap_err();
        assert_eq!(err.value, "carousel");
    }
}
