//! Settings menu model (data only).
//!
//! Keeping these definitions outside the input handler lets both the handler
//! and UI renderers consume the same source of truth without cross-importing.

use super::state::{ActiveView, AppState};
use crate::core::card_stack::CardStackEvent;

/// A single item in the settings menu.
pub enum SettingsItem {
    /// Opens a submenu.
    Submenu {
        label: &'static str,
        view: ActiveView,
    },
    /// Boolean toggle; reads/writes via accessors on `AppState`.
    Toggle {
        label: &'static str,
        get: fn(&AppState) -> bool,
        set: fn(&mut AppState, bool),
    },
    /// Cycles through a finite set of values.
    Cycle {
        label: &'static str,
        value: fn(&AppState) -> String,
        cycle: fn(&mut AppState),
    },
}

impl SettingsItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Submenu { label, .. }
            | Self::Toggle { label, .. }
            | Self::Cycle { label, .. } => label,
        }
    }

    /// Current value shown next to the label, if any.
    pub fn value(&self, state: &AppState) -> Option<String> {
        match self {
            Self::Submenu { .. } => None,
            Self::Toggle { get, .. } => Some(if get(state) { "ON" } else { "OFF" }.to_string()),
            Self::Cycle { value, .. } => Some(value(state)),
        }
    }
}

const SWIPE_DISTANCES: &[f32] = &[30.0, 50.0, 80.0, 120.0];
const SWIPE_SCORES: &[f32] = &[500.0, 1000.0, 2000.0, 4000.0];
const PX_PER_CELL: &[f32] = &[4.0, 8.0, 12.0, 16.0];

/// The entry after `current` in `values`, wrapping. Unknown values restart
/// at `fallback`.
fn next_value(values: &[f32], current: f32, fallback: usize) -> f32 {
    let idx = values.iter().position(|v| *v == current).unwrap_or(fallback);
    values[(idx + 1) % values.len()]
}

/// All items shown in the settings popup, in display order.
pub static SETTINGS_ITEMS: &[SettingsItem] = &[
    SettingsItem::Submenu {
        label: "Controls",
        view: ActiveView::ControlsSubmenu,
    },
    SettingsItem::Cycle {
        label: "Theme",
        value: |s| s.config.theme.label().to_string(),
        cycle: |s| {
            s.toggle_theme();
            s.status_message = Some(format!("Theme: {}", s.config.theme.label()));
        },
    },
    SettingsItem::Cycle {
        label: "Card Layout",
        value: |s| s.config.default_layout.label().to_string(),
        cycle: |s| {
            let next = s.config.default_layout.next();
            s.config.default_layout = next;
            s.save_config();
            s.cards.apply(CardStackEvent::SetMode(next));
            s.relayout();
            s.status_message = Some(format!("Card layout: {}", next.label()));
        },
    },
    SettingsItem::Cycle {
        label: "Swipe Distance",
        value: |s| format!("{}px", s.config.swipe.distance_px),
        cycle: |s| {
            s.config.swipe.distance_px = next_value(SWIPE_DISTANCES, s.config.swipe.distance_px, 1);
            s.cards.set_thresholds(s.config.swipe);
            s.save_config();
        },
    },
    SettingsItem::Cycle {
        label: "Swipe Score",
        value: |s| format!("{}", s.config.swipe.score),
        cycle: |s| {
            s.config.swipe.score = next_value(SWIPE_SCORES, s.config.swipe.score, 1);
            s.cards.set_thresholds(s.config.swipe);
            s.save_config();
        },
    },
    SettingsItem::Cycle {
        label: "Pixels per Column",
        value: |s| format!("{}px", s.config.px_per_cell),
        cycle: |s| {
            s.config.px_per_cell = next_value(PX_PER_CELL, s.config.px_per_cell, 1);
            s.save_config();
        },
    },
    SettingsItem::Toggle {
        label: "Open Links in Browser",
        get: |s| s.config.open_links,
        set: |s, v| {
            s.config.open_links = v;
            s.save_config();
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_wrap_and_recover_from_unknown_values() {
        assert_eq!(next_value(SWIPE_DISTANCES, 120.0, 1), 30.0);
        assert_eq!(next_value(SWIPE_DISTANCES, 50.0, 1), 80.0);
        assert_eq!(next_value(SWIPE_SCORES, 1234.0, 1), 2000.0);
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<_> = SETTINGS_ITEMS.iter().map(|i| i.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), SETTINGS_ITEMS.len());
    }
}
