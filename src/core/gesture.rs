//! Drag gesture interpretation.
//!
//! The event loop feeds raw pointer samples into a [`DragTracker`]; on
//! release the tracker yields the `(offset, velocity)` pair and
//! [`interpret_drag_end`] turns it into a [`NavigationCommand`].

use std::time::{Duration, Instant};

/// What a released drag asks the stack to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Move to the next card (swipe left).
    Advance,
    /// Move to the previous card (swipe right).
    Retreat,
    /// Snap back without changing the active card.
    Stay,
}

/// Swipe trigger thresholds. Either the plain distance or the
/// velocity-weighted score can trigger navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    pub distance_px: f32,
    pub score: f32,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            distance_px: 50.0,
            score: 1000.0,
        }
    }
}

/// Decide what a drag release means.
///
/// `offset` is the horizontal displacement in px (negative = left) and
/// `velocity` the release velocity in px/s.
pub fn interpret_drag_end(offset: f32, velocity: f32, thresholds: &SwipeThresholds) -> NavigationCommand {
    let swipe = offset.abs() * velocity;
    if offset < -thresholds.distance_px || swipe < -thresholds.score {
        NavigationCommand::Advance
    } else if offset > thresholds.distance_px || swipe > thresholds.score {
        NavigationCommand::Retreat
    } else {
        NavigationCommand::Stay
    }
}

// ───────────────────────────────────────── tracker ───────────

/// Window over which release velocity is measured.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// Final measurements of a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    pub offset: f32,
    pub velocity: f32,
}

/// Accumulates pointer positions for one drag gesture.
///
/// Positions are terminal columns; `px_per_cell` converts them to the pixel
/// units the thresholds are expressed in.
#[derive(Debug, Clone)]
pub struct DragTracker {
    origin_col: u16,
    px_per_cell: f32,
    samples: Vec<(f32, Instant)>,
    moved: bool,
}

impl DragTracker {
    /// Start tracking at the pointer-down position.
    pub fn press(col: u16, at: Instant, px_per_cell: f32) -> Self {
        Self {
            origin_col: col,
            px_per_cell,
            samples: vec![(0.0, at)],
            moved: false,
        }
    }

    /// Record a pointer move. Returns the current offset in px.
    pub fn move_to(&mut self, col: u16, at: Instant) -> f32 {
        let offset = self.offset_for(col);
        if offset != 0.0 {
            self.moved = true;
        }
        self.samples.push((offset, at));
        // Only the recent tail matters for velocity.
        if let Some(cut) = self
            .samples
            .iter()
            .rposition(|(_, t)| at.saturating_duration_since(*t) > VELOCITY_WINDOW)
        {
            self.samples.drain(..cut);
        }
        offset
    }

    /// `true` once the pointer has left its starting column.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Current displacement in px.
    pub fn offset(&self) -> f32 {
        self.samples.last().map_or(0.0, |(o, _)| *o)
    }

    /// Finish the gesture at `col`.
    pub fn release(mut self, col: u16, at: Instant) -> DragRelease {
        let offset = self.move_to(col, at);
        let velocity = self
            .samples
            .iter()
            .find(|(_, t)| at.saturating_duration_since(*t) <= VELOCITY_WINDOW)
            .map(|&(start_offset, start_at)| {
                let dt = at.saturating_duration_since(start_at).as_secs_f32();
                if dt > 0.0 {
                    (offset - start_offset) / dt
                } else {
                    0.0
                }
            })
            .unwrap_or(0.0);
        DragRelease { offset, velocity }
    }

    fn offset_for(&self, col: u16) -> f32 {
        (col as f32 - self.origin_col as f32) * self.px_per_cell
    }
}
