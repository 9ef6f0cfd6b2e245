//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a blocking reader
//! task that forwards them over a channel so the main loop stays
//! non-blocking.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Bracketed paste, used by the search input.
    Paste(String),
    Resize(u16, u16),
    /// Drives the drag settle animation.
    Tick,
}

impl AppEvent {
    fn from_crossterm(event: CtEvent) -> Option<Self> {
        match event {
            CtEvent::Key(k) => Some(Self::Key(k)),
            CtEvent::Mouse(m) => Some(Self::Mouse(m)),
            CtEvent::Paste(text) => Some(Self::Paste(text)),
            CtEvent::Resize(w, h) => Some(Self::Resize(w, h)),
            CtEvent::FocusGained | CtEvent::FocusLost => None,
        }
    }
}

/// Spawns a reader on the blocking pool that polls the terminal and sends
/// events through the returned channel, with a `Tick` whenever `tick_rate`
/// passes without input.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        let next = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(ev) => AppEvent::from_crossterm(ev),
                Err(err) => {
                    tracing::warn!(%err, "terminal read failed");
                    None
                }
            },
            Ok(false) => Some(AppEvent::Tick),
            Err(err) => {
                tracing::warn!(%err, "terminal poll failed");
                Some(AppEvent::Tick)
            }
        };
        if let Some(event) = next {
            if tx.send(event).is_err() {
                break; // receiver dropped
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn focus_changes_are_dropped() {
        assert!(AppEvent::from_crossterm(CtEvent::FocusGained).is_none());
        assert!(matches!(
            AppEvent::from_crossterm(CtEvent::Resize(80, 24)),
            Some(AppEvent::Resize(80, 24))
        ));
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(AppEvent::from_crossterm(CtEvent::Key(key)), Some(AppEvent::Key(_))));
    }
}
