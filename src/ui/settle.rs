//! Drag settle animation with exponential ease-out.
//!
//! When a drag on the front card ends without navigating, the card springs
//! back from its release offset. Each tick the remaining displacement decays
//! toward zero, so the card slides home by a few columns per frame.

/// Horizontal pixel-offset animator for the front card.
#[derive(Debug, Clone)]
pub struct SettleAnimation {
    /// Remaining displacement in px.  Negative = card still left of rest.
    offset_px: f64,
    /// Damping: `offset *= (1 - speed)` each tick.
    speed: f64,
}

impl SettleAnimation {
    pub fn new(speed: f64) -> Self {
        Self {
            offset_px: 0.0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Start springing back from `offset_px`.
    pub fn start(&mut self, offset_px: f32) {
        self.offset_px = f64::from(offset_px);
    }

    /// Jump to rest (e.g. when the card set changes).
    pub fn stop(&mut self) {
        self.offset_px = 0.0;
    }

    /// Decay the offset toward zero.  Call once per frame.
    pub fn tick(&mut self) {
        self.offset_px *= 1.0 - self.speed;
        if self.offset_px.abs() < 2.0 {
            self.offset_px = 0.0;
        }
    }

    pub fn offset_px(&self) -> f32 {
        self.offset_px as f32
    }

    /// True while the card is still visibly moving.
    pub fn is_animating(&self) -> bool {
        self.offset_px != 0.0
    }
}

impl Default for SettleAnimation {
    fn default() -> Self {
        Self::new(0.45)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_to_rest() {
        let mut settle = SettleAnimation::default();
        settle.start(-40.0);
        assert!(settle.is_animating());
        let mut last = settle.offset_px().abs();
        for _ in 0..20 {
            settle.tick();
            assert!(settle.offset_px().abs() <= last);
            last = settle.offset_px().abs();
        }
        assert!(!settle.is_animating());
        assert_eq!(settle.offset_px(), 0.0);
    }

    #[test]
    fn stop_jumps_home() {
        let mut settle = SettleAnimation::default();
        settle.start(30.0);
        settle.stop();
        assert!(!settle.is_animating());
    }
}
