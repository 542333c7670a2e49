//! Staggered reveal — the cascading entrance animation for the card list.
//!
//! After every (re)render of the cards, the clock restarts: card N becomes
//! visible once `0.1 * N` seconds have passed, so the list appears top to
//! bottom instead of all at once.  Tick events repaint often enough that
//! no per-card timer is needed.

use std::time::{Duration, Instant};

/// Per-position delay step (the Nth card waits `N * STAGGER_STEP`).
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Reveal clock for the card list.
#[derive(Debug, Clone)]
pub struct Reveal {
    started: Instant,
    enabled: bool,
}

impl Reveal {
    pub fn new(enabled: bool) -> Self {
        Self {
            started: Instant::now(),
            enabled,
        }
    }

    /// Restart the cascade — called after every card rebuild and when the
    /// filter shows cards again (they replay their fade-in).
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    /// Animations off means everything is visible immediately.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Entrance delay of the card at `index` (0-indexed).
    pub fn delay_for(index: usize) -> Duration {
        STAGGER_STEP * index as u32
    }

    /// Has the card at `index` entered yet?
    pub fn is_revealed(&self, index: usize) -> bool {
        !self.enabled || self.started.elapsed() >= Self::delay_for(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_grows_one_step_per_position() {
        assert_eq!(Reveal::delay_for(0), Duration::ZERO);
        assert_eq!(Reveal::delay_for(3), Duration::from_millis(300));
    }

    #[test]
    fn first_card_shows_immediately_later_cards_wait() {
        let reveal = Reveal::new(true);
        assert!(reveal.is_revealed(0));
        assert!(!reveal.is_revealed(50), "the 50th card waits 5 seconds");
    }

    #[test]
    fn disabled_animations_reveal_everything() {
        let reveal = Reveal::new(false);
        assert!(reveal.is_revealed(50));
    }
}
