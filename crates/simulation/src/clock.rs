//! Fixed-rate simulation clock, decoupled from the frame rate.

/// Seconds between simulation steps unless configured otherwise.
pub const DEFAULT_UPDATE_RATE: f32 = 0.01;

/// Countdown accumulator: each frame subtracts its elapsed time, and once
/// the countdown goes negative one step is due and the countdown restarts.
/// At most one step fires per frame; leftover time is dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickClock {
    update_rate: f32,
    countdown: f32,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(DEFAULT_UPDATE_RATE)
    }
}

impl TickClock {
    #[must_use]
    pub fn new(update_rate: f32) -> Self {
        Self {
            update_rate,
            countdown: update_rate,
        }
    }

    #[must_use]
    pub fn update_rate(&self) -> f32 {
        self.update_rate
    }

    /// Feed `dt` seconds of real time. Returns `true` when a step is due.
    /// Negative or non-finite `dt` counts as no time passing.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        self.countdown -= dt;
        if self.countdown < 0.0 {
            self.countdown = self.update_rate;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fires_once_countdown_goes_negative() {
        let mut clock = TickClock::new(0.01);
        assert!(!clock.advance(0.004));
        assert!(!clock.advance(0.005));
        assert!(clock.advance(0.002));
        assert!(!clock.advance(0.005));
    }

    #[test]
    fn long_frame_fires_once() {
        let mut clock = TickClock::default();
        assert!(clock.advance(1.0));
        assert!(!clock.advance(0.0));
    }

    #[test]
    fn bad_dt_does_not_poison_the_clock() {
        let mut clock = TickClock::new(0.01);
        assert!(!clock.advance(f32::NAN));
        assert!(!clock.advance(f32::INFINITY));
        assert!(!clock.advance(-5.0));
        assert!(clock.advance(0.02));
    }

    proptest! {
        #[test]
        fn prop_never_more_than_one_step_per_frame(
            frames in proptest::collection::vec(0.0f32..0.05, 1..200),
        ) {
            let mut clock = TickClock::new(0.01);
            let steps = frames.iter().filter(|&&dt| clock.advance(dt)).count();
            prop_assert!(steps <= frames.len());
            let total: f32 = frames.iter().sum();
            prop_assert!(steps as f32 <= total / 0.01 + 1.0);
        }
    }
}
