/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step, seconds
    pub now: f32, // Total elapsed time, seconds
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Points scored this round
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.points += 1;
    }
}

/// Countdown clock for the round
#[derive(Debug, Clone, Copy)]
pub struct RoundClock {
    pub remaining_ms: u32,
}

impl RoundClock {
    pub fn new(total_ms: u32) -> Self {
        Self {
            remaining_ms: total_ms,
        }
    }

    /// Burn `elapsed_ms` off the clock, saturating at 0.
    /// Returns true once the clock has run out.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        self.remaining_ms == 0
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_ms == 0
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub caught: bool,       // Apple landed in the basket
    pub missed: bool,       // Apple crossed the floor uncaught
    pub time_expired: bool, // Clock hit zero this frame
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.caught = false;
        self.missed = false;
        self.time_expired = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        assert_eq!(score.points, 0);
        score.increment();
        assert_eq!(score.points, 1);
        score.increment();
        assert_eq!(score.points, 2);
    }

    #[test]
    fn test_clock_counts_down() {
        let mut clock = RoundClock::new(3000);
        assert!(!clock.advance(1000));
        assert_eq!(clock.remaining_ms, 2000);
        assert!(!clock.advance(1000));
        assert!(clock.advance(1000), "Reaching 0 reports expiry");
        assert_eq!(clock.remaining_ms, 0);
    }

    #[test]
    fn test_clock_saturates_at_zero() {
        let mut clock = RoundClock::new(500);
        assert!(clock.advance(10_000), "Overshoot clamps to 0");
        assert_eq!(clock.remaining_ms, 0);
        assert!(clock.is_expired());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.caught = true;
        events.missed = true;
        events.time_expired = true;

        events.clear();

        assert!(!events.caught);
        assert!(!events.missed);
        assert!(!events.time_expired);
    }

    #[test]
    fn test_rng_is_deterministic() {
        use rand::Rng;
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        let xa: f32 = a.0.gen_range(0.0..=468.0);
        let xb: f32 = b.0.gen_range(0.0..=468.0);
        assert_eq!(xa, xb, "Same seed draws the same sequence");
    }
}
