//! Tick-driven countdown behind autoplay windows and countdown badges.

/// Outcome of delivering one tick to a [`CountdownTimer`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimerTick {
    /// Timer is stopped or paused; nothing changed.
    Idle,
    Counted,
    /// Countdown reached zero and re-armed itself for another full duration.
    Elapsed,
}

/// Countdown that loses `tick_interval_ms` per delivered tick.
///
/// The timer never schedules anything itself; the host delivers ticks. A tick arriving
/// while stopped is ignored, so late callbacks after teardown are harmless.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CountdownTimer {
    duration_ms: u32,
    remaining_ms: u32,
    tick_interval_ms: u32,
    paused: bool,
    running: bool,
}

impl CountdownTimer {
    /// Creates a stopped timer. Zero durations and intervals are raised to 1 ms.
    pub const fn new(duration_ms: u32, tick_interval_ms: u32) -> Self {
        let duration_ms = if duration_ms == 0 { 1 } else { duration_ms };
        Self {
            duration_ms,
            remaining_ms: duration_ms,
            tick_interval_ms: if tick_interval_ms == 0 {
                1
            } else {
                tick_interval_ms
            },
            paused: false,
            running: false,
        }
    }

    pub fn start(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms.max(1);
        self.remaining_ms = self.duration_ms;
        self.paused = false;
        self.running = true;
    }

    pub fn on_tick(&mut self) -> TimerTick {
        if !self.running || self.paused {
            return TimerTick::Idle;
        }

        if self.remaining_ms <= self.tick_interval_ms {
            self.remaining_ms = self.duration_ms;
            return TimerTick::Elapsed;
        }

        self.remaining_ms -= self.tick_interval_ms;
        TimerTick::Counted
    }

    /// Returns `false` when already paused.
    pub fn pause(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.paused = true;
        true
    }

    /// Returns `false` when not paused.
    pub fn resume(&mut self) -> bool {
        if !self.paused {
            return false;
        }
        self.paused = false;
        true
    }

    pub fn reset(&mut self, duration_ms: Option<u32>) {
        if let Some(duration_ms) = duration_ms {
            self.duration_ms = duration_ms.max(1);
        }
        self.remaining_ms = self.duration_ms;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.paused = false;
        self.remaining_ms = self.duration_ms;
    }

    pub const fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub const fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    pub const fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Whole seconds left for on-screen badges, never below 1.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_ms.div_ceil(1_000).max(1)
    }

    /// 0..=100
    pub fn progress_pct(&self) -> u8 {
        let elapsed = self.duration_ms.saturating_sub(self.remaining_ms) as u64;
        ((elapsed * 100) / self.duration_ms as u64).min(100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(duration_ms: u32, tick_ms: u32) -> CountdownTimer {
        let mut timer = CountdownTimer::new(duration_ms, tick_ms);
        timer.start(duration_ms);
        timer
    }

    #[test]
    fn elapses_after_full_duration_and_rearms() {
        let mut timer = running(4_000, 100);
        for _ in 0..39 {
            assert_eq!(timer.on_tick(), TimerTick::Counted);
        }
        assert_eq!(timer.remaining_ms(), 100);
        assert_eq!(timer.on_tick(), TimerTick::Elapsed);
        assert_eq!(timer.remaining_ms(), 4_000);
        assert_eq!(timer.on_tick(), TimerTick::Counted);
        assert_eq!(timer.remaining_ms(), 3_900);
    }

    #[test]
    fn pause_preserves_remaining_and_is_idempotent() {
        let mut timer = running(4_000, 100);
        for _ in 0..20 {
            timer.on_tick();
        }
        assert!(timer.pause());
        assert!(!timer.pause());
        for _ in 0..5 {
            assert_eq!(timer.on_tick(), TimerTick::Idle);
        }
        assert_eq!(timer.remaining_ms(), 2_000);

        assert!(timer.resume());
        assert!(!timer.resume());
        assert_eq!(timer.remaining_ms(), 2_000);
        timer.on_tick();
        assert_eq!(timer.remaining_ms(), 1_900);
    }

    #[test]
    fn reset_restores_duration_without_elapsing() {
        let mut timer = running(5_400, 100);
        timer.on_tick();
        timer.reset(None);
        assert_eq!(timer.remaining_ms(), 5_400);
        timer.reset(Some(8_000));
        assert_eq!(timer.duration_ms(), 8_000);
        assert_eq!(timer.remaining_ms(), 8_000);
    }

    #[test]
    fn stray_ticks_after_stop_are_ignored() {
        let mut timer = running(1_000, 500);
        timer.stop();
        assert_eq!(timer.on_tick(), TimerTick::Idle);
        assert_eq!(timer.on_tick(), TimerTick::Idle);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_ms(), 1_000);
    }

    #[test]
    fn single_tick_interval_matching_duration_elapses_every_tick() {
        let mut timer = running(5_200, 5_200);
        assert_eq!(timer.on_tick(), TimerTick::Elapsed);
        assert_eq!(timer.on_tick(), TimerTick::Elapsed);
    }

    #[test]
    fn badge_seconds_round_up_and_floor_at_one() {
        let mut timer = running(8_000, 100);
        assert_eq!(timer.remaining_secs(), 8);
        timer.on_tick();
        assert_eq!(timer.remaining_secs(), 8);
        for _ in 0..9 {
            timer.on_tick();
        }
        assert_eq!(timer.remaining_ms(), 7_000);
        assert_eq!(timer.remaining_secs(), 7);
        for _ in 0..69 {
            timer.on_tick();
        }
        assert_eq!(timer.remaining_ms(), 100);
        assert_eq!(timer.remaining_secs(), 1);
        assert_eq!(timer.progress_pct(), 98);
    }

    #[test]
    fn zero_configuration_is_clamped() {
        let mut timer = CountdownTimer::new(0, 0);
        assert_eq!(timer.duration_ms(), 1);
        assert_eq!(timer.tick_interval_ms(), 1);
        timer.start(0);
        assert_eq!(timer.on_tick(), TimerTick::Elapsed);
    }
}
