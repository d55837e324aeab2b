//! Wall-clock source for the animation clock.

use std::time::Duration;

use tokio::time::{interval, Instant, Interval, MissedTickBehavior};

/// Fires every tick regardless of how many input events arrive in between,
/// and reports the real time that passed so animations keep their pace
/// when ticks are skipped.
pub struct FrameClock {
    ticker: Interval,
    last: Instant,
}

impl FrameClock {
    pub fn new(tick: Duration) -> Self {
        let mut ticker = interval(tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            ticker,
            last: Instant::now(),
        }
    }

    /// Wait for the next tick and return the milliseconds since the last
    /// one. Cancel safe, so it can sit in a `select!` next to input.
    pub async fn tick(&mut self) -> u64 {
        let now = self.ticker.tick().await;
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed.as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ticks_keep_coming_during_input_bursts() {
        let mut clock = FrameClock::new(Duration::from_millis(10));
        let mut advanced = 0;
        let started = std::time::Instant::now();

        // Input every 3ms always wins the race against a fresh 10ms sleep
        while started.elapsed() < Duration::from_millis(200) {
            tokio::select! {
                ms = clock.tick() => advanced += ms,
                _ = tokio::time::sleep(Duration::from_millis(3)) => {}
            }
        }
        assert!(advanced >= 100, "clock only advanced {}ms", advanced);
    }

    #[tokio::test]
    async fn test_tick_reports_elapsed_time() {
        let mut clock = FrameClock::new(Duration::from_millis(20));
        clock.tick().await;
        let ms = clock.tick().await;
        assert!((15..=200).contains(&ms), "tick reported {}ms", ms);
    }
}
