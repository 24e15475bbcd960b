//! Tick scheduling for a running session.
//!
//! The scheduler is the one handle that owns the session timers: a repeating
//! animation tick and a one-shot session deadline. Cancelling drops both, so
//! nothing can fire for a session that has already stopped.

use std::future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior, Sleep};

/// Something the scheduler woke up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheduled {
    /// An animation tick, with the time since the previous one
    Tick(Duration),
    /// The session length has elapsed
    SessionEnd,
}

/// Owns the animation ticker and the session deadline.
#[derive(Debug, Default)]
pub struct Scheduler {
    /// Repeating animation tick
    ticker: Option<Interval>,
    /// When the previous tick fired
    last_tick: Option<Instant>,
    /// One-shot end of session
    deadline: Option<Pin<Box<Sleep>>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the ticker and the session deadline, replacing any previous ones.
    ///
    /// The first tick fires one `period` after this call.
    pub fn start(&mut self, period: Duration, session_length: Duration) {
        let now = Instant::now();
        let mut ticker = time::interval_at(now + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.ticker = Some(ticker);
        self.last_tick = Some(now);
        self.deadline = Some(Box::pin(time::sleep_until(now + session_length)));
    }

    /// Drops both timers.
    pub fn cancel(&mut self) {
        self.ticker = None;
        self.last_tick = None;
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.ticker.is_some()
    }

    /// Waits for the next tick or the session end.
    ///
    /// Tick elapsed time is measured from the clock rather than the ticker's
    /// schedule, so skipped ticks still advance the animation correctly.
    ///
    /// Never resolves while disarmed. Cancel safe: dropping the future loses
    /// nothing, the pending tick is delivered by the next call. When the
    /// deadline and a tick are both due the deadline wins and disarms the
    /// scheduler.
    pub async fn next(&mut self) -> Scheduled {
        let (Some(ticker), Some(deadline)) = (self.ticker.as_mut(), self.deadline.as_mut()) else {
            return future::pending().await;
        };

        let fired = tokio::select! {
            biased;
            () = deadline.as_mut() => None,
            _ = ticker.tick() => Some(Instant::now()),
        };

        match fired {
            None => {
                self.cancel();
                Scheduled::SessionEnd
            }
            Some(at) => {
                let elapsed = self
                    .last_tick
                    .map_or(Duration::ZERO, |previous| at.saturating_duration_since(previous));
                self.last_tick = Some(at);
                Scheduled::Tick(elapsed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TICK_INTERVAL;

    #[tokio::test(start_paused = true)]
    async fn test_disarmed_never_fires() {
        let mut scheduler = Scheduler::new();
        assert!(!scheduler.is_armed());
        let result = time::timeout(Duration::from_secs(60), scheduler.next()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let mut scheduler = Scheduler::new();
        let started = Instant::now();
        scheduler.start(TICK_INTERVAL, Duration::from_secs(60));
        assert!(scheduler.is_armed());

        assert_eq!(scheduler.next().await, Scheduled::Tick(TICK_INTERVAL));
        assert_eq!(started.elapsed(), TICK_INTERVAL);
        assert_eq!(scheduler.next().await, Scheduled::Tick(TICK_INTERVAL));
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_end_disarms() {
        let mut scheduler = Scheduler::new();
        scheduler.start(Duration::from_millis(100), Duration::from_millis(350));

        let mut ticks = 0;
        loop {
            match scheduler.next().await {
                Scheduled::Tick(_) => ticks += 1,
                Scheduled::SessionEnd => break,
            }
        }
        assert_eq!(ticks, 3);
        assert!(!scheduler.is_armed());

        let result = time::timeout(Duration::from_secs(5), scheduler.next()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_wins_when_due_with_tick() {
        let mut scheduler = Scheduler::new();
        // The third tick and the deadline are both due at 300ms
        scheduler.start(Duration::from_millis(100), Duration::from_millis(300));

        let mut fired = Vec::new();
        loop {
            let next = scheduler.next().await;
            fired.push(next);
            if next == Scheduled::SessionEnd {
                break;
            }
        }
        assert_eq!(
            fired,
            vec![
                Scheduled::Tick(Duration::from_millis(100)),
                Scheduled::Tick(Duration::from_millis(100)),
                Scheduled::SessionEnd,
            ]
        );
        assert!(!scheduler.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks_and_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.start(TICK_INTERVAL, Duration::from_secs(1));
        assert!(matches!(scheduler.next().await, Scheduled::Tick(_)));

        scheduler.cancel();
        assert!(!scheduler.is_armed());
        let result = time::timeout(Duration::from_secs(5), scheduler.next()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.start(Duration::from_millis(100), Duration::from_millis(150));
        scheduler.start(Duration::from_millis(100), Duration::from_secs(10));

        // The first deadline would have fired during these ticks
        for _ in 0..5 {
            assert!(matches!(scheduler.next().await, Scheduled::Tick(_)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_skipped_ticks_report_real_elapsed_time() {
        let mut scheduler = Scheduler::new();
        scheduler.start(Duration::from_millis(10), Duration::from_secs(10));
        assert_eq!(scheduler.next().await, Scheduled::Tick(Duration::from_millis(10)));

        // Stall past several periods without polling
        time::advance(Duration::from_millis(35)).await;
        match scheduler.next().await {
            Scheduled::Tick(elapsed) => assert!(elapsed >= Duration::from_millis(35)),
            other => panic!("expected tick, got {other:?}"),
        }
    }
}
