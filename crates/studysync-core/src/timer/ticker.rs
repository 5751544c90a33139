//! Recurring tick source for the countdown.
//!
//! A [`Ticker`] is a cancellable handle to a background task that sends
//! one unit over an mpsc channel per period. Cancellation is idempotent;
//! dropping the handle cancels too. The engine never sees the channel -
//! the event loop receives ticks and calls `TimerEngine::tick()`.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Cancellable repeating tick source.
///
/// At most one should drive a given engine at a time; `TimerSession`
/// enforces that.
#[derive(Debug)]
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// A ticker with no running task.
    pub fn idle() -> Self {
        Self { handle: None }
    }

    /// Spawn a task sending one tick per second.
    ///
    /// Must be called within a tokio runtime.
    pub fn spawn(tx: mpsc::Sender<()>) -> Self {
        Self::spawn_every(tx, Duration::from_secs(1))
    }

    /// Spawn with an explicit period. Tests use short periods.
    pub fn spawn_every(tx: mpsc::Sender<()>, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first interval tick fires immediately; swallow it so
            // the countdown decrements one full period after start.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Whether a tick task is currently running.
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the tick task. Idempotent: cancelling an already-cancelled
    /// ticker is a no-op.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_ticks_at_period() {
        let (tx, mut rx) = mpsc::channel(1);
        let _ticker = Ticker::spawn_every(tx, Duration::from_millis(5));
        for _ in 0..3 {
            tokio::time::timeout(Duration::from_secs(1), rx.recv())
                .await
                .expect("tick within timeout")
                .expect("channel open");
        }
    }

    #[tokio::test]
    async fn cancel_is_idempotent() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut ticker = Ticker::spawn_every(tx, Duration::from_millis(5));
        assert!(ticker.is_active());
        ticker.cancel();
        assert!(!ticker.is_active());
        ticker.cancel();
        assert!(!ticker.is_active());

        // No further ticks arrive once drained.
        tokio::time::sleep(Duration::from_millis(20)).await;
        while rx.try_recv().is_ok() {}
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn idle_ticker_is_inactive() {
        let mut ticker = Ticker::idle();
        assert!(!ticker.is_active());
        ticker.cancel();
        assert!(!ticker.is_active());
    }
}
