//! Timer session: engine plus its tick source.
//!
//! The session owns the only [`Ticker`] allowed to drive its engine and
//! applies the cancel-before-replace discipline: pause, reset, mode
//! changes and natural completion all cancel the tick task before the
//! state settles. `start()` spawns a new one only when the engine
//! actually transitions to Running, so calling it twice cannot stack a
//! second tick source.

use tokio::sync::mpsc;

use super::engine::{TimerEngine, TimerMode};
use super::ticker::Ticker;
use crate::events::Event;

/// A timer engine wired to a live 1 Hz tick source.
///
/// Construct with [`TimerSession::new`], then drive the returned
/// receiver from the event loop, forwarding each tick to
/// [`TimerSession::handle_tick`].
pub struct TimerSession {
    engine: TimerEngine,
    ticker: Ticker,
    tick_tx: mpsc::Sender<()>,
}

impl TimerSession {
    /// Create a session in the given mode along with the tick channel
    /// the event loop listens on. No tick task runs until `start()`.
    pub fn new(mode: TimerMode) -> (Self, mpsc::Receiver<()>) {
        let (tick_tx, tick_rx) = mpsc::channel(1);
        (
            Self {
                engine: TimerEngine::new(mode),
                ticker: Ticker::idle(),
                tick_tx,
            },
            tick_rx,
        )
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// True while a tick task is live.
    pub fn has_tick_source(&self) -> bool {
        self.ticker.is_active()
    }

    /// Start or resume the countdown. Returns `None` (and spawns
    /// nothing) when already running.
    pub fn start(&mut self) -> Option<Event> {
        let event = self.engine.start()?;
        if !self.ticker.is_active() {
            self.ticker = Ticker::spawn(self.tick_tx.clone());
        }
        Some(event)
    }

    /// Pause, cancelling the tick task. No-op unless running.
    pub fn pause(&mut self) -> Option<Event> {
        let event = self.engine.pause()?;
        self.ticker.cancel();
        Some(event)
    }

    /// Reset to the full duration, cancelling the tick task.
    pub fn reset(&mut self) -> Event {
        self.ticker.cancel();
        self.engine.reset()
    }

    /// Switch mode, cancelling the tick task and resetting.
    pub fn set_mode(&mut self, mode: TimerMode) -> Event {
        self.ticker.cancel();
        self.engine.set_mode(mode)
    }

    /// Apply one tick from the tick channel. On completion the tick
    /// task is cancelled and the completion event returned.
    pub fn handle_tick(&mut self) -> Option<Event> {
        let event = self.engine.tick();
        if matches!(event, Some(Event::TimerCompleted { .. })) {
            self.ticker.cancel();
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::engine::{TimerState, BREAK_DURATION_SECS};

    #[tokio::test]
    async fn start_spawns_a_single_tick_source() {
        let (mut session, _rx) = TimerSession::new(TimerMode::Study);
        assert!(!session.has_tick_source());

        assert!(session.start().is_some());
        assert!(session.has_tick_source());

        // Second start is a no-op and spawns nothing new.
        assert!(session.start().is_none());
        assert!(session.has_tick_source());
    }

    #[tokio::test]
    async fn pause_and_reset_cancel_the_tick_source() {
        let (mut session, _rx) = TimerSession::new(TimerMode::Study);
        session.start();
        assert!(session.has_tick_source());

        session.pause();
        assert!(!session.has_tick_source());
        assert_eq!(session.engine().state(), TimerState::Paused);

        session.start();
        assert!(session.has_tick_source());
        session.reset();
        assert!(!session.has_tick_source());
        assert_eq!(session.engine().state(), TimerState::Idle);
    }

    #[tokio::test]
    async fn mode_change_cancels_and_resets() {
        let (mut session, _rx) = TimerSession::new(TimerMode::Study);
        session.start();
        session.set_mode(TimerMode::Break);
        assert!(!session.has_tick_source());
        assert_eq!(session.engine().remaining_secs(), BREAK_DURATION_SECS);
    }

    #[tokio::test]
    async fn completion_cancels_the_tick_source() {
        let (mut session, _rx) = TimerSession::new(TimerMode::Break);
        session.start();
        let mut completed = None;
        for _ in 0..BREAK_DURATION_SECS {
            if let Some(ev) = session.handle_tick() {
                completed = Some(ev);
            }
        }
        let completed = completed.expect("completion event");
        assert_eq!(completed.completed_mode(), Some(TimerMode::Break));
        assert!(!session.has_tick_source());
        assert!(!session.is_running());
    }

    #[tokio::test]
    async fn pause_while_idle_leaves_no_tick_source() {
        let (mut session, _rx) = TimerSession::new(TimerMode::Study);
        assert!(session.pause().is_none());
        assert!(!session.has_tick_source());
    }
}
