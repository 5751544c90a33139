//! Integration test for the timer session lifecycle.
//!
//! Drives a full study → break cycle through the session, checking the
//! tick-source discipline and the completion contract along the way.

use studysync_core::alert;
use studysync_core::timer::{TimerMode, TimerSession, TimerState, BREAK_DURATION_SECS};

#[tokio::test]
async fn full_cycle_with_mode_switch() {
    let (mut session, _ticks) = TimerSession::new(TimerMode::Study);

    session.start().expect("started");
    assert!(session.has_tick_source());

    // A few seconds in, pause and resume in place.
    for _ in 0..5 {
        assert!(session.handle_tick().is_none());
    }
    session.pause().expect("paused");
    assert!(!session.has_tick_source());
    let resumed = session.start().expect("resumed");
    match resumed {
        studysync_core::Event::TimerStarted { remaining_secs, .. } => {
            assert_eq!(remaining_secs, session.engine().total_secs() - 5);
        }
        other => panic!("unexpected event: {other:?}"),
    }

    // Switch to break and run it down.
    session.set_mode(TimerMode::Break);
    assert_eq!(session.engine().remaining_secs(), BREAK_DURATION_SECS);
    session.start().expect("break started");

    let mut completions = Vec::new();
    for _ in 0..BREAK_DURATION_SECS {
        if let Some(ev) = session.handle_tick() {
            completions.push(ev);
        }
    }
    assert_eq!(completions.len(), 1);
    let mode = completions[0].completed_mode().expect("completion");
    assert_eq!(mode, TimerMode::Break);
    assert_eq!(
        alert::completion_message(mode),
        "Break time over! Ready to study again?"
    );
    assert_eq!(session.engine().state(), TimerState::Completed);
    assert!(!session.has_tick_source());

    // The machine cycles: starting again refills the countdown.
    session.start().expect("restarted");
    assert_eq!(session.engine().remaining_secs(), BREAK_DURATION_SECS);
}
