use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{TimerMode, TimerState};

/// Every timer state change produces an Event.
/// The presentation layer renders them; completion side effects key off
/// `TimerCompleted`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    ModeChanged {
        mode: TimerMode,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero. Carries the mode that just finished.
    TimerCompleted {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        mode: TimerMode,
        remaining_secs: u32,
        total_secs: u32,
        clock: String,
        elapsed: f64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// The completed mode, if this is a completion event.
    pub fn completed_mode(&self) -> Option<TimerMode> {
        match self {
            Event::TimerCompleted { mode, .. } => Some(*mode),
            _ => None,
        }
    }
}
