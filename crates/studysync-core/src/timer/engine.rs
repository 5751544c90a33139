//! Timer engine implementation.
//!
//! The engine is a discrete countdown state machine. It holds no thread
//! and no clock - a tick source (see [`super::Ticker`]) calls `tick()`
//! once per second while the timer runs.
//!
//! ## State Transitions
//!
//! ```text
//! Idle/Paused -> Running -> (Paused | Completed)
//! any state -> Idle via reset() or set_mode()
//! ```
//!
//! No state is terminal; the machine cycles indefinitely under user
//! control.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Study countdown duration in seconds (25 minutes).
pub const STUDY_DURATION_SECS: u32 = 25 * 60;
/// Break countdown duration in seconds (5 minutes).
pub const BREAK_DURATION_SECS: u32 = 5 * 60;

/// Full length of the circular progress arc, in the same arbitrary
/// units the display consumes (2 * pi * r for r = 45).
pub const PROGRESS_ARC_LEN: f64 = 283.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Study,
    Break,
}

impl TimerMode {
    /// Fixed countdown duration for this mode.
    pub fn duration_secs(self) -> u32 {
        match self {
            TimerMode::Study => STUDY_DURATION_SECS,
            TimerMode::Break => BREAK_DURATION_SECS,
        }
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerMode::Study => write!(f, "study"),
            TimerMode::Break => write!(f, "break"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    /// Countdown reached zero; behaves as Idle at remaining = 0.
    Completed,
}

/// Derived display values for one render of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimerDisplay {
    pub minutes: u32,
    pub seconds: u32,
    /// Normalized elapsed fraction in [0, 1].
    pub elapsed: f64,
    /// Stroke offset for the circular progress arc:
    /// `PROGRESS_ARC_LEN * (1 - elapsed)`.
    pub arc_offset: f64,
}

impl fmt::Display for TimerDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Core timer engine.
///
/// Owns mode, remaining time and run state. Driven by `tick()` once per
/// second while running; every command returns the event it produced,
/// or `None` when the command was a no-op in the current state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    mode: TimerMode,
    state: TimerState,
    /// Total duration in seconds for the current mode.
    total_secs: u32,
    /// Remaining time in seconds, always <= total_secs.
    remaining_secs: u32,
}

impl TimerEngine {
    /// Create a new engine in the given mode, Idle at full duration.
    pub fn new(mode: TimerMode) -> Self {
        let total = mode.duration_secs();
        Self {
            mode,
            state: TimerState::Idle,
            total_secs: total,
            remaining_secs: total,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    /// 0.0 .. 1.0 elapsed fraction of the current countdown.
    pub fn elapsed_fraction(&self) -> f64 {
        f64::from(self.total_secs - self.remaining_secs) / f64::from(self.total_secs)
    }

    /// Derive the render values for the current state.
    pub fn display(&self) -> TimerDisplay {
        let elapsed = self.elapsed_fraction();
        TimerDisplay {
            minutes: self.remaining_secs / 60,
            seconds: self.remaining_secs % 60,
            elapsed,
            arc_offset: PROGRESS_ARC_LEN * (1.0 - elapsed),
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs,
            clock: self.display().to_string(),
            elapsed: self.elapsed_fraction(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Switch mode and reset to that mode's full duration.
    ///
    /// Always resets, even when the mode is unchanged.
    pub fn set_mode(&mut self, mode: TimerMode) -> Event {
        self.mode = mode;
        self.state = TimerState::Idle;
        self.total_secs = mode.duration_secs();
        self.remaining_secs = self.total_secs;
        Event::ModeChanged {
            mode,
            duration_secs: self.total_secs,
            at: Utc::now(),
        }
    }

    /// Begin (or resume) the countdown. No-op while already running.
    ///
    /// From Paused this resumes in place with the preserved remaining
    /// time. From Completed the countdown refills to full duration.
    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => None,
            TimerState::Completed => {
                self.remaining_secs = self.total_secs;
                self.state = TimerState::Running;
                Some(Event::TimerStarted {
                    mode: self.mode,
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Idle | TimerState::Paused => {
                self.state = TimerState::Running;
                Some(Event::TimerStarted {
                    mode: self.mode,
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
        }
    }

    /// Suspend the countdown, preserving remaining time. No-op unless
    /// running.
    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                Some(Event::TimerPaused {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Restore the full duration for the current mode, from any state.
    pub fn reset(&mut self) -> Event {
        self.state = TimerState::Idle;
        self.remaining_secs = self.total_secs;
        Event::TimerReset {
            mode: self.mode,
            at: Utc::now(),
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `Some(Event::TimerCompleted)` exactly once, on the tick
    /// that reaches zero. Ticks in any non-running state are ignored
    /// (the tick source should not exist then anyway).
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = TimerState::Completed;
            return Some(Event::TimerCompleted {
                mode: self.mode,
                at: Utc::now(),
            });
        }
        None
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(TimerMode::Study)
    }
}
