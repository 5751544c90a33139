//! Completion alert contract.
//!
//! The text shown when a countdown completes depends on the mode that
//! just finished; the presentation layer delivers it as a terminal line
//! and, where permitted, a desktop notification.

use crate::timer::TimerMode;

/// Title used for desktop notifications.
pub const NOTIFICATION_TITLE: &str = "StudySync Timer";

/// User-facing message for a completed countdown.
pub fn completion_message(mode: TimerMode) -> &'static str {
    match mode {
        TimerMode::Study => "Study session complete! Time for a break.",
        TimerMode::Break => "Break time over! Ready to study again?",
    }
}
