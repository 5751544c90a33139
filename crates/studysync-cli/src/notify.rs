//! Completion notifications.
//!
//! The terminal line always prints; the desktop notification is gated on
//! the persisted permission. While undetermined, permission is requested
//! once at session start (stdin has a single reader once the event loop
//! owns it).

use std::io::{self, IsTerminal, Write};

use notify_rust::Notification;
use studysync_core::alert;
use studysync_core::storage::{Config, NotifyPermission};
use studysync_core::timer::TimerMode;

/// Ask the user whether to enable desktop notifications and persist the
/// answer. Skipped (left undetermined) when stdin is not a terminal.
pub fn request_permission(config: &mut Config) {
    if !io::stdin().is_terminal() {
        return;
    }
    print!("Enable desktop notifications for completed sessions? [y/N] ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return;
    }
    config.notifications.desktop = if matches!(answer.trim(), "y" | "Y" | "yes") {
        NotifyPermission::Granted
    } else {
        NotifyPermission::Denied
    };
    if let Err(e) = config.save() {
        log::warn!("failed to save notification permission: {e}");
    }
}

/// Deliver the completion alert for the mode that just finished.
pub fn completion(mode: TimerMode, config: &Config) {
    let message = alert::completion_message(mode);
    println!("{message}");

    if config.notifications.desktop == NotifyPermission::Granted {
        // Fire-and-forget; a missing notification daemon is not an error
        // worth surfacing mid-countdown.
        let _ = Notification::new()
            .summary(alert::NOTIFICATION_TITLE)
            .body(message)
            .appname("studysync")
            .icon("alarm-clock")
            .show();
    }
}
