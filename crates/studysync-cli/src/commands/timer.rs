//! Timer commands.
//!
//! `timer run` hosts the single-threaded event loop the countdown lives
//! in: a `tokio::select!` over the session's tick channel and stdin
//! command lines. All state changes happen on this one task.

use std::io::{self, Write};

use clap::Subcommand;
use studysync_core::storage::{Config, NotifyPermission};
use studysync_core::timer::{TimerEngine, TimerMode, TimerSession};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{notify, sound};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the countdown in the foreground
    Run {
        /// Timer mode: study or break
        #[arg(long, default_value = "study")]
        mode: String,
        /// Exit after the first completed countdown
        #[arg(long)]
        once: bool,
    },
    /// Print a fresh timer snapshot as JSON
    Status {
        /// Timer mode: study or break
        #[arg(long, default_value = "study")]
        mode: String,
    },
}

fn parse_mode(s: &str) -> Result<TimerMode, Box<dyn std::error::Error>> {
    match s {
        "study" => Ok(TimerMode::Study),
        "break" => Ok(TimerMode::Break),
        other => Err(format!("unknown mode: {other} (expected study or break)").into()),
    }
}

pub async fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Status { mode } => {
            let engine = TimerEngine::new(parse_mode(&mode)?);
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
            Ok(())
        }
        TimerAction::Run { mode, once } => run_session(parse_mode(&mode)?, once).await,
    }
}

async fn run_session(mode: TimerMode, once: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default();
    if config.notifications.desktop == NotifyPermission::Undetermined {
        notify::request_permission(&mut config);
    }

    let (mut session, mut ticks) = TimerSession::new(mode);
    println!("Commands: s start/resume, p pause, r reset, m study|break, q quit");
    session.start();
    render(session.engine());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        // Nothing left that could wake us up: paused or completed with
        // stdin gone.
        if !stdin_open && !session.has_tick_source() {
            break;
        }
        tokio::select! {
            Some(()) = ticks.recv() => {
                let completed = session.handle_tick().and_then(|e| e.completed_mode());
                render(session.engine());
                if let Some(finished) = completed {
                    println!();
                    notify::completion(finished, &config);
                    if config.notifications.sound {
                        sound::play_completion_tone();
                    }
                    if once {
                        return Ok(());
                    }
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(input)) => {
                        if handle_command(input.trim(), &mut session) {
                            println!();
                            return Ok(());
                        }
                        render(session.engine());
                    }
                    Ok(None) | Err(_) => stdin_open = false,
                }
            }
        }
    }
    println!();
    Ok(())
}

/// Apply one stdin command. Returns true when the loop should exit.
fn handle_command(input: &str, session: &mut TimerSession) -> bool {
    let mut words = input.split_whitespace();
    match words.next() {
        None => {}
        Some("s") | Some("start") => {
            session.start();
        }
        Some("p") | Some("pause") => {
            session.pause();
        }
        Some("r") | Some("reset") => {
            session.reset();
        }
        Some("m") | Some("mode") => match words.next().and_then(|w| parse_mode(w).ok()) {
            Some(mode) => {
                session.set_mode(mode);
            }
            None => println!("usage: m study|break"),
        },
        Some("q") | Some("quit") => return true,
        Some(other) => println!("unknown command: {other}"),
    }
    false
}

fn render(engine: &TimerEngine) {
    let display = engine.display();
    print!(
        "\r  [{}] {}  {:>3.0}% elapsed   ",
        engine.mode(),
        display,
        display.elapsed * 100.0
    );
    let _ = io::stdout().flush();
}
