//! # StudySync Core Library
//!
//! Core logic for the StudySync study tracker. The CLI binary is a thin
//! presentation layer over this crate; all state lives here.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a discrete countdown state machine driven by a
//!   cancellable 1 Hz tick source, with two fixed modes (study/break)
//! - **Subject Store**: an ordered, persisted collection of study
//!   subjects with progress-vs-goal tracking and clamped mutations
//! - **Storage**: SQLite key-value persistence plus TOML configuration
//!
//! The two components never talk to each other; each owns its state and
//! is mutated only by discrete user actions (and, for the timer, the
//! tick callback).
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: countdown state machine
//! - [`TimerSession`]: engine + tick source with the at-most-one-source
//!   discipline
//! - [`SubjectStore`]: persisted subject collection
//! - [`Database`]: durable key-value storage
//! - [`Config`]: alert preferences

pub mod alert;
pub mod audio;
pub mod error;
pub mod events;
pub mod storage;
pub mod subjects;
pub mod timer;

pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use storage::{Config, Database, NotificationsConfig, NotifyPermission, Theme};
pub use subjects::{Subject, SubjectStore};
pub use timer::{TimerDisplay, TimerEngine, TimerMode, TimerSession, TimerState, Ticker};
