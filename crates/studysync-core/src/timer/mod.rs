mod engine;
mod session;
mod ticker;

pub use engine::{
    TimerDisplay, TimerEngine, TimerMode, TimerState, BREAK_DURATION_SECS, PROGRESS_ARC_LEN,
    STUDY_DURATION_SECS,
};
pub use session::TimerSession;
pub use ticker::Ticker;
