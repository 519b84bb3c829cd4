//! Session configuration.
//!
//! Holds the three configurable interval durations plus the long-break
//! cadence. The config lives for the whole process and is only rewritten by
//! the settings editor's validated commit; nothing is persisted across runs.

/// Default work interval: 25 minutes.
pub const DEFAULT_WORK_SECS: u32 = 1500;

/// Default short break: 5 minutes.
pub const DEFAULT_SHORT_BREAK_SECS: u32 = 300;

/// Default long break: 15 minutes.
pub const DEFAULT_LONG_BREAK_SECS: u32 = 900;

/// Work sessions completed before a long break is scheduled.
pub const DEFAULT_SESSIONS_BEFORE_LONG_BREAK: u32 = 4;

/// Configurable interval durations, all in seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Work interval duration
    pub work: u32,
    /// Short break duration
    pub short_break: u32,
    /// Long break duration
    pub long_break: u32,
    /// Work sessions between long breaks
    pub sessions_before_long_break: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            work: DEFAULT_WORK_SECS,
            short_break: DEFAULT_SHORT_BREAK_SECS,
            long_break: DEFAULT_LONG_BREAK_SECS,
            sessions_before_long_break: DEFAULT_SESSIONS_BEFORE_LONG_BREAK,
        }
    }
}
