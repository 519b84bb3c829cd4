//! Session state machine.
//!
//! Owns the rep counter and the shared running flag, and derives the current
//! phase from the rep count. Transitions are driven externally by the UI
//! runner (Idle → Running → Idle → Running…) rather than by recursive calls
//! from the expiry handler, so the control flow stays a flat loop.

use crate::config::SessionConfig;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Label shown while no countdown has ever run, or after a reset.
pub const IDLE_LABEL: &str = "Timer";

/// The interval type currently being counted down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    /// Derive the phase for a given rep count.
    ///
    /// Reps alternate work/break; every `sessions_before_long_break`-th break
    /// (i.e. every `2 * n`-th rep) is a long one.
    pub fn for_rep(rep: u32, sessions_before_long_break: u32) -> Self {
        if rep % (sessions_before_long_break * 2) == 0 {
            Phase::LongBreak
        } else if rep % 2 == 0 {
            Phase::ShortBreak
        } else {
            Phase::Work
        }
    }

    /// Display label for this phase.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "Work Session",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }

    /// Configured duration of this phase, in seconds.
    pub fn duration(self, config: &SessionConfig) -> u32 {
        match self {
            Phase::Work => config.work,
            Phase::ShortBreak => config.short_break,
            Phase::LongBreak => config.long_break,
        }
    }
}

/// Rep counter plus the running flag shared with the countdown worker.
///
/// The flag is the single piece of state the worker thread reads; everything
/// else is owned by the UI thread.
#[derive(Debug)]
pub struct SessionState {
    rep_count: u32,
    running: Arc<AtomicBool>,
}

impl SessionState {
    /// Create a fresh idle session.
    pub fn new() -> Self {
        Self {
            rep_count: 0,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Number of reps started so far.
    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    /// Completed pomodoros: one per finished work+break pair.
    pub fn completed_pomodoros(&self) -> u32 {
        self.rep_count / 2
    }

    /// Whether a countdown is currently active.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Clone of the flag handed to the countdown worker.
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Begin the next rep.
    ///
    /// No-op returning `None` while a countdown is already active. Otherwise
    /// increments the rep count, raises the running flag, and returns the new
    /// phase with its configured duration in seconds.
    pub fn start(&mut self, config: &SessionConfig) -> Option<(Phase, u32)> {
        if self.is_running() {
            return None;
        }
        self.rep_count += 1;
        self.running.store(true, Ordering::SeqCst);
        let phase = Phase::for_rep(self.rep_count, config.sessions_before_long_break);
        Some((phase, phase.duration(config)))
    }

    /// Acknowledge a natural expiry reported by the worker.
    ///
    /// Lowers the running flag and returns the updated completed-pomodoro
    /// count. The caller is expected to follow up with `start()` to
    /// auto-advance into the next phase.
    pub fn on_expiry(&mut self) -> u32 {
        self.running.store(false, Ordering::SeqCst);
        self.completed_pomodoros()
    }

    /// Return to the idle state.
    ///
    /// Lowers the running flag, which makes any live worker exit on its next
    /// one-second poll without reporting an expiry.
    pub fn reset(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        self.rep_count = 0;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a second count as `mm:ss`.
///
/// Minutes are not wrapped at 59 so durations over an hour stay readable.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
